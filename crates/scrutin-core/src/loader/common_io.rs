// crates/scrutin-core/src/loader/common_io.rs
use crate::error::{Result, ScrutinError};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

#[cfg(feature = "compact")]
use flate2::read::GzDecoder;

/// Opens a dataset file, buffers it, and unwraps gzip when the file name
/// ends in `.gz`. Returns a generic reader so callers don't care about the
/// compression.
pub fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| {
        ScrutinError::NotFound(format!("Dataset not found at {}: {}", path.display(), e))
    })?;

    let reader = BufReader::new(file);

    if is_gzip(path) {
        #[cfg(feature = "compact")]
        {
            return Ok(Box::new(GzDecoder::new(reader)));
        }
        #[cfg(not(feature = "compact"))]
        {
            return Err(ScrutinError::NotFound(format!(
                "{} is gzip-compressed; enable the `compact` feature to read it",
                path.display()
            )));
        }
    }

    Ok(Box::new(reader))
}

fn is_gzip(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("gz"))
}
