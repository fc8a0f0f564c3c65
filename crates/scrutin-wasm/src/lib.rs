//! scrutin-wasm: WebAssembly bindings for scrutin-core
//!
//! Exposes the search pipeline to JavaScript. Records are plain objects with
//! at least an `id` (string or number) and a string `name`; every other
//! property is reachable by filters, sorting and search keys under its own
//! name.
//!
//! What it provides
//! ----------------
//! - `search_records(items, keys, query)`: accent- and case-insensitive text search
//! - `filter_records(items, filters)`: membership and year-range criteria
//! - `sort_records(items, mode)`: `"alphabetic"`, `"date"` or `"relevance"`
//! - `run_query(items, keys, request)`: all three in one call
//! - `save_recent_search(key, query)` / `get_recent_searches(key)`: history
//!   kept in `localStorage`
//!
//! Quick start (browser)
//! ---------------------
//! ```javascript
//! import init, { run_query, save_recent_search } from 'scrutin-wasm';
//!
//! async function main() {
//!   await init();
//!   const countries = [
//!     { id: 1, name: 'Kenya', region: 'Est', year: 2022 },
//!     { id: 2, name: 'Sénégal', region: 'Ouest', year: 2024 },
//!   ];
//!   const hits = run_query(countries, ['name'], {
//!     query: 'sen',
//!     filters: { regions: ['Ouest'], yearRange: { min: 2024, max: 2024 } },
//!     sort: 'alphabetic',
//!   });
//!   save_recent_search('recentCountrySearches', 'sen');
//!   console.log(hits);
//! }
//! main();
//! ```
//!
//! Notes
//! -----
//! - Functions taking records return new arrays; the inputs are not touched.
//! - Storage failures (private mode, quota) are logged to the console and
//!   never raised; the history functions then return an empty array.
use scrutin_core::{
    filter_items, search_items, sort_items, DynRecord, FilterSpec, KeyValueStore, RecentSearches,
    ScrutinError, SearchEngine, SearchRequest, SortMode,
};
use scrutin_core::search::DEFAULT_SEARCH_KEYS;
use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}

/* --------------------------------------------------------------------------
   localStorage
-------------------------------------------------------------------------- */

/// [`KeyValueStore`] over `window.localStorage`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStorage;

fn storage_error(e: JsValue) -> ScrutinError {
    ScrutinError::Storage(format!("{e:?}"))
}

fn local_storage() -> scrutin_core::Result<web_sys::Storage> {
    let window =
        web_sys::window().ok_or_else(|| ScrutinError::Storage("no window object".to_string()))?;
    window
        .local_storage()
        .map_err(storage_error)?
        .ok_or_else(|| ScrutinError::Storage("localStorage is unavailable".to_string()))
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> scrutin_core::Result<Option<String>> {
        local_storage()?.get_item(key).map_err(storage_error)
    }

    fn set(&self, key: &str, value: &str) -> scrutin_core::Result<()> {
        local_storage()?.set_item(key, value).map_err(storage_error)
    }
}

/* --------------------------------------------------------------------------
   Conversions
-------------------------------------------------------------------------- */

fn from_js<T: DeserializeOwned>(value: JsValue) -> Result<T, JsValue> {
    serde_wasm_bindgen::from_value(value).map_err(JsValue::from)
}

fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(JsValue::from)
}

fn records(items: JsValue) -> Result<Vec<DynRecord>, JsValue> {
    from_js(items)
}

/// Search keys from JS; `undefined` or `null` means the name only.
fn search_keys(keys: JsValue) -> Result<Vec<String>, JsValue> {
    let keys: Option<Vec<String>> = from_js(keys)?;
    Ok(keys_or_default(keys))
}

fn keys_or_default(keys: Option<Vec<String>>) -> Vec<String> {
    keys.unwrap_or_else(|| DEFAULT_SEARCH_KEYS.iter().map(|k| k.to_string()).collect())
}

fn parse_mode(mode: &str) -> Result<SortMode, String> {
    mode.parse().map_err(|e: ScrutinError| e.to_string())
}

fn run_pipeline(items: Vec<DynRecord>, keys: Vec<String>, request: &SearchRequest) -> Vec<DynRecord> {
    let engine = SearchEngine::with_keys(items, keys);
    engine.run(request).into_iter().cloned().collect()
}

fn warn(message: &str) {
    web_sys::console::warn_1(&message.into());
}

/* --------------------------------------------------------------------------
   Pipeline
-------------------------------------------------------------------------- */

#[wasm_bindgen]
pub fn search_records(items: JsValue, keys: JsValue, query: &str) -> Result<JsValue, JsValue> {
    let items = records(items)?;
    let keys = search_keys(keys)?;
    to_js(&search_items(&items, keys.as_slice(), query))
}

#[wasm_bindgen]
pub fn filter_records(items: JsValue, filters: JsValue) -> Result<JsValue, JsValue> {
    let items = records(items)?;
    let filters: FilterSpec = from_js(filters)?;
    to_js(&filter_items(&items, &filters))
}

#[wasm_bindgen]
pub fn sort_records(items: JsValue, mode: &str) -> Result<JsValue, JsValue> {
    let items = records(items)?;
    let mode = parse_mode(mode).map_err(|e| JsValue::from_str(&e))?;
    to_js(&sort_items(&items, mode))
}

/// Search, filter and sort in one pass. `request` is
/// `{ query, filters, sort }`; every property may be omitted.
#[wasm_bindgen]
pub fn run_query(items: JsValue, keys: JsValue, request: JsValue) -> Result<JsValue, JsValue> {
    let items = records(items)?;
    let keys = search_keys(keys)?;
    let request: SearchRequest = from_js(request)?;
    to_js(&run_pipeline(items, keys, &request))
}

/* --------------------------------------------------------------------------
   Recent searches
-------------------------------------------------------------------------- */

fn history_array(entries: &[String]) -> JsValue {
    let array = js_sys::Array::new();
    for q in entries {
        array.push(&JsValue::from_str(q));
    }
    array.into()
}

fn save_to<S: KeyValueStore>(store: S, key: &str, query: &str) -> Result<Vec<String>, String> {
    RecentSearches::new(store)
        .try_save(key, query)
        .map_err(|e| format!("scrutin: could not save recent search: {e}"))
}

fn load_from<S: KeyValueStore>(store: S, key: &str) -> Result<Vec<String>, String> {
    RecentSearches::new(store)
        .try_load(key)
        .map_err(|e| format!("scrutin: could not read recent searches: {e}"))
}

/// Record `query` under `key` and return the updated history.
#[wasm_bindgen]
pub fn save_recent_search(key: &str, query: &str) -> JsValue {
    match save_to(LocalStorage, key, query) {
        Ok(saved) => history_array(&saved),
        Err(message) => {
            warn(&message);
            history_array(&[])
        }
    }
}

#[wasm_bindgen]
pub fn get_recent_searches(key: &str) -> JsValue {
    match load_from(LocalStorage, key) {
        Ok(entries) => history_array(&entries),
        Err(message) => {
            warn(&message);
            history_array(&[])
        }
    }
}

#[wasm_bindgen]
pub fn clear_recent_searches(key: &str) {
    if let Err(e) = RecentSearches::new(LocalStorage).clear(key) {
        warn(&format!("scrutin: could not clear recent searches: {e}"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scrutin_core::MemoryStore;
    use serde_json::json;

    fn countries() -> Vec<DynRecord> {
        serde_json::from_value(json!([
            {"id": 1, "name": "Kenya", "region": "Est", "year": 2022},
            {"id": 2, "name": "Sénégal", "region": "Ouest", "year": 2024},
            {"id": 3, "name": "Maroc", "region": "Nord", "year": 2024}
        ]))
        .unwrap()
    }

    fn names(items: &[DynRecord]) -> Vec<&str> {
        items.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn missing_keys_fall_back_to_name() {
        assert_eq!(keys_or_default(None), ["name"]);
        assert_eq!(keys_or_default(Some(vec!["region".into()])), ["region"]);
    }

    #[test]
    fn sort_mode_strings() {
        assert_eq!(parse_mode("date"), Ok(SortMode::Date));
        assert_eq!(parse_mode(" Relevance "), Ok(SortMode::Relevance));
        assert!(parse_mode("score").unwrap_err().contains("score"));
    }

    #[test]
    fn request_shape_from_javascript() {
        let request: SearchRequest = serde_json::from_value(json!({
            "filters": {"regions": ["Ouest", "Nord"], "yearRange": {"min": 2024}},
            "sort": "alphabetic"
        }))
        .unwrap();
        let out = run_pipeline(countries(), keys_or_default(None), &request);
        assert_eq!(names(&out), ["Maroc", "Sénégal"]);
    }

    #[test]
    fn query_ignores_accents() {
        let out = run_pipeline(countries(), keys_or_default(None), &SearchRequest::new("SEN"));
        assert_eq!(names(&out), ["Sénégal"]);
    }

    #[test]
    fn records_serialize_back_to_flat_objects() {
        let out = serde_json::to_value(&countries()[0]).unwrap();
        assert_eq!(out["id"], "1");
        assert_eq!(out["name"], "Kenya");
        assert_eq!(out["region"], "Est");
    }

    #[test]
    fn history_through_a_store() {
        let store = MemoryStore::new();
        for q in ["a", "b", "a"] {
            save_to(&store, "k", q).unwrap();
        }
        assert_eq!(load_from(&store, "k").unwrap(), ["a", "b"]);

        store.set("k", "{").unwrap();
        assert!(load_from(&store, "k").unwrap_err().starts_with("scrutin: could not read"));
    }
}
