// crates/scrutin-core/src/model/domain.rs
use crate::traits::{FieldValue, Record};
use serde::{Deserialize, Serialize};

/// A country profile.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Country {
    pub id: String,
    pub name: String,
    /// ISO 3166-1 alpha-2 code, e.g. "SN".
    pub code: String,
    /// Geographic zone, e.g. "Afrique de l'Ouest".
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub political_system: Option<String>,
    #[serde(default)]
    pub population: Option<u64>,
    #[serde(default)]
    pub languages: Vec<String>,
}

/// A scheduled or past election.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Election {
    pub id: String,
    pub name: String,
    pub country: String,
    #[serde(default)]
    pub region: Option<String>,
    /// "Présidentielle", "Législative", "Locales", "Référendum"...
    pub election_type: String,
    /// "À venir", "En cours", "Terminée", "Contestée"...
    pub status: String,
    #[serde(default)]
    pub year: Option<i32>,
}

/// A civil-society organisation involved in observation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Organization {
    pub id: String,
    pub name: String,
    pub country: String,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub org_type: Option<String>,
    #[serde(default)]
    pub expertise: Vec<String>,
    /// Year of creation.
    #[serde(default)]
    pub founded: Option<i32>,
}

fn opt_text(v: &Option<String>) -> Option<FieldValue<'_>> {
    v.as_deref().map(FieldValue::Text)
}

impl Record for Country {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn field(&self, key: &str) -> Option<FieldValue<'_>> {
        match key {
            "id" => Some(FieldValue::Text(&self.id)),
            "name" => Some(FieldValue::Text(&self.name)),
            "code" => Some(FieldValue::Text(&self.code)),
            "region" => opt_text(&self.region),
            "type" | "political_system" => opt_text(&self.political_system),
            "population" => self.population.map(|p| FieldValue::Number(p as f64)),
            "languages" => Some(FieldValue::list(&self.languages)),
            _ => None,
        }
    }
}

impl Record for Election {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn field(&self, key: &str) -> Option<FieldValue<'_>> {
        match key {
            "id" => Some(FieldValue::Text(&self.id)),
            "name" => Some(FieldValue::Text(&self.name)),
            "country" => Some(FieldValue::Text(&self.country)),
            "region" => opt_text(&self.region),
            "type" | "election_type" => Some(FieldValue::Text(&self.election_type)),
            "status" => Some(FieldValue::Text(&self.status)),
            "year" => self.year.map(|y| FieldValue::Number(f64::from(y))),
            _ => None,
        }
    }
}

impl Record for Organization {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn field(&self, key: &str) -> Option<FieldValue<'_>> {
        match key {
            "id" => Some(FieldValue::Text(&self.id)),
            "name" => Some(FieldValue::Text(&self.name)),
            "country" => Some(FieldValue::Text(&self.country)),
            "region" => opt_text(&self.region),
            "type" | "org_type" => opt_text(&self.org_type),
            "expertise" => Some(FieldValue::list(&self.expertise)),
            "year" | "founded" => self.founded.map(|y| FieldValue::Number(f64::from(y))),
            _ => None,
        }
    }
}
