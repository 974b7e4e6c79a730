use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Continent catalog: code ("AS") -> display name ("Asia").
/// BTreeMap so option lists derived from it have a stable order.
pub type Continents = BTreeMap<String, String>;

/// Country catalog: code ("KP") -> entry.
pub type Countries = BTreeMap<String, CountryEntry>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryEntry {
    pub name: String,
    /// Code of the continent this country belongs to.
    pub continent: String,
}

impl CountryEntry {
    pub fn new(name: impl Into<String>, continent: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            continent: continent.into(),
        }
    }
}
