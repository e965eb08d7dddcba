//! Search results

use domain::resource::{Grammar, Resource};
use serde::Deserialize;

/// Answer of the search endpoint
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Search {
    /// Autocompletion suggestion
    #[serde(rename = "assist", default)]
    pub autocomplete: String,
    /// Matching buildings
    #[serde(rename = "results_geb", default)]
    pub building_results: Vec<SearchResult>,
    /// Matching rooms
    #[serde(rename = "results_raum", default)]
    pub room_results: Vec<SearchResult>,
}

/// A single hit, sent as `[title, path fragment]`
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "(String, String)")]
pub struct SearchResult {
    /// Title without markup
    pub title: String,
    /// What the hit points to
    pub resource: Resource,
}

impl TryFrom<(String, String)> for SearchResult {
    type Error = String;

    fn try_from((title, fragment): (String, String)) -> Result<Self, Self::Error> {
        let resource = Resource::parse(&fragment, Grammar::Lenient).map_err(|e| e.to_string())?;
        Ok(Self {
            title: strip_markup(&title),
            resource,
        })
    }
}

/// Drop a trailing `" <span ...>...</span>"` suffix
fn strip_markup(title: &str) -> String {
    let Some(start) = title.find(" <") else {
        return title.to_string();
    };
    match title[start..].rfind('>') {
        Some(end) => format!("{}{}", &title[..start], &title[start + end + 1..]),
        None => title.to_string(),
    }
}
