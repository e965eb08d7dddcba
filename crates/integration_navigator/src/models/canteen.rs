//! Canteen menus

use serde::Deserialize;

/// Canteens known to the menu endpoint, as `(id, name)`
pub const CANTEENS: [(&str, &str); 9] = [
    ("m13", "Alte Mensa"),
    ("nmen", "Zeltschlößchen"),
    ("mjoh", "Mensa Johannstadt"),
    ("mrei", "Mensa Reichenbachstraße"),
    ("pot", "BioMensa U-Boot"),
    ("web", "Mensa Blau"),
    ("bzw", "Mensa Siedepunkt"),
    ("ros", "Mensa TellerRandt"),
    ("gcub", "GrillCube"),
];

/// Name of a canteen by id
#[must_use]
pub fn canteen_name(id: &str) -> Option<&'static str> {
    CANTEENS
        .iter()
        .find(|(canteen, _)| *canteen == id)
        .map(|(_, name)| *name)
}

/// Today's menu of a canteen
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CanteenMenu {
    /// Menu title
    #[serde(rename = "name")]
    pub menu_name: String,
    /// Meals served today
    #[serde(rename = "diet")]
    pub meals: Vec<Meal>,
}

/// A meal, sent as `[description, price]`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "(String, String)")]
pub struct Meal {
    /// Name and side dishes
    pub description: String,
    /// Price text, `None` if the canteen left it empty
    pub prices: Option<String>,
}

impl From<(String, String)> for Meal {
    fn from((description, prices): (String, String)) -> Self {
        Self {
            description,
            prices: (!prices.is_empty()).then_some(prices),
        }
    }
}
