//! Static catalog of phone models a case can be designed for
//!
//! The catalog is fixed at compile time. A `ModelId` can only be obtained
//! from an entry of this catalog, so a selected model is always valid.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// A selectable phone model
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhoneModel {
    /// Stable identifier (e.g., "iphone15")
    pub id: &'static str,
    /// Name shown in the model grid and under the preview
    pub display_name: &'static str,
}

/// Every phone model offered, in display order
pub const CATALOG: [PhoneModel; 6] = [
    PhoneModel { id: "iphone15pro", display_name: "iPhone 15 Pro Max" },
    PhoneModel { id: "iphone15", display_name: "iPhone 15" },
    PhoneModel { id: "iphone14pro", display_name: "iPhone 14 Pro" },
    PhoneModel { id: "samsung-s24", display_name: "Samsung S24 Ultra" },
    PhoneModel { id: "xiaomi-14", display_name: "小米 14 Pro" },
    PhoneModel { id: "huawei-p60", display_name: "华为 P60 Pro" },
];

/// Id selected when a session starts
pub const DEFAULT_MODEL_ID: &str = "iphone15";

/// Handle to one catalog entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ModelId(usize);

impl ModelId {
    /// Iterate over the ids of all catalog entries, in display order
    pub fn all() -> impl Iterator<Item = ModelId> {
        (0..CATALOG.len()).map(ModelId)
    }

    /// Look up a catalog id
    pub fn find(id: &str) -> Option<ModelId> {
        CATALOG.iter().position(|model| model.id == id).map(ModelId)
    }

    /// The catalog entry this id refers to
    pub fn model(self) -> &'static PhoneModel {
        &CATALOG[self.0]
    }

    pub fn as_str(self) -> &'static str {
        self.model().id
    }

    pub fn display_name(self) -> &'static str {
        self.model().display_name
    }
}

impl Default for ModelId {
    /// The `DEFAULT_MODEL_ID` entry, or the first entry if it is ever
    /// removed from the catalog
    fn default() -> Self {
        ModelId::find(DEFAULT_MODEL_ID).unwrap_or(ModelId(0))
    }
}

impl FromStr for ModelId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ModelId::find(s.trim()).ok_or_else(|| Error::UnknownModel(s.to_string()))
    }
}

impl fmt::Display for ModelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
