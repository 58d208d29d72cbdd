use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// A labeled token that can be stored in a [`TokenDictionary`](crate::dict::dictionary::TokenDictionary).
///
/// Only `token` takes part in segmentation, everything else an implementor
/// carries is opaque metadata handed back in the witness.
pub trait Entity {
    /// The 1 or 2 character token this entity stands for, in any case.
    fn token(&self) -> &str;

    /// Human readable label.
    fn label(&self) -> &str;
}

/// A chemical element, one row of the periodic table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    #[serde(rename = "Element")]
    pub name: String,
    #[serde(rename = "Symbol")]
    pub symbol: String,
    #[serde(rename = "AtomicNumber")]
    pub atomic_number: u32,
    #[serde(rename = "AtomicMass")]
    pub atomic_mass: f64,
    #[serde(rename = "Period")]
    pub period: u32,
    /// Lanthanides and actinides have no group.
    #[serde(rename = "Group")]
    pub group: Option<u32>,
}

impl Entity for Element {
    fn token(&self) -> &str {
        &self.symbol
    }

    fn label(&self) -> &str {
        &self.name
    }
}

impl Display for Element {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.symbol)
    }
}
