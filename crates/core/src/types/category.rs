//! Product category enumeration.

use serde::{Deserialize, Serialize};

/// Product category.
///
/// A closed set: the catalog only carries these three kinds of garment.
/// Using an enum instead of raw strings gives exhaustive-match safety in
/// the filter projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Shirt,
    Pants,
    Hat,
}

impl Category {
    /// All categories, in display order.
    pub const ALL: [Self; 3] = [Self::Shirt, Self::Pants, Self::Hat];
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Shirt => write!(f, "shirt"),
            Self::Pants => write!(f, "pants"),
            Self::Hat => write!(f, "hat"),
        }
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "shirt" => Ok(Self::Shirt),
            "pants" => Ok(Self::Pants),
            "hat" => Ok(Self::Hat),
            _ => Err(format!("invalid category: {s}")),
        }
    }
}
