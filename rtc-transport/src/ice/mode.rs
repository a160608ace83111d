use std::fmt;

use serde::{Deserialize, Serialize};

/// IceMode is the ICE implementation level an agent advertises.
/// A lite agent only answers connectivity checks and signals `a=ice-lite`.
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IceMode {
    #[default]
    #[serde(rename = "full")]
    Full,
    #[serde(rename = "lite")]
    Lite,
}

impl fmt::Display for IceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            IceMode::Full => write!(f, "full"),
            IceMode::Lite => write!(f, "lite"),
        }
    }
}
