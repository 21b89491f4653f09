use serde_derive::{Deserialize, Serialize};

use crate::error::Error;
use crate::track::DEFAULT_TIMESTEP_LEN;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Window length used when padding histories for fixed-window models
    pub timestep_len: usize,

    /// Take state confidence from the originating detection instead of 1.0
    pub use_detection_confidence: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timestep_len: DEFAULT_TIMESTEP_LEN,
            use_detection_confidence: false,
        }
    }
}

impl Config {
    pub fn from_json_str(s: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(s)?)
    }
}
