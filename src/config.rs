use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::render::DEFAULT_SIZE;

fn default_size() -> u32 {
    DEFAULT_SIZE
}

/// Output knobs shared by every formatter.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderSettings {
    /// SVG edge length in pixels.
    #[serde(default = "default_size")]
    pub size: u32,
    /// Vibe override. `None` picks one from the input hash.
    #[serde(default)]
    pub vibe: Option<String>,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            vibe: None,
        }
    }
}

impl RenderSettings {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn vibe(&self) -> Option<&str> {
        self.vibe.as_deref()
    }
}
