use std::collections::HashMap;
use serde::Deserialize;

/// Texture manifest mapping body names to image assets.
/// Parsed from JSON at startup.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TextureManifest {
    /// Named texture lookup: name → asset.
    #[serde(default)]
    pub textures: HashMap<String, TextureDescriptor>,
}

/// Describes a single texture asset.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TextureDescriptor {
    /// Relative path to the image file (e.g., "textures/earth.png").
    pub path: String,
}

impl TextureManifest {
    /// Parse a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
