use std::collections::HashMap;
use crate::assets::manifest::TextureManifest;
use crate::error::{EngineError, EngineResult};

/// Handle to a texture the host loads by path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureId(pub u32);

/// Registry of named textures, built from a TextureManifest.
/// Ids are assigned in name order so they are stable across runs.
pub struct TextureRegistry {
    ids: HashMap<String, TextureId>,
    paths: Vec<String>,
}

impl TextureRegistry {
    pub fn new() -> Self {
        Self {
            ids: HashMap::new(),
            paths: Vec::new(),
        }
    }

    /// Build a registry from a parsed TextureManifest.
    pub fn from_manifest(manifest: &TextureManifest) -> Self {
        let mut names: Vec<&String> = manifest.textures.keys().collect();
        names.sort();

        let mut ids = HashMap::with_capacity(names.len());
        let mut paths = Vec::with_capacity(names.len());
        for (i, name) in names.into_iter().enumerate() {
            ids.insert(name.clone(), TextureId(i as u32));
            paths.push(manifest.textures[name].path.clone());
        }
        Self { ids, paths }
    }

    /// Parse and register in one go.
    pub fn from_json(json: &str) -> EngineResult<Self> {
        Ok(Self::from_manifest(&TextureManifest::from_json(json)?))
    }

    /// Look up the texture for `name`. Missing names are a configuration error.
    pub fn resolve(&self, name: &str) -> EngineResult<TextureId> {
        self.ids
            .get(name)
            .copied()
            .ok_or_else(|| EngineError::UnknownTexture { name: name.to_string() })
    }

    /// Asset path for a texture id.
    pub fn path(&self, id: TextureId) -> Option<&str> {
        self.paths.get(id.0 as usize).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

impl Default for TextureRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const JSON: &str = r#"{
        "textures": {
            "Venus": { "path": "textures/venus.png" },
            "Earth": { "path": "textures/earth.png" }
        }
    }"#;

    #[test]
    fn ids_follow_name_order() {
        let reg = TextureRegistry::from_json(JSON).unwrap();
        let earth = reg.resolve("Earth").unwrap();
        let venus = reg.resolve("Venus").unwrap();
        assert_eq!(earth, TextureId(0));
        assert_eq!(venus, TextureId(1));
        assert_eq!(reg.path(venus), Some("textures/venus.png"));
        assert_eq!(reg.len(), 2);
    }

    #[test]
    fn unknown_name_is_an_error() {
        let reg = TextureRegistry::from_json(JSON).unwrap();
        match reg.resolve("Pluto") {
            Err(EngineError::UnknownTexture { name }) => assert_eq!(name, "Pluto"),
            other => panic!("expected UnknownTexture, got {other:?}"),
        }
    }

    #[test]
    fn malformed_json_is_reported() {
        assert!(matches!(
            TextureRegistry::from_json("{ not json"),
            Err(EngineError::Manifest(_))
        ));
    }
}
