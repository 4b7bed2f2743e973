use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Role a named scene node plays in the showcase. Authored in the manifest
/// alongside the model; nodes are bound by exact name, never by substring
/// guessing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartRole {
    /// The hinged half the sequencer rotates.
    Lid,
    /// Casing meshes that receive the body material.
    Body,
    /// Display meshes, left with their authored material.
    Screen,
    /// Button cluster, textured from the manifest.
    Buttons,
    /// Camera lens detail, textured from the manifest.
    CameraLens,
}

/// One authored node-name → role assignment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartBinding {
    pub node: String,
    pub role: PartRole,
}

/// PBR parameters for the casing material.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BodyMaterialParams {
    pub base_color: [f32; 3],
    pub roughness: f32,
    pub metalness: f32,
}

/// Texture file references for the textured roles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextureFiles {
    pub buttons: String,
    pub camera_lens: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelFiles {
    pub scene: String,
}

/// One navigation affordance revealed when the device opens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavEntry {
    pub label: String,
    pub section: String,
}

/// Complete showcase manifest as a Bevy asset. Mirrors the JSON structure
/// exactly; authored together with the model export so part names stay in
/// sync with the asset.
#[derive(Asset, Debug, Clone, Serialize, Deserialize, TypePath, Resource)]
pub struct ShowcaseManifest {
    pub title: String,
    pub model: ModelFiles,
    pub parts: Vec<PartBinding>,
    pub body_material: BodyMaterialParams,
    pub textures: TextureFiles,
    pub navigation: Vec<NavEntry>,
}

impl ShowcaseManifest {
    /// Model scene path relative to the asset root.
    pub fn scene_path(&self) -> &str {
        &self.model.scene
    }

    /// Role of a node, matched by exact name.
    pub fn role_for(&self, node: &str) -> Option<PartRole> {
        self.parts
            .iter()
            .find(|binding| binding.node == node)
            .map(|binding| binding.role)
    }

    /// Name of the hinged node, if one is authored.
    pub fn lid_node(&self) -> Option<&str> {
        self.parts
            .iter()
            .find(|binding| binding.role == PartRole::Lid)
            .map(|binding| binding.node.as_str())
    }

    pub fn body_color(&self) -> Color {
        let [r, g, b] = self.body_material.base_color;
        Color::srgb(r, g, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "title": "Handheld Console",
        "model": { "scene": "showcase/device.glb" },
        "parts": [
            { "node": "Lid", "role": "lid" },
            { "node": "Base", "role": "body" },
            { "node": "TopScreen", "role": "screen" },
            { "node": "ButtonCluster", "role": "buttons" },
            { "node": "CameraModule", "role": "camera_lens" }
        ],
        "body_material": { "base_color": [0.102, 0.102, 0.102], "roughness": 0.4, "metalness": 0.1 },
        "textures": { "buttons": "showcase/textures/buttons.png", "camera_lens": "showcase/textures/camera.png" },
        "navigation": [
            { "label": "About", "section": "about" },
            { "label": "Features", "section": "features" }
        ]
    }"#;

    #[test]
    fn test_manifest_parses() {
        let manifest: ShowcaseManifest = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(manifest.title, "Handheld Console");
        assert_eq!(manifest.scene_path(), "showcase/device.glb");
        assert_eq!(manifest.navigation.len(), 2);
        assert_eq!(manifest.lid_node(), Some("Lid"));
    }

    #[test]
    fn test_role_matching_is_exact() {
        let manifest: ShowcaseManifest = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(manifest.role_for("Base"), Some(PartRole::Body));
        assert_eq!(manifest.role_for("CameraModule"), Some(PartRole::CameraLens));
        // No substring fallback: a near-miss name resolves to nothing.
        assert_eq!(manifest.role_for("Lid_001"), None);
        assert_eq!(manifest.role_for("base"), None);
    }
}
