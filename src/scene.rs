//! Scene descriptions on disk.
//!
//! A scene file is JSON with a library of named materials and an ordered
//! list of spheres referring to them by name:
//!
//! ```json
//! {
//!     "background": [0.2, 0.7, 0.8],
//!     "materials": { "red": { "diffuse_color": [0.3, 0.1, 0.1] } },
//!     "spheres": [ { "center": [-1.0, -1.5, -12.0], "radius": 2.0, "material": "red" } ]
//! }
//! ```
//!
//! `background` and `horizon` are optional.

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::{debug, warn};
use na::Vector3;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TraceError};
use crate::{Material, Scene, Sphere, BACKGROUND_COLOR, BACKGROUND_HORIZON};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MaterialData {
    pub diffuse_color: [f32; 3],
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SphereData {
    pub center: [f32; 3],
    pub radius: f32,
    pub material: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SceneDescription {
    #[serde(default = "default_background")]
    pub background: [f32; 3],
    #[serde(default = "default_horizon")]
    pub horizon: f32,
    #[serde(default)]
    pub materials: HashMap<String, MaterialData>,
    #[serde(default)]
    pub spheres: Vec<SphereData>,
}

fn default_background() -> [f32; 3] {
    BACKGROUND_COLOR
}

fn default_horizon() -> f32 {
    BACKGROUND_HORIZON
}

impl From<&MaterialData> for Material {
    fn from(data: &MaterialData) -> Material {
        Material {
            diffuse_color: Vector3::from(data.diffuse_color),
        }
    }
}

impl SceneDescription {
    pub fn from_json(input: &str) -> Result<SceneDescription> {
        Ok(serde_json::from_str(input)?)
    }

    /// Resolve material names and build the runtime scene, keeping sphere order.
    pub fn into_scene(self) -> Result<Scene> {
        let mut spheres = Vec::with_capacity(self.spheres.len());
        for (index, sphere) in self.spheres.into_iter().enumerate() {
            let material = self.materials.get(&sphere.material).ok_or_else(|| {
                TraceError::UnknownMaterial {
                    sphere: index,
                    name: sphere.material.clone(),
                }
            })?;
            if !(sphere.radius > 0.0) {
                warn!("sphere #{} has non-positive radius {}", index, sphere.radius);
            }
            spheres.push(Sphere::new(
                Vector3::from(sphere.center),
                sphere.radius,
                Material::from(material),
            ));
        }
        debug!(
            "scene has {} spheres using {} materials",
            spheres.len(),
            self.materials.len()
        );
        Ok(Scene {
            spheres,
            background: Vector3::from(self.background),
            horizon: self.horizon,
        })
    }
}

pub fn load_scene<P: AsRef<Path>>(path: P) -> Result<Scene> {
    let path = path.as_ref();
    debug!("loading scene from {}", path.display());
    let mut input = String::new();
    File::open(path)?.read_to_string(&mut input)?;
    SceneDescription::from_json(&input)?.into_scene()
}

/// The four spheres the renderer draws when no scene file is given.
pub fn reference_scene() -> Scene {
    let ivory = Material::new(0.4, 0.4, 0.3);
    let red = Material::new(0.3, 0.1, 0.1);
    Scene::new(vec![
        Sphere::new(Vector3::new(-3.0, 0.0, -16.0), 2.0, ivory),
        Sphere::new(Vector3::new(-1.0, -1.5, -12.0), 2.0, red),
        Sphere::new(Vector3::new(1.5, -0.5, -18.0), 3.0, red),
        Sphere::new(Vector3::new(7.0, 5.0, -18.0), 4.0, ivory),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCENE: &str = r#"{
        "materials": {
            "ivory": { "diffuse_color": [0.4, 0.4, 0.3] },
            "red": { "diffuse_color": [0.3, 0.1, 0.1] }
        },
        "spheres": [
            { "center": [-3.0, 0.0, -16.0], "radius": 2.0, "material": "ivory" },
            { "center": [-1.0, -1.5, -12.0], "radius": 2.0, "material": "red" }
        ]
    }"#;

    #[test]
    fn parses_scene_with_defaults() {
        let scene = SceneDescription::from_json(SCENE).unwrap().into_scene().unwrap();
        assert_eq!(scene.spheres.len(), 2);
        assert_eq!(scene.spheres[0].material, Material::new(0.4, 0.4, 0.3));
        assert_eq!(scene.spheres[1].center, Vector3::new(-1.0, -1.5, -12.0));
        assert_eq!(scene.background, Vector3::from(BACKGROUND_COLOR));
        assert_eq!(scene.horizon, BACKGROUND_HORIZON);
    }

    #[test]
    fn overrides_background_and_horizon() {
        let scene = SceneDescription::from_json(
            r#"{ "background": [0.0, 0.0, 0.0], "horizon": 50.0 }"#,
        )
        .unwrap()
        .into_scene()
        .unwrap();
        assert!(scene.spheres.is_empty());
        assert_eq!(scene.background, Vector3::zeros());
        assert_eq!(scene.horizon, 50.0);
    }

    #[test]
    fn unknown_material_is_reported() {
        let input = r#"{
            "materials": {},
            "spheres": [ { "center": [0.0, 0.0, -5.0], "radius": 1.0, "material": "gold" } ]
        }"#;
        let result = SceneDescription::from_json(input).unwrap().into_scene();
        match result {
            Err(TraceError::UnknownMaterial { sphere, name }) => {
                assert_eq!(sphere, 0);
                assert_eq!(name, "gold");
            }
            other => panic!("expected unknown material error, got {:?}", other),
        }
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let result = SceneDescription::from_json(r#"{ "spheres": [ { "radius": 1.0 } ] }"#);
        assert!(matches!(result, Err(TraceError::SceneParse(_))));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let result = load_scene("definitely/not/a/scene.json");
        assert!(matches!(result, Err(TraceError::Io(_))));
    }

    #[test]
    fn bundled_reference_scene_matches_builtin() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("scenes/reference.json");
        let loaded = load_scene(path).unwrap();
        let builtin = reference_scene();
        assert_eq!(loaded.spheres, builtin.spheres);
        assert_eq!(loaded.background, builtin.background);
        assert_eq!(loaded.horizon, builtin.horizon);
    }
}
