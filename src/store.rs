// Copyright 2018 The GeoRust Developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//	http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::convert::TryFrom;

use geojson::{FeatureCollection, GeoJson};
use log::{debug, warn};

use crate::json::{JsonObject, JsonValue};
use crate::{Error, Feature};

/// Key of the scene shown when nothing else is asked for.
pub const DEFAULT_SCENE: &str = "basic";

static SAMPLE_SCENES: &str = include_str!("../data/scenes.geojson");

/// A named, fixed collection of features displayed as a unit.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub key: String,
    pub label: String,
    pub features: Vec<Feature>,
}

impl Scene {
    pub fn new(key: impl Into<String>, label: impl Into<String>, features: Vec<Feature>) -> Self {
        Scene {
            key: key.into(),
            label: label.into(),
            features,
        }
    }

    /// Builds a scene from a FeatureCollection.
    ///
    /// The collection's `label` foreign member, if any, becomes the tab label.
    /// Features without a drawable geometry kind are skipped, so feature indices
    /// (and drawable keys such as `point-1`) count only the kept features, not
    /// positions in the source collection.
    pub fn from_feature_collection(key: &str, fc: FeatureCollection) -> Result<Self, Error> {
        let label = fc
            .foreign_members
            .as_ref()
            .and_then(|members| members.get("label"))
            .and_then(JsonValue::as_str)
            .unwrap_or(key)
            .to_owned();

        let mut features = Vec::with_capacity(fc.features.len());
        for (ix, feature) in fc.features.into_iter().enumerate() {
            match Feature::try_from(feature) {
                Ok(f) => features.push(f),
                Err(Error::UnsupportedGeometryKind(kind)) => {
                    warn!("scene '{}': skipping feature {} with geometry '{}'", key, ix, kind);
                }
                Err(e) => return Err(e),
            }
        }
        Ok(Scene::new(key, label, features))
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

/// Static catalog of scenes, keyed by scene key in declaration order.
#[derive(Clone, Debug, PartialEq)]
pub struct FeatureStore {
    scenes: Vec<Scene>,
    default_ix: usize,
}

impl FeatureStore {
    /// Returns a new store. Fails if `default_key` names none of the scenes.
    pub fn new(scenes: Vec<Scene>, default_key: &str) -> Result<Self, Error> {
        let default_ix = scenes
            .iter()
            .position(|s| s.key == default_key)
            .ok_or_else(|| Error::UnknownScene(default_key.to_owned()))?;
        Ok(FeatureStore { scenes, default_ix })
    }

    /// Reads a JSON object mapping scene keys to GeoJSON FeatureCollections.
    pub fn from_json_str(s: &str, default_key: &str) -> Result<Self, Error> {
        let object: JsonObject = serde_json::from_str(s)?;
        let mut scenes = Vec::with_capacity(object.len());
        for (key, value) in object {
            match GeoJson::from_json_value(value)? {
                GeoJson::FeatureCollection(fc) => {
                    let scene = Scene::from_feature_collection(&key, fc)?;
                    debug!("loaded scene '{}' with {} features", key, scene.len());
                    scenes.push(scene);
                }
                _ => return Err(Error::ExpectedFeatureCollection(key)),
            }
        }
        FeatureStore::new(scenes, default_key)
    }

    /// The four built-in New York scenes.
    pub fn sample() -> Result<Self, Error> {
        FeatureStore::from_json_str(SAMPLE_SCENES, DEFAULT_SCENE)
    }

    pub fn scenes(&self) -> &[Scene] {
        &self.scenes
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.scenes.iter().map(|s| s.key.as_str())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.scenes.iter().any(|s| s.key == key)
    }

    pub fn scene(&self, key: &str) -> Result<&Scene, Error> {
        self.scenes
            .iter()
            .find(|s| s.key == key)
            .ok_or_else(|| Error::UnknownScene(key.to_owned()))
    }

    pub fn default_scene(&self) -> &Scene {
        &self.scenes[self.default_ix]
    }

    /// Looks up `key`, falling back to the default scene when it is unknown.
    pub fn scene_or_default(&self, key: &str) -> &Scene {
        match self.scene(key) {
            Ok(scene) => scene,
            Err(_) => {
                let fallback = self.default_scene();
                warn!("unknown scene '{}', showing '{}'", key, fallback.key);
                fallback
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{FeatureStore, Scene, DEFAULT_SCENE};
    use crate::{Error, Feature, Geometry, GeometryKind};

    #[test]
    fn sample_scenes_keep_declaration_order() {
        let store = FeatureStore::sample().unwrap();
        let keys: Vec<&str> = store.keys().collect();
        assert_eq!(keys, vec!["basic", "points", "lines", "polygons"]);
        assert_eq!(store.default_scene().key, DEFAULT_SCENE);
        assert_eq!(store.default_scene().label, "Basic Shapes");
    }

    #[test]
    fn sample_points_scene() {
        let store = FeatureStore::sample().unwrap();
        let scene = store.scene("points").unwrap();
        assert_eq!(scene.len(), 3);
        assert!(scene.features.iter().all(|f| f.kind() == GeometryKind::Point));
        assert_eq!(scene.features[0].name(), Some("Empire State Building"));
    }

    #[test]
    fn unknown_scene() {
        let store = FeatureStore::sample().unwrap();
        assert_eq!(
            store.scene("rivers"),
            Err(Error::UnknownScene(String::from("rivers")))
        );
        assert_eq!(store.scene_or_default("rivers").key, "basic");
        assert!(!store.contains("rivers"));
    }

    #[test]
    fn unknown_default_key_is_rejected() {
        let scenes = vec![Scene::new("only", "Only", vec![])];
        assert_eq!(
            FeatureStore::new(scenes, "basic"),
            Err(Error::UnknownScene(String::from("basic")))
        );
    }

    #[test]
    fn label_falls_back_to_key() {
        let store = FeatureStore::from_json_str(
            "{\"empty\":{\"type\":\"FeatureCollection\",\"features\":[]}}",
            "empty",
        )
        .unwrap();
        let scene = store.scene("empty").unwrap();
        assert_eq!(scene.label, "empty");
        assert!(scene.is_empty());
    }

    #[test]
    fn unsupported_features_are_skipped() {
        let store = FeatureStore::from_json_str(
            "{\"mixed\":{\"type\":\"FeatureCollection\",\"features\":[\
             {\"type\":\"Feature\",\"geometry\":{\"type\":\"MultiPoint\",\"coordinates\":[[1.0,2.0]]},\"properties\":{\"name\":\"skip\"}},\
             {\"type\":\"Feature\",\"geometry\":null,\"properties\":{\"name\":\"skip too\"}},\
             {\"type\":\"Feature\",\"geometry\":{\"type\":\"Point\",\"coordinates\":[1.0,2.0]},\"properties\":{\"name\":\"keep\"}}]}}",
            "mixed",
        )
        .unwrap();
        let scene = store.scene("mixed").unwrap();
        assert_eq!(
            scene.features,
            vec![Feature::named(Geometry::Point(vec![1.0, 2.0]), "keep")]
        );
        let drawables = crate::Renderer::new(store.clone()).drawables("mixed").unwrap();
        assert_eq!(drawables[0].key(), "point-0");
    }

    #[test]
    fn invalid_geometry_fails_loading() {
        let result = FeatureStore::from_json_str(
            "{\"bad\":{\"type\":\"FeatureCollection\",\"features\":[\
             {\"type\":\"Feature\",\"geometry\":{\"type\":\"LineString\",\"coordinates\":[[1.0,2.0]]},\"properties\":{}}]}}",
            "bad",
        );
        match result {
            Err(Error::InvalidGeometry { kind, .. }) => assert_eq!(kind, "LineString"),
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn scene_must_be_a_feature_collection() {
        let result = FeatureStore::from_json_str(
            "{\"lonely\":{\"type\":\"Point\",\"coordinates\":[1.0,2.0]}}",
            "lonely",
        );
        assert_eq!(
            result,
            Err(Error::ExpectedFeatureCollection(String::from("lonely")))
        );
    }

    #[test]
    fn malformed_json() {
        match FeatureStore::from_json_str("{", "basic") {
            Err(Error::MalformedJson(_)) => (),
            other => panic!("unexpected result {:?}", other),
        }
    }
}
