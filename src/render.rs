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

use log::{debug, error};
use serde::Serialize;

use crate::adapter::{to_lat_lng, to_path, LatLng};
use crate::style::{style_for, StyleOptions};
use crate::{Error, Feature, FeatureStore, Geometry, GeometryKind, MapConfig, Scene};

/// A widget-native primitive produced from one feature.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Drawable {
    Marker {
        index: usize,
        position: LatLng,
        title: Option<String>,
    },
    Polyline {
        index: usize,
        path: Vec<LatLng>,
        style: StyleOptions,
    },
    /// Filled area built from the outer ring only.
    Polygon {
        index: usize,
        path: Vec<LatLng>,
        style: StyleOptions,
    },
}

impl Drawable {
    /// Builds the drawable for the feature at `index` of its scene.
    ///
    /// Lines and polygons with no positions draw nothing and yield `None`.
    /// A coordinate shape that does not match the geometry kind is `InvalidGeometry`.
    pub fn from_feature(index: usize, feature: &Feature) -> Result<Option<Drawable>, Error> {
        feature.geometry.validate()?;
        let drawable = match feature.geometry {
            Geometry::Point(ref pos) => Drawable::Marker {
                index,
                position: to_lat_lng(pos)?,
                title: feature.name().map(str::to_owned),
            },
            Geometry::LineString(ref line) => {
                if line.is_empty() {
                    return Ok(None);
                }
                Drawable::Polyline {
                    index,
                    path: to_path(line)?,
                    style: style_for(GeometryKind::LineString),
                }
            }
            Geometry::Polygon(ref rings) => match rings.first() {
                Some(outer) if !outer.is_empty() => Drawable::Polygon {
                    index,
                    path: to_path(outer)?,
                    style: style_for(GeometryKind::Polygon),
                },
                _ => return Ok(None),
            },
        };
        Ok(Some(drawable))
    }

    pub fn index(&self) -> usize {
        match *self {
            Drawable::Marker { index, .. }
            | Drawable::Polyline { index, .. }
            | Drawable::Polygon { index, .. } => index,
        }
    }

    pub fn kind(&self) -> GeometryKind {
        match *self {
            Drawable::Marker { .. } => GeometryKind::Point,
            Drawable::Polyline { .. } => GeometryKind::LineString,
            Drawable::Polygon { .. } => GeometryKind::Polygon,
        }
    }

    /// Stable widget key, e.g. `line-2`.
    pub fn key(&self) -> String {
        let prefix = match *self {
            Drawable::Marker { .. } => "point",
            Drawable::Polyline { .. } => "line",
            Drawable::Polygon { .. } => "polygon",
        };
        format!("{}-{}", prefix, self.index())
    }
}

/// Load state of the map widget's runtime.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SurfaceStatus {
    Loading,
    Ready,
    Failed(String),
}

/// The map widget the drawables are handed to.
pub trait RenderSurface {
    fn status(&self) -> SurfaceStatus;

    /// Removes everything previously drawn.
    fn clear(&mut self);

    fn draw(&mut self, drawable: Drawable);

    /// Receives the initial map view before a scene is drawn.
    fn configure(&mut self, _config: &MapConfig) {}
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct RenderSummary {
    pub markers: usize,
    pub polylines: usize,
    pub polygons: usize,
}

impl RenderSummary {
    fn count(&mut self, drawable: &Drawable) {
        match drawable.kind() {
            GeometryKind::Point => self.markers += 1,
            GeometryKind::LineString => self.polylines += 1,
            GeometryKind::Polygon => self.polygons += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.markers + self.polylines + self.polygons
    }
}

/// Turns scenes of a `FeatureStore` into drawables.
#[derive(Clone, Debug)]
pub struct Renderer {
    store: FeatureStore,
}

impl Renderer {
    pub fn new(store: FeatureStore) -> Self {
        Renderer { store }
    }

    pub fn store(&self) -> &FeatureStore {
        &self.store
    }

    /// Drawables of the scene at `key` (or the default scene), in feature order.
    pub fn drawables(&self, key: &str) -> Result<Vec<Drawable>, Error> {
        scene_drawables(self.store.scene_or_default(key))
    }

    /// Draws a scene onto `surface`.
    ///
    /// Returns `Ok(None)` without drawing while the surface is still loading.
    pub fn render<S: RenderSurface + ?Sized>(
        &self,
        key: &str,
        surface: &mut S,
    ) -> Result<Option<RenderSummary>, Error> {
        match surface.status() {
            SurfaceStatus::Loading => {
                debug!("map surface still loading, nothing drawn");
                return Ok(None);
            }
            SurfaceStatus::Failed(reason) => {
                error!("map surface failed to load: {}", reason);
                return Err(Error::RenderSurfaceUnavailable(reason));
            }
            SurfaceStatus::Ready => (),
        }

        let scene = self.store.scene_or_default(key);
        let drawables = scene_drawables(scene)?;
        let mut summary = RenderSummary::default();
        surface.clear();
        for drawable in drawables {
            summary.count(&drawable);
            surface.draw(drawable);
        }
        debug!(
            "scene '{}': {} markers, {} polylines, {} polygons",
            scene.key, summary.markers, summary.polylines, summary.polygons
        );
        Ok(Some(summary))
    }
}

fn scene_drawables(scene: &Scene) -> Result<Vec<Drawable>, Error> {
    let mut drawables = Vec::with_capacity(scene.len());
    for (ix, feature) in scene.features.iter().enumerate() {
        if let Some(drawable) = Drawable::from_feature(ix, feature)? {
            drawables.push(drawable);
        }
    }
    Ok(drawables)
}
