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

//! Render GeoJSON scenes as map widget primitives.
//!
//! A [`FeatureStore`] holds named scenes of GeoJSON features. A [`Renderer`] turns
//! the features of a scene into [`Drawable`]s (markers, polylines and polygons)
//! in the `{lat, lng}` convention of map widgets, with a fixed style per geometry
//! kind. A [`MapView`] keeps the active scene and a single selection that backs
//! an info popup.
//!
//! ```
//! use geojson_playground::{FeatureStore, MapConfig, MapView, SelectionEvent};
//!
//! let mut view = MapView::new(FeatureStore::sample().unwrap(), MapConfig::default()).unwrap();
//! view.select_scene("points").unwrap();
//! view.dispatch(SelectionEvent::Select { index: 1, position: None }).unwrap();
//! assert_eq!(view.popup().unwrap().title.as_deref(), Some("Times Square"));
//! ```

/// A GeoJSON position, `[longitude, latitude]` with an optional altitude.
pub type Position = Vec<f64>;

mod json {
    pub use serde_json::{Map, Value as JsonValue};
    pub type JsonObject = Map<String, JsonValue>;
}

pub use crate::json::{JsonObject, JsonValue};

mod error;
pub use crate::error::Error;

mod geometry;
pub use crate::geometry::{Feature, Geometry, GeometryKind};

pub mod adapter;
pub use crate::adapter::{to_render_points, Coordinates, LatLng, RenderPoints};

pub mod style;
pub use crate::style::{legend, style_for, style_for_type, StyleOptions};

mod store;
pub use crate::store::{FeatureStore, Scene, DEFAULT_SCENE};

pub mod render;
pub use crate::render::{Drawable, RenderSummary, RenderSurface, Renderer, SurfaceStatus};

pub mod selection;
pub use crate::selection::{InfoPopup, Selection, SelectionController, SelectionEvent, SelectionState};

mod config;
pub use crate::config::{MapConfig, MapControls};

mod view;
pub use crate::view::MapView;
