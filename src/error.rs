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

/// Error when loading, adapting or rendering features
#[derive(Debug, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// The coordinate shape does not match the declared geometry kind.
    InvalidGeometry { kind: String, reason: String },
    /// A GeoJSON geometry type with no drawable counterpart (e.g. `MultiPoint`).
    UnsupportedGeometryKind(String),
    /// The map widget failed to initialize.
    RenderSurfaceUnavailable(String),
    UnknownScene(String),
    FeatureIndexOutOfRange { index: usize, len: usize },
    /// A line or area interaction arrived without a surface position.
    MissingInteractionPosition(usize),
    ExpectedFeatureCollection(String),
    MalformedJson(String),
    MalformedGeoJson(String),
    InvalidConfig(String),
}

impl Error {
    pub(crate) fn invalid_geometry(kind: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::InvalidGeometry {
            kind: kind.into(),
            reason: reason.into(),
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            Error::InvalidGeometry {
                ref kind,
                ref reason,
            } => write!(f, "Invalid '{}' geometry: {}.", kind, reason),
            Error::UnsupportedGeometryKind(ref kind) => {
                write!(f, "Geometry type '{}' has no drawable counterpart.", kind)
            }
            Error::RenderSurfaceUnavailable(ref reason) => {
                write!(f, "The map surface is unavailable: {}.", reason)
            }
            Error::UnknownScene(ref key) => write!(f, "No scene with key '{}'.", key),
            Error::FeatureIndexOutOfRange { index, len } => write!(
                f,
                "Feature index {} is out of range for a scene of {} features.",
                index, len
            ),
            Error::MissingInteractionPosition(index) => write!(
                f,
                "Interaction with feature {} carried no surface position.",
                index
            ),
            Error::ExpectedFeatureCollection(ref key) => {
                write!(f, "Scene '{}' is not a GeoJSON FeatureCollection.", key)
            }
            Error::MalformedJson(ref reason) => write!(f, "Encountered malformed JSON: {}", reason),
            Error::MalformedGeoJson(ref reason) => {
                write!(f, "Encountered malformed GeoJSON: {}", reason)
            }
            Error::InvalidConfig(ref reason) => write!(f, "Invalid map configuration: {}.", reason),
        }
    }
}

impl std::error::Error for Error {}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::MalformedJson(err.to_string())
    }
}

impl From<geojson::Error> for Error {
    fn from(err: geojson::Error) -> Self {
        Error::MalformedGeoJson(err.to_string())
    }
}
