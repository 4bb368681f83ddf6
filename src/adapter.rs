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

use serde::{Deserialize, Serialize};

use crate::{Error, Position};

/// A point in the `{lat, lng}` convention map widgets expect.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub const fn new(lat: f64, lng: f64) -> Self {
        LatLng { lat, lng }
    }
}

/// GeoJSON coordinates handed to the adapter.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Coordinates<'a> {
    Pair(&'a [f64]),
    Sequence(&'a [Position]),
}

impl<'a> From<&'a [f64]> for Coordinates<'a> {
    fn from(pair: &'a [f64]) -> Self {
        Coordinates::Pair(pair)
    }
}

impl<'a> From<&'a [Position]> for Coordinates<'a> {
    fn from(positions: &'a [Position]) -> Self {
        Coordinates::Sequence(positions)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum RenderPoints {
    Single(LatLng),
    Path(Vec<LatLng>),
}

/// Swaps one `[lon, lat]` (or `[lon, lat, alt]`) position into a `LatLng`.
pub fn to_lat_lng(pair: &[f64]) -> Result<LatLng, Error> {
    match *pair {
        [lng, lat] | [lng, lat, _] => Ok(LatLng { lat, lng }),
        _ => Err(Error::invalid_geometry(
            "Position",
            format!("expected [longitude, latitude], found {} numbers", pair.len()),
        )),
    }
}

/// Converts every position, preserving order and length.
pub fn to_path(positions: &[Position]) -> Result<Vec<LatLng>, Error> {
    positions.iter().map(|pos| to_lat_lng(pos)).collect()
}

pub fn to_render_points(coordinates: Coordinates<'_>) -> Result<RenderPoints, Error> {
    match coordinates {
        Coordinates::Pair(pair) => to_lat_lng(pair).map(RenderPoints::Single),
        Coordinates::Sequence(positions) => to_path(positions).map(RenderPoints::Path),
    }
}
