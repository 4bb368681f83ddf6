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
use std::fmt;

use geojson::Value as GeoJsonGeomValue;
use serde::Serialize;

use crate::json::{JsonObject, JsonValue};
use crate::{Error, Position};

/// The geometry kinds that have a drawable counterpart.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum GeometryKind {
    Point,
    LineString,
    Polygon,
}

impl GeometryKind {
    /// The GeoJSON `type` member for this kind.
    pub fn as_str(&self) -> &'static str {
        match *self {
            GeometryKind::Point => "Point",
            GeometryKind::LineString => "LineString",
            GeometryKind::Polygon => "Polygon",
        }
    }

    pub fn from_type_name(s: &str) -> Option<Self> {
        match s {
            "Point" => Some(GeometryKind::Point),
            "LineString" => Some(GeometryKind::LineString),
            "Polygon" => Some(GeometryKind::Polygon),
            _ => None,
        }
    }
}

impl fmt::Display for GeometryKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Feature geometry, in GeoJSON `[longitude, latitude]` order.
#[derive(Clone, Debug, PartialEq)]
pub enum Geometry {
    /// A single position.
    Point(Position),

    /// An ordered line of positions. A non-empty line has at least two.
    LineString(Vec<Position>),

    /// Linear rings, the first being the outer ring. Non-empty rings are closed.
    Polygon(Vec<Vec<Position>>),
}

impl Geometry {
    pub fn kind(&self) -> GeometryKind {
        match *self {
            Geometry::Point(..) => GeometryKind::Point,
            Geometry::LineString(..) => GeometryKind::LineString,
            Geometry::Polygon(..) => GeometryKind::Polygon,
        }
    }

    /// Checks that the coordinate shape matches the geometry kind.
    ///
    /// Only arity and ring closure are checked; coordinate ranges are not.
    pub fn validate(&self) -> Result<(), Error> {
        let kind = self.kind();
        match *self {
            Geometry::Point(ref pos) => check_position(kind, pos),
            Geometry::LineString(ref line) => {
                if line.len() == 1 {
                    return Err(Error::invalid_geometry(
                        kind.as_str(),
                        "expected at least 2 positions, found 1",
                    ));
                }
                line.iter().try_for_each(|pos| check_position(kind, pos))
            }
            Geometry::Polygon(ref rings) => {
                for (ix, ring) in rings.iter().enumerate() {
                    if ring.is_empty() {
                        continue;
                    }
                    if ring.len() < 4 {
                        return Err(Error::invalid_geometry(
                            kind.as_str(),
                            format!("ring {} has {} positions, expected at least 4", ix, ring.len()),
                        ));
                    }
                    ring.iter().try_for_each(|pos| check_position(kind, pos))?;
                    if ring.first() != ring.last() {
                        return Err(Error::invalid_geometry(
                            kind.as_str(),
                            format!("ring {} is not closed", ix),
                        ));
                    }
                }
                Ok(())
            }
        }
    }
}

fn check_position(kind: GeometryKind, pos: &[f64]) -> Result<(), Error> {
    match pos.len() {
        2 | 3 => Ok(()),
        n => Err(Error::invalid_geometry(
            kind.as_str(),
            format!("a position needs 2 or 3 numbers, found {}", n),
        )),
    }
}

fn unsupported_type_name(value: &GeoJsonGeomValue) -> &'static str {
    match *value {
        GeoJsonGeomValue::Point(..) => "Point",
        GeoJsonGeomValue::MultiPoint(..) => "MultiPoint",
        GeoJsonGeomValue::LineString(..) => "LineString",
        GeoJsonGeomValue::MultiLineString(..) => "MultiLineString",
        GeoJsonGeomValue::Polygon(..) => "Polygon",
        GeoJsonGeomValue::MultiPolygon(..) => "MultiPolygon",
        GeoJsonGeomValue::GeometryCollection(..) => "GeometryCollection",
    }
}

impl TryFrom<geojson::Geometry> for Geometry {
    type Error = Error;

    fn try_from(geom: geojson::Geometry) -> Result<Self, Self::Error> {
        let geometry = match geom.value {
            GeoJsonGeomValue::Point(pos) => Geometry::Point(pos),
            GeoJsonGeomValue::LineString(line) => Geometry::LineString(line),
            GeoJsonGeomValue::Polygon(rings) => Geometry::Polygon(rings),
            ref other => {
                return Err(Error::UnsupportedGeometryKind(
                    unsupported_type_name(other).to_owned(),
                ))
            }
        };
        geometry.validate()?;
        Ok(geometry)
    }
}

/// A named geographic entity: one geometry plus its properties.
#[derive(Clone, Debug, PartialEq)]
pub struct Feature {
    pub geometry: Geometry,
    pub properties: JsonObject,
}

impl Feature {
    pub fn new(geometry: Geometry, properties: JsonObject) -> Self {
        Feature {
            geometry,
            properties,
        }
    }

    /// Returns a new `Feature` whose only property is `name`.
    pub fn named(geometry: Geometry, name: &str) -> Self {
        let mut properties = JsonObject::new();
        properties.insert(String::from("name"), JsonValue::from(name));
        Feature::new(geometry, properties)
    }

    pub fn kind(&self) -> GeometryKind {
        self.geometry.kind()
    }

    pub fn property(&self, key: &str) -> Option<&JsonValue> {
        self.properties.get(key)
    }

    /// The `name` property, when it is a string.
    pub fn name(&self) -> Option<&str> {
        self.property("name").and_then(JsonValue::as_str)
    }
}

impl TryFrom<geojson::Feature> for Feature {
    type Error = Error;

    fn try_from(feature: geojson::Feature) -> Result<Self, Self::Error> {
        let geometry = match feature.geometry {
            Some(geom) => Geometry::try_from(geom)?,
            None => return Err(Error::UnsupportedGeometryKind(String::from("null"))),
        };
        Ok(Feature {
            geometry,
            properties: feature.properties.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::convert::TryFrom;

    use super::{Feature, Geometry, GeometryKind};
    use crate::Error;

    fn decode(json_string: &str) -> Result<Feature, Error> {
        let feature: geojson::Feature = json_string.parse().unwrap();
        Feature::try_from(feature)
    }

    #[test]
    fn kind_round_trips_through_type_name() {
        for kind in [GeometryKind::Point, GeometryKind::LineString, GeometryKind::Polygon] {
            assert_eq!(GeometryKind::from_type_name(kind.as_str()), Some(kind));
        }
        assert_eq!(GeometryKind::from_type_name("MultiPolygon"), None);
    }

    #[test]
    fn decode_point_feature() {
        let feature = decode(
            "{\"type\":\"Feature\",\"geometry\":{\"type\":\"Point\",\"coordinates\":[-73.9857,40.7484]},\"properties\":{\"name\":\"Times Square\",\"type\":\"landmark\"}}",
        )
        .unwrap();
        assert_eq!(feature.geometry, Geometry::Point(vec![-73.9857, 40.7484]));
        assert_eq!(feature.name(), Some("Times Square"));
        assert_eq!(feature.property("type").and_then(|v| v.as_str()), Some("landmark"));
    }

    #[test]
    fn decode_rejects_multipoint() {
        let result = decode(
            "{\"type\":\"Feature\",\"geometry\":{\"type\":\"MultiPoint\",\"coordinates\":[[1.0,2.0]]},\"properties\":null}",
        );
        assert_eq!(
            result,
            Err(Error::UnsupportedGeometryKind(String::from("MultiPoint")))
        );
    }

    #[test]
    fn decode_null_geometry_is_unsupported() {
        let result = decode("{\"type\":\"Feature\",\"geometry\":null,\"properties\":{}}");
        match result {
            Err(Error::UnsupportedGeometryKind(kind)) => assert_eq!(kind, "null"),
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn decode_missing_properties_is_empty() {
        let feature = decode(
            "{\"type\":\"Feature\",\"geometry\":{\"type\":\"Point\",\"coordinates\":[1.0,2.0]},\"properties\":null}",
        )
        .unwrap();
        assert!(feature.properties.is_empty());
        assert_eq!(feature.name(), None);
    }

    #[test]
    fn single_position_line_is_invalid() {
        let line = Geometry::LineString(vec![vec![1.0, 2.0]]);
        match line.validate() {
            Err(Error::InvalidGeometry { kind, .. }) => assert_eq!(kind, "LineString"),
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn empty_line_is_valid() {
        assert_eq!(Geometry::LineString(vec![]).validate(), Ok(()));
        assert_eq!(Geometry::Polygon(vec![vec![]]).validate(), Ok(()));
    }

    #[test]
    fn open_ring_is_invalid() {
        let polygon = Geometry::Polygon(vec![vec![
            vec![0.0, 0.0],
            vec![0.0, 1.0],
            vec![1.0, 1.0],
            vec![1.0, 0.0],
        ]]);
        assert_eq!(
            polygon.validate(),
            Err(Error::invalid_geometry("Polygon", "ring 0 is not closed"))
        );
    }

    #[test]
    fn closed_triangle_ring_is_too_short() {
        let polygon = Geometry::Polygon(vec![vec![
            vec![0.0, 0.0],
            vec![0.0, 1.0],
            vec![0.0, 0.0],
        ]]);
        assert_eq!(
            polygon.validate(),
            Err(Error::invalid_geometry(
                "Polygon",
                "ring 0 has 3 positions, expected at least 4"
            ))
        );
    }

    #[test]
    fn point_with_altitude_is_valid_but_four_numbers_are_not() {
        assert_eq!(Geometry::Point(vec![1.0, 2.0, 30.0]).validate(), Ok(()));
        assert!(Geometry::Point(vec![1.0, 2.0, 3.0, 4.0]).validate().is_err());
        assert!(Geometry::Point(vec![1.0]).validate().is_err());
    }

    #[test]
    fn out_of_range_coordinates_pass_validation() {
        assert_eq!(Geometry::Point(vec![540.0, -200.0]).validate(), Ok(()));
    }
}
