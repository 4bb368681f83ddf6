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

use serde::Serialize;

use crate::GeometryKind;

const LINE_COLOR: &str = "#FF6B6B";
const AREA_COLOR: &str = "#4ECDC4";

/// Widget style options. Absent members are left to the widget's defaults.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_color: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_weight: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill_color: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill_opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clickable: Option<bool>,
}

impl StyleOptions {
    pub fn is_empty(&self) -> bool {
        *self == StyleOptions::default()
    }
}

/// Fixed style per geometry kind. Points are left unstyled.
pub fn style_for(kind: GeometryKind) -> StyleOptions {
    match kind {
        GeometryKind::Point => StyleOptions::default(),
        GeometryKind::LineString => StyleOptions {
            stroke_color: Some(LINE_COLOR),
            stroke_opacity: Some(0.8),
            stroke_weight: Some(3),
            clickable: Some(true),
            ..StyleOptions::default()
        },
        GeometryKind::Polygon => StyleOptions {
            fill_color: Some(AREA_COLOR),
            fill_opacity: Some(0.35),
            stroke_color: Some(AREA_COLOR),
            stroke_opacity: Some(0.8),
            stroke_weight: Some(2),
            clickable: Some(true),
        },
    }
}

/// Same lookup keyed by a raw GeoJSON type name; unknown names get the empty style.
pub fn style_for_type(type_name: &str) -> StyleOptions {
    GeometryKind::from_type_name(type_name)
        .map(style_for)
        .unwrap_or_default()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Swatch {
    Dot,
    Line,
    Square,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct LegendEntry {
    pub label: &'static str,
    pub kind: GeometryKind,
    pub color: &'static str,
    pub swatch: Swatch,
    pub opacity: f64,
}

static LEGEND: [LegendEntry; 3] = [
    LegendEntry {
        label: "Points",
        kind: GeometryKind::Point,
        color: LINE_COLOR,
        swatch: Swatch::Dot,
        opacity: 1.0,
    },
    LegendEntry {
        label: "Lines",
        kind: GeometryKind::LineString,
        color: LINE_COLOR,
        swatch: Swatch::Line,
        opacity: 1.0,
    },
    LegendEntry {
        label: "Polygons",
        kind: GeometryKind::Polygon,
        color: AREA_COLOR,
        swatch: Swatch::Square,
        opacity: 0.5,
    },
];

/// Map legend rows, one per geometry kind.
pub fn legend() -> &'static [LegendEntry] {
    &LEGEND
}
