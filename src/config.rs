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

use crate::adapter::LatLng;
use crate::store::DEFAULT_SCENE;
use crate::Error;

pub const MAX_ZOOM: u8 = 22;

/// Widget control toggles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MapControls {
    #[serde(rename = "disableDefaultUI")]
    pub disable_default_ui: bool,
    pub zoom_control: bool,
    pub street_view_control: bool,
    pub map_type_control: bool,
    pub fullscreen_control: bool,
}

impl Default for MapControls {
    fn default() -> Self {
        MapControls {
            disable_default_ui: false,
            zoom_control: true,
            street_view_control: false,
            map_type_control: true,
            fullscreen_control: true,
        }
    }
}

/// Initial map view. Missing members take their defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MapConfig {
    pub center: LatLng,
    pub zoom: u8,
    pub controls: MapControls,
    pub default_scene: String,
}

impl Default for MapConfig {
    fn default() -> Self {
        MapConfig {
            center: LatLng::new(40.7589, -73.9851),
            zoom: 13,
            controls: MapControls::default(),
            default_scene: String::from(DEFAULT_SCENE),
        }
    }
}

impl MapConfig {
    pub fn from_json_str(s: &str) -> Result<Self, Error> {
        let config: MapConfig = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.zoom > MAX_ZOOM {
            return Err(Error::InvalidConfig(format!(
                "zoom {} exceeds the maximum of {}",
                self.zoom, MAX_ZOOM
            )));
        }
        if self.default_scene.is_empty() {
            return Err(Error::InvalidConfig(String::from("default scene is empty")));
        }
        Ok(())
    }
}
