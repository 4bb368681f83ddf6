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

use log::debug;
use serde::Serialize;

use crate::adapter::{to_lat_lng, LatLng};
use crate::{Error, Feature, Geometry, GeometryKind};

/// The one highlighted feature and where the interaction happened.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Selection {
    pub feature_index: usize,
    pub position: LatLng,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum SelectionState {
    #[default]
    NoSelection,
    FeatureSelected(Selection),
}

/// One user interaction; each event is one state transition.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SelectionEvent {
    /// A drawable was clicked. Lines and areas carry the surface position of the click.
    Select {
        index: usize,
        position: Option<LatLng>,
    },
    /// The info popup was closed.
    Dismiss,
}

/// Contents of the transient info popup.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct InfoPopup {
    pub title: Option<String>,
    pub kind: GeometryKind,
    pub position: LatLng,
}

#[derive(Clone, Debug, Default)]
pub struct SelectionController {
    state: SelectionState,
}

impl SelectionController {
    pub fn new() -> Self {
        SelectionController::default()
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn selection(&self) -> Option<&Selection> {
        match self.state {
            SelectionState::FeatureSelected(ref selection) => Some(selection),
            SelectionState::NoSelection => None,
        }
    }

    /// Applies `event` against the features of the active scene.
    ///
    /// A failed event leaves the state untouched.
    pub fn handle(
        &mut self,
        features: &[Feature],
        event: SelectionEvent,
    ) -> Result<&SelectionState, Error> {
        match event {
            SelectionEvent::Select { index, position } => {
                let selection = select(features, index, position)?;
                debug!(
                    "selected feature {} at ({}, {})",
                    index, selection.position.lat, selection.position.lng
                );
                self.state = SelectionState::FeatureSelected(selection);
            }
            SelectionEvent::Dismiss => self.dismiss(),
        }
        Ok(&self.state)
    }

    pub fn dismiss(&mut self) {
        if self.state != SelectionState::NoSelection {
            debug!("selection dismissed");
        }
        self.state = SelectionState::NoSelection;
    }

    /// Popup for the current selection, if any.
    pub fn popup(&self, features: &[Feature]) -> Option<InfoPopup> {
        let selection = self.selection()?;
        let feature = features.get(selection.feature_index)?;
        Some(InfoPopup {
            title: feature.name().map(str::to_owned),
            kind: feature.kind(),
            position: selection.position,
        })
    }
}

fn select(features: &[Feature], index: usize, position: Option<LatLng>) -> Result<Selection, Error> {
    let feature = features.get(index).ok_or(Error::FeatureIndexOutOfRange {
        index,
        len: features.len(),
    })?;
    let position = match (position, &feature.geometry) {
        (Some(position), _) => position,
        (None, Geometry::Point(pos)) => to_lat_lng(pos)?,
        (None, _) => return Err(Error::MissingInteractionPosition(index)),
    };
    Ok(Selection {
        feature_index: index,
        position,
    })
}

#[cfg(test)]
mod tests {
    use super::{InfoPopup, Selection, SelectionController, SelectionEvent, SelectionState};
    use crate::adapter::LatLng;
    use crate::{Error, FeatureStore, GeometryKind};

    fn basic() -> Vec<crate::Feature> {
        FeatureStore::sample().unwrap().scene("basic").unwrap().features.clone()
    }

    #[test]
    fn point_selection_uses_feature_coordinate() {
        let features = basic();
        let mut controller = SelectionController::new();
        let state = controller
            .handle(&features, SelectionEvent::Select { index: 0, position: None })
            .unwrap();
        assert_eq!(
            *state,
            SelectionState::FeatureSelected(Selection {
                feature_index: 0,
                position: LatLng::new(40.7484, -73.9857),
            })
        );
    }

    #[test]
    fn line_selection_uses_interaction_position() {
        let features = basic();
        let mut controller = SelectionController::new();
        let click = LatLng::new(40.75, -73.98);
        controller
            .handle(&features, SelectionEvent::Select { index: 1, position: Some(click) })
            .unwrap();
        assert_eq!(
            controller.selection(),
            Some(&Selection {
                feature_index: 1,
                position: click,
            })
        );
    }

    #[test]
    fn select_then_dismiss() {
        let features = basic();
        let mut controller = SelectionController::new();
        controller
            .handle(&features, SelectionEvent::Select { index: 0, position: None })
            .unwrap();
        let state = controller.handle(&features, SelectionEvent::Dismiss).unwrap();
        assert_eq!(*state, SelectionState::NoSelection);
        assert_eq!(controller.popup(&features), None);
    }

    #[test]
    fn new_selection_replaces_previous() {
        let features = basic();
        let mut controller = SelectionController::new();
        controller
            .handle(&features, SelectionEvent::Select { index: 0, position: None })
            .unwrap();
        let click = LatLng::new(40.78, -73.95);
        controller
            .handle(&features, SelectionEvent::Select { index: 2, position: Some(click) })
            .unwrap();
        assert_eq!(
            *controller.state(),
            SelectionState::FeatureSelected(Selection {
                feature_index: 2,
                position: click,
            })
        );
    }

    #[test]
    fn line_without_position_is_rejected() {
        let features = basic();
        let mut controller = SelectionController::new();
        let result = controller
            .handle(&features, SelectionEvent::Select { index: 1, position: None })
            .map(|s| *s);
        assert_eq!(result, Err(Error::MissingInteractionPosition(1)));
        assert_eq!(*controller.state(), SelectionState::NoSelection);
    }

    #[test]
    fn out_of_range_index_keeps_previous_selection() {
        let features = basic();
        let mut controller = SelectionController::new();
        controller
            .handle(&features, SelectionEvent::Select { index: 0, position: None })
            .unwrap();
        let result = controller
            .handle(&features, SelectionEvent::Select { index: 7, position: None })
            .map(|s| *s);
        assert_eq!(result, Err(Error::FeatureIndexOutOfRange { index: 7, len: 3 }));
        assert_eq!(controller.selection().map(|s| s.feature_index), Some(0));
    }

    #[test]
    fn popup_shows_name_and_kind() {
        let features = basic();
        let mut controller = SelectionController::new();
        let click = LatLng::new(40.79, -73.95);
        controller
            .handle(&features, SelectionEvent::Select { index: 2, position: Some(click) })
            .unwrap();
        assert_eq!(
            controller.popup(&features),
            Some(InfoPopup {
                title: Some(String::from("Central Park")),
                kind: GeometryKind::Polygon,
                position: click,
            })
        );
    }
}
