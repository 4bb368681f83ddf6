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

use crate::render::{RenderSummary, RenderSurface, Renderer, SurfaceStatus};
use crate::selection::{InfoPopup, SelectionController, SelectionEvent, SelectionState};
use crate::{Error, FeatureStore, MapConfig, Scene};

/// The UI-side state: which scene is shown and what is selected in it.
#[derive(Clone, Debug)]
pub struct MapView {
    config: MapConfig,
    renderer: Renderer,
    active_scene: String,
    selection: SelectionController,
}

impl MapView {
    /// Fails if the configured default scene is not in `store`.
    pub fn new(store: FeatureStore, config: MapConfig) -> Result<Self, Error> {
        config.validate()?;
        let active_scene = store.scene(&config.default_scene)?.key.clone();
        Ok(MapView {
            config,
            renderer: Renderer::new(store),
            active_scene,
            selection: SelectionController::new(),
        })
    }

    pub fn config(&self) -> &MapConfig {
        &self.config
    }

    pub fn active_scene(&self) -> &Scene {
        self.renderer.store().scene_or_default(&self.active_scene)
    }

    /// `(key, label)` for every scene, in store order.
    pub fn tabs(&self) -> Vec<(&str, &str)> {
        self.renderer
            .store()
            .scenes()
            .iter()
            .map(|s| (s.key.as_str(), s.label.as_str()))
            .collect()
    }

    /// Switches scenes. Any selection is dismissed since its index belongs to the old scene.
    pub fn select_scene(&mut self, key: &str) -> Result<(), Error> {
        let scene = self.renderer.store().scene(key)?;
        if scene.key != self.active_scene {
            debug!("switching scene '{}' -> '{}'", self.active_scene, scene.key);
            self.active_scene = scene.key.clone();
            self.selection.dismiss();
        }
        Ok(())
    }

    pub fn dispatch(&mut self, event: SelectionEvent) -> Result<&SelectionState, Error> {
        let features = &self.renderer.store().scene_or_default(&self.active_scene).features;
        self.selection.handle(features, event)
    }

    pub fn selection(&self) -> &SelectionState {
        self.selection.state()
    }

    pub fn popup(&self) -> Option<InfoPopup> {
        self.selection.popup(&self.active_scene().features)
    }

    pub fn render<S: RenderSurface + ?Sized>(
        &self,
        surface: &mut S,
    ) -> Result<Option<RenderSummary>, Error> {
        if surface.status() == SurfaceStatus::Ready {
            surface.configure(&self.config);
        }
        self.renderer.render(&self.active_scene, surface)
    }
}
