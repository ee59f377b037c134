// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use crate::SignalError;
use crate::light::{Light, TrafficLight};
use crate::message::TrafficLights;

/// Operator panel: every light seen so far, in order of first appearance.
///
/// Status messages add and update lights; [`LightPanel::submit`] turns the
/// operator's selections into one command.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LightPanel {
    lights: Vec<TrafficLight>,
}

impl LightPanel {
    /// Creates an empty panel.
    #[must_use]
    pub const fn new() -> Self {
        Self { lights: Vec::new() }
    }

    /// Lights in display order.
    #[must_use]
    pub fn lights(&self) -> &[TrafficLight] {
        &self.lights
    }

    /// Number of lights on the panel.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lights.len()
    }

    /// Returns `true` if no light has been seen yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lights.is_empty()
    }

    /// Looks up a light by id.
    #[must_use]
    pub fn get(&self, id: u32) -> Option<&TrafficLight> {
        self.lights.iter().find(|l| l.id == id)
    }

    /// Toggles `light` on the light with `id`; see [`TrafficLight::select`].
    pub fn select(&mut self, id: u32, light: Light) -> Result<(), SignalError> {
        let entry = self
            .lights
            .iter_mut()
            .find(|l| l.id == id)
            .ok_or(SignalError::UnknownLight(id))?;
        entry.select(light);
        Ok(())
    }

    /// Applies a status message.
    ///
    /// Lights with unseen ids are appended. Every listed light gets its lit
    /// lamps replaced; lights not listed are left alone. Returns the number
    /// of lights created. A message whose counts disagree is rejected
    /// without changing the panel.
    pub fn apply_status(&mut self, status: &TrafficLights) -> Result<usize, SignalError> {
        status.validate()?;
        let mut created = 0;
        for (id, bits) in status.entries() {
            let idx = match self.lights.iter().position(|l| l.id == id) {
                Some(idx) => idx,
                None => {
                    self.lights.push(TrafficLight::new(id));
                    created += 1;
                    self.lights.len() - 1
                }
            };
            self.lights[idx].set_lit(bits);
        }
        if created != 0 {
            tracing::debug!(created, total = self.lights.len(), "new traffic lights");
        }
        Ok(created)
    }

    /// Builds a command from every light's selection and resets all
    /// selections to [`Light::Unset`].
    ///
    /// Every light is listed, including those with nothing selected.
    pub fn submit(&mut self) -> TrafficLights {
        let mut ids = Vec::with_capacity(self.lights.len());
        let mut lights = Vec::with_capacity(self.lights.len());
        for light in &mut self.lights {
            ids.push(light.id);
            lights.push(light.take_selection().bits());
        }
        let num = u32::try_from(ids.len()).unwrap_or(u32::MAX);
        tracing::debug!(num, "submitting traffic light command");
        TrafficLights { num, ids, lights }
    }
}
