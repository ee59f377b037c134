// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use crate::SignalError;

/// Name of the backend plugin that publishes [`TrafficLights`] commands.
pub const PLUGIN_NAME: &str = "traffic_lights";

/// Socket message type for messages addressed to a backend plugin.
pub const PLUGIN_MESSAGE_TYPE: &str = "pm";

/// Status or command for a set of traffic lights.
///
/// `ids[i]` and `lights[i]` describe the same light. Each `lights` entry is a
/// [`crate::LitMask`] byte: on status messages the lamps that are lit, on
/// commands the lamp the operator selected (or `0`).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrafficLights {
    /// Number of lights described.
    pub num: u32,
    /// Light identifiers.
    #[cfg_attr(feature = "serde", serde(default))]
    pub ids: Vec<u32>,
    /// One lamp byte per light.
    #[cfg_attr(feature = "serde", serde(default))]
    pub lights: Vec<u8>,
}

impl TrafficLights {
    /// Checks that `num`, `ids` and `lights` agree on the light count.
    pub fn validate(&self) -> Result<(), SignalError> {
        let num = self.num as usize;
        if self.ids.len() != num || self.lights.len() != num {
            return Err(SignalError::LengthMismatch {
                num: self.num,
                ids: self.ids.len(),
                lights: self.lights.len(),
            });
        }
        Ok(())
    }

    /// Iterates `(id, lamp byte)` pairs.
    pub fn entries(&self) -> impl Iterator<Item = (u32, u8)> + '_ {
        self.ids.iter().copied().zip(self.lights.iter().copied())
    }

    /// Wraps this command in the socket envelope
    /// `["pm", {"name": "traffic_lights", "message": {...}}]`.
    #[cfg(feature = "serde")]
    #[must_use]
    pub fn to_plugin_message(&self) -> PluginMessage<'_> {
        PluginMessage {
            name: PLUGIN_NAME,
            message: self,
        }
    }
}

/// A [`TrafficLights`] command addressed to a backend plugin.
#[cfg(feature = "serde")]
#[derive(Clone, Copy, Debug)]
pub struct PluginMessage<'a> {
    /// Plugin name.
    pub name: &'a str,
    /// Payload.
    pub message: &'a TrafficLights,
}

#[cfg(feature = "serde")]
impl serde::Serialize for PluginMessage<'_> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(serde::Serialize)]
        struct Body<'a> {
            name: &'a str,
            message: &'a TrafficLights,
        }

        (
            PLUGIN_MESSAGE_TYPE,
            Body {
                name: self.name,
                message: self.message,
            },
        )
            .serialize(serializer)
    }
}
