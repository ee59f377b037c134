// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Roadnet Signals: operator-side state for remotely commanded traffic lights.
//!
//! Status messages ([`TrafficLights`]) report which lamps of each light are
//! lit. A [`LightPanel`] keeps one [`TrafficLight`] per id it has seen; the
//! operator picks at most one lamp per light, and [`LightPanel::submit`]
//! packs every pick into a single command message and clears the picks.
//!
//! Lamp bytes use the same encoding in both directions: red `1`, yellow `2`,
//! green `4` (see [`LitMask`]).
//!
//! ```rust
//! use roadnet_signals::{Light, LightPanel, TrafficLights};
//!
//! let mut panel = LightPanel::new();
//! let status = TrafficLights { num: 2, ids: vec![5, 6], lights: vec![1, 4] };
//! panel.apply_status(&status).unwrap();
//!
//! panel.select(6, Light::Yellow).unwrap();
//! let command = panel.submit();
//! assert_eq!(command.ids, [5, 6]);
//! assert_eq!(command.lights, [0, 2]);
//! ```
//!
//! # Features
//!
//! - `std` (default): build against the standard library.
//! - `serde` (default): `TrafficLights` (de)serialization and the
//!   [`PluginMessage`] envelope.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod light;
mod message;
mod panel;

pub use light::{Light, LitMask, TrafficLight};
#[cfg(feature = "serde")]
pub use message::PluginMessage;
pub use message::{PLUGIN_MESSAGE_TYPE, PLUGIN_NAME, TrafficLights};
pub use panel::LightPanel;

/// Errors from traffic light messages and panel requests.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SignalError {
    /// `num`, `ids` and `lights` disagree on the number of lights.
    #[error("message lists {num} lights but has {ids} ids and {lights} lamp bytes")]
    LengthMismatch {
        /// Declared light count.
        num: u32,
        /// Length of `ids`.
        ids: usize,
        /// Length of `lights`.
        lights: usize,
    },
    /// No light with this id is on the panel.
    #[error("no traffic light with id {0}")]
    UnknownLight(u32),
}
