// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A single traffic light: the operator's selection and the lamps reported lit.

bitflags::bitflags! {
    /// Lamps of one traffic light, in wire bit order.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct LitMask: u8 {
        /// Red lamp.
        const RED    = 0b001;
        /// Yellow lamp.
        const YELLOW = 0b010;
        /// Green lamp.
        const GREEN  = 0b100;
    }
}

/// The lamp an operator has picked for a light.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Light {
    /// Nothing picked.
    #[default]
    Unset,
    /// Red.
    Red,
    /// Yellow.
    Yellow,
    /// Green.
    Green,
}

impl Light {
    /// The lamps, top to bottom.
    pub const LAMPS: [Self; 3] = [Self::Red, Self::Yellow, Self::Green];

    /// Wire bits for this selection; `Unset` is `0`.
    #[must_use]
    pub const fn mask(self) -> LitMask {
        match self {
            Self::Unset => LitMask::empty(),
            Self::Red => LitMask::RED,
            Self::Yellow => LitMask::YELLOW,
            Self::Green => LitMask::GREEN,
        }
    }

    /// Wire byte for this selection.
    #[must_use]
    pub const fn bits(self) -> u8 {
        self.mask().bits()
    }
}

/// One traffic light as shown on the operator panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TrafficLight {
    /// Identifier assigned by the publisher.
    pub id: u32,
    /// Lamp the operator wants to command.
    pub selected: Light,
    /// Lamps the last status message reported as lit.
    pub lit: LitMask,
}

impl TrafficLight {
    /// Creates a light with nothing selected and nothing lit.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self {
            id,
            selected: Light::Unset,
            lit: LitMask::empty(),
        }
    }

    /// Toggles `light` as the selection.
    ///
    /// Picking a lamp replaces any other pick; picking the selected lamp
    /// again clears the selection.
    pub fn select(&mut self, light: Light) {
        self.selected = if self.selected == light {
            Light::Unset
        } else {
            light
        };
    }

    /// Updates the lit lamps from a status byte. Unknown bits are ignored.
    pub fn set_lit(&mut self, bits: u8) {
        self.lit = LitMask::from_bits_truncate(bits);
    }

    /// Returns `true` if `light` was reported lit.
    #[must_use]
    pub fn is_lit(&self, light: Light) -> bool {
        light != Light::Unset && self.lit.contains(light.mask())
    }

    /// Clears the selection, returning what was selected.
    pub fn take_selection(&mut self) -> Light {
        core::mem::take(&mut self.selected)
    }
}
