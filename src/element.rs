// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Antenna-array elements.

use num_complex::Complex64 as c64;

use crate::util::wavelength;

/// A single radiating element of an array.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Element {
    /// (x, y, z) \[wavelengths\].
    location: [f64; 3],

    /// The frequency the element was designed for \[Hz\]. This determines the
    /// physical spacing of elements.
    design_freq_hz: f64,
}

impl Element {
    pub fn new(location: [f64; 3], design_freq_hz: f64) -> Element {
        Element {
            location,
            design_freq_hz,
        }
    }

    /// The location of this element \[wavelengths\].
    pub fn location(&self) -> [f64; 3] {
        self.location
    }

    pub fn design_freq_hz(&self) -> f64 {
        self.design_freq_hz
    }

    /// The location of this element \[metres\], using the wavelength at the
    /// design frequency.
    pub fn location_metres(&self) -> [f64; 3] {
        let lambda = wavelength(self.design_freq_hz);
        self.location.map(|l| l * lambda)
    }
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [x, y, z] = self.location;
        write!(f, "({x}, {y}, {z})")
    }
}

/// An [`Element`] with a complex weight applied to it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightableElement {
    element: Element,
    weight: c64,
}

impl WeightableElement {
    pub fn new(location: [f64; 3], design_freq_hz: f64, weight: c64) -> WeightableElement {
        WeightableElement {
            element: Element::new(location, design_freq_hz),
            weight,
        }
    }

    pub fn element(&self) -> &Element {
        &self.element
    }

    pub fn location(&self) -> [f64; 3] {
        self.element.location
    }

    pub fn design_freq_hz(&self) -> f64 {
        self.element.design_freq_hz
    }

    pub fn weight(&self) -> c64 {
        self.weight
    }
}

impl std::fmt::Display for WeightableElement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} using weight: {}", self.element, self.weight)
    }
}
