// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Wavelengths and the boundary between the near and far fields.

use crate::constants::VEL_C;

/// The wavelength \[metres\] of radiation at `freq_hz` in vacuum.
pub fn wavelength(freq_hz: f64) -> f64 {
    wavelength_with_speed(freq_hz, VEL_C)
}

/// The wavelength \[metres\] of radiation at `freq_hz`, travelling at
/// `speed_of_light` \[metres per second\].
pub fn wavelength_with_speed(freq_hz: f64, speed_of_light: f64) -> f64 {
    speed_of_light / freq_hz
}

/// The Fraunhofer distance \[metres\]; the boundary between the near and far
/// fields of a radiator. `largest_dimension` is the largest dimension of the
/// radiator (usually its diameter) in the same units as `wavelength`.
pub fn fraunhofer_distance(wavelength: f64, largest_dimension: f64) -> f64 {
    2.0 * largest_dimension.powi(2) / wavelength
}

/// Is `distance` within the near field of a radiator? The Fraunhofer distance
/// itself counts as near field.
pub fn is_near_field(wavelength: f64, largest_dimension: f64, distance: f64) -> bool {
    distance <= fraunhofer_distance(wavelength, largest_dimension)
}

/// Is `distance` within the far field of a radiator? The Fraunhofer distance
/// itself counts as far field, too.
pub fn is_far_field(wavelength: f64, largest_dimension: f64, distance: f64) -> bool {
    distance >= fraunhofer_distance(wavelength, largest_dimension)
}
