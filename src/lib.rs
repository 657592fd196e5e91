// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Antenna radiation patterns: complex electric fields tabulated over directions
on a sphere, and the small amount of physics needed to work with them.
 */

pub mod constants;
pub mod element;
pub mod errors;
pub mod field;
mod ffi;
pub mod theta_phi;
pub mod util;

#[cfg(feature = "python")]
mod python;

pub use constants::{DEFAULT_FIELD_TYPE, FIELD_FILE_ENV_VAR, VEL_C};
pub use element::{Element, WeightableElement};
pub use errors::*;
pub use field::{ElectricField, Field, FieldBuilder, FieldType};
pub use theta_phi::{equally_spaced_sphere, SphericalCoord, ThetaPhi};
pub use util::{fraunhofer_distance, is_far_field, is_near_field, wavelength, wavelength_with_speed};

// Re-exports.
pub use num_complex;
