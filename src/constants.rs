// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Useful constants.
 */

use crate::field::FieldType;

/// Speed of light in vacuum \[metres per second\].
pub const VEL_C: f64 = 299_792_458.0;

/// The field type a [`FieldBuilder`](crate::FieldBuilder) uses unless told
/// otherwise.
pub const DEFAULT_FIELD_TYPE: FieldType = FieldType::FarField;

/// Flat field dumps encode an unset frequency with this value.
pub(crate) const UNSET_FREQUENCY_SENTINEL: f64 = -1.0;

/// Upper bound of the polar angle in an equally-spaced sphere \[degrees\].
pub(crate) const THETA_MAX_DEG: i32 = 180;

/// Bound of the azimuth in an equally-spaced sphere; phi runs from the
/// negative of this to this, both inclusive \[degrees\].
pub(crate) const PHI_MAX_DEG: i32 = 180;

/// The environment variable consulted by
/// [`Field::load_json_from_env`](crate::Field::load_json_from_env).
pub const FIELD_FILE_ENV_VAR: &str = "FIELD_FILE";
