// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Errors associated with all aspects of antenna_field.
 */

use thiserror::Error;

pub use crate::field::{FieldError, FieldIoError};
pub use crate::theta_phi::GridError;

/// Any error that this crate can produce. Each module has its own, more
/// specific error type; this one is convenient for callers that mix them.
#[derive(Error, Debug)]
pub enum AntennaError {
    #[error(transparent)]
    Grid(#[from] GridError),

    #[error(transparent)]
    Field(#[from] FieldError),

    #[error(transparent)]
    FieldIo(#[from] FieldIoError),
}
