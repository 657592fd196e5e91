// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Errors associated with fields.

use thiserror::Error;

use super::{ElectricField, FieldType};
use crate::theta_phi::ThetaPhi;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FieldError {
    #[error("Fields need to have the same angles (this field has {ours} angles, the other has {theirs})")]
    AngleMismatch { ours: usize, theirs: usize },

    /// Both fields have the same number of angles, but `index` is the first
    /// one that differs.
    #[error("Fields need to have the same angles (angle {index} is {ours} degrees in this field, but {theirs} degrees in the other)")]
    AngleValueMismatch {
        index: usize,
        ours: ThetaPhi,
        theirs: ThetaPhi,
    },

    #[error("Fields need to have the same electric fields (this field has {ours:?}, the other has {theirs:?})")]
    PolarizationSetMismatch {
        ours: Vec<ElectricField>,
        theirs: Vec<ElectricField>,
    },

    /// A missing field type only matches another missing field type.
    #[error("Fields need to have the same field type (this field is {ours:?}, the other is {theirs:?})")]
    FieldTypeMismatch {
        ours: Option<FieldType>,
        theirs: Option<FieldType>,
    },

    /// Each electric field needs exactly one value per angle.
    #[error("Electric field '{pol}' has {got} values, but there are {expected} angles")]
    ComponentLengthMismatch {
        pol: ElectricField,
        got: usize,
        expected: usize,
    },

    #[error("'{0}' is not a recognised field type")]
    UnknownFieldType(String),

    #[error("'{0}' is not a recognised electric field")]
    UnknownElectricField(String),
}

#[derive(Error, Debug)]
pub enum FieldIoError {
    #[error("Specified field file '{0}' doesn't exist")]
    FieldFileDoesntExist(String),

    /// An error associated with the FIELD_FILE environment variable.
    #[error("Problem with the FIELD_FILE variable: {0}")]
    FieldFileVarError(#[from] std::env::VarError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The document couldn't be (de)serialised.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The document was read, but doesn't describe a valid field.
    #[error(transparent)]
    Field(#[from] FieldError),
}
