// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Reading and writing fields as flat JSON documents.

use std::{
    collections::BTreeMap,
    fs::File,
    io::{BufReader, BufWriter, Write},
    path::Path,
};

use num_complex::Complex64 as c64;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{ElectricField, Field, FieldIoError, FieldType};
use crate::{
    constants::{FIELD_FILE_ENV_VAR, UNSET_FREQUENCY_SENTINEL},
    theta_phi::ThetaPhi,
};

/// The on-disk layout of a [`Field`].
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FieldDocument {
    field_type: Option<FieldType>,
    theta_phi_list: Vec<StoredThetaPhi>,
    electric_field_map: BTreeMap<ElectricField, Vec<StoredComplex>>,
    /// An unset frequency is written as -1. A missing value is unset, too.
    #[serde(default = "unset_frequency")]
    frequency: f64,
}

fn unset_frequency() -> f64 {
    UNSET_FREQUENCY_SENTINEL
}

/// Angles are stored in radians.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct StoredThetaPhi {
    theta: f64,
    phi: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct StoredComplex {
    re: f64,
    im: f64,
}

impl FieldDocument {
    fn from_field(field: &Field) -> FieldDocument {
        FieldDocument {
            field_type: field.field_type,
            theta_phi_list: field
                .angles
                .iter()
                .map(|a| StoredThetaPhi {
                    theta: a.theta(),
                    phi: a.phi(),
                })
                .collect(),
            electric_field_map: field
                .components
                .iter()
                .map(|(&pol, values)| {
                    let stored: Vec<StoredComplex> = values
                        .iter()
                        .map(|c| StoredComplex { re: c.re, im: c.im })
                        .collect();
                    (pol, stored)
                })
                .collect(),
            frequency: field.frequency.unwrap_or(UNSET_FREQUENCY_SENTINEL),
        }
    }

    /// Convert the document back into a [`Field`]. This performs the same
    /// validation as [`FieldBuilder::build`](super::FieldBuilder::build).
    fn into_field(self) -> Result<Field, FieldIoError> {
        let mut builder = Field::builder().angles(
            self.theta_phi_list
                .into_iter()
                .map(|a| ThetaPhi::from_radians(a.theta, a.phi)),
        );
        builder = match self.field_type {
            Some(field_type) => builder.field_type(field_type),
            None => builder.no_field_type(),
        };
        // The builder treats the sentinel as unset.
        builder = builder.frequency(self.frequency);
        for (pol, values) in self.electric_field_map {
            let values = values.into_iter().map(|c| c64::new(c.re, c.im));
            builder = builder.electric_field(pol, values);
        }
        Ok(builder.build()?)
    }
}

impl Field {
    /// Convert this field into its JSON document form.
    pub fn to_json(&self) -> Result<serde_json::Value, FieldIoError> {
        Ok(serde_json::to_value(FieldDocument::from_field(self))?)
    }

    /// Convert this field into a JSON string.
    pub fn to_json_string(&self) -> Result<String, FieldIoError> {
        Ok(serde_json::to_string(&FieldDocument::from_field(self))?)
    }

    /// Read a field from a JSON string, as produced by
    /// [`Field::to_json_string`].
    pub fn from_json_str(json: &str) -> Result<Field, FieldIoError> {
        let doc: FieldDocument = serde_json::from_str(json)?;
        doc.into_field()
    }

    /// Save this field to a JSON file, replacing the file if it exists.
    ///
    /// Non-finite values can't be represented in JSON; they are written as
    /// `null` and such a file can't be loaded again.
    pub fn save_json<P: AsRef<Path>>(&self, file: P) -> Result<(), FieldIoError> {
        let file = file.as_ref();
        let mut writer = BufWriter::new(File::create(file)?);
        serde_json::to_writer(&mut writer, &FieldDocument::from_field(self))?;
        // Dropping a BufWriter swallows errors.
        writer.flush()?;
        debug!(
            path = %file.display(),
            num_angles = self.angles.len(),
            num_electric_fields = self.components.len(),
            "saved field"
        );
        Ok(())
    }

    /// Load a field from a JSON file written by [`Field::save_json`].
    pub fn load_json<P: AsRef<Path>>(file: P) -> Result<Field, FieldIoError> {
        let file = file.as_ref();
        // If the file doesn't exist, File::open will handle it, but the error
        // message doesn't say which file.
        if !file.exists() {
            return Err(FieldIoError::FieldFileDoesntExist(
                file.display().to_string(),
            ));
        }
        let reader = BufReader::new(File::open(file)?);
        let doc: FieldDocument = serde_json::from_reader(reader)?;
        let field = doc.into_field()?;
        debug!(
            path = %file.display(),
            num_angles = field.angles.len(),
            num_electric_fields = field.components.len(),
            "loaded field"
        );
        Ok(field)
    }

    /// Load a field from the file named by the `FIELD_FILE` environment
    /// variable.
    pub fn load_json_from_env() -> Result<Field, FieldIoError> {
        match std::env::var(FIELD_FILE_ENV_VAR) {
            Ok(f) => Field::load_json(f),
            Err(e) => Err(FieldIoError::FieldFileVarError(e)),
        }
    }
}
