// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Sampled electric fields and the algebra used to combine them.

mod error;
mod ffi;
mod json;

pub use error::{FieldError, FieldIoError};

use std::collections::BTreeMap;

use num_complex::Complex64 as c64;
use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

use crate::{
    constants::{DEFAULT_FIELD_TYPE, UNSET_FREQUENCY_SENTINEL},
    theta_phi::{SphericalCoord, ThetaPhi},
};

/// Is a field tabulated close to the radiator, or far from it? See
/// [`fraunhofer_distance`](crate::fraunhofer_distance) for where the boundary
/// lies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldType {
    #[serde(rename = "NEARFIELD")]
    NearField,

    #[serde(rename = "FARFIELD")]
    FarField,
}

impl FieldType {
    /// The name used for this field type in field files.
    pub fn name(self) -> &'static str {
        match self {
            FieldType::NearField => "NEARFIELD",
            FieldType::FarField => "FARFIELD",
        }
    }
}

impl std::fmt::Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for FieldType {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [FieldType::NearField, FieldType::FarField]
            .into_iter()
            .find(|t| t.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| FieldError::UnknownFieldType(s.to_string()))
    }
}

/// The components (polarisations) an electric field can be decomposed into.
///
/// The declaration order here is the order electric fields are iterated over
/// in a [`Field`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ElectricField {
    /// Relative gain; a scalar pattern without polarisation information.
    #[serde(rename = "relative_gain", alias = "RELATIVE_GAIN")]
    RelativeGain,

    #[serde(rename = "theta", alias = "THETA")]
    Theta,

    #[serde(rename = "phi", alias = "PHI")]
    Phi,

    /// Linear polarisation at +45 degrees.
    #[serde(rename = "plus45", alias = "PLUS45")]
    Plus45,

    /// Linear polarisation at -45 degrees.
    #[serde(rename = "minus45", alias = "MINUS45")]
    Minus45,

    /// Ludwig-3 vertical polarisation.
    #[serde(rename = "ludwig3V", alias = "LUDWIG3V")]
    Ludwig3V,

    /// Ludwig-3 horizontal polarisation.
    #[serde(rename = "ludwig3H", alias = "LUDWIG3H")]
    Ludwig3H,
}

impl ElectricField {
    /// Every electric field, in declaration order. The C and Python
    /// interfaces refer to electric fields by their index in this array.
    pub const ALL: [ElectricField; 7] = [
        ElectricField::RelativeGain,
        ElectricField::Theta,
        ElectricField::Phi,
        ElectricField::Plus45,
        ElectricField::Minus45,
        ElectricField::Ludwig3V,
        ElectricField::Ludwig3H,
    ];

    /// The stable identifier of this electric field, as used in field files.
    pub fn name(self) -> &'static str {
        match self {
            ElectricField::RelativeGain => "relative_gain",
            ElectricField::Theta => "theta",
            ElectricField::Phi => "phi",
            ElectricField::Plus45 => "plus45",
            ElectricField::Minus45 => "minus45",
            ElectricField::Ludwig3V => "ludwig3V",
            ElectricField::Ludwig3H => "ludwig3H",
        }
    }
}

impl std::fmt::Display for ElectricField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for ElectricField {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ElectricField::ALL
            .into_iter()
            .find(|pol| pol.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| FieldError::UnknownElectricField(s.to_string()))
    }
}

/// Complex electric-field values tabulated over a list of directions.
///
/// Every electric field held has exactly one value per angle, and value `i`
/// belongs to angle `i`. A [`Field`] can't be changed after it's built;
/// combining fields always makes a new one.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    /// `None` if no field type was given. Such a field can only be
    /// multiplied with another field without a field type.
    field_type: Option<FieldType>,

    angles: Vec<ThetaPhi>,

    components: BTreeMap<ElectricField, Vec<c64>>,

    /// \[Hz\]. `None` if unset.
    frequency: Option<f64>,
}

impl Field {
    /// Start building a new [`Field`].
    ///
    /// # Examples
    ///
    /// ```
    /// use antenna_field::{ElectricField, Field, FieldType, ThetaPhi};
    /// use num_complex::Complex64;
    ///
    /// let field = Field::builder()
    ///     .field_type(FieldType::FarField)
    ///     .frequency(28e9)
    ///     .angles([ThetaPhi::from_degrees(90.0, 0.0)])
    ///     .electric_field(ElectricField::RelativeGain, [Complex64::new(1.0, 0.0)])
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(field.num_angles(), 1);
    /// assert_eq!(field.frequency(), Some(28e9));
    /// ```
    pub fn builder() -> FieldBuilder {
        FieldBuilder::default()
    }

    /// Multiply this field by another, electric field by electric field and
    /// angle by angle.
    ///
    /// Both fields must have the same angles (in the same order), the same
    /// electric fields and the same field type; two fields without a field
    /// type may be multiplied. The result keeps this field's
    /// angles and field type. The frequency is kept only if both fields have
    /// the same one; otherwise the result has no frequency.
    ///
    /// # Examples
    ///
    /// ```
    /// use antenna_field::{equally_spaced_sphere, ElectricField, Field};
    /// use num_complex::Complex64;
    ///
    /// let angles = equally_spaced_sphere(45).unwrap();
    /// let n = angles.len();
    /// let element = Field::builder()
    ///     .angles(angles.clone())
    ///     .electric_field(ElectricField::RelativeGain, vec![Complex64::new(2.0, 0.0); n])
    ///     .build()
    ///     .unwrap();
    /// let array_factor = Field::builder()
    ///     .angles(angles)
    ///     .electric_field(ElectricField::RelativeGain, vec![Complex64::new(0.0, 1.0); n])
    ///     .build()
    ///     .unwrap();
    /// let total = element.multiply(&array_factor).unwrap();
    /// let values = total.electric_field(ElectricField::RelativeGain).unwrap();
    /// assert_eq!(values[0], Complex64::new(0.0, 2.0));
    /// ```
    pub fn multiply(&self, other: &Field) -> Result<Field, FieldError> {
        if self.angles.len() != other.angles.len() {
            return Err(FieldError::AngleMismatch {
                ours: self.angles.len(),
                theirs: other.angles.len(),
            });
        }
        if let Some((index, (&ours, &theirs))) = self
            .angles
            .iter()
            .zip(other.angles.iter())
            .enumerate()
            .find(|(_, (a, b))| a != b)
        {
            return Err(FieldError::AngleValueMismatch {
                index,
                ours,
                theirs,
            });
        }
        if !self.components.keys().eq(other.components.keys()) {
            return Err(FieldError::PolarizationSetMismatch {
                ours: self.available_electric_fields().collect(),
                theirs: other.available_electric_fields().collect(),
            });
        }
        // A missing field type is unequal to any concrete one.
        if self.field_type != other.field_type {
            return Err(FieldError::FieldTypeMismatch {
                ours: self.field_type,
                theirs: other.field_type,
            });
        }

        let frequency = match (self.frequency, other.frequency) {
            (Some(ours), Some(theirs)) if ours == theirs => Some(ours),
            (Some(ours), Some(theirs)) => {
                warn!(
                    ours,
                    theirs,
                    "multiplying fields with different frequencies; the result has no frequency"
                );
                None
            }
            _ => None,
        };
        trace!(
            num_angles = self.angles.len(),
            num_electric_fields = self.components.len(),
            "multiplying fields"
        );

        // The key sets are equal, and the maps are ordered, so the values can
        // be paired up directly.
        let components: BTreeMap<ElectricField, Vec<c64>> = self
            .components
            .iter()
            .zip(other.components.values())
            .map(|((&pol, ours), theirs)| {
                let product: Vec<c64> = ours.iter().zip(theirs.iter()).map(|(a, b)| a * b).collect();
                (pol, product)
            })
            .collect();

        Ok(Field {
            field_type: self.field_type,
            angles: self.angles.clone(),
            components,
            frequency,
        })
    }

    /// The field type, if one was given.
    pub fn field_type(&self) -> Option<FieldType> {
        self.field_type
    }

    /// The directions this field is tabulated over. Each corresponds to the
    /// value with the same index from [`Field::electric_field`].
    pub fn angles(&self) -> &[ThetaPhi] {
        &self.angles
    }

    pub fn num_angles(&self) -> usize {
        self.angles.len()
    }

    /// The values of an electric field, or `None` if this field doesn't have
    /// it. Each value corresponds to the angle with the same index from
    /// [`Field::angles`].
    pub fn electric_field(&self, pol: ElectricField) -> Option<&[c64]> {
        self.components.get(&pol).map(|v| v.as_slice())
    }

    /// The electric fields this field has, in [`ElectricField`] declaration
    /// order.
    pub fn available_electric_fields(&self) -> impl Iterator<Item = ElectricField> + '_ {
        self.components.keys().copied()
    }

    /// The frequency \[Hz\], if one was given.
    pub fn frequency(&self) -> Option<f64> {
        self.frequency
    }
}

/// Accumulates the parts of a [`Field`]. Get one with [`Field::builder`].
///
/// Unless told otherwise, the field is a far field without a frequency, and
/// has no angles and no electric fields.
#[derive(Debug, Clone)]
pub struct FieldBuilder {
    field_type: Option<FieldType>,
    frequency: Option<f64>,
    angles: Vec<ThetaPhi>,
    components: BTreeMap<ElectricField, Vec<c64>>,
}

impl Default for FieldBuilder {
    fn default() -> Self {
        FieldBuilder {
            field_type: Some(DEFAULT_FIELD_TYPE),
            frequency: None,
            angles: vec![],
            components: BTreeMap::new(),
        }
    }
}

impl FieldBuilder {
    pub fn field_type(mut self, field_type: FieldType) -> Self {
        self.field_type = Some(field_type);
        self
    }

    /// Build a field without a field type. Such a field can only be
    /// multiplied with another field without a field type.
    pub fn no_field_type(mut self) -> Self {
        self.field_type = None;
        self
    }

    /// Set the frequency \[Hz\]. -1 is the value field files use for "no
    /// frequency", so it leaves the frequency unset.
    pub fn frequency(mut self, freq_hz: f64) -> Self {
        self.frequency = if freq_hz == UNSET_FREQUENCY_SENTINEL {
            None
        } else {
            Some(freq_hz)
        };
        self
    }

    /// Set the directions the field is tabulated over. Anything implementing
    /// [`SphericalCoord`] can be used, e.g. [`ThetaPhi`]s or (theta, phi)
    /// tuples in radians.
    pub fn angles<C, I>(mut self, angles: I) -> Self
    where
        C: SphericalCoord,
        I: IntoIterator<Item = C>,
    {
        self.angles = angles.into_iter().map(|a| a.to_theta_phi()).collect();
        self
    }

    /// Add the values of an electric field. Adding the same electric field
    /// again replaces the earlier values.
    pub fn electric_field<I>(mut self, pol: ElectricField, values: I) -> Self
    where
        I: IntoIterator<Item = c64>,
    {
        self.components.insert(pol, values.into_iter().collect());
        self
    }

    /// Build the [`Field`]. This fails if any electric field doesn't have
    /// exactly one value per angle.
    pub fn build(self) -> Result<Field, FieldError> {
        let expected = self.angles.len();
        if let Some((&pol, values)) = self.components.iter().find(|(_, v)| v.len() != expected) {
            return Err(FieldError::ComponentLengthMismatch {
                pol,
                got: values.len(),
                expected,
            });
        }

        Ok(Field {
            field_type: self.field_type,
            angles: self.angles,
            components: self.components,
            frequency: self.frequency,
        })
    }
}
