// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Python interface to antenna_field via pyo3.
 */

use std::{collections::HashMap, path::PathBuf};

use num_complex::Complex64 as c64;
use numpy::PyArray1;
use pyo3::create_exception;
use pyo3::exceptions::{PyException, PyValueError};
use pyo3::prelude::*;

use crate::{
    field::{ElectricField, Field as FieldRust, FieldError, FieldIoError, FieldType},
    theta_phi::GridError,
    util,
};

// Add a python exception for antenna_field.
create_exception!(antenna_field, AntennaFieldError, PyException);
impl std::convert::From<FieldError> for PyErr {
    fn from(err: FieldError) -> PyErr {
        AntennaFieldError::new_err(err.to_string())
    }
}
impl std::convert::From<FieldIoError> for PyErr {
    fn from(err: FieldIoError) -> PyErr {
        AntennaFieldError::new_err(err.to_string())
    }
}
impl std::convert::From<GridError> for PyErr {
    fn from(err: GridError) -> PyErr {
        AntennaFieldError::new_err(err.to_string())
    }
}

/// Complex electric fields tabulated over a list of (theta, phi) directions.
#[pyclass(name = "Field")]
struct PyField {
    field: FieldRust,
}

#[pymethods]
impl PyField {
    /// Create a new `Field`. `electric_fields` maps electric-field names (e.g.
    /// "theta", "phi") to one complex value per angle. `field_type` is
    /// "FARFIELD", "NEARFIELD" or None.
    #[new]
    #[pyo3(signature = (theta_rad, phi_rad, electric_fields, field_type = Some("FARFIELD".to_string()), frequency = None))]
    fn new(
        theta_rad: Vec<f64>,
        phi_rad: Vec<f64>,
        electric_fields: HashMap<String, Vec<c64>>,
        field_type: Option<String>,
        frequency: Option<f64>,
    ) -> PyResult<Self> {
        if theta_rad.len() != phi_rad.len() {
            return Err(PyValueError::new_err(format!(
                "theta_rad has {} values but phi_rad has {}",
                theta_rad.len(),
                phi_rad.len()
            )));
        }

        let mut builder = FieldRust::builder().angles(theta_rad.into_iter().zip(phi_rad));
        builder = match field_type {
            Some(t) => builder.field_type(t.parse::<FieldType>()?),
            None => builder.no_field_type(),
        };
        if let Some(f) = frequency {
            builder = builder.frequency(f);
        }
        for (name, values) in electric_fields {
            builder = builder.electric_field(name.parse::<ElectricField>()?, values);
        }
        Ok(PyField {
            field: builder.build()?,
        })
    }

    /// Load a field from a JSON file. If the path isn't given, then the
    /// FIELD_FILE environment variable is used.
    #[staticmethod]
    #[pyo3(signature = (json_file = None))]
    fn load_json(json_file: Option<PathBuf>) -> PyResult<Self> {
        let field = match json_file {
            Some(f) => FieldRust::load_json(f)?,
            None => FieldRust::load_json_from_env()?,
        };
        Ok(PyField { field })
    }

    /// Save this field to a JSON file.
    fn save_json(&self, json_file: PathBuf) -> PyResult<()> {
        self.field.save_json(json_file)?;
        Ok(())
    }

    /// Multiply this field by another, electric field by electric field and
    /// angle by angle.
    fn multiply(&self, other: &PyField) -> PyResult<PyField> {
        Ok(PyField {
            field: self.field.multiply(&other.field)?,
        })
    }

    fn num_angles(&self) -> usize {
        self.field.num_angles()
    }

    /// The frequency [Hz], or None.
    fn frequency(&self) -> Option<f64> {
        self.field.frequency()
    }

    fn field_type(&self) -> Option<&'static str> {
        self.field.field_type().map(|t| t.name())
    }

    /// The names of the electric fields this field has.
    fn electric_fields(&self) -> Vec<&'static str> {
        self.field
            .available_electric_fields()
            .map(|pol| pol.name())
            .collect()
    }

    /// The values of an electric field, one per angle.
    fn electric_field<'py>(
        &self,
        py: Python<'py>,
        name: &str,
    ) -> PyResult<Bound<'py, PyArray1<c64>>> {
        let pol = name.parse::<ElectricField>()?;
        match self.field.electric_field(pol) {
            Some(values) => Ok(PyArray1::from_slice_bound(py, values)),
            None => Err(AntennaFieldError::new_err(format!(
                "This field doesn't have the '{pol}' electric field"
            ))),
        }
    }

    /// The angles of this field as two arrays, (theta, phi) [radians].
    fn angles<'py>(
        &self,
        py: Python<'py>,
    ) -> (Bound<'py, PyArray1<f64>>, Bound<'py, PyArray1<f64>>) {
        angle_arrays(py, self.field.angles())
    }

    fn __repr__(&self) -> String {
        format!(
            "Field(field_type={:?}, num_angles={}, electric_fields={:?}, frequency={:?})",
            self.field_type(),
            self.num_angles(),
            self.electric_fields(),
            self.frequency()
        )
    }
}

fn angle_arrays<'py>(
    py: Python<'py>,
    angles: &[crate::ThetaPhi],
) -> (Bound<'py, PyArray1<f64>>, Bound<'py, PyArray1<f64>>) {
    let theta = angles.iter().map(|a| a.theta()).collect::<Vec<f64>>();
    let phi = angles.iter().map(|a| a.phi()).collect::<Vec<f64>>();
    (
        PyArray1::from_vec_bound(py, theta),
        PyArray1::from_vec_bound(py, phi),
    )
}

/// Generate the angles of an equally-spaced sphere with `spacing` degrees
/// between points. Returns (theta, phi) arrays [radians].
#[pyfunction]
#[pyo3(name = "equally_spaced_sphere")]
fn py_equally_spaced_sphere(
    py: Python<'_>,
    spacing: i32,
) -> PyResult<(Bound<'_, PyArray1<f64>>, Bound<'_, PyArray1<f64>>)> {
    let angles = crate::theta_phi::equally_spaced_sphere(spacing)?;
    Ok(angle_arrays(py, &angles))
}

/// The wavelength [metres] of radiation at `freq_hz` in vacuum.
#[pyfunction]
fn wavelength(freq_hz: f64) -> f64 {
    util::wavelength(freq_hz)
}

/// The Fraunhofer distance [metres].
#[pyfunction]
fn fraunhofer_distance(wavelength: f64, largest_dimension: f64) -> f64 {
    util::fraunhofer_distance(wavelength, largest_dimension)
}

#[pyfunction]
fn is_near_field(wavelength: f64, largest_dimension: f64, distance: f64) -> bool {
    util::is_near_field(wavelength, largest_dimension, distance)
}

#[pyfunction]
fn is_far_field(wavelength: f64, largest_dimension: f64, distance: f64) -> bool {
    util::is_far_field(wavelength, largest_dimension, distance)
}

/// A Python module interfacing with the antenna_field code written in Rust.
/// This module depends on and will import numpy.
#[pymodule]
fn antenna_field(m: &Bound<'_, PyModule>) -> PyResult<()> {
    let py = m.py();
    py.import_bound("numpy")?;
    m.add_class::<PyField>()?;
    m.add("AntennaFieldError", py.get_type_bound::<AntennaFieldError>())?;
    m.add_function(wrap_pyfunction!(py_equally_spaced_sphere, m)?)?;
    m.add_function(wrap_pyfunction!(wavelength, m)?)?;
    m.add_function(wrap_pyfunction!(fraunhofer_distance, m)?)?;
    m.add_function(wrap_pyfunction!(is_near_field, m)?)?;
    m.add_function(wrap_pyfunction!(is_far_field, m)?)?;

    Ok(())
}
