// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Code for allowing other languages to create, combine and persist fields.
//!
//! Electric fields are referred to by their index in [`ElectricField::ALL`]
//! and field types by 0 (near field), 1 (far field) or 2 (none). Complex
//! values are passed as interleaved (real, imaginary) doubles.

#[cfg(test)]
mod tests;

use std::{ffi::CStr, os::raw::c_char};

use num_complex::Complex64 as c64;

use super::{ElectricField, Field, FieldBuilder, FieldError, FieldType};
use crate::{
    constants::UNSET_FREQUENCY_SENTINEL,
    ffi::{c_slice, c_slice_mut, ffi_error},
};

fn field_type_from_code(code: u8) -> Result<Option<FieldType>, FieldError> {
    match code {
        0 => Ok(Some(FieldType::NearField)),
        1 => Ok(Some(FieldType::FarField)),
        2 => Ok(None),
        _ => Err(FieldError::UnknownFieldType(code.to_string())),
    }
}

fn electric_field_from_index(index: u8) -> Result<ElectricField, FieldError> {
    ElectricField::ALL
        .get(index as usize)
        .copied()
        .ok_or_else(|| FieldError::UnknownElectricField(index.to_string()))
}

/// Start building a new field.
///
/// # Arguments
///
/// * `field_type` - 0 for a near field, 1 for a far field, 2 for no field
///   type.
/// * `freq_hz` - the frequency of the field \[Hz\]. Use -1 if the field has no
///   frequency.
/// * `num_angles` - the number of angles the field is tabulated over.
/// * `theta_rad` - a pointer to an array of `num_angles` polar angles
///   \[radians\]. May be null if `num_angles` is 0.
/// * `phi_rad` - a pointer to an array of `num_angles` azimuths \[radians\].
///   May be null if `num_angles` is 0.
/// * `builder` - a double pointer to the `FieldBuilder` struct which is set by
///   this function. It is consumed by `field_builder_build`, or must be freed
///   by calling `free_field_builder`.
///
/// # Returns
///
/// * An exit code integer. If this is non-zero then an error occurred; the
///   details can be obtained by (1) getting the length of the error string by
///   calling `af_last_error_length` and (2) calling `af_last_error_message`
///   with a string buffer with a length at least equal to the error length.
///
#[no_mangle]
pub unsafe extern "C" fn new_field_builder(
    field_type: u8,
    freq_hz: f64,
    num_angles: u32,
    theta_rad: *const f64,
    phi_rad: *const f64,
    builder: *mut *mut FieldBuilder,
) -> i32 {
    let field_type = ffi_error!(field_type_from_code(field_type));
    let thetas = c_slice(theta_rad, num_angles as usize);
    let phis = c_slice(phi_rad, num_angles as usize);

    let mut b = Field::builder().angles(thetas.iter().zip(phis.iter()));
    b = match field_type {
        Some(t) => b.field_type(t),
        None => b.no_field_type(),
    };
    b = b.frequency(freq_hz);

    *builder = Box::into_raw(Box::new(b));
    0
}

/// Add the values of an electric field to a field under construction. Adding
/// the same electric field again replaces the earlier values.
///
/// # Arguments
///
/// * `builder` - the pointer to the `FieldBuilder` struct.
/// * `electric_field` - the index of the electric field: 0 relative gain, 1
///   theta, 2 phi, 3 +45, 4 -45, 5 Ludwig-3 vertical, 6 Ludwig-3 horizontal.
/// * `values` - a pointer to `2 * num_values` doubles; each pair is the real
///   and imaginary part of a value. May be null if `num_values` is 0.
/// * `num_values` - the number of complex values. This must match the number
///   of angles, but that is only checked by `field_builder_build`.
///
/// # Returns
///
/// * An exit code integer. If this is non-zero then an error occurred; the
///   details can be obtained by (1) getting the length of the error string by
///   calling `af_last_error_length` and (2) calling `af_last_error_message`
///   with a string buffer with a length at least equal to the error length.
///
#[no_mangle]
pub unsafe extern "C" fn field_builder_add_electric_field(
    builder: *mut FieldBuilder,
    electric_field: u8,
    values: *const f64,
    num_values: u32,
) -> i32 {
    let pol = ffi_error!(electric_field_from_index(electric_field));
    let values = c_slice(values, 2 * num_values as usize);
    let values = values.chunks_exact(2).map(|c| c64::new(c[0], c[1]));

    let builder = &mut *builder;
    let b = std::mem::take(builder);
    *builder = b.electric_field(pol, values);
    0
}

/// Finish building a field. The builder is always consumed, even if this
/// function fails; don't use or free it afterwards.
///
/// # Arguments
///
/// * `builder` - the pointer to the `FieldBuilder` struct.
/// * `field` - a double pointer to the `Field` struct which is set by this
///   function. This struct must be freed by calling `free_field`.
///
/// # Returns
///
/// * An exit code integer. If this is non-zero then an error occurred; the
///   details can be obtained by (1) getting the length of the error string by
///   calling `af_last_error_length` and (2) calling `af_last_error_message`
///   with a string buffer with a length at least equal to the error length.
///
#[no_mangle]
pub unsafe extern "C" fn field_builder_build(
    builder: *mut FieldBuilder,
    field: *mut *mut Field,
) -> i32 {
    let builder = Box::from_raw(builder);
    let f = ffi_error!(builder.build());
    *field = Box::into_raw(Box::new(f));
    0
}

/// Multiply two fields, electric field by electric field and angle by angle.
///
/// # Arguments
///
/// * `field` - the pointer to the first `Field` struct.
/// * `other` - the pointer to the second `Field` struct.
/// * `product` - a double pointer to the `Field` struct which is set by this
///   function. This struct must be freed by calling `free_field`.
///
/// # Returns
///
/// * An exit code integer. If this is non-zero then an error occurred; the
///   details can be obtained by (1) getting the length of the error string by
///   calling `af_last_error_length` and (2) calling `af_last_error_message`
///   with a string buffer with a length at least equal to the error length.
///
#[no_mangle]
pub unsafe extern "C" fn field_multiply(
    field: *const Field,
    other: *const Field,
    product: *mut *mut Field,
) -> i32 {
    let p = ffi_error!((*field).multiply(&*other));
    *product = Box::into_raw(Box::new(p));
    0
}

/// Get the number of angles a field is tabulated over.
#[no_mangle]
pub unsafe extern "C" fn field_num_angles(field: *const Field) -> u32 {
    (*field).num_angles() as u32
}

/// Get the frequency of a field \[Hz\]. -1 is returned if the field has no
/// frequency.
#[no_mangle]
pub unsafe extern "C" fn field_frequency(field: *const Field) -> f64 {
    (*field).frequency().unwrap_or(UNSET_FREQUENCY_SENTINEL)
}

/// Get the angles a field is tabulated over.
///
/// # Arguments
///
/// * `field` - the pointer to the `Field` struct.
/// * `theta_rad` - a pointer to a buffer of at least
///   `field_num_angles * sizeof(double)` bytes. The polar angles \[radians\]
///   are written here. May be null if the field has no angles.
/// * `phi_rad` - like `theta_rad`, but for the azimuths.
///
#[no_mangle]
pub unsafe extern "C" fn field_get_angles(
    field: *const Field,
    theta_rad: *mut f64,
    phi_rad: *mut f64,
) {
    let angles = (*field).angles();
    let thetas = c_slice_mut(theta_rad, angles.len());
    let phis = c_slice_mut(phi_rad, angles.len());
    for ((a, t), p) in angles.iter().zip(thetas).zip(phis) {
        *t = a.theta();
        *p = a.phi();
    }
}

/// Get the values of one of a field's electric fields.
///
/// # Arguments
///
/// * `field` - the pointer to the `Field` struct.
/// * `electric_field` - the index of the electric field (see
///   `field_builder_add_electric_field`).
/// * `values` - a pointer to a buffer of at least
///   `2 * field_num_angles * sizeof(double)` bytes. The real and imaginary
///   parts of each value are written here. May be null if the field has no
///   angles.
///
/// # Returns
///
/// * An exit code integer. If this is non-zero then an error occurred (e.g.
///   the field doesn't have the requested electric field); the details can be
///   obtained by (1) getting the length of the error string by calling
///   `af_last_error_length` and (2) calling `af_last_error_message` with a
///   string buffer with a length at least equal to the error length.
///
#[no_mangle]
pub unsafe extern "C" fn field_get_electric_field(
    field: *const Field,
    electric_field: u8,
    values: *mut f64,
) -> i32 {
    let pol = ffi_error!(electric_field_from_index(electric_field));
    let field = &*field;
    let src = ffi_error!(field
        .electric_field(pol)
        .ok_or_else(|| format!("This field doesn't have the '{pol}' electric field")));
    let dest = c_slice_mut(values, 2 * src.len());
    for (d, s) in dest.chunks_exact_mut(2).zip(src) {
        d[0] = s.re;
        d[1] = s.im;
    }
    0
}

/// Save a field to a JSON file.
///
/// # Arguments
///
/// * `field` - the pointer to the `Field` struct.
/// * `json_file` - the path to write to. An existing file is replaced.
///
/// # Returns
///
/// * An exit code integer. If this is non-zero then an error occurred; the
///   details can be obtained by (1) getting the length of the error string by
///   calling `af_last_error_length` and (2) calling `af_last_error_message`
///   with a string buffer with a length at least equal to the error length.
///
#[no_mangle]
pub unsafe extern "C" fn field_save_json(field: *const Field, json_file: *const c_char) -> i32 {
    let path = ffi_error!(CStr::from_ptr(json_file).to_str());
    ffi_error!((*field).save_json(path));
    0
}

/// Load a field from a JSON file.
///
/// # Arguments
///
/// * `json_file` - the path to the field file.
/// * `field` - a double pointer to the `Field` struct which is set by this
///   function. This struct must be freed by calling `free_field`.
///
/// # Returns
///
/// * An exit code integer. If this is non-zero then an error occurred; the
///   details can be obtained by (1) getting the length of the error string by
///   calling `af_last_error_length` and (2) calling `af_last_error_message`
///   with a string buffer with a length at least equal to the error length.
///
#[no_mangle]
pub unsafe extern "C" fn field_load_json(json_file: *const c_char, field: *mut *mut Field) -> i32 {
    let path = ffi_error!(CStr::from_ptr(json_file).to_str());
    let f = ffi_error!(Field::load_json(path));
    *field = Box::into_raw(Box::new(f));
    0
}

/// Load a field from the file named by the `FIELD_FILE` environment variable.
///
/// # Arguments
///
/// * `field` - a double pointer to the `Field` struct which is set by this
///   function. This struct must be freed by calling `free_field`.
///
/// # Returns
///
/// * An exit code integer. If this is non-zero then an error occurred; the
///   details can be obtained by (1) getting the length of the error string by
///   calling `af_last_error_length` and (2) calling `af_last_error_message`
///   with a string buffer with a length at least equal to the error length.
///
#[no_mangle]
pub unsafe extern "C" fn field_load_json_from_env(field: *mut *mut Field) -> i32 {
    let f = ffi_error!(Field::load_json_from_env());
    *field = Box::into_raw(Box::new(f));
    0
}

/// Free the memory associated with a field.
#[no_mangle]
pub unsafe extern "C" fn free_field(field: *mut Field) {
    drop(Box::from_raw(field));
}

/// Free the memory associated with a field builder that was never built.
#[no_mangle]
pub unsafe extern "C" fn free_field_builder(builder: *mut FieldBuilder) {
    drop(Box::from_raw(builder));
}

