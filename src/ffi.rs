// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Code for allowing other languages to talk to this Rust library. Fields have
their own functions in the field module; this module handles errors and angle
grids.
 */

use std::{
    cell::RefCell,
    ffi::{c_char, c_int},
    slice,
};

use crate::theta_phi::equally_spaced_sphere;

thread_local! {
    static LAST_ERROR: RefCell<Option<String>> = const { RefCell::new(None) };
}

/// Record an error message; it can be retrieved by the caller with
/// `af_last_error_length` and `af_last_error_message`.
pub(crate) fn update_last_error(err: String) {
    LAST_ERROR.with(|prev| {
        *prev.borrow_mut() = Some(err);
    });
}

/// Handle a Rust error inside an FFI function; the error message is stored
/// and the function returns 1.
macro_rules! ffi_error {
    ($result:expr) => {{
        match $result {
            Ok(r) => r,
            Err(e) => {
                $crate::ffi::update_last_error(e.to_string());
                return 1;
            }
        }
    }};
}
pub(crate) use ffi_error;

/// View a C array as a slice. `ptr` may be null when `len` is 0.
pub(crate) unsafe fn c_slice<'a, T>(ptr: *const T, len: usize) -> &'a [T] {
    if len == 0 {
        &[]
    } else {
        slice::from_raw_parts(ptr, len)
    }
}

/// View a C array as a mutable slice. `ptr` may be null when `len` is 0.
pub(crate) unsafe fn c_slice_mut<'a, T>(ptr: *mut T, len: usize) -> &'a mut [T] {
    if len == 0 {
        &mut []
    } else {
        slice::from_raw_parts_mut(ptr, len)
    }
}

/// Get the length of the last error message, including its null terminator.
/// If there is no error, 0 is returned.
#[no_mangle]
pub extern "C" fn af_last_error_length() -> c_int {
    LAST_ERROR.with(|prev| match *prev.borrow() {
        Some(ref err) => err.len() as c_int + 1,
        None => 0,
    })
}

/// Write the last error message into `buffer`.
///
/// # Arguments
///
/// * `buffer` - a pointer to a string buffer. The error message and a null
///   terminator are written here.
/// * `length` - the length of `buffer`. This should be at least the value
///   returned by `af_last_error_length`.
///
/// # Returns
///
/// * The number of bytes written, including the null terminator. -1 is
///   returned if `buffer` is null or too small, 0 if there is no error. The
///   error is cleared once it's been successfully written.
///
#[no_mangle]
pub unsafe extern "C" fn af_last_error_message(buffer: *mut c_char, length: c_int) -> c_int {
    if buffer.is_null() || length < 0 {
        return -1;
    }
    let err = match LAST_ERROR.with(|prev| prev.borrow().clone()) {
        Some(e) => e,
        None => return 0,
    };

    let buffer = slice::from_raw_parts_mut(buffer as *mut u8, length as usize);
    if err.len() >= buffer.len() {
        return -1;
    }
    buffer[..err.len()].copy_from_slice(err.as_bytes());
    buffer[err.len()] = 0;
    LAST_ERROR.with(|prev| prev.borrow_mut().take());

    err.len() as c_int + 1
}

/// Get the number of angles in an equally-spaced sphere.
///
/// # Arguments
///
/// * `spacing` - the spacing between angles \[degrees\]. Must be positive.
/// * `num_angles` - a pointer to an integer, set by this function.
///
/// # Returns
///
/// * An exit code integer. If this is non-zero then an error occurred; the
///   details can be obtained by (1) getting the length of the error string by
///   calling `af_last_error_length` and (2) calling `af_last_error_message`
///   with a string buffer with a length at least equal to the error length.
///
#[no_mangle]
pub unsafe extern "C" fn num_sphere_angles(spacing: i32, num_angles: *mut u32) -> i32 {
    let angles = ffi_error!(equally_spaced_sphere(spacing));
    *num_angles = angles.len() as u32;
    0
}

/// Write the angles of an equally-spaced sphere. Theta runs from 0 to 180
/// degrees and phi from -180 to 180 degrees (both inclusive), phi varying
/// fastest.
///
/// # Arguments
///
/// * `spacing` - the spacing between angles \[degrees\]. Must be positive.
/// * `theta_rad` - a pointer to a buffer of at least
///   `num_sphere_angles * sizeof(double)` bytes. The polar angles (units of
///   radians) are written here.
/// * `phi_rad` - like `theta_rad`, but for the azimuths.
///
/// # Returns
///
/// * An exit code integer. If this is non-zero then an error occurred; the
///   details can be obtained by (1) getting the length of the error string by
///   calling `af_last_error_length` and (2) calling `af_last_error_message`
///   with a string buffer with a length at least equal to the error length.
///
#[no_mangle]
pub unsafe extern "C" fn equally_spaced_sphere_angles(
    spacing: i32,
    theta_rad: *mut f64,
    phi_rad: *mut f64,
) -> i32 {
    let angles = ffi_error!(equally_spaced_sphere(spacing));
    let thetas = c_slice_mut(theta_rad, angles.len());
    let phis = c_slice_mut(phi_rad, angles.len());
    for ((a, t), p) in angles.iter().zip(thetas).zip(phis) {
        *t = a.theta();
        *p = a.phi();
    }
    0
}
