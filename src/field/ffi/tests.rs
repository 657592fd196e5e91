// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::ffi::CString;
use std::ptr::null_mut;

use approx::*;
use serial_test::serial;

use super::*;
use crate::{ffi::tests::get_last_error, theta_phi::equally_spaced_sphere};

/// Build a far field at 1 GHz over a 90 degree sphere via the FFI, with a
/// single electric field.
unsafe fn make_field(electric_field: u8, value: c64) -> *mut Field {
    let angles = equally_spaced_sphere(90).unwrap();
    let thetas: Vec<f64> = angles.iter().map(|a| a.theta()).collect();
    let phis: Vec<f64> = angles.iter().map(|a| a.phi()).collect();
    let values: Vec<f64> = angles.iter().flat_map(|_| [value.re, value.im]).collect();

    let mut builder = null_mut();
    let result = new_field_builder(
        1,
        1e9,
        angles.len() as u32,
        thetas.as_ptr(),
        phis.as_ptr(),
        &mut builder,
    );
    assert_eq!(result, 0);
    let result =
        field_builder_add_electric_field(builder, electric_field, values.as_ptr(), angles.len() as u32);
    assert_eq!(result, 0);

    let mut field = null_mut();
    let result = field_builder_build(builder, &mut field);
    assert_eq!(result, 0);
    field
}

#[test]
fn test_build_field_via_ffi() {
    unsafe {
        let field = make_field(1, c64::new(1.0, -2.0));
        assert_eq!(field_num_angles(field), 15);
        assert_abs_diff_eq!(field_frequency(field), 1e9);

        let f = &*field;
        assert_eq!(f.field_type(), Some(FieldType::FarField));
        assert_eq!(
            f.available_electric_fields().collect::<Vec<_>>(),
            vec![ElectricField::Theta]
        );
        assert_eq!(f.angles(), equally_spaced_sphere(90).unwrap().as_slice());

        let mut values = vec![0.0; 30];
        let result = field_get_electric_field(field, 1, values.as_mut_ptr());
        assert_eq!(result, 0);
        for pair in values.chunks_exact(2) {
            assert_eq!(pair, [1.0, -2.0]);
        }

        let mut theta = vec![0.0; 15];
        let mut phi = vec![0.0; 15];
        field_get_angles(field, theta.as_mut_ptr(), phi.as_mut_ptr());
        assert_abs_diff_eq!(theta[7], std::f64::consts::FRAC_PI_2);
        assert_abs_diff_eq!(phi[7], 0.0);

        free_field(field);
    }
}

#[test]
fn test_unset_frequency_via_ffi() {
    unsafe {
        let mut builder = null_mut();
        let result = new_field_builder(2, -1.0, 0, [0.0_f64; 0].as_ptr(), [0.0_f64; 0].as_ptr(), &mut builder);
        assert_eq!(result, 0);
        let mut field = null_mut();
        let result = field_builder_build(builder, &mut field);
        assert_eq!(result, 0);

        assert_eq!((*field).frequency(), None);
        assert_eq!((*field).field_type(), None);
        assert_abs_diff_eq!(field_frequency(field), -1.0);
        assert_eq!(field_num_angles(field), 0);
        free_field(field);
    }
}

#[test]
fn test_empty_field_with_null_pointers_via_ffi() {
    unsafe {
        let mut builder = null_mut();
        let result = new_field_builder(1, 2e9, 0, std::ptr::null(), std::ptr::null(), &mut builder);
        assert_eq!(result, 0);
        let result = field_builder_add_electric_field(builder, 3, std::ptr::null(), 0);
        assert_eq!(result, 0);
        let mut field = null_mut();
        let result = field_builder_build(builder, &mut field);
        assert_eq!(result, 0);

        assert_eq!(field_num_angles(field), 0);
        assert_eq!(
            (*field).available_electric_fields().collect::<Vec<_>>(),
            vec![ElectricField::Plus45]
        );
        field_get_angles(field, null_mut(), null_mut());
        let result = field_get_electric_field(field, 3, null_mut());
        assert_eq!(result, 0);

        free_field(field);
    }
}

#[test]
fn test_frequency_sentinel_via_ffi() {
    unsafe {
        let mut builder = null_mut();
        let result = new_field_builder(0, -1.0, 0, std::ptr::null(), std::ptr::null(), &mut builder);
        assert_eq!(result, 0);
        let mut field = null_mut();
        let result = field_builder_build(builder, &mut field);
        assert_eq!(result, 0);
        assert_eq!((*field).frequency(), None);
        free_field(field);
    }
}

#[test]
fn test_bad_codes_via_ffi() {
    unsafe {
        let mut builder = null_mut();
        let result = new_field_builder(3, 1e9, 0, [0.0_f64; 0].as_ptr(), [0.0_f64; 0].as_ptr(), &mut builder);
        assert_eq!(result, 1);
        assert_eq!(get_last_error(), "'3' is not a recognised field type");

        let result = new_field_builder(0, 1e9, 0, [0.0_f64; 0].as_ptr(), [0.0_f64; 0].as_ptr(), &mut builder);
        assert_eq!(result, 0);
        let result = field_builder_add_electric_field(builder, 7, [0.0_f64; 0].as_ptr(), 0);
        assert_eq!(result, 1);
        assert_eq!(get_last_error(), "'7' is not a recognised electric field");
        free_field_builder(builder);
    }
}

#[test]
fn test_build_length_mismatch_via_ffi() {
    unsafe {
        let mut builder = null_mut();
        let result = new_field_builder(1, 1e9, 1, [0.0].as_ptr(), [0.0].as_ptr(), &mut builder);
        assert_eq!(result, 0);
        let result = field_builder_add_electric_field(builder, 0, [1.0, 0.0, 2.0, 0.0].as_ptr(), 2);
        assert_eq!(result, 0);

        let mut field = null_mut();
        let result = field_builder_build(builder, &mut field);
        assert_eq!(result, 1);
        assert!(field.is_null());
        assert_eq!(
            get_last_error(),
            "Electric field 'relative_gain' has 2 values, but there are 1 angles"
        );
    }
}

#[test]
fn test_multiply_via_ffi() {
    unsafe {
        let a = make_field(0, c64::new(1.0, 2.0));
        let b = make_field(0, c64::new(3.0, -1.0));
        let mut product = null_mut();
        let result = field_multiply(a, b, &mut product);
        assert_eq!(result, 0);

        let mut values = vec![0.0; 30];
        let result = field_get_electric_field(product, 0, values.as_mut_ptr());
        assert_eq!(result, 0);
        for pair in values.chunks_exact(2) {
            assert_abs_diff_eq!(pair[0], 5.0);
            assert_abs_diff_eq!(pair[1], 5.0);
        }
        assert_abs_diff_eq!(field_frequency(product), 1e9);

        free_field(a);
        free_field(b);
        free_field(product);
    }
}

#[test]
fn test_multiply_mismatch_via_ffi() {
    unsafe {
        let a = make_field(0, c64::new(1.0, 0.0));
        let b = make_field(1, c64::new(1.0, 0.0));
        let mut product = null_mut();
        let result = field_multiply(a, b, &mut product);
        assert_eq!(result, 1);
        assert!(product.is_null());
        assert_eq!(
            get_last_error(),
            "Fields need to have the same electric fields (this field has [RelativeGain], the other has [Theta])"
        );

        // Asking for an electric field that isn't there.
        let mut values = vec![0.0; 30];
        let result = field_get_electric_field(a, 1, values.as_mut_ptr());
        assert_eq!(result, 1);
        assert_eq!(
            get_last_error(),
            "This field doesn't have the 'theta' electric field"
        );

        free_field(a);
        free_field(b);
    }
}

#[test]
fn test_json_via_ffi() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("field.json");
    let c_path = CString::new(path.to_str().unwrap()).unwrap();
    unsafe {
        let field = make_field(5, c64::new(0.25, 0.5));
        let result = field_save_json(field, c_path.as_ptr());
        assert_eq!(result, 0);

        let mut loaded = null_mut();
        let result = field_load_json(c_path.as_ptr(), &mut loaded);
        assert_eq!(result, 0);
        assert_eq!(*field, *loaded);

        free_field(field);
        free_field(loaded);
    }
}

#[test]
fn test_json_missing_file_via_ffi() {
    let c_path = CString::new("/does/not/exist.json").unwrap();
    unsafe {
        let mut field = null_mut();
        let result = field_load_json(c_path.as_ptr(), &mut field);
        assert_eq!(result, 1);
        assert!(field.is_null());
        assert_eq!(
            get_last_error(),
            "Specified field file '/does/not/exist.json' doesn't exist"
        );
    }
}

#[test]
#[serial]
fn test_json_from_env_via_ffi() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("env_field.json");
    unsafe {
        let field = make_field(2, c64::new(-1.0, 0.0));
        (*field).save_json(&path).unwrap();

        std::env::set_var("FIELD_FILE", &path);
        let mut loaded = null_mut();
        let result = field_load_json_from_env(&mut loaded);
        std::env::remove_var("FIELD_FILE");
        assert_eq!(result, 0);
        assert_eq!(*field, *loaded);

        free_field(field);
        free_field(loaded);
    }
}
