// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! This program loads each given field file and checks that its contents are
//! usable: every electric field has a value per angle, and the field can be
//! multiplied by itself. Set RUST_LOG=debug for more detail.

use antenna_field::{AntennaError, Field};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut all_good = true;
    // Test each input file.
    for field_file in std::env::args().skip(1) {
        if let Err(e) = test_file(&field_file) {
            println!("File '{field_file}' failed: {e}");
            all_good = false;
        }
    }
    if !all_good {
        std::process::exit(1);
    }
}

fn test_file(field_file: &str) -> Result<(), AntennaError> {
    println!("Testing file '{field_file}'");
    let field = Field::load_json(field_file)?;
    println!(
        "  {} angles, field type {}, frequency {}",
        field.num_angles(),
        field
            .field_type()
            .map(|t| t.to_string())
            .unwrap_or_else(|| "unset".to_string()),
        field
            .frequency()
            .map(|f| format!("{f} Hz"))
            .unwrap_or_else(|| "unset".to_string()),
    );
    for pol in field.available_electric_fields() {
        println!("  has electric field '{pol}'");
    }

    field.multiply(&field)?;

    println!("File '{field_file}' is all good!");
    Ok(())
}
