//! Generates `ToStringFast` for every enum in this crate.

use fast_enum_string::build_support::generate_into_out_dir;
use fast_enum_string::emit::OUTPUT_FILE_NAME;

fn main() {
    if let Err(err) = generate_into_out_dir("src/lib.rs", OUTPUT_FILE_NAME) {
        panic!("enum lookup generation failed: {err}");
    }
}
