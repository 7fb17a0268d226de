#![allow(dead_code)]
use std::path::PathBuf;

use std::sync::Once;

static LOGGER_INIT: Once = Once::new();

// Rust runs the tests concurrently, so unless we synchronize logging access
// it will crash when attempting to run `cargo test` with some logging facilities.
pub fn ensure_env_logger_initialized() {
    use std::io::Write;

    LOGGER_INIT.call_once(|| {
        let mut builder = env_logger::Builder::from_default_env();
        builder
            .format(|buf, record| writeln!(buf, "[{}] - {}", record.level(), record.args()))
            .init();
    });
}

pub fn samples_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("samples")
        .canonicalize()
        .unwrap()
}

pub fn regular_sample() -> PathBuf {
    samples_dir().join("20241012213455_noite_gt3.ini")
}

pub fn regular_sample_expected_json() -> PathBuf {
    samples_dir().join("20241012213455_noite_gt3.json")
}

pub fn legacy_encoded_sample() -> PathBuf {
    samples_dir().join("legacy_cp1252.ini")
}

pub fn sample_missing_pilots() -> PathBuf {
    samples_dir().join("missing_pilots.ini")
}
