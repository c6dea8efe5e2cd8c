//! Test/recording helpers for persisting HTTP fixtures.
//! Compiled only when the `test-mode` feature is enabled.

use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

pub(crate) fn get_fixture_dir() -> PathBuf {
    env::var("OXR_FIXDIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures"))
}

/// Endpoint paths contain `/` (`historical/2020-01-01.json`); flatten them into one file name.
fn fixture_name(endpoint: &str, ext: &str) -> String {
    let stem = endpoint.strip_suffix(".json").unwrap_or(endpoint);
    format!("{}.{}", stem.replace('/', "_"), ext)
}

pub(crate) fn record_fixture(endpoint: &str, ext: &str, body: &str) -> Result<(), std::io::Error> {
    record_fixture_in(&get_fixture_dir(), endpoint, ext, body)
}

fn record_fixture_in(
    dir: &Path,
    endpoint: &str,
    ext: &str,
    body: &str,
) -> Result<(), std::io::Error> {
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    let path = dir.join(fixture_name(endpoint, ext));

    let mut file = fs::File::create(&path)?;
    file.write_all(body.as_bytes())?;

    if env::var("OXR_DEBUG").ok().as_deref() == Some("1") {
        eprintln!("OXR_RECORD: wrote fixture to {}", path.display());
    }
    Ok(())
}
