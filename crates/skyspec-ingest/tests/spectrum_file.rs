//! Integration tests for spectrum file loading.

use std::fs;
use std::path::PathBuf;

use skyspec_ingest::{load_spectrum, load_store, spectrum_name};
use skyspec_model::{FluxUnit, SpectrumError, WavelengthFrame};
use tempfile::TempDir;

fn write_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write test file");
    path
}

#[test]
fn loads_four_column_whitespace_file() {
    let dir = TempDir::new().expect("tempdir");
    let path = write_file(
        &dir,
        "UVEX.txt",
        "4000.0  4001.1  10.0  5e-16\n4001.0\t4002.1\t12.0\t6e-16\n",
    );

    let spectrum = load_spectrum(&path, "UVEX").expect("load spectrum");
    assert_eq!(spectrum.len(), 2);
    assert_eq!(spectrum.wavelength(WavelengthFrame::Air), &[4000.0, 4001.0]);
    assert_eq!(
        spectrum.wavelength(WavelengthFrame::Vacuum),
        &[4001.1, 4002.1]
    );
    assert_eq!(spectrum.flux(FluxUnit::Photon), &[10.0, 12.0]);
    // erg column is rescaled by 1e16 at load
    assert_eq!(spectrum.flux(FluxUnit::Cgs), &[5.0, 6.0]);
}

#[test]
fn skips_comments_and_blank_lines() {
    let dir = TempDir::new().expect("tempdir");
    let path = write_file(
        &dir,
        "sky.txt",
        "# wavelength_air wavelength_vacuum flux_photon flux_erg\n\n4000 4001 10 5e-16\n",
    );

    let spectrum = load_spectrum(&path, "sky").expect("load spectrum");
    assert_eq!(spectrum.len(), 1);
}

#[test]
fn rejects_short_row_with_line_number() {
    let dir = TempDir::new().expect("tempdir");
    let path = write_file(&dir, "bad.txt", "4000 4001 10 5e-16\n4001 4002 12\n");

    let err = load_spectrum(&path, "bad").expect_err("short row");
    match err {
        SpectrumError::DataFormat { line, message, .. } => {
            assert_eq!(line, 2);
            assert!(message.contains("expected 4 columns"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn rejects_non_numeric_field() {
    let dir = TempDir::new().expect("tempdir");
    let path = write_file(&dir, "bad.txt", "4000 4001 ten 5e-16\n");

    let err = load_spectrum(&path, "bad").expect_err("non-numeric field");
    match err {
        SpectrumError::DataFormat { line, message, .. } => {
            assert_eq!(line, 1);
            assert!(message.contains("column 3"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn rejects_empty_file() {
    let dir = TempDir::new().expect("tempdir");
    let path = write_file(&dir, "empty.txt", "# only a comment\n");

    let err = load_spectrum(&path, "empty").expect_err("no data rows");
    assert!(matches!(err, SpectrumError::DataFormat { .. }));
}

#[test]
fn store_names_come_from_file_stems() {
    let dir = TempDir::new().expect("tempdir");
    let a = write_file(&dir, "UVEX.txt", "4000 4001 10 5e-16\n");
    let b = write_file(&dir, "GIANO.txt", "9500 9502 3 1.5e-16\n9501 9503 4 2.5e-16\n");

    let store = load_store(&a, &b).expect("load store");
    assert_eq!(store.names(), vec!["UVEX", "GIANO"]);
    // Row counts are independently validated; no cross-file requirement.
    assert_eq!(store.get("UVEX").unwrap().len(), 1);
    assert_eq!(store.get("GIANO").unwrap().len(), 2);
}

#[test]
fn load_store_fails_whole_if_either_source_is_bad() {
    let dir = TempDir::new().expect("tempdir");
    let a = write_file(&dir, "UVEX.txt", "4000 4001 10 5e-16\n");
    let b = write_file(&dir, "GIANO.txt", "not a spectrum\n");

    assert!(load_store(&a, &b).is_err());
}

#[test]
fn name_derivation_strips_extension() {
    assert_eq!(spectrum_name(&PathBuf::from("data/UVEX.txt")), "UVEX");
    assert_eq!(spectrum_name(&PathBuf::from("GIANO")), "GIANO");
}
