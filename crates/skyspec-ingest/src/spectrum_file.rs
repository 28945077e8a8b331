use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::info;

use skyspec_model::{CGS_DISPLAY_SCALE, Result, Spectrum, SpectrumError, SpectrumStore};

/// Number of numeric fields per data row, in fixed column order:
/// `wavelength_air wavelength_vacuum flux_photon flux_erg`.
const COLUMNS: usize = 4;

/// Read one whitespace-delimited spectrum file.
///
/// Rows are split on runs of whitespace; blank lines and `#` comment
/// lines are skipped. Any other row shape or a non-numeric field is a
/// [`SpectrumError::DataFormat`] carrying the 1-based line number, as
/// is a file with zero data rows. The erg flux column is multiplied by
/// [`CGS_DISPLAY_SCALE`] so the stored cgs column holds the display
/// values the axis label documents.
pub fn load_spectrum(path: &Path, name: &str) -> Result<Spectrum> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut wavelength_air = Vec::new();
    let mut wavelength_vacuum = Vec::new();
    let mut flux_photon = Vec::new();
    let mut flux_cgs = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let row = parse_row(trimmed).map_err(|message| SpectrumError::DataFormat {
            path: path.to_path_buf(),
            line: idx + 1,
            message,
        })?;
        wavelength_air.push(row[0]);
        wavelength_vacuum.push(row[1]);
        flux_photon.push(row[2]);
        flux_cgs.push(row[3] * CGS_DISPLAY_SCALE);
    }

    if wavelength_air.is_empty() {
        return Err(SpectrumError::DataFormat {
            path: path.to_path_buf(),
            line: 0,
            message: "no data rows".to_string(),
        });
    }

    Spectrum::new(name, wavelength_air, wavelength_vacuum, flux_photon, flux_cgs)
}

fn parse_row(line: &str) -> std::result::Result<[f64; COLUMNS], String> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() != COLUMNS {
        return Err(format!(
            "expected {COLUMNS} columns, found {}",
            fields.len()
        ));
    }
    let mut row = [0.0; COLUMNS];
    for (col, field) in fields.iter().enumerate() {
        row[col] = field
            .parse::<f64>()
            .map_err(|_| format!("invalid number {field:?} in column {}", col + 1))?;
    }
    Ok(row)
}

/// Load the two fixed sources into a store, each independently
/// validated. There is no cross-file length requirement.
pub fn load_store(path_a: &Path, path_b: &Path) -> Result<SpectrumStore> {
    let mut spectra = Vec::with_capacity(2);
    for path in [path_a, path_b] {
        let name = spectrum_name(path);
        let spectrum = load_spectrum(path, &name)?;
        info!(
            spectrum = %spectrum.name(),
            samples = spectrum.len(),
            "loaded spectrum"
        );
        spectra.push(spectrum);
    }
    Ok(SpectrumStore::new(spectra))
}

/// Dataset name from the file stem, e.g. `UVEX.txt` -> "UVEX".
pub fn spectrum_name(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "spectrum".to_string())
}
