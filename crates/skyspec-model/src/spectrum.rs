use serde::{Deserialize, Serialize};

use crate::error::{Result, SpectrumError};
use crate::units::{FluxUnit, WavelengthFrame};

/// One named sky-background dataset: four index-aligned sample
/// columns. Sample `i` across all four columns describes the same
/// physical point. Constructed once at load time, never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Spectrum {
    name: String,
    wavelength_air: Vec<f64>,
    wavelength_vacuum: Vec<f64>,
    flux_photon: Vec<f64>,
    /// Pre-scaled by `CGS_DISPLAY_SCALE` at load time.
    flux_cgs: Vec<f64>,
}

impl Spectrum {
    /// Build a spectrum, enforcing equal column lengths.
    pub fn new(
        name: impl Into<String>,
        wavelength_air: Vec<f64>,
        wavelength_vacuum: Vec<f64>,
        flux_photon: Vec<f64>,
        flux_cgs: Vec<f64>,
    ) -> Result<Self> {
        let name = name.into();
        let len = wavelength_air.len();
        if wavelength_vacuum.len() != len || flux_photon.len() != len || flux_cgs.len() != len {
            return Err(SpectrumError::DataFormat {
                path: name.clone().into(),
                line: 0,
                message: format!(
                    "column lengths differ: {len}/{}/{}/{}",
                    wavelength_vacuum.len(),
                    flux_photon.len(),
                    flux_cgs.len()
                ),
            });
        }
        Ok(Self {
            name,
            wavelength_air,
            wavelength_vacuum,
            flux_photon,
            flux_cgs,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of samples (shared by all four columns).
    pub fn len(&self) -> usize {
        self.wavelength_air.len()
    }

    pub fn is_empty(&self) -> bool {
        self.wavelength_air.is_empty()
    }

    /// Wavelength column for the given calibration frame.
    pub fn wavelength(&self, frame: WavelengthFrame) -> &[f64] {
        match frame {
            WavelengthFrame::Air => &self.wavelength_air,
            WavelengthFrame::Vacuum => &self.wavelength_vacuum,
        }
    }

    /// Flux column for the given unit.
    pub fn flux(&self, unit: FluxUnit) -> &[f64] {
        match unit {
            FluxUnit::Photon => &self.flux_photon,
            FluxUnit::Cgs => &self.flux_cgs,
        }
    }
}

/// Ordered, immutable collection of loaded spectra. Iteration order is
/// load order and is the stable series order of every render payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SpectrumStore {
    spectra: Vec<Spectrum>,
}

impl SpectrumStore {
    pub fn new(spectra: Vec<Spectrum>) -> Self {
        Self { spectra }
    }

    pub fn len(&self) -> usize {
        self.spectra.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spectra.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Spectrum> {
        self.spectra.iter()
    }

    pub fn get(&self, name: &str) -> Option<&Spectrum> {
        self.spectra.iter().find(|s| s.name() == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Spectrum names in store order.
    pub fn names(&self) -> Vec<&str> {
        self.spectra.iter().map(Spectrum::name).collect()
    }
}
