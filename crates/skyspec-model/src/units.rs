use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Display rescale applied to the cgs flux column at load time.
///
/// Raw erg fluxes are of order 1e-16, which makes plotly tick labels
/// unreadable. Stored cgs values are pre-multiplied by this factor,
/// and [`FluxUnit::Cgs`]'s axis label states the true physical scale.
pub const CGS_DISPLAY_SCALE: f64 = 1e16;

/// Wavelength calibration convention: the same physical spectrum can
/// be reported against air or vacuum wavelengths.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WavelengthFrame {
    #[default]
    Air,
    Vacuum,
}

impl WavelengthFrame {
    pub const ALL: [WavelengthFrame; 2] = [WavelengthFrame::Air, WavelengthFrame::Vacuum];

    pub fn as_str(&self) -> &'static str {
        match self {
            WavelengthFrame::Air => "Air",
            WavelengthFrame::Vacuum => "Vacuum",
        }
    }

    /// X-axis title for this frame. The single source of these
    /// strings; neither the host nor the exporter re-derives them.
    pub fn axis_label(&self) -> String {
        format!("Wavelength in {} (Å)", self.as_str())
    }
}

impl fmt::Display for WavelengthFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for WavelengthFrame {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "AIR" => Ok(WavelengthFrame::Air),
            "VACUUM" => Ok(WavelengthFrame::Vacuum),
            _ => Err(format!("Unknown wavelength frame: {s}")),
        }
    }
}

/// Flux unit: photon counts or energy flux in CGS units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FluxUnit {
    #[default]
    Photon,
    Cgs,
}

impl FluxUnit {
    pub const ALL: [FluxUnit; 2] = [FluxUnit::Photon, FluxUnit::Cgs];

    pub fn as_str(&self) -> &'static str {
        match self {
            FluxUnit::Photon => "Photon",
            FluxUnit::Cgs => "CGS",
        }
    }

    /// Y-axis title for this unit. The cgs label carries the 1e-16
    /// caveat because stored values are pre-scaled by
    /// [`CGS_DISPLAY_SCALE`].
    pub fn axis_label(&self) -> String {
        match self {
            FluxUnit::Photon => "Flux (photons/s/cm²/Å/arcsec²)".to_string(),
            FluxUnit::Cgs => "Flux (1e-16 erg/s/cm²/Å/arcsec²)".to_string(),
        }
    }
}

impl fmt::Display for FluxUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FluxUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "PHOTON" => Ok(FluxUnit::Photon),
            "CGS" | "ERG" => Ok(FluxUnit::Cgs),
            _ => Err(format!("Unknown flux unit: {s}")),
        }
    }
}
