use serde::{Deserialize, Serialize};

/// One plottable trace. `visible` is carried as a flag rather than by
/// omission so a live host can toggle visibility without re-issuing
/// geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub name: String,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub visible: bool,
}

/// The fully resolved bundle of series and axis metadata ready for
/// drawing. Invariant: `series` contains one entry per loaded
/// spectrum, in store order, regardless of visibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderPayload {
    pub series: Vec<Series>,
    pub x_axis_label: String,
    pub y_axis_label: String,
}
