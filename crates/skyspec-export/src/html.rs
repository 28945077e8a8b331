//! Standalone HTML artifact generation.
//!
//! Produces a single self-contained document: the initial payload
//! (air wavelengths, photon flux, everything visible) rendered as
//! plotly traces, plus two button groups whose embedded patches were
//! enumerated ahead of time. Selecting a button applies its patch
//! entirely client-side; plotly.js itself comes from the CDN.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use chrono::{SecondsFormat, Utc};
use serde_json::{Value, json};
use tracing::info;

use skyspec_model::{RenderPayload, SelectionState, Series, SpectrumStore};
use skyspec_project::project;

use crate::enumerate::{
    UnitComboAction, VisibilityAction, enumerate_unit_combos, enumerate_visibility_presets,
};

const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

/// Plotly tick format for the wavelength axis ("~g": trim trailing
/// zeros, plain notation for mid-range magnitudes).
pub const X_TICK_FORMAT: &str = "~g";

/// Fixed trace colors by store position, cycling if more spectra are
/// ever loaded.
const TRACE_COLORS: [&str; 2] = ["blue", "red"];

/// Initial wavelength range covering both source spectra (Å).
const INITIAL_X_RANGE: [f64; 2] = [3100.0, 18500.0];

/// Options for the HTML artifact.
#[derive(Debug, Clone)]
pub struct HtmlOptions {
    /// First title line.
    pub title: String,
    /// Optional second title line (data provenance).
    pub subtitle: Option<String>,
    /// Optional link rendered above the plot.
    pub source_link: Option<String>,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            title: "Interactive Sky Spectrum Viewer".to_string(),
            subtitle: None,
            source_link: None,
        }
    }
}

/// Write the artifact to `output_path`.
pub fn write_html(output_path: &Path, store: &SpectrumStore, options: &HtmlOptions) -> Result<()> {
    if store.is_empty() {
        return Err(anyhow!("no spectra supplied for export"));
    }
    let document = render_document(store, options);
    let file = File::create(output_path)
        .with_context(|| format!("create artifact: {}", output_path.display()))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(document.as_bytes())
        .with_context(|| format!("write artifact: {}", output_path.display()))?;
    writer.flush().context("flush artifact")?;
    info!(path = %output_path.display(), "wrote static artifact");
    Ok(())
}

/// Build the complete figure specification (traces + layout) as JSON.
/// Exposed separately so tests can inspect the embedded patches
/// without parsing HTML.
pub fn build_figure(store: &SpectrumStore, options: &HtmlOptions) -> Value {
    let initial = project(store, &SelectionState::initial(store));
    let traces: Vec<Value> = initial
        .series
        .iter()
        .enumerate()
        .map(|(idx, series)| trace_json(series, idx))
        .collect();
    json!({
        "data": traces,
        "layout": layout_json(&initial, store, options),
    })
}

fn render_document(store: &SpectrumStore, options: &HtmlOptions) -> String {
    let figure = build_figure(store, options);
    let generated = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);
    format!(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head>\n\
         <meta charset=\"utf-8\"/>\n\
         <title>{title}</title>\n\
         <script src=\"{cdn}\"></script>\n\
         </head>\n\
         <!-- generated {generated} -->\n\
         <body>\n\
         <div id=\"skyspec\" class=\"plotly-graph-div\"></div>\n\
         <script>\n\
         var figure = {figure};\n\
         Plotly.newPlot(\"skyspec\", figure.data, figure.layout);\n\
         </script>\n\
         </body>\n\
         </html>\n",
        title = options.title,
        cdn = PLOTLY_CDN,
        generated = generated,
        figure = figure,
    )
}

fn trace_json(series: &Series, idx: usize) -> Value {
    json!({
        "x": series.x,
        "y": series.y,
        "mode": "lines",
        "name": series.name,
        "line": { "color": TRACE_COLORS[idx % TRACE_COLORS.len()] },
        "visible": series.visible,
    })
}

fn xaxis_json(title: &str) -> Value {
    json!({
        "title": { "text": title, "font": { "size": 20 } },
        "tickformat": X_TICK_FORMAT,
        "tickfont": { "size": 18 },
    })
}

fn yaxis_json(title: &str) -> Value {
    json!({
        "title": { "text": title, "font": { "size": 20 } },
        "tickfont": { "size": 18 },
    })
}

/// Button switching into one unit combination. The patch replaces the
/// trace geometry and both axis objects but says nothing about
/// visibility, so it composes with the visibility buttons.
fn unit_button(action: &UnitComboAction) -> Value {
    json!({
        "label": action.label,
        "method": "update",
        "args": [
            { "x": action.x, "y": action.y },
            {
                "xaxis": xaxis_json(&action.x_axis_label),
                "yaxis": yaxis_json(&action.y_axis_label),
            }
        ],
    })
}

/// Button applying one curated visibility preset; geometry and axes
/// are untouched.
fn visibility_button(action: &VisibilityAction) -> Value {
    json!({
        "label": action.label,
        "method": "update",
        "args": [ { "visible": action.visible } ],
    })
}

fn layout_json(initial: &RenderPayload, store: &SpectrumStore, options: &HtmlOptions) -> Value {
    let unit_buttons: Vec<Value> = enumerate_unit_combos(store)
        .iter()
        .map(unit_button)
        .collect();
    let visibility_buttons: Vec<Value> = enumerate_visibility_presets(store)
        .iter()
        .map(visibility_button)
        .collect();

    let title_text = match &options.subtitle {
        Some(subtitle) => format!("{}<br>{subtitle}", options.title),
        None => options.title.clone(),
    };

    let mut annotations = vec![
        json!({
            "text": "Choose the units:",
            "showarrow": false,
            "xref": "paper", "yref": "paper",
            "x": 1.02, "y": 0.80,
            "xanchor": "left", "yanchor": "bottom",
            "font": { "size": 18 },
        }),
        json!({
            "text": "Show Spectra:",
            "showarrow": false,
            "xref": "paper", "yref": "paper",
            "x": 1.02, "y": 0.40,
            "xanchor": "left", "yanchor": "bottom",
            "font": { "size": 18 },
        }),
    ];
    if let Some(link) = &options.source_link {
        annotations.insert(
            0,
            json!({
                "text": link,
                "showarrow": false,
                "xref": "paper", "yref": "paper",
                "x": 0.55, "y": 0.98,
                "xanchor": "center", "yanchor": "bottom",
                "font": { "size": 18 },
            }),
        );
    }

    let mut xaxis = xaxis_json(&initial.x_axis_label);
    xaxis["range"] = json!(INITIAL_X_RANGE);

    json!({
        "title": {
            "text": title_text,
            "x": 0.5,
            "xanchor": "center",
            "yanchor": "top",
            "font": { "size": 20 },
        },
        "plot_bgcolor": "white",
        "paper_bgcolor": "white",
        "hovermode": "closest",
        "margin": { "t": 100, "r": 200 },
        "xaxis": xaxis,
        "yaxis": yaxis_json(&initial.y_axis_label),
        "legend": {
            "x": 1.02, "y": 1.0,
            "xanchor": "left", "yanchor": "top",
            "bgcolor": "rgba(255,255,255,0.95)",
            "bordercolor": "lightgray",
            "borderwidth": 1,
            "font": { "size": 18 },
        },
        "updatemenus": [
            {
                "type": "buttons",
                "direction": "down",
                "buttons": unit_buttons,
                "showactive": true,
                "x": 1.02, "xanchor": "left",
                "y": 0.8, "yanchor": "top",
                "font": { "size": 16 },
            },
            {
                "type": "buttons",
                "direction": "down",
                "buttons": visibility_buttons,
                "showactive": true,
                "x": 1.02, "xanchor": "left",
                "y": 0.4, "yanchor": "top",
                "font": { "size": 16 },
            }
        ],
    })
}
