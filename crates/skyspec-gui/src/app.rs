//! Main application struct and eframe::App implementation

use eframe::egui;
use egui_plot::{Legend, Line, Plot};

use skyspec_model::{FluxUnit, SelectionDelta, SpectrumStore, WavelengthFrame};

use crate::adapter::SelectionAdapter;

/// The desktop host: translates widget changes into selection deltas
/// and draws whatever the adapter last projected.
pub struct ViewerApp {
    adapter: SelectionAdapter,
}

impl ViewerApp {
    pub fn new(store: SpectrumStore) -> Self {
        Self {
            adapter: SelectionAdapter::new(store),
        }
    }

    fn controls(&mut self, ui: &mut egui::Ui) {
        let state = self.adapter.state().clone();
        let names: Vec<String> = self
            .adapter
            .store()
            .names()
            .into_iter()
            .map(String::from)
            .collect();
        let mut delta = SelectionDelta::default();

        ui.horizontal(|ui| {
            ui.label("Wavelength:");
            for frame in WavelengthFrame::ALL {
                let selected = state.wavelength_frame == frame;
                if ui.radio(selected, frame.as_str()).clicked() && !selected {
                    delta.wavelength_frame = Some(frame);
                }
            }

            ui.separator();
            ui.label("Flux:");
            for unit in FluxUnit::ALL {
                let selected = state.flux_unit == unit;
                if ui.radio(selected, unit.as_str()).clicked() && !selected {
                    delta.flux_unit = Some(unit);
                }
            }

            ui.separator();
            ui.label("Show:");
            let mut visible = state.visible.clone();
            let mut changed = false;
            for name in &names {
                let mut shown = visible.contains(name);
                if ui.checkbox(&mut shown, name).changed() {
                    if shown {
                        visible.insert(name.clone());
                    } else {
                        visible.remove(name);
                    }
                    changed = true;
                }
            }
            if changed {
                delta.visible = Some(visible);
            }
        });

        if !delta.is_empty() {
            if let Err(error) = self.adapter.apply(&delta) {
                // Absorb the rejection: the previous payload stays up.
                tracing::warn!("selection rejected: {error}");
            }
        }
    }

    fn plot(&self, ui: &mut egui::Ui) {
        let payload = self.adapter.payload();
        Plot::new("spectrum_plot")
            .legend(Legend::default())
            .x_axis_label(payload.x_axis_label.clone())
            .y_axis_label(payload.y_axis_label.clone())
            .show(ui, |plot_ui| {
                for series in &payload.series {
                    if !series.visible {
                        continue;
                    }
                    let points: Vec<[f64; 2]> = series
                        .x
                        .iter()
                        .zip(&series.y)
                        .map(|(x, y)| [*x, *y])
                        .collect();
                    plot_ui.line(Line::new(series.name.clone(), points));
                }
            });
    }
}

impl eframe::App for ViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            self.controls(ui);
        });
        egui::CentralPanel::default().show(ctx, |ui| {
            self.plot(ui);
        });
    }
}
