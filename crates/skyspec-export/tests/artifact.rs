//! Smoke tests for the written HTML artifact.

use std::fs;

use skyspec_export::{HtmlOptions, build_figure, write_html};
use skyspec_model::{Spectrum, SpectrumStore};
use tempfile::TempDir;

fn store() -> SpectrumStore {
    let uvex = Spectrum::new(
        "UVEX",
        vec![4000.0, 4001.0],
        vec![4001.1, 4002.1],
        vec![10.0, 12.0],
        vec![5.0, 6.0],
    )
    .expect("build UVEX");
    let giano = Spectrum::new(
        "GIANO",
        vec![9500.0],
        vec![9502.6],
        vec![3.0],
        vec![1.5],
    )
    .expect("build GIANO");
    SpectrumStore::new(vec![uvex, giano])
}

#[test]
fn artifact_is_self_contained_except_for_the_cdn() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("spectrum_plot.html");
    write_html(&path, &store(), &HtmlOptions::default()).expect("write artifact");

    let html = fs::read_to_string(&path).expect("read artifact");
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("cdn.plot.ly"));
    assert!(html.contains("Plotly.newPlot"));
    // Both traces and every menu action are embedded
    assert!(html.contains("UVEX"));
    assert!(html.contains("GIANO"));
    for label in [
        "Air / Photon",
        "Air / CGS",
        "Vacuum / Photon",
        "Vacuum / CGS",
        "Both Spectra",
        "Only UVEX",
        "Only GIANO",
    ] {
        assert!(html.contains(label), "missing menu action: {label}");
    }
}

#[test]
fn figure_embeds_the_initial_air_photon_view() {
    let figure = build_figure(&store(), &HtmlOptions::default());

    let data = figure["data"].as_array().expect("trace array");
    assert_eq!(data.len(), 2);
    assert_eq!(data[0]["name"], "UVEX");
    assert_eq!(data[0]["visible"], true);
    assert_eq!(data[1]["visible"], true);
    assert_eq!(data[0]["x"][0], 4000.0);
    assert_eq!(data[0]["y"][1], 12.0);

    let layout = &figure["layout"];
    assert_eq!(
        layout["xaxis"]["title"]["text"],
        "Wavelength in Air (Å)"
    );
    assert!(
        layout["yaxis"]["title"]["text"]
            .as_str()
            .expect("y title")
            .contains("photons")
    );
    assert_eq!(layout["xaxis"]["tickformat"], "~g");
}

#[test]
fn figure_menus_are_two_independent_axes() {
    let figure = build_figure(&store(), &HtmlOptions::default());
    let menus = figure["layout"]["updatemenus"]
        .as_array()
        .expect("updatemenus");
    assert_eq!(menus.len(), 2);

    let unit_buttons = menus[0]["buttons"].as_array().expect("unit buttons");
    assert_eq!(unit_buttons.len(), 4);
    // Unit patches replace geometry and axes but never visibility
    for button in unit_buttons {
        let restyle = &button["args"][0];
        assert!(restyle.get("x").is_some());
        assert!(restyle.get("visible").is_none());
        let relayout = &button["args"][1];
        assert!(relayout.get("xaxis").is_some());
    }

    let visibility_buttons = menus[1]["buttons"].as_array().expect("visibility buttons");
    assert_eq!(visibility_buttons.len(), 3);
    // Visibility patches carry flags only
    for button in visibility_buttons {
        let restyle = &button["args"][0];
        assert!(restyle.get("visible").is_some());
        assert!(restyle.get("x").is_none());
        assert!(button["args"].as_array().expect("args").len() == 1);
    }
}

#[test]
fn subtitle_joins_the_title_on_a_second_line() {
    let options = HtmlOptions {
        subtitle: Some("(UVEX: Hanuschik 2003; GIANO: Oliva et al. 2015)".to_string()),
        ..HtmlOptions::default()
    };
    let figure = build_figure(&store(), &options);
    let title = figure["layout"]["title"]["text"].as_str().expect("title");
    assert!(title.contains("<br>"));
    assert!(title.contains("Hanuschik"));
}

#[test]
fn export_of_an_empty_store_fails() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("empty.html");
    let result = write_html(&path, &SpectrumStore::default(), &HtmlOptions::default());
    assert!(result.is_err());
}
