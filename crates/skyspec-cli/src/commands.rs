use anyhow::{Context, Result};
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{ContentArrangement, Table};
use tracing::info;

use skyspec_export::{HtmlOptions, enumerate_unit_combos, enumerate_visibility_presets, write_html};
use skyspec_ingest::load_store;
use skyspec_model::SpectrumStore;

use crate::cli::{ActionsArgs, ExportArgs};

pub fn run_export(args: &ExportArgs) -> Result<()> {
    let store = load_store(&args.spectrum_a, &args.spectrum_b).context("load spectra")?;
    let samples: usize = store.iter().map(|s| s.len()).sum();
    info!(spectra = store.len(), samples, "store loaded");

    let mut options = HtmlOptions::default();
    if let Some(title) = &args.title {
        options.title = title.clone();
    }
    options.subtitle = args.subtitle.clone();
    options.source_link = args.source_link.clone();

    write_html(&args.output, &store, &options)
        .with_context(|| format!("export artifact: {}", args.output.display()))?;
    println!("wrote {}", args.output.display());
    Ok(())
}

pub fn run_actions(args: &ActionsArgs) -> Result<()> {
    let store = load_store(&args.spectrum_a, &args.spectrum_b).context("load spectra")?;
    let table = actions_table(&store);
    println!("{table}");
    Ok(())
}

/// Tabulate the enumerated menu actions: the four unit combinations
/// and the curated visibility presets, each with what its patch
/// applies.
pub(crate) fn actions_table(store: &SpectrumStore) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Menu", "Label", "Applies"]);
    apply_table_style(&mut table);

    for action in enumerate_unit_combos(store) {
        table.add_row(vec![
            "Units".to_string(),
            action.label.clone(),
            format!("{}; {}", action.x_axis_label, action.y_axis_label),
        ]);
    }
    for action in enumerate_visibility_presets(store) {
        let shown: Vec<&str> = store
            .names()
            .into_iter()
            .zip(&action.visible)
            .filter(|(_, visible)| **visible)
            .map(|(name, _)| name)
            .collect();
        table.add_row(vec![
            "Visibility".to_string(),
            action.label.clone(),
            shown.join(", "),
        ]);
    }
    table
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}
