//! Static export for the sky spectrum viewer.
//!
//! The enumerator sweeps the selection space once, before any client
//! interaction exists, and the HTML writer embeds the results as
//! self-applying menu actions in a standalone document.

pub mod enumerate;
pub mod html;

pub use enumerate::{
    UnitCombo, UnitComboAction, VisibilityAction, enumerate_unit_combos,
    enumerate_visibility_presets,
};
pub use html::{HtmlOptions, X_TICK_FORMAT, build_figure, write_html};
