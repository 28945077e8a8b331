//! Desktop host for the sky spectrum viewer.

pub mod adapter;
pub mod app;

pub use adapter::SelectionAdapter;
pub use app::ViewerApp;
