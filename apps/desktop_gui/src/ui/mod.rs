//! UI layer for the desktop app: app shell, presentation panels, and theme.

pub mod app;
pub mod panels;
pub mod theme;

pub use app::FactsApp;
