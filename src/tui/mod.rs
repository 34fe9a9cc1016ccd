//! TUI (Text User Interface) module for the Arbiter demo
//!
//! This module provides terminal-based UI components using ratatui/crossterm:
//! the landing page, the walkthrough and the widgets they are drawn with.

pub mod app;
pub mod site_app;
pub mod theme;
pub mod ui;
pub mod widgets;

pub use app::{App, KeyResult};
pub use site_app::{DemoOptions, SiteApp, SiteState};
pub use theme::current_theme;
