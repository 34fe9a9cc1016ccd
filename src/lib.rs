//! Arbiter demo
//!
//! Terminal rendition of the Arbiter marketing site: a landing page whose
//! live terminal replays a PyPI task-generation run, and a four-step
//! investor walkthrough of the scoring loop. The heart of both is the
//! [`reveal::LineRevealer`], which plays lines back as if typed live.

pub mod cli;
pub mod config;
pub mod data;
pub mod logging;
pub mod pages;
pub mod reveal;
pub mod scoring;
pub mod tui;

pub use config::Config;
pub use tui::theme;
