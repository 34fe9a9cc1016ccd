//! Page state for the landing page and the walkthrough.
//!
//! Pages hold presentation state only; drawing lives in `tui`.

pub mod demo;
pub mod landing;
pub mod route;

pub use demo::{DemoPage, STEPS};
pub use landing::{LandingPage, SECTIONS, TERMINAL_SECTION};
pub use route::Route;
