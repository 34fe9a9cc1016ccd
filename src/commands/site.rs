//! Landing and demo subcommand handlers.

use std::time::Duration;

use anyhow::Result;
use tracing::info;

use arbiter_demo::data::{demo_functions, pypi_dataset};
use arbiter_demo::pages::Route;
use arbiter_demo::tui::{DemoOptions, SiteApp};
use arbiter_demo::Config;

/// Walkthrough options from the config and the command line.
///
/// `step` and `function` are 1-based as typed by the user.
pub fn demo_options(config: &Config, step: Option<u8>, function: Option<u16>) -> DemoOptions {
    DemoOptions {
        timing: config.playback_timing(),
        score_delay: Duration::from_millis(config.demo.score_reveal_delay_ms),
        function: function
            .map(|f| usize::from(f) - 1)
            .unwrap_or(config.demo.default_function),
        step: step.map(|s| usize::from(s) - 1).unwrap_or(0),
    }
}

/// Open the site on `route`.
#[cfg(not(tarpaulin_include))]
pub fn handle_site(config: &Config, route: Route, options: DemoOptions) -> Result<()> {
    let dataset = pypi_dataset()?;
    let functions = demo_functions()?;
    if options.function >= functions.len() {
        anyhow::bail!(
            "No demo function #{} (there are {})",
            options.function + 1,
            functions.len()
        );
    }

    info!(route = %route, "opening site");
    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms.max(1));
    let mut app = SiteApp::new(dataset, functions, options, tick_rate)?.with_route(route);
    app.run()
}
