//! Interactive site: the landing page and the walkthrough behind one
//! event loop.
//!
//! [`SiteState`] holds everything that changes over time and is generic over
//! the clock so it can be driven by hand in tests. [`SiteApp`] pairs it with
//! a real terminal.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::Frame;
use tracing::info;

use super::app::demo_view::{demo_status, render_demo};
use super::app::landing_view::{landing_status, render_landing};
use super::app::layout::{build_page_layout, render_header};
use super::app::modals::render_help_modal;
use super::app::status_footer::{footer_keys, render_footer, render_status_line};
use super::app::{handle_demo_key, handle_landing_key, App, KeyResult};
use crate::data::{DemoFunction, PyPIDataset};
use crate::pages::{DemoPage, LandingPage, Route};
use crate::reveal::{Clock, RevealTiming, SystemClock};

/// How the walkthrough opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoOptions {
    pub timing: RevealTiming,
    pub score_delay: Duration,
    /// Function selected on entry
    pub function: usize,
    /// Step shown on entry
    pub step: usize,
}

impl Default for DemoOptions {
    fn default() -> Self {
        Self {
            timing: RevealTiming::default(),
            score_delay: Duration::from_millis(300),
            function: 0,
            step: 0,
        }
    }
}

/// Route, pages and overlays.
#[derive(Debug)]
pub struct SiteState<C: Clock + Clone> {
    clock: C,
    route: Route,
    dataset: &'static PyPIDataset,
    /// Rebuilt on every return from the walkthrough
    landing: LandingPage<C>,
    /// Built on entry to the walkthrough, dropped on exit
    demo: Option<DemoPage<C>>,
    functions: &'static [DemoFunction],
    options: DemoOptions,
    show_help: bool,
}

impl<C: Clock + Clone> SiteState<C> {
    pub fn new(
        dataset: &'static PyPIDataset,
        functions: &'static [DemoFunction],
        clock: C,
        options: DemoOptions,
    ) -> Self {
        Self {
            landing: LandingPage::new(dataset, clock.clone(), options.timing),
            clock,
            route: Route::Landing,
            dataset,
            demo: None,
            functions,
            options,
            show_help: false,
        }
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn landing(&self) -> &LandingPage<C> {
        &self.landing
    }

    pub fn demo(&self) -> Option<&DemoPage<C>> {
        self.demo.as_ref()
    }

    pub fn show_help(&self) -> bool {
        self.show_help
    }

    /// Switch pages. The page entered starts fresh, the one left is dropped.
    pub fn navigate(&mut self, route: Route) {
        self.route = route;
        match route {
            Route::Demo => {
                let mut page = DemoPage::new(
                    self.functions,
                    self.clock.clone(),
                    self.options.timing,
                    self.options.score_delay,
                );
                page.select_function(self.options.function);
                page.go_to_step(self.options.step);
                self.demo = Some(page);
            }
            Route::Landing => {
                self.demo = None;
                self.landing =
                    LandingPage::new(self.dataset, self.clock.clone(), self.options.timing);
            }
        }
        info!(route = %route, "navigated");
    }

    /// Handle one key press.
    pub fn handle_key(&mut self, key: KeyEvent) -> KeyResult {
        if self.show_help {
            self.show_help = false;
            return KeyResult::Continue;
        }
        if key.code == KeyCode::Char('?') {
            self.show_help = true;
            return KeyResult::Continue;
        }

        let result = match (self.route, self.demo.as_mut()) {
            (Route::Demo, Some(page)) => handle_demo_key(page, key),
            _ => handle_landing_key(&mut self.landing, key),
        };
        if let KeyResult::Navigate(route) = result {
            self.navigate(route);
            return KeyResult::Continue;
        }
        result
    }

    /// Advance the visible page. Returns true when a redraw is needed.
    pub fn tick(&mut self) -> bool {
        match (self.route, self.demo.as_mut()) {
            (Route::Demo, Some(page)) => page.tick(),
            _ => self.landing.tick(),
        }
    }

    /// Time until the visible page next changes.
    pub fn time_until_next(&self) -> Option<Duration> {
        match (self.route, self.demo.as_ref()) {
            (Route::Demo, Some(page)) => page.time_until_next(),
            _ => self.landing.time_until_next(),
        }
    }

    pub fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        let [header, body, status, footer] = build_page_layout(area);

        render_header(frame, header, self.route);
        let status_text = match (self.route, self.demo.as_ref()) {
            (Route::Demo, Some(page)) => {
                render_demo(frame, body, page);
                demo_status(page)
            }
            _ => {
                render_landing(frame, body, &self.landing);
                landing_status(&self.landing)
            }
        };
        render_status_line(frame, status, &status_text);
        render_footer(frame, footer, footer_keys(self.route));

        if self.show_help {
            render_help_modal(frame, area, self.route);
        }
    }
}

/// The site on a real terminal.
pub struct SiteApp {
    app: App,
    state: SiteState<SystemClock>,
}

impl SiteApp {
    pub fn new(
        dataset: &'static PyPIDataset,
        functions: &'static [DemoFunction],
        options: DemoOptions,
        tick_rate: Duration,
    ) -> Result<Self> {
        let app = App::new(tick_rate)?;
        let state = SiteState::new(dataset, functions, SystemClock::new(), options);
        Ok(Self { app, state })
    }

    /// Open on `route` instead of the landing page.
    pub fn with_route(mut self, route: Route) -> Self {
        if route != Route::Landing {
            self.state.navigate(route);
        }
        self
    }

    /// Run until the user quits.
    pub fn run(&mut self) -> Result<()> {
        let mut needs_render = true;
        loop {
            if needs_render {
                let state = &self.state;
                self.app.draw(|frame| state.render(frame))?;
                needs_render = false;
            }

            match self.app.next_event(self.state.time_until_next())? {
                Some(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    if self.state.handle_key(key) == KeyResult::Quit {
                        break;
                    }
                    needs_render = true;
                }
                Some(Event::Resize(..)) => needs_render = true,
                _ => {}
            }

            if self.state.tick() {
                needs_render = true;
            }
        }
        info!("site closed");
        Ok(())
    }
}
