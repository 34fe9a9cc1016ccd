//! Integration tests for arbiter-demo

mod helpers;

mod cli_test;
mod config_test;
mod play_test;
mod revealer_test;
mod site_test;
