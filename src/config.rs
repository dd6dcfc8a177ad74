// src/config.rs

use clap::Parser;
use std::time::Duration;
use url::Url;

pub const DEFAULT_SERVER: &str = "http://127.0.0.1:5000/";

/// Terminal client for the movie review sentiment service.
#[derive(Debug, Clone, Parser)]
#[command(name = "critic-tui", version, about)]
pub struct Cli {
    /// Base URL of the analysis service.
    #[arg(long, env = "CRITIC_TUI_SERVER", default_value = DEFAULT_SERVER)]
    pub server: Url,

    /// UI refresh and spinner interval, in milliseconds.
    #[arg(long, default_value_t = 100, value_parser = clap::value_parser!(u64).range(10..=2000))]
    pub tick_rate: u64,
}

impl Cli {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate)
    }
}
