use crate::cli::Args;
use crate::domain::value_objects::market::MarketId;
use crate::domain::value_objects::time_window::TimeWindow;
use thiserror::Error;

/// Log filter used when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "volscore=info";
/// Log filter used in verbose mode when `RUST_LOG` is unset
pub const VERBOSE_LOG_FILTER: &str = "volscore=debug";

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Timestamp out of range: start={start_ms}ms end={end_ms}ms")]
    InvalidTimestamp { start_ms: i64, end_ms: i64 },
}

/// Resolved invocation parameters
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub window: TimeWindow,
    pub market: MarketId,
    pub verbose: bool,
}

impl AppConfig {
    pub fn from_args(args: &Args) -> Result<AppConfig, ConfigError> {
        let window =
            TimeWindow::from_millis(args.start, args.end).ok_or(ConfigError::InvalidTimestamp {
                start_ms: args.start,
                end_ms: args.end,
            })?;

        Ok(AppConfig {
            window,
            market: MarketId::from_symbol(&args.symbol),
            verbose: args.verbose,
        })
    }

    pub fn log_filter(&self) -> &'static str {
        if self.verbose {
            VERBOSE_LOG_FILTER
        } else {
            DEFAULT_LOG_FILTER
        }
    }
}
