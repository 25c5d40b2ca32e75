//! volscore
//!
//! Computes a clamped high-low volatility score for a Binance DEX market by
//! paging through 5-minute klines one day at a time.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;
