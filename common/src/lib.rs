//! Shared process-level plumbing for the debugquest workspace: environment
//! configuration and logger setup. Library crates log through the `log`/`tracing`
//! facades; binaries call [`config::Config::init`] and [`logger::init_logger`]
//! once at startup.

pub mod config;
pub mod logger;
