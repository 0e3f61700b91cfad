//! Logging utilities.
//!
//! The crate logs through the `log` facade only. Applications that want the
//! bundled `env_logger` setup call [`init_logging`] early in `main`.

mod init;

pub use init::{init_logging, LoggingConfig};
