pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::config::{cli::StdoutConsole, CliConfig};
pub use crate::core::{app::GatewayApp, greeter::PlainGreeter};
pub use crate::utils::error::{GatewayError, Result};
