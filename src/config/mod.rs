pub mod cli;

use crate::utils::error::Result;
use crate::utils::validation::{validate_log_filter, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "gateway")]
#[command(about = "Bootstrap entry point for the LinkSphere gateway")]
pub struct CliConfig {
    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Tracing filter directives, overrides RUST_LOG")]
    pub log_filter: Option<String>,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(directives) = &self.log_filter {
            validate_log_filter("log_filter", directives)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_default_config() {
        let config = CliConfig {
            verbose: false,
            log_filter: None,
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_blank_log_filter() {
        let config = CliConfig {
            verbose: false,
            log_filter: Some("   ".to_string()),
        };
        assert!(config.validate().is_err());
    }
}
