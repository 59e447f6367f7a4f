//! Validate-config command implementation

use crate::config::load_config;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        match load_config(config_path) {
            Ok(config) => {
                println!("Configuration is valid: {config_path}");
                println!("  meeting store: {}", config.storage.meetings_path);
                println!("  history:       {}", config.storage.history_path);
                println!("  output dir:    {}", config.export.output_dir);
                println!("  converter:     {}", config.export.converter_tool);
                Ok(0)
            }
            Err(e) => {
                eprintln!("Configuration validation failed: {e}");
                Ok(2)
            }
        }
    }
}
