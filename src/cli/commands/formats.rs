//! Formats command implementation
//!
//! Prints the format table with live capability probes.

use crate::adapters::factory::create_format_registry;
use crate::config::load_config;
use clap::Args;

/// Arguments for the formats command
#[derive(Args, Debug)]
pub struct FormatsArgs {}

impl FormatsArgs {
    /// Execute the formats command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let config = load_config(config_path)?;
        let registry = create_format_registry(&config);

        println!("{:<6} {:<16} {:<10} DESCRIPTION", "FORMAT", "NAME", "SUPPORTED");
        for descriptor in registry.list_formats() {
            println!(
                "{:<6} {:<16} {:<10} {}",
                descriptor.format,
                descriptor.name,
                if descriptor.supported { "yes" } else { "no" },
                descriptor.description
            );
        }

        Ok(0)
    }
}
