//! Templates command implementation
//!
//! Prints the template catalog with each preset's section toggles.

use crate::core::registry::TemplateCatalog;
use clap::Args;

/// Arguments for the templates command
#[derive(Args, Debug)]
pub struct TemplatesArgs {}

impl TemplatesArgs {
    /// Execute the templates command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        for template in TemplateCatalog::list() {
            let o = &template.options;
            let mut sections = Vec::new();
            if o.include_transcript {
                sections.push("transcript");
            }
            if o.include_summary {
                sections.push("summary");
            }
            if o.include_key_points {
                sections.push("key points");
            }
            if o.include_action_items {
                sections.push("action items");
            }
            if o.include_metadata {
                sections.push("metadata");
            }

            println!("{} - {}", template.id, template.name);
            println!("  {}", template.description);
            println!("  sections: {}", sections.join(", "));
        }

        Ok(0)
    }
}
