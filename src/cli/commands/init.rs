//! Init command implementation
//!
//! Writes a starter configuration file, optionally with a sample meeting
//! store to export from right away.

use clap::Args;
use std::path::Path;

const DEFAULT_CONFIG: &str = r#"# Dossier configuration

[application]
log_level = "info"

[storage]
meetings_path = "meetings.json"
history_path = "exports.jsonl"

[export]
output_dir = "exports"
default_format = "pdf"
default_template = "professional"
converter_tool = "pandoc"

[logging]
local_enabled = false
local_path = "logs"
local_rotation = "daily"
"#;

const SAMPLE_MEETINGS: &str = r#"[
  {
    "id": "weekly-sync",
    "title": "Weekly Sync",
    "occurred_at": "2026-08-03T09:00:00Z",
    "duration_minutes": 30,
    "participants": ["Ada", "Grace", "Edsger"],
    "transcript": [
      { "speaker": "Ada", "text": "Let's run through the sprint board." },
      { "speaker": "Grace", "text": "The importer landed, docs are pending." }
    ],
    "summary": "Sprint on track; importer shipped, documentation remains.",
    "key_points": ["Importer shipped", "Docs pending"],
    "action_items": [
      { "description": "Write importer docs", "owner": "Grace", "due": "2026-08-10" }
    ]
  }
]
"#;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path of the configuration file to create
    #[arg(short, long, default_value = "dossier.toml")]
    pub output: String,

    /// Also create a sample meetings.json
    #[arg(long)]
    pub with_sample: bool,

    /// Overwrite existing files
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        if Path::new(&self.output).exists() && !self.force {
            eprintln!("{} already exists (use --force to overwrite)", self.output);
            return Ok(2);
        }

        tokio::fs::write(&self.output, DEFAULT_CONFIG).await?;
        println!("Wrote {}", self.output);

        if self.with_sample {
            if Path::new("meetings.json").exists() && !self.force {
                eprintln!("meetings.json already exists (use --force to overwrite)");
                return Ok(2);
            }
            tokio::fs::write("meetings.json", SAMPLE_MEETINGS).await?;
            println!("Wrote meetings.json");
        }

        Ok(0)
    }
}
