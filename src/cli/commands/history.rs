//! History command implementation
//!
//! Shows the newest entries of the export history.

use crate::adapters::factory::create_history_sink;
use crate::adapters::history::ExportHistorySink;
use crate::config::load_config;
use clap::Args;

/// Arguments for the history command
#[derive(Args, Debug)]
pub struct HistoryArgs {
    /// Maximum number of entries to show
    #[arg(short, long, default_value_t = 20)]
    pub limit: usize,
}

impl HistoryArgs {
    /// Execute the history command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let config = load_config(config_path)?;
        let sink = create_history_sink(&config);

        let records = sink.recent(self.limit).await?;
        if records.is_empty() {
            println!("No exports recorded yet.");
            return Ok(0);
        }

        for record in records {
            println!(
                "{}  {:<8} {:>10} B  {}  ({})",
                record.exported_at.format("%Y-%m-%d %H:%M:%S"),
                record.format,
                record.size,
                record.filename,
                record.meeting_id
            );
        }

        Ok(0)
    }
}
