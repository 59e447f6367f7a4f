//! Export command implementation
//!
//! Drives the export coordinator for one meeting or a sequential batch,
//! printing progress from a bus subscription and delivering results into
//! the configured output directory.

use crate::adapters::factory::create_download_sink;
use crate::adapters::repository::MeetingRepository;
use crate::config::load_config;
use crate::core::export::ExportCoordinator;
use crate::core::registry::TemplateCatalog;
use crate::domain::options::{BrandingOptions, ExportFormat, ExportOptions};
use crate::domain::MeetingId;
use clap::Args;
use std::str::FromStr;

/// Arguments for the export command
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Meeting id(s) to export, in order
    #[arg(required_unless_present = "all")]
    pub meeting_ids: Vec<String>,

    /// Export every meeting in the store
    #[arg(long, conflicts_with = "meeting_ids")]
    pub all: bool,

    /// Target format (pdf, docx, txt, md, json)
    #[arg(short, long)]
    pub format: Option<String>,

    /// Template preset to start from
    #[arg(short, long)]
    pub template: Option<String>,

    /// Override the output directory
    #[arg(short, long)]
    pub output_dir: Option<String>,

    /// Company name rendered in the document header
    #[arg(long)]
    pub company: Option<String>,

    /// Exclude the transcript section
    #[arg(long)]
    pub no_transcript: bool,

    /// Exclude the summary section
    #[arg(long)]
    pub no_summary: bool,

    /// Exclude key points
    #[arg(long)]
    pub no_key_points: bool,

    /// Exclude action items
    #[arg(long)]
    pub no_action_items: bool,

    /// Exclude meeting metadata
    #[arg(long)]
    pub no_metadata: bool,
}

impl ExportArgs {
    /// Execute the export command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!("Starting export command");

        let mut config = load_config(config_path)?;
        if let Some(dir) = &self.output_dir {
            config.export.output_dir = dir.clone();
        }

        let options = match self.build_options(&config) {
            Ok(options) => options,
            Err(message) => {
                eprintln!("{message}");
                return Ok(2);
            }
        };

        let coordinator = ExportCoordinator::from_config(&config)?;

        let meeting_ids = if self.all {
            crate::adapters::factory::create_meeting_repository(&config)
                .list_ids()
                .await?
        } else {
            let mut ids = Vec::with_capacity(self.meeting_ids.len());
            for raw in &self.meeting_ids {
                match MeetingId::new(raw.as_str()) {
                    Ok(id) => ids.push(id),
                    Err(e) => {
                        eprintln!("Invalid meeting id '{raw}': {e}");
                        return Ok(2);
                    }
                }
            }
            ids
        };

        if meeting_ids.is_empty() {
            println!("Nothing to export.");
            return Ok(0);
        }

        // Progress lines come straight off the bus, so batch-level and
        // per-item events render the same way the library reports them.
        let subscription = coordinator.bus().subscribe(|event| {
            println!("[{:>3}%] {}", event.progress, event.message);
        });

        let results = if meeting_ids.len() == 1 {
            match coordinator.export_meeting(&meeting_ids[0], &options).await {
                Ok(result) => vec![result],
                Err(e) => {
                    subscription.unsubscribe();
                    eprintln!("Error: {e}");
                    return Ok(5);
                }
            }
        } else {
            match coordinator.export_meetings_batch(&meeting_ids, &options).await {
                Ok(results) => results,
                Err(e) => {
                    subscription.unsubscribe();
                    eprintln!("Error: {e}");
                    return Ok(5);
                }
            }
        };

        subscription.unsubscribe();

        let sink = create_download_sink(&config);
        for result in &results {
            let path = coordinator.download_export(&sink, result).await?;
            println!(
                "Wrote {} ({} bytes, {})",
                path.display(),
                result.size,
                result.content.mime_type
            );
        }

        println!("Exported {} meeting(s).", results.len());
        Ok(0)
    }

    fn build_options(
        &self,
        config: &crate::config::DossierConfig,
    ) -> std::result::Result<ExportOptions, String> {
        let template_id = self
            .template
            .as_deref()
            .unwrap_or(config.export.default_template.as_str());
        let template = TemplateCatalog::find(template_id)
            .ok_or_else(|| format!("Unknown template '{template_id}'"))?;

        let format_label = self
            .format
            .as_deref()
            .unwrap_or(config.export.default_format.as_str());
        let format = ExportFormat::from_str(format_label).map_err(|e| e.to_string())?;

        let mut options = template.options.with_format(format);
        if self.no_transcript {
            options = options.with_transcript(false);
        }
        if self.no_summary {
            options = options.with_summary(false);
        }
        if self.no_key_points {
            options = options.with_key_points(false);
        }
        if self.no_action_items {
            options = options.with_action_items(false);
        }
        if self.no_metadata {
            options = options.with_metadata(false);
        }
        if let Some(company) = &self.company {
            options = options.with_branding(BrandingOptions {
                company_name: Some(company.clone()),
                ..Default::default()
            });
        }

        Ok(options)
    }
}
