// src/main.rs

// Modules defined in the crate
mod analytics;
mod canon;
mod config;
mod constants;
mod error;
mod model;
mod output;
mod pipeline;
mod types;

// Specific imports
use crate::analytics::measure_document;
use crate::config::{CommandLineInput, InputFormat, InputSource, PipelineConfig};
use crate::error::AppError;
use crate::model::NoteDocument;
use crate::pipeline::{CanonicalComposer, CanonicalDelivery, ContentSource};
use clap::Parser;
use log::LevelFilter;
use log4rs::{
    append::console::ConsoleAppender,
    append::file::FileAppender,
    config::{Appender, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
    Config,
};
use output::{deliver, DeliveryTarget, OutputReport};
use std::fs;
use std::io::Read;
use types::CanonicalText;

/// Sets up logging configuration.
fn setup_logging(verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let log_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let log_file_path = std::env::temp_dir().join("notecanon.log");
    if let Some(parent) = log_file_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let pattern = if verbose {
        "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}"
    } else {
        "{m}{n}"
    };

    let stderr_appender = ConsoleAppender::builder()
        .target(log4rs::append::console::Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(pattern)))
        .build();

    let file_appender = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(
            "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}",
        )))
        .build(&log_file_path)?;

    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr_appender)))
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(LevelFilter::Debug)))
                .build("file", Box::new(file_appender)),
        )
        .build(
            Root::builder()
                .appender("stderr")
                .appender("file")
                .build(log_level),
        )?;

    log4rs::init_config(config)?;
    log::info!("Logging initialized. Log file: {}", log_file_path.display());
    Ok(())
}

/// Executes the three-stage pipeline: load → canonicalize → deliver.
fn execute_pipeline(config: &PipelineConfig) -> Result<(), AppError> {
    let pipeline = NotesToCanonical::new(config);

    let document = pipeline.load()?;
    let canonical = pipeline.compose(&document)?;
    let report = pipeline.deliver(canonical)?;
    pipeline.report_completion(&document, &report);

    Ok(())
}

/// Orchestrates loading, canonicalization, and delivery of note content.
struct NotesToCanonical<'a> {
    config: &'a PipelineConfig,
}

impl<'a> NotesToCanonical<'a> {
    fn new(config: &'a PipelineConfig) -> Self {
        Self { config }
    }

    fn read_input(&self) -> Result<String, AppError> {
        match &self.config.source {
            InputSource::Stdin => {
                let mut buffer = String::new();
                std::io::stdin().read_to_string(&mut buffer)?;
                Ok(buffer)
            }
            InputSource::File(path) => Ok(fs::read_to_string(path)?),
        }
    }

    /// Delivers the canonical text to configured outputs (file, clipboard,
    /// stdout).
    fn deliver_canonical(&self, canonical: CanonicalText) -> Result<OutputReport, AppError> {
        let content = canonical.into_string();
        let mut plan = output::OutputPlan::new();

        if self.config.pipe {
            plan = plan.with_operation(DeliveryTarget::PrintToStdout { content });
        } else {
            if let Some(output_path) = &self.config.output_file {
                plan = plan.with_operation(DeliveryTarget::WriteFile {
                    path: output_path.clone(),
                    content: content.clone(),
                });
            }

            if self.config.clipboard {
                plan = plan.with_operation(DeliveryTarget::CopyToClipboard {
                    content: content.clone(),
                });
            }

            // With no explicit destination, stdout is the destination.
            if self.config.output_file.is_none() && !self.config.clipboard {
                plan = plan.with_operation(DeliveryTarget::PrintToStdout { content });
            }
        }

        let report = deliver(plan)?;

        if !report.is_success() {
            return Err(AppError::DeliveryFailed {
                failures: report.failed.iter().map(|f| f.error.clone()).collect(),
            });
        }

        Ok(report)
    }

    /// Reports completion to the user with stats and delivery confirmations.
    fn report_completion(&self, document: &NoteDocument, report: &OutputReport) {
        if self.config.pipe {
            return;
        }

        let stats = measure_document(document);
        if stats.pages > 0 {
            eprintln!(
                "📄 Canonicalized {} block(s) across {} page(s) ({} diagram(s)).",
                stats.blocks, stats.pages, stats.diagram_blocks
            );
        } else {
            eprintln!("📄 Canonicalized {} block(s).", stats.blocks);
        }

        for completed in &report.completed {
            match &completed.operation {
                DeliveryTarget::WriteFile { path, .. } => {
                    eprintln!("✓ Canonical text saved to {}", path.display());
                }
                DeliveryTarget::CopyToClipboard { .. } => {
                    eprintln!("✓ Canonical text copied to clipboard");
                }
                _ => {}
            }
        }
    }
}

impl ContentSource for NotesToCanonical<'_> {
    fn load(&self) -> Result<NoteDocument, AppError> {
        log::info!("Reading input from {}", self.config.source.describe());
        let raw = self.read_input()?;

        let document = match self.config.format {
            InputFormat::Raw => NoteDocument::from_raw(raw),
            InputFormat::Json => {
                NoteDocument::from_json(&raw, &self.config.source.describe())?
            }
        };

        let stats = measure_document(&document);
        log::info!(
            "Loaded {} block(s) across {} page(s)",
            stats.blocks,
            stats.pages
        );

        Ok(document)
    }
}

impl CanonicalComposer for NotesToCanonical<'_> {
    fn compose(&self, document: &NoteDocument) -> Result<CanonicalText, AppError> {
        let canonical = document.canonical();
        match canonical {
            NoteDocument::RawBlock(block) => Ok(CanonicalText::new(block.body)),
            NoteDocument::Pages(pages) => {
                let json = serde_json::to_string_pretty(&pages).map_err(AppError::Serialize)?;
                Ok(CanonicalText::new(json))
            }
        }
    }
}

impl CanonicalDelivery for NotesToCanonical<'_> {
    fn deliver(&self, canonical: CanonicalText) -> Result<OutputReport, AppError> {
        self.deliver_canonical(canonical)
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CommandLineInput::parse();

    setup_logging(cli.verbose)?;

    let config = PipelineConfig::resolve(cli)?;

    execute_pipeline(&config)?;

    Ok(())
}
