// src/main.rs

use clap::Parser;
use expose_layout::constants::LOG_FILE_NAME;
use expose_layout::output::{DeliveryTarget, OutputReport};
use expose_layout::{
    CommandLineInput, ContentSource, LayoutComposer, LayoutDelivery, LayoutPipeline,
    LoadedDocument, PipelineConfig,
};
use log::LevelFilter;
use log4rs::{
    append::console::{ConsoleAppender, Target},
    append::file::FileAppender,
    config::{Appender, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
    Config,
};
use std::fs;

/// Console logs go to stderr so pipe mode output stays clean.
fn setup_logging(verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let log_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let log_file_path = std::env::temp_dir().join(LOG_FILE_NAME);
    if let Some(parent) = log_file_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let pattern = if verbose {
        "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}"
    } else {
        "{m}{n}"
    };

    let console_appender = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(pattern)))
        .build();

    let file_appender = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(
            "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}",
        )))
        .build(&log_file_path)?;

    let config = Config::builder()
        .appender(Appender::builder().build("console", Box::new(console_appender)))
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(LevelFilter::Debug)))
                .build("file", Box::new(file_appender)),
        )
        .build(
            Root::builder()
                .appender("console")
                .appender("file")
                .build(log_level),
        )?;

    log4rs::init_config(config)?;
    log::info!("Logging initialized. Log file: {}", log_file_path.display());
    Ok(())
}

/// Load, lay out, deliver.
async fn execute_pipeline(config: &PipelineConfig) -> Result<(), expose_layout::AppError> {
    let pipeline = LayoutPipeline::new(config);

    let content = pipeline.fetch().await?;
    let rendered = pipeline.compose(&content)?;
    let report = pipeline.deliver(rendered, &content)?;
    report_completion(config, &content, &report);

    Ok(())
}

fn report_completion(config: &PipelineConfig, content: &LoadedDocument, report: &OutputReport) {
    if config.pipe {
        return;
    }

    println!(
        "📄 {} ({} blocks, {})",
        content.document.display_title(),
        content.document.blocks().len(),
        if content.binding.is_some() {
            "bound"
        } else {
            "placeholders"
        }
    );
    for completed in &report.completed {
        if let DeliveryTarget::WriteFile { path, .. } = &completed.operation {
            println!("✓ {} saved to {}", config.format, path.display());
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CommandLineInput::parse();

    setup_logging(cli.verbose)?;

    let config = PipelineConfig::resolve(cli)?;

    execute_pipeline(&config).await?;

    Ok(())
}
