/*
Transform Example

Reads one JSON consumer profile document per file from a directory, runs the
extract pipeline over them, and writes the four extracts as JSON-lines files
to an output directory.

Usage:
    cargo run --example transform -- \
        --profiles-dir ./profiles \
        --output-dir ./extracts
*/

use std::error::Error;
use std::fs;
use std::path::PathBuf;

use clap::Parser;
use edm::destination::Destination;
use edm::error::EdmResult;
use edm::pipeline::Pipeline;
use edm::source::memory::MemoryRecordSource;
use edm::types::{ExtractBatch, ExtractKind};
use edm_config::shared::{MappingConfig, PipelineConfig};
use edm_telemetry::tracing::init_tracing;
use serde::Serialize;
use tracing::{error, info};

#[derive(Debug, Parser)]
#[command(name = "transform", version, about, arg_required_else_help = true)]
struct AppArgs {
    /// Directory containing one JSON profile document per file
    #[arg(long)]
    profiles_dir: PathBuf,

    /// Directory the extract files are written to
    #[arg(long)]
    output_dir: PathBuf,

    /// Maximum number of concurrent mapping workers
    #[arg(long, default_value = "4")]
    max_workers: u16,
}

/// Writes each extract as one JSON-lines file named after its table.
#[derive(Debug, Clone)]
struct JsonLinesDestination {
    output_dir: PathBuf,
}

impl JsonLinesDestination {
    fn write_table<T: Serialize>(&self, kind: ExtractKind, rows: &[T]) -> EdmResult<()> {
        let mut lines = String::new();
        for row in rows {
            lines.push_str(&serde_json::to_string(row)?);
            lines.push('\n');
        }

        let path = self
            .output_dir
            .join(format!("{}.jsonl", kind.table_name().to_lowercase()));
        fs::write(&path, lines)?;

        info!(extract = %kind, rows = rows.len(), path = %path.display(), "extract written");

        Ok(())
    }
}

impl Destination for JsonLinesDestination {
    fn name() -> &'static str {
        "json-lines"
    }

    async fn write_extracts(&self, extracts: ExtractBatch) -> EdmResult<()> {
        self.write_table(ExtractKind::Consumer, &extracts.consumers)?;
        self.write_table(ExtractKind::ConsentEvent, &extracts.consent_events)?;
        self.write_table(ExtractKind::OnlineEngagement, &extracts.online_engagements)?;
        self.write_table(ExtractKind::Affinity, &extracts.affinities)?;

        Ok(())
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    init_tracing("transform=info,edm=info");

    if let Err(e) = main_impl().await {
        error!("{e}");
        std::process::exit(1);
    }

    Ok(())
}

async fn main_impl() -> Result<(), Box<dyn Error>> {
    let args = AppArgs::parse();

    let mut documents = Vec::new();
    for entry in fs::read_dir(&args.profiles_dir)? {
        let path = entry?.path();
        if path.extension().is_some_and(|ext| ext == "json") {
            let raw = fs::read_to_string(&path)?;
            documents.push(serde_json::from_str(&raw)?);
        }
    }

    info!(
        documents = documents.len(),
        profiles_dir = %args.profiles_dir.display(),
        "loaded profile documents"
    );

    fs::create_dir_all(&args.output_dir)?;

    let pipeline_config = PipelineConfig {
        id: 1,
        source_location: args.profiles_dir.display().to_string(),
        sink_location: args.output_dir.display().to_string(),
        max_workers: args.max_workers,
    };

    let pipeline = Pipeline::new(
        1,
        pipeline_config,
        MappingConfig::default(),
        MemoryRecordSource::new(documents),
        JsonLinesDestination {
            output_dir: args.output_dir,
        },
    );

    let report = pipeline.run().await?;

    info!(
        records_mapped = report.records_mapped,
        records_skipped = report.records_skipped(),
        "transformation completed"
    );
    for skipped in &report.skipped {
        info!(
            record_index = skipped.index,
            kind = ?skipped.kind,
            detail = skipped.detail.as_deref().unwrap_or(""),
            "record was skipped"
        );
    }

    Ok(())
}
