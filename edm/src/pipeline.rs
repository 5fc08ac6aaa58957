use std::sync::Arc;

use edm_config::shared::{MappingConfig, PipelineConfig};
use tokio::sync::Semaphore;
use tracing::{info, warn};

use crate::destination::Destination;
use crate::edm_error;
use crate::error::{EdmResult, ErrorKind};
use crate::mappers::map_record;
use crate::source::RecordSource;
use crate::types::{ExtractBatch, ExtractKind, RawRecord};

pub type PipelineId = u64;

/// One record the pipeline dropped, with the reason it was dropped.
#[derive(Debug, Clone)]
pub struct SkippedRecord {
    /// Position of the record in the input sequence.
    pub index: usize,
    /// Classification of the failure (malformed record, malformed date, ...).
    pub kind: ErrorKind,
    /// Human-readable detail of the failure, when available.
    pub detail: Option<String>,
}

/// Per-run summary returned to the caller.
///
/// Records are skipped individually, never aborting the batch, so the report
/// is how a caller learns that input was dropped and why.
#[derive(Debug, Clone, Default)]
pub struct RunReport {
    pub records_total: usize,
    pub records_mapped: usize,
    pub skipped: Vec<SkippedRecord>,
    /// Behaviour entries excluded because their type tag is not the
    /// recognized affinity filter. Exclusions by design, not failures.
    pub behaviours_ignored: usize,
    pub consumer_rows: usize,
    pub consent_event_rows: usize,
    pub online_engagement_rows: usize,
    pub affinity_rows: usize,
}

impl RunReport {
    /// Number of records dropped during the run.
    pub fn records_skipped(&self) -> usize {
        self.skipped.len()
    }
}

/// The fan-out pipeline: raw profile documents in, four extracts out.
///
/// For each document the pipeline deserializes a [`RawRecord`] and maps it to
/// exactly one consumer row, one consent event row, one engagement row per
/// nested source and one affinity row per recognized behaviour entry. Records
/// are mapped independently on a bounded worker pool; a record that fails to
/// deserialize or map is skipped in full while the rest of the batch
/// proceeds. Extract rows keep first-seen record order.
#[derive(Debug)]
pub struct Pipeline<S, D> {
    id: PipelineId,
    config: Arc<PipelineConfig>,
    mapping: Arc<MappingConfig>,
    source: S,
    destination: D,
}

impl<S, D> Pipeline<S, D>
where
    S: RecordSource,
    D: Destination,
{
    pub fn new(
        id: PipelineId,
        config: PipelineConfig,
        mapping: MappingConfig,
        source: S,
        destination: D,
    ) -> Self {
        Self {
            id,
            config: Arc::new(config),
            mapping: Arc::new(mapping),
            source,
            destination,
        }
    }

    pub fn id(&self) -> PipelineId {
        self.id
    }

    /// Runs the full transformation and hands the extracts to the destination.
    ///
    /// Completes the whole input sequence or fails outright; the only
    /// synchronization point is the final merge of per-record outputs before
    /// the single destination handoff.
    pub async fn run(self) -> EdmResult<RunReport> {
        info!(pipeline_id = self.id, "starting extract pipeline run");

        self.config.validate().map_err(|err| {
            edm_error!(
                ErrorKind::ConfigError,
                "Invalid pipeline configuration",
                &err,
                source: err
            )
        })?;
        self.mapping.validate().map_err(|err| {
            edm_error!(
                ErrorKind::ConfigError,
                "Invalid mapping configuration",
                &err,
                source: err
            )
        })?;

        let documents = self.source.load_documents().await?;
        let records_total = documents.len();

        info!(records = records_total, "loaded raw profile documents");

        // Records never observe each other's processing, so each one is mapped
        // on its own task; the semaphore only bounds how many run at a time.
        let semaphore = Arc::new(Semaphore::new(self.config.max_workers as usize));
        let mut handles = Vec::with_capacity(records_total);

        for document in documents {
            let semaphore = semaphore.clone();
            let mapping = self.mapping.clone();

            handles.push(tokio::spawn(async move {
                let _permit = semaphore.acquire_owned().await.map_err(|err| {
                    edm_error!(
                        ErrorKind::Unknown,
                        "Mapping worker semaphore closed unexpectedly",
                        err.to_string()
                    )
                })?;

                let record: RawRecord = serde_json::from_value(document).map_err(|err| {
                    edm_error!(
                        ErrorKind::MalformedRecord,
                        "Raw document does not match the expected record shape",
                        err.to_string(),
                        source: err
                    )
                })?;

                map_record(&record, &mapping)
            }));
        }

        let mut extracts = ExtractBatch::default();
        let mut report = RunReport {
            records_total,
            ..Default::default()
        };

        // Awaiting the handles in spawn order keeps extract row order stable
        // regardless of which workers finish first.
        for (index, handle) in handles.into_iter().enumerate() {
            let result = handle.await.map_err(|err| {
                edm_error!(
                    ErrorKind::MappingWorkerPanic,
                    "Record mapping task panicked",
                    format!("record index {index}: {err}")
                )
            })?;

            match result {
                Ok(output) => {
                    report.records_mapped += 1;
                    report.behaviours_ignored += output.behaviours_ignored;
                    extracts.merge(output.rows);
                }
                Err(err) => {
                    warn!(
                        record_index = index,
                        kind = ?err.kind(),
                        error = %err,
                        "skipping record, the rest of the batch proceeds"
                    );

                    report.skipped.push(SkippedRecord {
                        index,
                        kind: err.kind(),
                        detail: err.detail().map(str::to_string),
                    });
                }
            }
        }

        report.consumer_rows = extracts.len(ExtractKind::Consumer);
        report.consent_event_rows = extracts.len(ExtractKind::ConsentEvent);
        report.online_engagement_rows = extracts.len(ExtractKind::OnlineEngagement);
        report.affinity_rows = extracts.len(ExtractKind::Affinity);

        info!(
            pipeline_id = self.id,
            records_mapped = report.records_mapped,
            records_skipped = report.records_skipped(),
            behaviours_ignored = report.behaviours_ignored,
            consumer_rows = report.consumer_rows,
            consent_event_rows = report.consent_event_rows,
            online_engagement_rows = report.online_engagement_rows,
            affinity_rows = report.affinity_rows,
            "record mapping completed, delivering extracts"
        );

        self.destination.write_extracts(extracts).await?;
        self.destination.shutdown().await?;

        Ok(report)
    }
}
