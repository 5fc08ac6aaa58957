//! Schema mappers: pure functions from a raw record (and, for the fan-out
//! schemas, its nested sub-entries) to rows of the four target extracts.

mod affinity;
mod consent_event;
mod consumer;
mod online_engagement;

pub use affinity::map_affinities;
pub use consent_event::map_consent_event;
pub use consumer::map_consumer;
pub use online_engagement::map_online_engagements;

use edm_config::shared::MappingConfig;

use crate::bail;
use crate::error::{EdmResult, ErrorKind};
use crate::types::{ExtractBatch, RawRecord};

/// Everything one raw record contributes to the extracts.
///
/// Exactly one consumer row and one consent event row per record, plus one
/// engagement row per nested source and one affinity row per recognized
/// behaviour entry.
#[derive(Debug, Clone, Default)]
pub struct RecordOutput {
    pub rows: ExtractBatch,
    /// Behaviour entries whose type tag is not the recognized affinity
    /// filter. Excluded by design, but counted so runs can tell exclusions
    /// apart from failures.
    pub behaviours_ignored: usize,
}

/// Maps one raw record into its full extract contribution.
///
/// Pure with respect to the record: no cross-record state is read or
/// written. Any error leaves all four extracts untouched for this record,
/// so a record either contributes completely or not at all.
pub fn map_record(record: &RawRecord, mapping: &MappingConfig) -> EdmResult<RecordOutput> {
    if record.consumer_key().is_empty() {
        bail!(
            ErrorKind::MalformedRecord,
            "Record carries an empty identity hash"
        );
    }

    let consumer = map_consumer(record, mapping);
    let consent_event = map_consent_event(record, mapping)?;
    let online_engagements = map_online_engagements(record, mapping)?;
    let (affinities, behaviours_ignored) = map_affinities(record, mapping);

    Ok(RecordOutput {
        rows: ExtractBatch {
            consumers: vec![consumer],
            consent_events: vec![consent_event],
            online_engagements,
            affinities,
        },
        behaviours_ignored,
    })
}
