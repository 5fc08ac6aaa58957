use edm_config::shared::MappingConfig;
use tracing::debug;

use crate::keys;
use crate::types::{AffinityRow, RawRecord};

/// Fans a raw record's behaviour entries out into affinity rows.
///
/// Filtering fan-out: only entries whose type tag equals the configured
/// behaviour filter produce a row; everything else is excluded by design and
/// returned as the ignored count so runs can tell exclusions apart from
/// failures. A record with no matching entry contributes zero affinity rows,
/// never a placeholder.
pub fn map_affinities(
    record: &RawRecord,
    mapping: &MappingConfig,
) -> (Vec<AffinityRow>, usize) {
    let mut rows = Vec::new();
    let mut ignored = 0;

    for behaviour in &record.behaviour {
        if behaviour.kind != mapping.affinity.behaviour_filter {
            debug!(
                behaviour_type = %behaviour.kind,
                consumer_key = %record.consumer_key(),
                "behaviour type not recognized as an affinity signal, excluding"
            );
            ignored += 1;
            continue;
        }

        let subcategory = behaviour.value.to_uppercase();
        let affinity_key =
            keys::affinity_key(record.consumer_key(), &mapping.affinity.category, &subcategory);

        rows.push(AffinityRow {
            consumer_key: record.consumer_key().to_string(),
            affinity_key,
            affinity_category: mapping.affinity.category.clone(),
            affinity_subcategory: subcategory.clone(),
            affinity_value: subcategory,
            affinity_type: mapping.affinity.declared_type.clone(),
            affinity_score: mapping.affinity.score.clone(),
            affinity_last_modified_date: String::new(),
        });
    }

    (rows, ignored)
}
