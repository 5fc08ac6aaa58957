use edm_config::shared::MappingConfig;

use crate::conversions::consent::consent_label;
use crate::conversions::timestamp::{format_timestamp, parse_timestamp};
use crate::error::EdmResult;
use crate::keys;
use crate::types::{ConsentEventRow, RawRecord};

/// Placeholder sub-level of the consent hierarchy; the feed carries none.
const CONSENT_SUB_LEVEL: &str = "";

/// Maps a raw record to its single consent event row.
///
/// The consent date is the record's last-modified timestamp canonicalized;
/// a malformed timestamp fails the whole record. The operating company,
/// purpose and channel values come from [`MappingConfig`], never from
/// literals in this function.
pub fn map_consent_event(
    record: &RawRecord,
    mapping: &MappingConfig,
) -> EdmResult<ConsentEventRow> {
    let consent_date = format_timestamp(&parse_timestamp(&record.update_date)?);
    let consent_status = consent_label(&record.media_consent);

    let consent_event_key = keys::consent_event_key(
        record.consumer_key(),
        &consent_date,
        consent_status,
        &mapping.opco_key_code,
        CONSENT_SUB_LEVEL,
    );

    Ok(ConsentEventRow {
        consumer_key: record.consumer_key().to_string(),
        consent_event_key,
        data_collection_type: mapping.data_collection_type.clone(),
        consent_sub_level: CONSENT_SUB_LEVEL.to_string(),
        opco: mapping.opco.clone(),
        legal_text: String::new(),
        consent_date,
        data_use_purpose: mapping.data_use_purpose.clone(),
        consent_status: consent_status.to_string(),
        data_use_channel: mapping.data_use_channel.clone(),
    })
}
