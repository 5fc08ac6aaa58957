use chrono::Datelike;
use edm_config::shared::MappingConfig;

use crate::conversions::timestamp::{format_timestamp, parse_timestamp};
use crate::error::EdmResult;
use crate::keys;
use crate::types::{OnlineEngagementRow, RawRecord, SourceEntry};

/// Fans a raw record's nested sources out into online engagement rows,
/// one per [`SourceEntry`].
///
/// A malformed registration date on any source fails the whole record, so a
/// record never contributes a partial engagement set.
pub fn map_online_engagements(
    record: &RawRecord,
    mapping: &MappingConfig,
) -> EdmResult<Vec<OnlineEngagementRow>> {
    record
        .sources
        .iter()
        .map(|source| map_engagement(record, source, mapping))
        .collect()
}

fn map_engagement(
    record: &RawRecord,
    source: &SourceEntry,
    mapping: &MappingConfig,
) -> EdmResult<OnlineEngagementRow> {
    let reg_date = parse_timestamp(&source.reg_date)?;
    let engagement_date = format_timestamp(&reg_date);

    // The feed carries no engagement URL, so the configured placeholder is
    // both the column value and a key component.
    let url = mapping.unknown_url.clone();
    let online_engagement_key =
        keys::online_engagement_key(record.consumer_key(), &engagement_date, &url);

    Ok(OnlineEngagementRow {
        online_engagement_type: source.source_category.clone(),
        platform_name: String::new(),
        url,
        referring_url: String::new(),
        page_name: source.source_title.clone(),
        operating_system: String::new(),
        consumer_key: record.consumer_key().to_string(),
        campaign_key: format!("{}_{}", reg_date.year(), source.source_title),
        online_engagement_date: engagement_date,
        engagement_channel: mapping.engagement_channel.clone(),
        asset_key: String::new(),
        brand_key: String::new(),
        product_key: String::new(),
        online_engagement_key,
    })
}
