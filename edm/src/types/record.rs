use serde::Deserialize;

/// A single raw consumer profile as delivered by the upstream feed.
///
/// One JSON document corresponds to one [`RawRecord`]. Field names follow the
/// feed, not the target model; every field listed here is required by the
/// feed contract except `media_consent`, whose absence is treated as consent
/// not given. A document that fails to deserialize into this shape is a
/// malformed record and is skipped by the pipeline.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawRecord {
    pub hashed_information: HashedInformation,
    pub email: String,
    pub name: String,
    pub surname: String,
    pub gender: String,
    pub birth_date: String,
    pub mobile_phone_fb: String,
    pub address: String,
    pub district: String,
    pub zipcode: String,
    pub city: String,
    pub state: String,
    pub country: String,
    #[serde(default)]
    pub media_consent: String,
    pub update_date: String,
    pub sources: Vec<SourceEntry>,
    pub behaviour: Vec<BehaviourEntry>,
}

impl RawRecord {
    /// Returns the identity hash that keys this consumer across all extracts.
    pub fn consumer_key(&self) -> &str {
        &self.hashed_information.email_hash
    }
}

/// Pre-hashed identity information carried by the feed.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HashedInformation {
    pub email_hash: String,
}

/// One engagement source nested inside a raw profile.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SourceEntry {
    pub reg_date: String,
    pub source_category: String,
    pub source_title: String,
}

/// One behavioural signal nested inside a raw profile.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BehaviourEntry {
    /// Free-text type tag; only recognized tags produce affinity rows.
    #[serde(rename = "type")]
    pub kind: String,
    pub value: String,
}
