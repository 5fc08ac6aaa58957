use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::shared::ValidationError;

/// Business constants applied by the schema mappers.
///
/// These values are override points of the target data model, not algorithmic
/// truths, so they are carried in configuration rather than hardcoded in the
/// mapping code. The defaults match the values observed in the upstream feed
/// for the Brazilian operating company.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct MappingConfig {
    /// Operating company label emitted in the `OpCo` column of consent events.
    #[serde(default = "default_opco")]
    pub opco: String,
    /// Operating company code used as a component of the consent event key.
    ///
    /// Kept separate from [`MappingConfig::opco`] because the upstream model
    /// keys consent events on the bare company code, not the column label.
    #[serde(default = "default_opco_key_code")]
    pub opco_key_code: String,
    /// Value of the `Data_Collection_Type` consent column.
    #[serde(default = "default_data_collection_type")]
    pub data_collection_type: String,
    /// Value of the `Data_Use_Purpose` consent column.
    #[serde(default = "default_data_use_purpose")]
    pub data_use_purpose: String,
    /// Value of the `Data_Use_Channel` consent column.
    #[serde(default = "default_data_use_channel")]
    pub data_use_channel: String,
    /// Value of the `Engagement_Channel` online engagement column.
    #[serde(default = "default_engagement_channel")]
    pub engagement_channel: String,
    /// Placeholder URL emitted when an engagement URL cannot be resolved
    /// from the source data.
    #[serde(default = "default_unknown_url")]
    pub unknown_url: String,
    /// Affinity mapping constants.
    #[serde(default)]
    pub affinity: AffinityConfig,
    /// Country alias table: ISO 3166-1 alpha-2 code to the lowercased country
    /// names that map to it. Extending this table adds countries without
    /// touching the mapping code.
    #[serde(default = "default_country_aliases")]
    pub country_aliases: BTreeMap<String, Vec<String>>,
}

impl MappingConfig {
    /// Validates mapping configuration settings.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.affinity.behaviour_filter.is_empty() {
            return Err(ValidationError::InvalidFieldValue {
                field: "affinity.behaviour_filter".to_string(),
                constraint: "must not be empty".to_string(),
            });
        }

        Ok(())
    }
}

impl Default for MappingConfig {
    fn default() -> Self {
        Self {
            opco: default_opco(),
            opco_key_code: default_opco_key_code(),
            data_collection_type: default_data_collection_type(),
            data_use_purpose: default_data_use_purpose(),
            data_use_channel: default_data_use_channel(),
            engagement_channel: default_engagement_channel(),
            unknown_url: default_unknown_url(),
            affinity: AffinityConfig::default(),
            country_aliases: default_country_aliases(),
        }
    }
}

/// Constants applied when fanning behaviour entries out into affinity rows.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct AffinityConfig {
    /// Behaviour type tag recognized as an affinity signal; all other tags
    /// are excluded from the affinity extract.
    #[serde(default = "default_behaviour_filter")]
    pub behaviour_filter: String,
    /// Value of the `Affinity_Category` column shared by all affinity rows.
    #[serde(default = "default_affinity_category")]
    pub category: String,
    /// Value of the `Affinity_Type` column.
    #[serde(default = "default_affinity_type")]
    pub declared_type: String,
    /// Value of the `Affinity_Score` column.
    #[serde(default = "default_affinity_score")]
    pub score: String,
}

impl Default for AffinityConfig {
    fn default() -> Self {
        Self {
            behaviour_filter: default_behaviour_filter(),
            category: default_affinity_category(),
            declared_type: default_affinity_type(),
            score: default_affinity_score(),
        }
    }
}

fn default_opco() -> String {
    "BR001OC".to_string()
}

fn default_opco_key_code() -> String {
    "BR001".to_string()
}

fn default_data_collection_type() -> String {
    "First Party".to_string()
}

fn default_data_use_purpose() -> String {
    "Marketing".to_string()
}

fn default_data_use_channel() -> String {
    "Omnichannel".to_string()
}

fn default_engagement_channel() -> String {
    "Online".to_string()
}

fn default_unknown_url() -> String {
    "www.unknown.com".to_string()
}

fn default_behaviour_filter() -> String {
    "brand_interest".to_string()
}

fn default_affinity_category() -> String {
    "ALCOHOLIC_BEER".to_string()
}

fn default_affinity_type() -> String {
    "declared".to_string()
}

fn default_affinity_score() -> String {
    "10".to_string()
}

fn default_country_aliases() -> BTreeMap<String, Vec<String>> {
    BTreeMap::from([(
        "BR".to_string(),
        vec!["brasil".to_string(), "brazil".to_string()],
    )])
}
