use serde::{Deserialize, Serialize};

use crate::shared::ValidationError;

/// Configuration for an extract pipeline run.
///
/// Contains the settings required to run one transformation batch: where the
/// raw profile documents come from, where the extracts go, and how many
/// mapping workers may run at a time.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// The unique identifier for this pipeline.
    pub id: u64,
    /// Location of the raw profile documents, interpreted by the record source.
    #[serde(default)]
    pub source_location: String,
    /// Location the extracts are delivered to, interpreted by the destination.
    #[serde(default)]
    pub sink_location: String,
    /// Maximum number of record mapping workers that can run at a time.
    ///
    /// Records never share mutable state, so this only bounds concurrency.
    #[serde(default = "default_max_workers")]
    pub max_workers: u16,
}

impl PipelineConfig {
    /// Default number of concurrent mapping workers.
    pub const DEFAULT_MAX_WORKERS: u16 = 4;

    /// Validates pipeline configuration settings.
    ///
    /// Ensures the worker count is non-zero.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.max_workers == 0 {
            return Err(ValidationError::MaxWorkersZero);
        }

        Ok(())
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            id: 0,
            source_location: String::new(),
            sink_location: String::new(),
            max_workers: default_max_workers(),
        }
    }
}

fn default_max_workers() -> u16 {
    PipelineConfig::DEFAULT_MAX_WORKERS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_usable() {
        let config = PipelineConfig::default();

        assert_eq!(config.max_workers, PipelineConfig::DEFAULT_MAX_WORKERS);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_workers_fail_validation() {
        let config = PipelineConfig {
            max_workers: 0,
            ..PipelineConfig::default()
        };

        assert!(matches!(
            config.validate(),
            Err(ValidationError::MaxWorkersZero)
        ));
    }

    #[test]
    fn missing_optional_fields_fall_back_to_defaults() {
        let config: PipelineConfig = serde_json::from_str(r#"{ "id": 7 }"#).unwrap();

        assert_eq!(config.id, 7);
        assert_eq!(config.max_workers, PipelineConfig::DEFAULT_MAX_WORKERS);
        assert_eq!(config.source_location, "");
    }
}
