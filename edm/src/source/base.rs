use std::future::Future;

use crate::error::EdmResult;

/// Trait for systems that produce raw profile documents for the pipeline.
///
/// [`RecordSource`] implementations own enumeration, retrieval and retry
/// concerns; the pipeline only sees a finite batch of JSON documents, one per
/// consumer profile. Documents are handed over still untyped so that a
/// document which does not match the expected record shape skips that record
/// alone instead of failing the whole load.
pub trait RecordSource {
    /// Returns the name of the source.
    fn name() -> &'static str;

    /// Loads the full finite batch of raw documents for one pipeline run.
    fn load_documents(&self)
    -> impl Future<Output = EdmResult<Vec<serde_json::Value>>> + Send;
}
