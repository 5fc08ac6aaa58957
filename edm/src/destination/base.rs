use std::future::Future;

use crate::error::EdmResult;
use crate::types::ExtractBatch;

/// Trait for systems that receive the finished extracts of a pipeline run.
///
/// [`Destination`] implementations define how the four named row collections
/// are serialized and delivered; the pipeline hands over one complete
/// [`ExtractBatch`] at the end of a run. Partial-batch delivery, file
/// formats and upload retries are the implementation's concern.
///
/// The optional [`Destination::shutdown`] method has a default no-op
/// implementation; override it when the destination needs cleanup after a
/// run.
pub trait Destination {
    /// Returns the name of the destination.
    fn name() -> &'static str;

    /// Propagates the shutdown signal to the destination.
    fn shutdown(&self) -> impl Future<Output = EdmResult<()>> + Send {
        async { Ok(()) }
    }

    /// Accepts the four extracts produced by one pipeline run.
    ///
    /// Called exactly once per run, after every record has been mapped. The
    /// batch may be empty for an empty input; implementations should still
    /// materialize the named tables so downstream consumers see a fixed set.
    fn write_extracts(
        &self,
        extracts: ExtractBatch,
    ) -> impl Future<Output = EdmResult<()>> + Send;
}
