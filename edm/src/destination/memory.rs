use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::info;

use crate::destination::Destination;
use crate::error::EdmResult;
use crate::types::{ExtractBatch, ExtractKind};

#[derive(Debug, Default)]
struct Inner {
    batches: Vec<ExtractBatch>,
}

/// In-memory destination for testing and development purposes.
///
/// [`MemoryDestination`] keeps every delivered batch in memory so tests can
/// inspect exactly what the pipeline produced. All data is lost when the
/// process terminates.
#[derive(Debug, Clone, Default)]
pub struct MemoryDestination {
    inner: Arc<Mutex<Inner>>,
}

impl MemoryDestination {
    /// Creates a new empty memory destination.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all delivered rows merged into a single batch, in delivery order.
    pub async fn extracts(&self) -> ExtractBatch {
        let inner = self.inner.lock().await;

        let mut merged = ExtractBatch::default();
        for batch in &inner.batches {
            merged.merge(batch.clone());
        }

        merged
    }

    /// Returns how many times the pipeline delivered a batch.
    pub async fn deliveries(&self) -> usize {
        let inner = self.inner.lock().await;
        inner.batches.len()
    }

    /// Clears all stored batches.
    pub async fn clear(&self) {
        let mut inner = self.inner.lock().await;
        inner.batches.clear();
    }
}

impl Destination for MemoryDestination {
    fn name() -> &'static str {
        "memory"
    }

    async fn write_extracts(&self, extracts: ExtractBatch) -> EdmResult<()> {
        let mut inner = self.inner.lock().await;

        for kind in ExtractKind::ALL {
            info!(
                extract = %kind,
                rows = extracts.len(kind),
                "storing extract rows in memory"
            );
        }
        inner.batches.push(extracts);

        Ok(())
    }
}
