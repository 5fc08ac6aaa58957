use std::sync::Arc;

use tokio::sync::Mutex;

use crate::error::EdmResult;
use crate::source::base::RecordSource;

/// In-memory record source for testing and development purposes.
///
/// Holds a fixed batch of raw JSON documents and hands the same batch to
/// every run.
#[derive(Debug, Clone)]
pub struct MemoryRecordSource {
    documents: Arc<Mutex<Vec<serde_json::Value>>>,
}

impl MemoryRecordSource {
    /// Creates a source over the given raw documents.
    pub fn new(documents: Vec<serde_json::Value>) -> Self {
        Self {
            documents: Arc::new(Mutex::new(documents)),
        }
    }
}

impl RecordSource for MemoryRecordSource {
    fn name() -> &'static str {
        "memory"
    }

    async fn load_documents(&self) -> EdmResult<Vec<serde_json::Value>> {
        let documents = self.documents.lock().await;
        Ok(documents.clone())
    }
}
