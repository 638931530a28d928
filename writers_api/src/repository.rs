use std::sync::Arc;

use thiserror::Error;
use types::Writer;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// The store could not be reached.
    #[error("store unavailable: {0}")]
    StoreUnavailable(String),
    /// The store answered, but with an error or data we cannot read.
    #[error("store error: {0}")]
    StoreError(String),
}

/// Read access to the writers collection.
///
/// `get_list` returns a snapshot of the whole collection in the order the
/// store yields it. Implementations must be safe to call concurrently.
pub trait WriterRepository: Send + Sync + 'static {
    fn get_list(
        &self,
    ) -> impl Future<Output = Result<Vec<Writer>, RepositoryError>> + Send;
}

/// A fixed collection held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryWriterRepository {
    writers: Arc<Vec<Writer>>,
}

impl InMemoryWriterRepository {
    pub fn new(writers: Vec<Writer>) -> Self {
        Self {
            writers: Arc::new(writers),
        }
    }
}

impl WriterRepository for InMemoryWriterRepository {
    async fn get_list(&self) -> Result<Vec<Writer>, RepositoryError> {
        Ok(self.writers.as_ref().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_in_memory_keeps_insertion_order() {
        let repository = InMemoryWriterRepository::new(vec![
            Writer::new(3, "C"),
            Writer::new(1, "A"),
            Writer::new(2, "B"),
        ]);

        let ids = repository
            .get_list()
            .await
            .unwrap()
            .into_iter()
            .map(|w| w.id.to_string())
            .collect::<Vec<_>>();

        assert_eq!(ids, vec!["3", "1", "2"]);
    }

    #[tokio::test]
    async fn test_in_memory_default_is_empty() {
        let repository = InMemoryWriterRepository::default();

        assert!(repository.get_list().await.unwrap().is_empty());
    }
}
