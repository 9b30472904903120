use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::stored::StoredScreeningResult;
use crate::storage::ResultsRepository;

/// Process-local results store. Contents are lost on restart.
pub struct InMemoryResultsRepository {
    records: RwLock<Vec<StoredScreeningResult>>,
    capacity: usize,
}

impl InMemoryResultsRepository {
    pub fn new(capacity: usize) -> Self {
        Self {
            records: RwLock::new(Vec::new()),
            capacity,
        }
    }
}

#[async_trait]
impl ResultsRepository for InMemoryResultsRepository {
    async fn upsert(&self, result: StoredScreeningResult) -> Result<(), AppError> {
        let mut records = self.records.write().await;
        records.retain(|r| r.id != result.id);
        records.insert(0, result);
        records.truncate(self.capacity);
        Ok(())
    }

    async fn list(&self) -> Result<Vec<StoredScreeningResult>, AppError> {
        Ok(self.records.read().await.clone())
    }

    async fn get(&self, id: Uuid) -> Result<Option<StoredScreeningResult>, AppError> {
        Ok(self.records.read().await.iter().find(|r| r.id == id).cloned())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|r| r.id != id);
        Ok(records.len() != before)
    }

    async fn clear(&self) -> Result<u64, AppError> {
        let mut records = self.records.write().await;
        let removed = records.len() as u64;
        records.clear();
        Ok(removed)
    }

    fn capacity(&self) -> usize {
        self.capacity
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}
