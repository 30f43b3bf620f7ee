use std::future::Future;

use futures::future::join_all;

use crate::error::StorageError;

/// Outcome of a batch of concurrent writes
#[derive(Debug)]
pub struct BatchOutcome {
    pub total: usize,
    pub failures: Vec<StorageError>,
}

impl BatchOutcome {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn failed(&self) -> usize {
        self.failures.len()
    }
}

/// Drives every write to completion, even when some of them fail.
///
/// Writes that succeeded are never rolled back.
pub async fn write_all<I, F>(writes: I) -> BatchOutcome
where
    I: IntoIterator<Item = F>,
    F: Future<Output = Result<(), StorageError>>,
{
    let results = join_all(writes).await;
    let total = results.len();
    let failures = results.into_iter().filter_map(Result::err).collect();

    BatchOutcome { total, failures }
}
