//! In-memory [`VoterStore`] used by tests and demo mode.
//!
//! Counts reads per kind so tests can assert that a code path issued no
//! store traffic, and can be told to fail a specific keyed read to
//! exercise error propagation.

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::error::{StoreError, StoreResult};
use crate::record::{NameIndex, PhoneKeySet, RawVoter, VoterMap};
use crate::store::{StoreFuture, VoterStore};

#[derive(Default)]
pub struct MemoryStore {
    voters: VoterMap,
    index: Option<NameIndex>,
    fail_key: Option<String>,
    keyed_reads: AtomicUsize,
    collection_reads: AtomicUsize,
    index_reads: AtomicUsize,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds one primary-collection record.
    #[must_use]
    pub fn with_voter(mut self, key: &str, raw: RawVoter) -> Self {
        self.voters.insert(key.to_owned(), raw);
        self
    }

    /// Seeds one secondary-index entry. The index node starts existing on
    /// the first call; stores built without any are "no index" stores.
    #[must_use]
    pub fn with_index_entry(mut self, name: &str, phone_keys: &[&str]) -> Self {
        let entry: PhoneKeySet = phone_keys
            .iter()
            .map(|phone| ((*phone).to_owned(), true))
            .collect();
        self.index
            .get_or_insert_with(NameIndex::new)
            .insert(name.to_owned(), entry);
        self
    }

    /// Makes every keyed read of `key` fail.
    #[must_use]
    pub fn with_fail_key(mut self, key: &str) -> Self {
        self.fail_key = Some(key.to_owned());
        self
    }

    /// Sample roll served when no remote database is configured.
    #[must_use]
    pub fn demo() -> Self {
        let voter = |sr_no: &str, name: &str, voter_id: &str, mobile: &str, address: &str| {
            RawVoter {
                sr_no: Some(sr_no.to_owned()),
                name: Some(name.to_owned()),
                voter_id: Some(voter_id.to_owned()),
                mobile: Some(mobile.to_owned()),
                address: Some(address.to_owned()),
            }
        };

        Self::new()
            .with_voter(
                "9876543210",
                voter("1", "Asha Verma", "BCD/1001", "9876543210", "12 Court Lane"),
            )
            .with_voter(
                "9123456780",
                voter("2", "Nikhil Rao", "BCD/1002", "9123456780", "4 Bar Road"),
            )
            .with_voter(
                "9988776655",
                voter("3", "Mira Jain", "BCD/1003", "9988776655", "7 High Street"),
            )
            .with_index_entry("asha verma", &["9876543210"])
            .with_index_entry("nikhil rao", &["9123456780"])
            .with_index_entry("mira jain", &["9988776655"])
    }

    #[must_use]
    pub fn keyed_reads(&self) -> usize {
        self.keyed_reads.load(Ordering::SeqCst)
    }

    #[must_use]
    pub fn collection_reads(&self) -> usize {
        self.collection_reads.load(Ordering::SeqCst)
    }

    #[must_use]
    pub fn index_reads(&self) -> usize {
        self.index_reads.load(Ordering::SeqCst)
    }

    #[must_use]
    pub fn total_reads(&self) -> usize {
        self.keyed_reads() + self.collection_reads() + self.index_reads()
    }

    fn check_fail(&self, key: &str) -> StoreResult<()> {
        if self.fail_key.as_deref() == Some(key) {
            return Err(StoreError::Unavailable(format!(
                "injected failure for key {key}"
            )));
        }
        Ok(())
    }
}

impl VoterStore for MemoryStore {
    fn voter<'a>(&'a self, key: &'a str) -> StoreFuture<'a, Option<RawVoter>> {
        Box::pin(async move {
            self.keyed_reads.fetch_add(1, Ordering::SeqCst);
            self.check_fail(key)?;
            Ok(self.voters.get(key).cloned())
        })
    }

    fn voters(&self) -> StoreFuture<'_, VoterMap> {
        Box::pin(async move {
            self.collection_reads.fetch_add(1, Ordering::SeqCst);
            Ok(self.voters.clone())
        })
    }

    fn name_index(&self) -> StoreFuture<'_, Option<NameIndex>> {
        Box::pin(async move {
            self.index_reads.fetch_add(1, Ordering::SeqCst);
            Ok(self.index.clone())
        })
    }

    fn name_index_entry<'a>(&'a self, name: &'a str) -> StoreFuture<'a, Option<PhoneKeySet>> {
        Box::pin(async move {
            self.index_reads.fetch_add(1, Ordering::SeqCst);
            self.check_fail(name)?;
            Ok(self
                .index
                .as_ref()
                .and_then(|index| index.get(name).cloned()))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_counters_track_read_kinds() {
        let store = MemoryStore::demo();

        let _ = store.voter("9876543210").await.expect("keyed read");
        let _ = store.voters().await.expect("collection read");
        let _ = store.name_index().await.expect("index read");

        assert_eq!(store.keyed_reads(), 1);
        assert_eq!(store.collection_reads(), 1);
        assert_eq!(store.index_reads(), 1);
        assert_eq!(store.total_reads(), 3);
    }

    #[tokio::test]
    async fn test_fail_key_errors_only_that_key() {
        let store = MemoryStore::demo().with_fail_key("9876543210");

        assert!(store.voter("9876543210").await.is_err());
        assert!(store.voter("9123456780").await.expect("read ok").is_some());
    }

    #[tokio::test]
    async fn test_missing_index_is_none() {
        let store = MemoryStore::new().with_voter("1", RawVoter::default());
        assert!(store.name_index().await.expect("read ok").is_none());
        assert!(
            store
                .name_index_entry("anyone")
                .await
                .expect("read ok")
                .is_none()
        );
    }
}
