//! A sharded concurrent accumulator: a `document_id → score` map
//! partitioned into a fixed number of independently-locked buckets, so
//! parallel workers updating different keys rarely contend for the same
//! lock.
//!
//! Grounded on the reference `ConcurrentMap<Key, Value>` (see
//! `original_source/concurrent_map.h`): bucket for key `k` is
//! `k.unsigned_abs() % bucket_count`, each bucket owns its own mutex,
//! and `drain` walks the buckets one at a time rather than needing a
//! single global lock.

use std::collections::BTreeMap;

use parking_lot::{Mutex, MutexGuard};

use crate::core::error::{Error, Result};
use crate::core::types::{DocumentId, ACCUMULATOR_SHARD_COUNT};

/// A document-id-keyed accumulator, sharded across `bucket_count`
/// independently-locked buckets.
pub struct ShardedAccumulator<V> {
    buckets: Vec<Mutex<BTreeMap<DocumentId, V>>>,
}

/// A held lock on the bucket containing one key, exposing a mutable
/// reference to that key's (default-constructed-on-first-access) value.
/// The bucket's mutex is released when this guard is dropped.
pub struct AccumulatorGuard<'a, V> {
    guard: MutexGuard<'a, BTreeMap<DocumentId, V>>,
    key: DocumentId,
}

impl<'a, V> AccumulatorGuard<'a, V> {
    pub fn value(&self) -> &V {
        self.guard
            .get(&self.key)
            .expect("acquire() always inserts the key before returning a guard")
    }

    pub fn value_mut(&mut self) -> &mut V {
        self.guard
            .get_mut(&self.key)
            .expect("acquire() always inserts the key before returning a guard")
    }
}

impl<V: Default + Send> ShardedAccumulator<V> {
    /// Builds an accumulator with the default shard count (97 — a small
    /// prime comfortably larger than a typical hardware thread count).
    pub fn new() -> Self {
        Self::with_bucket_count(ACCUMULATOR_SHARD_COUNT)
            .expect("default shard count is never zero")
    }

    /// Builds an accumulator with `bucket_count` buckets. `bucket_count
    /// == 0` is an `InvalidArgument`.
    pub fn with_bucket_count(bucket_count: usize) -> Result<Self> {
        if bucket_count == 0 {
            return Err(Error::invalid_argument("bucket_count must be >= 1"));
        }
        let mut buckets = Vec::with_capacity(bucket_count);
        buckets.resize_with(bucket_count, || Mutex::new(BTreeMap::new()));
        Ok(ShardedAccumulator { buckets })
    }

    fn bucket_index(&self, key: DocumentId) -> usize {
        (key.unsigned_abs() as usize) % self.buckets.len()
    }

    /// Locks the bucket for `key`, default-constructing the value on
    /// first access, and returns a guard exposing a mutable reference to
    /// it. Only one thread at a time may hold a guard for a given
    /// bucket — acquiring a second guard on the same bucket from the
    /// same thread before dropping the first would deadlock, exactly as
    /// with any other mutex.
    pub fn acquire(&self, key: DocumentId) -> AccumulatorGuard<'_, V> {
        let idx = self.bucket_index(key);
        let mut guard = self.buckets[idx].lock();
        guard.entry(key).or_default();
        AccumulatorGuard { guard, key }
    }

    /// Acquires every bucket's lock in turn and merges its contents into
    /// a single ordered map. Callers must ensure no [`AccumulatorGuard`]
    /// is outstanding when this is called.
    pub fn drain(self) -> BTreeMap<DocumentId, V> {
        let mut result = BTreeMap::new();
        for bucket in self.buckets {
            result.extend(bucket.into_inner());
        }
        result
    }
}

impl<V: Default + Send> Default for ShardedAccumulator<V> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn zero_buckets_is_invalid_argument() {
        let err = ShardedAccumulator::<f64>::with_bucket_count(0).unwrap_err();
        assert_eq!(err.kind, crate::core::error::ErrorKind::InvalidArgument);
    }

    #[test]
    fn acquire_default_constructs_then_accumulates() {
        let acc = ShardedAccumulator::<f64>::with_bucket_count(4).unwrap();
        {
            let mut g = acc.acquire(10);
            *g.value_mut() += 1.5;
        }
        {
            let mut g = acc.acquire(10);
            *g.value_mut() += 2.5;
        }
        let map = acc.drain();
        assert_eq!(map[&10], 4.0);
    }

    #[test]
    fn concurrent_workers_land_in_the_right_buckets() {
        let acc = Arc::new(ShardedAccumulator::<f64>::with_bucket_count(7).unwrap());
        rayon::scope(|scope| {
            for worker in 0..50i64 {
                let acc = Arc::clone(&acc);
                scope.spawn(move |_| {
                    for key in 0..20i64 {
                        let mut g = acc.acquire(key);
                        *g.value_mut() += worker as f64;
                    }
                });
            }
        });
        let acc = Arc::try_unwrap(acc).unwrap();
        let map = acc.drain();
        let expected: f64 = (0..50).sum::<i64>() as f64;
        for key in 0..20i64 {
            assert_eq!(map[&key], expected);
        }
    }
}
