use crate::error::IngestionError;
use crate::loader::DatasetSource;
use core_types::Dataset;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// A memoized, shareable handle to the loaded dataset.
///
/// The first `get` loads from the source; every later call hands out the same
/// `Arc`. `reload` builds a complete new dataset before swapping it in, so a
/// reader holds either the old dataset or the new one, never a mix.
#[derive(Debug)]
pub struct DatasetCache<S> {
    source: S,
    current: RwLock<Option<Arc<Dataset>>>,
}

impl<S: DatasetSource> DatasetCache<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            current: RwLock::new(None),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Returns the cached dataset, loading it on first access.
    pub fn get(&self) -> Result<Arc<Dataset>, IngestionError> {
        if let Some(dataset) = self.read_slot().as_ref() {
            return Ok(Arc::clone(dataset));
        }

        let mut slot = self.write_slot();
        // Another caller may have finished the load while we waited for the lock.
        if let Some(dataset) = slot.as_ref() {
            return Ok(Arc::clone(dataset));
        }

        tracing::info!(source = %self.source.describe(), "Loading dataset");
        let dataset = Arc::new(self.source.load()?);
        *slot = Some(Arc::clone(&dataset));
        Ok(dataset)
    }

    /// Loads a fresh copy from the source and atomically replaces the cached one.
    ///
    /// On failure the previously cached dataset, if any, stays in place.
    pub fn reload(&self) -> Result<Arc<Dataset>, IngestionError> {
        tracing::info!(source = %self.source.describe(), "Reloading dataset");
        let dataset = match self.source.load() {
            Ok(dataset) => Arc::new(dataset),
            Err(e) => {
                tracing::warn!(error = %e, "Reload failed; keeping the previous dataset");
                return Err(e);
            }
        };

        let previous = self.write_slot().replace(Arc::clone(&dataset));
        tracing::info!(
            previous_rows = previous.map(|d| d.len()),
            rows = dataset.len(),
            "Dataset swapped"
        );
        Ok(dataset)
    }

    /// Drops the cached handle; the next `get` loads again.
    pub fn invalidate(&self) {
        self.write_slot().take();
    }

    pub fn is_loaded(&self) -> bool {
        self.read_slot().is_some()
    }

    // The slot only ever holds a fully built value, so a poisoned lock is still consistent.
    fn read_slot(&self) -> RwLockReadGuard<'_, Option<Arc<Dataset>>> {
        self.current.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_slot(&self) -> RwLockWriteGuard<'_, Option<Arc<Dataset>>> {
        self.current.write().unwrap_or_else(PoisonError::into_inner)
    }
}
