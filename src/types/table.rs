use super::applicant::ApplicantId;
use super::error::AllocationError;

/// Smallest capacity a growth step produces. Growing an empty table jumps
/// here instead of doubling zero.
const MIN_CAPACITY: usize = 16;

/// Append-only, amortized-growth list of applicant ids.
///
/// Backs both input staging and per-action classification outputs. The
/// committed prefix (`len()`) is the only observable content; storage beyond
/// it is kept allocated and initialized so the classifier can stage a
/// speculative write one slot past the prefix without a data-dependent
/// branch. Entries past `len()` are never exposed.
#[derive(Debug, Clone, Default)]
pub struct IdTable {
    storage: Vec<ApplicantId>,
    count: usize,
}

impl IdTable {
    /// An empty table with no backing storage. Valid; the first append
    /// allocates.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A table with `capacity` preallocated slots and a count of 0.
    ///
    /// # Errors
    ///
    /// Returns [`AllocationError`] if the storage cannot be obtained.
    pub fn with_capacity(capacity: usize) -> Result<Self, AllocationError> {
        let mut storage = Vec::new();
        storage.try_reserve_exact(capacity)?;
        storage.resize(capacity, 0);
        Ok(Self { storage, count: 0 })
    }

    /// Number of committed entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.count
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Number of slots available without growing.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    /// The committed entries, in append order.
    #[must_use]
    pub fn as_slice(&self) -> &[ApplicantId] {
        &self.storage[..self.count]
    }

    pub fn iter(&self) -> impl Iterator<Item = ApplicantId> + '_ {
        self.as_slice().iter().copied()
    }

    /// Append an id, growing the storage if the table is full.
    ///
    /// # Errors
    ///
    /// Returns [`AllocationError`] if growth cannot obtain storage.
    pub fn push(&mut self, id: ApplicantId) -> Result<(), AllocationError> {
        if self.count == self.storage.len() {
            self.grow()?;
        }
        self.storage[self.count] = id;
        self.count += 1;
        Ok(())
    }

    /// Stage `id` in the next free slot and commit it only when `advance`
    /// is 1.
    ///
    /// With `advance == 0` the count is unchanged and no growth check runs;
    /// the staged value is overwritten by the next write into that slot or
    /// left uncommitted, which is harmless since uncommitted slots are never
    /// read. This is the primitive the branch-free classifier relies on:
    /// the store is unconditional, the commit is the 0/1 match mask.
    ///
    /// `advance` must be 0 or 1.
    ///
    /// # Errors
    ///
    /// Returns [`AllocationError`] if a committing append lands on a full
    /// table and growth cannot obtain storage.
    #[inline]
    pub fn push_speculative(
        &mut self,
        id: ApplicantId,
        advance: u32,
    ) -> Result<(), AllocationError> {
        debug_assert!(advance <= 1);
        if self.count < self.storage.len() {
            self.storage[self.count] = id;
            self.count += advance as usize;
        } else if advance != 0 {
            self.grow()?;
            self.storage[self.count] = id;
            self.count += 1;
        }
        Ok(())
    }

    /// Bulk-append a slice of ids.
    ///
    /// # Errors
    ///
    /// Returns [`AllocationError`] if growth cannot obtain storage.
    pub fn extend_from_slice(&mut self, ids: &[ApplicantId]) -> Result<(), AllocationError> {
        let needed = self.count + ids.len();
        if needed > self.storage.len() {
            let additional = needed - self.storage.len();
            self.storage.try_reserve_exact(additional)?;
            self.storage.resize(needed, 0);
        }
        self.storage[self.count..needed].copy_from_slice(ids);
        self.count = needed;
        Ok(())
    }

    /// Reset the count to 0, retaining storage for reuse across passes.
    pub fn clear(&mut self) {
        self.count = 0;
    }

    /// Drop the backing storage. The table behaves as newly created; the
    /// next append allocates from scratch.
    pub fn release(&mut self) {
        self.storage = Vec::new();
        self.count = 0;
    }

    /// Double the capacity, from zero jumping to [`MIN_CAPACITY`].
    fn grow(&mut self) -> Result<(), AllocationError> {
        let new_capacity = (self.storage.len() * 2).max(MIN_CAPACITY);
        let additional = new_capacity - self.storage.len();
        self.storage.try_reserve_exact(additional)?;
        self.storage.resize(new_capacity, 0);
        Ok(())
    }
}

impl<'a> IntoIterator for &'a IdTable {
    type Item = ApplicantId;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, ApplicantId>>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter().copied()
    }
}
