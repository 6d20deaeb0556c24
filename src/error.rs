/// Errors returned by fallible [`BucketMap`](crate::BucketMap) operations.
///
/// Every failure leaves the map observably unchanged, with one exception:
/// [`shrink_to_fit`](crate::BucketMap::shrink_to_fit) may report
/// [`AllocationFailure`](Error::AllocationFailure) after it has already
/// compacted the live entries into the low slots.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The allocator could not provide storage for the requested number of
    /// slots. Free memory elsewhere and retry.
    #[error("failed to allocate storage for {slots} slots")]
    AllocationFailure {
        /// Slot count of the allocation that failed.
        slots: usize,
    },

    /// Every slot is occupied. Remove entries or reserve more space and
    /// retry.
    #[error("no free slot left in a map of capacity {capacity}")]
    NoSpaceLeft {
        /// Capacity of the map at the time of the failure.
        capacity: usize,
    },

    /// No live entry has a key comparing equal to the requested key.
    #[error("key not found")]
    KeyNotFound,

    /// A live entry already has a key comparing equal to the inserted key.
    #[error("key already present")]
    DuplicateKey,
}

/// Shorthand for results of [`BucketMap`](crate::BucketMap) operations.
pub type Result<T> = core::result::Result<T, Error>;
