use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// The randomness source returned something other than a permutation.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Shuffler returned an invalid permutation of {len} items")]
    InvalidPermutation {
        /// Number of items that were to be permuted
        len: usize,
    },
}
