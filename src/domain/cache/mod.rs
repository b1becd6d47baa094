//! Cache domain - key/value store with TTL behind the analyzers

mod key;
mod repository;

pub use key::{CacheKeyGenerator, CacheKeyParams, DigestKeyGenerator};
pub use repository::{Cache, CacheExt};

#[cfg(test)]
pub use repository::mock::MockCache;
