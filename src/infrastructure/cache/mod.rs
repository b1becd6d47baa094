//! Cache infrastructure - Cache implementations

mod clock;
mod factory;
mod in_memory;
mod redis;

pub use clock::{Clock, ManualClock, SystemClock};
pub use factory::{CacheConfig, CacheFactory, CacheType};
pub use in_memory::{InMemoryCache, InMemoryCacheConfig};
pub use redis::{RedisCache, RedisCacheConfig};
