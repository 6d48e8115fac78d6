//! Custom card pools.
//!
//! - `PoolQuery`: class and rarity constraints of a native pool query
//! - `CardPoolManager`: which custom cards belong to which named pool, and
//!   merging them into native query results

pub mod manager;
pub mod query;

pub use manager::CardPoolManager;
pub use query::{PoolQuery, RarityCondition};
