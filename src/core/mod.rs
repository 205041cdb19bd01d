pub mod hash_store;
pub mod linear_store;
pub mod loader;
pub mod menu;
pub mod parser;
pub mod tree_store;

pub use crate::domain::model::{Course, StoreKind};
pub use crate::domain::ports::{ConfigProvider, CourseStore, Storage};
pub use crate::utils::error::Result;

use hash_store::HashStore;
use linear_store::LinearStore;
use tree_store::TreeStore;

impl StoreKind {
    /// Creates an empty store of this kind. `bucket_count` only applies to
    /// the hash store.
    pub fn build(self, bucket_count: usize) -> Box<dyn CourseStore> {
        match self {
            StoreKind::Linear => Box::new(LinearStore::new()),
            StoreKind::Hash => Box::new(HashStore::with_buckets(bucket_count)),
            StoreKind::Tree => Box::new(TreeStore::new()),
        }
    }
}
