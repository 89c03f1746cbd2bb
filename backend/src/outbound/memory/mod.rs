//! In-process outbound adapters.

mod post_store;

pub use post_store::InMemoryPostStore;
