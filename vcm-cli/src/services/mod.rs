//! Service modules for collection sync and querying

pub mod discogs;
pub mod normalizer;
pub mod query_engine;
pub mod reconciler;
pub mod sync_engine;

pub use discogs::{ClientError, CollectionPage, DiscogsClient, RawRelease};
pub use normalizer::{normalize, SimplifiedRelease};
pub use query_engine::QueryEngine;
pub use sync_engine::SyncEngine;
