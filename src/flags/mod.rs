//! Feature-flag subsystem: data model, in-memory store, upstream fetch,
//! and fetch-once initialization.

pub mod init;
pub mod model;
pub mod source;
pub mod store;

pub use model::{FeatureDescriptor, FeatureFlagSet};
pub use store::FlagStore;
