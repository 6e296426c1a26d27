pub mod engine;
pub mod manifest;
pub mod naming;
pub mod pages;
pub mod partition;
pub mod pipeline;
pub mod reader;

pub use crate::domain::model::{Entry, KeyedEntries, PartitionSet, TransformResult};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
