pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{cli::LocalStorage, customize::Customization, CliConfig};
pub use core::{engine::Engine, pipeline::ConvertPipeline};
pub use utils::error::{DictError, Result};
