pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{cli::LocalStorage, PlannerConfig};

pub use core::hash_store::HashStore;
pub use core::linear_store::LinearStore;
pub use core::menu::MenuController;
pub use core::tree_store::TreeStore;
pub use domain::model::{Course, StoreKind};
pub use domain::ports::{ConfigProvider, CourseStore, Storage};
pub use utils::error::{PlannerError, Result};
