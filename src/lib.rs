pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::{LocalStorage, ReqwestProbe};
pub use config::{file_config::FileConfig, CheckerConfig};
pub use core::{
    checker::RedirectChecker,
    engine::CheckEngine,
    loader::{load_redirects, load_redirects_from_reader},
};
pub use domain::model::{CheckResult, RedirectPair, RunSummary};
pub use utils::error::{CheckerError, Result};
