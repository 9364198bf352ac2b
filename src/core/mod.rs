pub mod checker;
pub mod engine;
pub mod loader;

pub use crate::domain::model::{CheckResult, RedirectPair, RunSummary};
pub use crate::domain::ports::{ConfigProvider, ProbeResponse, RedirectProbe, Storage};
pub use crate::utils::error::Result;
