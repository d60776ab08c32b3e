pub mod ai;
pub mod briefing;
pub mod config;
pub mod error;
pub mod language;
pub mod news;

pub use briefing::{build_briefings, Briefing};
pub use config::AppConfig;
pub use error::{Error, Result};
pub use language::Language;
