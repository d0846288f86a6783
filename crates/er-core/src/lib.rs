pub mod config;
pub mod error;
pub mod types;

pub use config::ServerConfig;
pub use error::{ErError, Result};
pub use types::{AnalysisResult, EmotionCategory};
