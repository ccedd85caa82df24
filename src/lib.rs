pub mod config;
pub mod error;
pub mod pipeline;

pub mod core {
    pub mod insight;
}

pub mod ai {
    pub mod client;
    pub mod extract;
    pub mod prompts;
    pub mod schema_utils;
}

pub use crate::config::Config;
pub use crate::core::insight::{Insight, Query};
pub use crate::error::InsightError;
pub use crate::pipeline::InsightPipeline;
