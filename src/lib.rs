pub mod advisor;
pub mod cli;
pub mod config;
pub mod llm;
pub mod search;

// Re-export commonly used types
pub use advisor::workflow::launch;
pub use config::Config;
