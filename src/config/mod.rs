//! Configuration module

pub mod settings;

pub use settings::{
    CorsConfig, LoggingConfig, RateLimitConfig, ServerConfig, Settings, StoreConfig,
};
