//! # Core Module
//!
//! Shared configuration for the collision subsystem.

pub mod config;

pub use config::{CollisionConfig, Config, ConfigError};
