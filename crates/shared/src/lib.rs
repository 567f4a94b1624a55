//! Shared types, errors, and configuration for Fiscora.
//!
//! This crate provides the pieces every other crate leans on:
//! - Application-wide error taxonomy
//! - Configuration management
//! - JWT issuing and validation
//! - Auth request/response payload types

pub mod auth;
pub mod config;
pub mod error;
pub mod jwt;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
pub use jwt::{JwtConfig, JwtError, JwtService};
