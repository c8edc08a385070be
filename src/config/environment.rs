// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Handles environment variables, deployment modes, and runtime configuration parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration management for production deployment

use super::oauth::OAuthConfig;
use crate::constants::{auth, defaults, ports};
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use tracing::{info, warn};

/// Strongly typed log level configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational messages
    #[default]
    Info,
    /// Debug output
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        };
        f.write_str(name)
    }
}

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Development => "development",
            Self::Production => "production",
            Self::Testing => "testing",
        };
        f.write_str(name)
    }
}

/// Session token settings
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// HS256 secret used to verify session tokens
    pub jwt_secret: String,
    /// Lifetime of tokens issued by this server
    pub jwt_expiry_hours: i64,
}

/// Top-level server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// HTTP listen port
    pub http_port: u16,
    /// sqlx database URL
    pub database_url: String,
    /// Deployment environment
    pub environment: Environment,
    /// Log level
    pub log_level: LogLevel,
    /// Session token settings
    pub auth: AuthConfig,
    /// Provider OAuth credentials
    pub oauth: OAuthConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable cannot be parsed, or if `JWT_SECRET`
    /// is unset in production
    pub fn from_env() -> AppResult<Self> {
        info!("Loading configuration from environment variables");

        let environment = Environment::from_str_or_default(&env_var_or("ENVIRONMENT", "development"));

        let http_port = env_var_or("HTTP_PORT", &ports::DEFAULT_HTTP_PORT.to_string())
            .parse()
            .map_err(|e| AppError::config_invalid(format!("Invalid HTTP_PORT value: {e}")))?;

        let jwt_expiry_hours = env_var_or(
            "JWT_EXPIRY_HOURS",
            &auth::DEFAULT_JWT_EXPIRY_HOURS.to_string(),
        )
        .parse()
        .map_err(|e| AppError::config_invalid(format!("Invalid JWT_EXPIRY_HOURS value: {e}")))?;

        let jwt_secret = match env::var("JWT_SECRET") {
            Ok(secret) if !secret.is_empty() => secret,
            _ if environment.is_production() => {
                return Err(AppError::config_missing(
                    "JWT_SECRET must be set in production",
                ));
            }
            _ => {
                warn!("JWT_SECRET not set, using development secret");
                defaults::DEV_JWT_SECRET.to_owned()
            }
        };

        let config = Self {
            http_port,
            database_url: env_var_or("DATABASE_URL", defaults::DEFAULT_DATABASE_URL),
            environment,
            log_level: LogLevel::from_str_or_default(&env_var_or("LOG_LEVEL", "info")),
            auth: AuthConfig {
                jwt_secret,
                jwt_expiry_hours,
            },
            oauth: OAuthConfig::from_env(),
        };

        info!("Configuration loaded successfully");
        Ok(config)
    }

    /// One-line summary safe for logs (no secrets)
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Fitlink Server Configuration: environment={}, http_port={}, log_level={}, \
             database={}, strava_configured={}, fitbit_configured={}",
            self.environment,
            self.http_port,
            self.log_level,
            self.database_url,
            self.oauth.strava.is_configured(),
            self.oauth.fitbit.is_configured(),
        )
    }
}

fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}
