use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub api: ApiConfig,
    pub security: SecurityConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Environment {
    Development,
    Staging,
    Production,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub url: Option<String>,
    pub max_connections: u32,
    pub connection_timeout: u64,
    pub run_migrations: bool,
    pub enable_query_logging: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub enable_request_logging: bool,
    pub max_request_size_bytes: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityConfig {
    pub enable_cors: bool,
    pub cors_origins: Vec<String>,
    #[serde(skip_serializing)]
    pub jwt_secret: String,
    pub jwt_expiry_hours: u64,
    /// Accept a bare `x-user-id` header as the caller identity.
    pub allow_user_id_header: bool,
    pub bcrypt_cost: u32,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let environment = match env::var("APP_ENV").as_deref() {
            Ok("production") | Ok("prod") => Environment::Production,
            Ok("staging") | Ok("stage") => Environment::Staging,
            _ => Environment::Development,
        };

        // Set defaults based on environment, then override with specific env vars
        match environment {
            Environment::Production => Self::production(),
            Environment::Staging => Self::staging(),
            Environment::Development => Self::development(),
        }
        .with_env_overrides()
    }

    fn with_env_overrides(mut self) -> Self {
        // Server overrides
        if let Ok(v) = env::var("SERVER_HOST") {
            self.server.host = v;
        }
        if let Some(port) = env::var("SERVER_PORT")
            .ok()
            .or_else(|| env::var("PORT").ok())
            .and_then(|s| s.parse::<u16>().ok())
        {
            self.server.port = port;
        }

        // Database overrides
        if let Ok(v) = env::var("DATABASE_URL") {
            self.database.url = Some(v);
        }
        if let Ok(v) = env::var("DATABASE_MAX_CONNECTIONS") {
            self.database.max_connections = v.parse().unwrap_or(self.database.max_connections);
        }
        if let Ok(v) = env::var("DATABASE_CONNECTION_TIMEOUT") {
            self.database.connection_timeout = v.parse().unwrap_or(self.database.connection_timeout);
        }
        if let Ok(v) = env::var("DATABASE_RUN_MIGRATIONS") {
            self.database.run_migrations = v.parse().unwrap_or(self.database.run_migrations);
        }
        if let Ok(v) = env::var("DATABASE_ENABLE_QUERY_LOGGING") {
            self.database.enable_query_logging = v.parse().unwrap_or(self.database.enable_query_logging);
        }

        // API overrides
        if let Ok(v) = env::var("API_ENABLE_REQUEST_LOGGING") {
            self.api.enable_request_logging = v.parse().unwrap_or(self.api.enable_request_logging);
        }
        if let Ok(v) = env::var("API_MAX_REQUEST_SIZE_BYTES") {
            self.api.max_request_size_bytes = v.parse().unwrap_or(self.api.max_request_size_bytes);
        }

        // Security overrides
        if let Ok(v) = env::var("SECURITY_ENABLE_CORS") {
            self.security.enable_cors = v.parse().unwrap_or(self.security.enable_cors);
        }
        if let Ok(v) = env::var("SECURITY_CORS_ORIGINS") {
            self.security.cors_origins = v
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
        }
        if let Ok(v) = env::var("JWT_SECRET") {
            self.security.jwt_secret = v;
        }
        if let Ok(v) = env::var("SECURITY_JWT_EXPIRY_HOURS") {
            self.security.jwt_expiry_hours = v.parse().unwrap_or(self.security.jwt_expiry_hours);
        }
        if let Ok(v) = env::var("SECURITY_ALLOW_USER_ID_HEADER") {
            self.security.allow_user_id_header = v.parse().unwrap_or(self.security.allow_user_id_header);
        }
        if let Ok(v) = env::var("SECURITY_BCRYPT_COST") {
            self.security.bcrypt_cost = v.parse().unwrap_or(self.security.bcrypt_cost);
        }

        self
    }

    pub fn development() -> Self {
        Self {
            environment: Environment::Development,
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 2022,
            },
            database: DatabaseConfig {
                url: None,
                max_connections: 10,
                connection_timeout: 30,
                run_migrations: true,
                enable_query_logging: true,
            },
            api: ApiConfig {
                enable_request_logging: true,
                max_request_size_bytes: 10 * 1024 * 1024, // 10MB
            },
            security: SecurityConfig {
                enable_cors: true,
                cors_origins: vec![],
                jwt_secret: "sitebook-development-secret".to_string(),
                jwt_expiry_hours: 24 * 7, // 1 week
                allow_user_id_header: true,
                bcrypt_cost: 8,
            },
        }
    }

    pub fn staging() -> Self {
        Self {
            environment: Environment::Staging,
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 2022,
            },
            database: DatabaseConfig {
                url: None,
                max_connections: 20,
                connection_timeout: 10,
                run_migrations: true,
                enable_query_logging: true,
            },
            api: ApiConfig {
                enable_request_logging: true,
                max_request_size_bytes: 5 * 1024 * 1024, // 5MB
            },
            security: SecurityConfig {
                enable_cors: true,
                cors_origins: vec!["https://staging.example.com".to_string()],
                jwt_secret: String::new(),
                jwt_expiry_hours: 24,
                allow_user_id_header: false,
                bcrypt_cost: bcrypt::DEFAULT_COST,
            },
        }
    }

    pub fn production() -> Self {
        Self {
            environment: Environment::Production,
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 2022,
            },
            database: DatabaseConfig {
                url: None,
                max_connections: 50,
                connection_timeout: 5,
                run_migrations: false,
                enable_query_logging: false,
            },
            api: ApiConfig {
                enable_request_logging: false,
                max_request_size_bytes: 2 * 1024 * 1024, // 2MB
            },
            security: SecurityConfig {
                enable_cors: true,
                cors_origins: vec!["https://app.example.com".to_string()],
                jwt_secret: String::new(),
                jwt_expiry_hours: 12,
                allow_user_id_header: false,
                bcrypt_cost: bcrypt::DEFAULT_COST,
            },
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

// Global singleton config - initialized once at startup
pub static CONFIG: Lazy<AppConfig> = Lazy::new(AppConfig::from_env);

// Convenience function for accessing config
pub fn config() -> &'static AppConfig {
    &CONFIG
}

#[macro_export]
macro_rules! is_development {
    () => {
        matches!($crate::config::CONFIG.environment, $crate::config::Environment::Development)
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_development_config() {
        let config = AppConfig::development();
        assert_eq!(config.server.port, 2022);
        assert!(config.security.allow_user_id_header);
        assert!(!config.security.jwt_secret.is_empty());
        assert!(config.database.run_migrations);
    }

    #[test]
    fn test_default_production_config() {
        let config = AppConfig::production();
        assert!(!config.security.allow_user_id_header);
        assert!(config.security.jwt_secret.is_empty());
        assert_eq!(config.security.bcrypt_cost, bcrypt::DEFAULT_COST);
        assert!(!config.database.run_migrations);
    }

    #[test]
    fn test_bind_addr() {
        let mut config = AppConfig::development();
        config.server.host = "127.0.0.1".to_string();
        config.server.port = 4100;
        assert_eq!(config.bind_addr(), "127.0.0.1:4100");
    }

    #[test]
    fn test_jwt_secret_not_serialized() {
        let config = AppConfig::development();
        let value = serde_json::to_value(&config).unwrap();
        assert!(value["security"].get("jwt_secret").is_none());
    }
}
