use serde::Deserialize;

/// Configuration options for the category service.
#[derive(Clone, Deserialize)]
pub struct ServerConfig {
    /// SQLite database URL.
    pub database_url: String,
    /// Address the HTTP server binds to, e.g. `127.0.0.1:8080`.
    pub bind_address: String,
}
