/// Server configuration loaded from environment variables.
///
/// With nothing set, the server listens on port 5555 and stores its data in
/// the local file `app.db`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `5555`).
    pub port: u16,
    /// SQLite database URL (default: `sqlite://app.db`).
    pub database_url: String,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Insert the demo roster on startup if the database has no heroes.
    pub seed_on_start: bool,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default           |
    /// |------------------------|-------------------|
    /// | `HOST`                 | `0.0.0.0`         |
    /// | `PORT`                 | `5555`            |
    /// | `DATABASE_URL`         | `sqlite://app.db` |
    /// | `REQUEST_TIMEOUT_SECS` | `30`              |
    /// | `SEED_ON_START`        | `false`           |
    ///
    /// Panics on unparseable values so misconfiguration fails at startup.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".into());

        let port: u16 = lookup("PORT")
            .unwrap_or_else(|| "5555".into())
            .parse()
            .expect("PORT must be a valid u16");

        let database_url = lookup("DATABASE_URL").unwrap_or_else(|| "sqlite://app.db".into());

        let request_timeout_secs: u64 = lookup("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let seed_on_start = lookup("SEED_ON_START")
            .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Self {
            host,
            port,
            database_url,
            request_timeout_secs,
            seed_on_start,
        }
    }
}
