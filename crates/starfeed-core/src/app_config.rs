/// Process-wide configuration, loaded once at startup.
#[derive(Clone)]
pub struct AppConfig {
    /// Postgres connection string for the dedup store.
    pub database_url: String,
    /// Webhook endpoints to notify, in delivery order.
    pub webhook_urls: Vec<String>,
    /// `username` field on posted messages.
    pub bot_username: String,
    /// Prefix message summaries with the source emoticon.
    pub use_emoticons: bool,
    /// Base URL of the language-detection service. `None` disables rating
    /// estimation entirely.
    pub detect_url: Option<String>,
    /// Timeout applied to webhook and detection requests.
    pub request_timeout_secs: u64,
    pub log_level: String,
    pub db_max_connections: u32,
    pub db_min_connections: u32,
    pub db_acquire_timeout_secs: u64,
}

// Webhook URLs embed a shared secret in the path and the database URL embeds
// credentials, so neither may appear in logs.
impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("database_url", &"[redacted]")
            .field("webhook_urls", &format!("[{} redacted]", self.webhook_urls.len()))
            .field("bot_username", &self.bot_username)
            .field("use_emoticons", &self.use_emoticons)
            .field("detect_url", &self.detect_url)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("log_level", &self.log_level)
            .field("db_max_connections", &self.db_max_connections)
            .field("db_min_connections", &self.db_min_connections)
            .field("db_acquire_timeout_secs", &self.db_acquire_timeout_secs)
            .finish()
    }
}
