/// Client configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development against a
/// prediction service on `localhost:8000`.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the prediction service (default: `http://localhost:8000`).
    pub api_url: String,
    /// Optional per-request timeout in seconds. Unset means no timeout;
    /// a hanging request then stays in flight indefinitely.
    pub request_timeout_secs: Option<u64>,
}

impl ClientConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                 |
    /// |------------------------|-------------------------|
    /// | `PREDICTION_API_URL`   | `http://localhost:8000` |
    /// | `REQUEST_TIMEOUT_SECS` | unset (no timeout)      |
    pub fn from_env() -> Self {
        let api_url = std::env::var("PREDICTION_API_URL")
            .unwrap_or_else(|_| "http://localhost:8000".into());

        let request_timeout_secs: Option<u64> = std::env::var("REQUEST_TIMEOUT_SECS")
            .ok()
            .map(|v| v.parse().expect("REQUEST_TIMEOUT_SECS must be a valid u64"));

        Self {
            api_url,
            request_timeout_secs,
        }
    }
}
