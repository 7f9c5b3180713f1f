use claimcheck_llm::LlmConfig;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development,
/// except the oracle credentials. In production, override via
/// environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `120`). Video submissions
    /// wait on transcription before the model call, so this stays generous.
    pub request_timeout_secs: u64,
    /// Shared secret for the read-only admin listing. `None` disables the
    /// admin surface entirely.
    pub admin_token: Option<String>,
    /// Model oracle configuration (API key, endpoint, model, token cap).
    pub llm: LlmConfig,
    /// Transcription service connection, when deployed with one.
    pub transcript: Option<TranscriptServiceConfig>,
    /// Payment-session service connection, when deployed with one.
    pub payments: Option<PaymentServiceConfig>,
}

/// Connection details for the transcription service.
#[derive(Debug, Clone)]
pub struct TranscriptServiceConfig {
    pub base_url: String,
    pub secret: String,
}

/// Connection details for the payment-session service.
#[derive(Debug, Clone)]
pub struct PaymentServiceConfig {
    pub base_url: String,
    pub secret: String,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                  | Default                              |
    /// |--------------------------|--------------------------------------|
    /// | `HOST`                   | `0.0.0.0`                            |
    /// | `PORT`                   | `3000`                               |
    /// | `CORS_ORIGINS`           | `http://localhost:5173`              |
    /// | `REQUEST_TIMEOUT_SECS`   | `120`                                |
    /// | `ADMIN_TOKEN`            | unset (admin listing disabled)       |
    /// | `ANTHROPIC_API_KEY`      | required                             |
    /// | `ANTHROPIC_BASE_URL`     | `https://api.anthropic.com`          |
    /// | `ANALYSIS_MODEL`         | `claude-sonnet-4-6`                  |
    /// | `ANALYSIS_MAX_TOKENS`    | `1024`                               |
    /// | `VIDEO_SERVICE_URL`      | unset (video submissions rejected)   |
    /// | `VIDEO_SERVICE_SECRET`   | required when `VIDEO_SERVICE_URL` set|
    /// | `PAYMENT_SERVICE_URL`    | unset (checkout disabled)            |
    /// | `PAYMENT_SERVICE_SECRET` | required when `PAYMENT_SERVICE_URL` set|
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "120".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let admin_token = std::env::var("ADMIN_TOKEN").ok().filter(|t| !t.is_empty());

        let api_key =
            std::env::var("ANTHROPIC_API_KEY").expect("ANTHROPIC_API_KEY must be set");
        let base_url = std::env::var("ANTHROPIC_BASE_URL")
            .unwrap_or_else(|_| claimcheck_llm::DEFAULT_BASE_URL.into());
        let model = std::env::var("ANALYSIS_MODEL")
            .unwrap_or_else(|_| claimcheck_llm::DEFAULT_MODEL.into());
        let max_tokens: u32 = std::env::var("ANALYSIS_MAX_TOKENS")
            .unwrap_or_else(|_| claimcheck_llm::DEFAULT_MAX_TOKENS.to_string())
            .parse()
            .expect("ANALYSIS_MAX_TOKENS must be a valid u32");
        let llm = LlmConfig {
            api_key,
            base_url,
            model,
            max_tokens,
        };

        let transcript = std::env::var("VIDEO_SERVICE_URL").ok().map(|base_url| {
            let secret = std::env::var("VIDEO_SERVICE_SECRET")
                .expect("VIDEO_SERVICE_SECRET must be set when VIDEO_SERVICE_URL is set");
            TranscriptServiceConfig { base_url, secret }
        });

        let payments = std::env::var("PAYMENT_SERVICE_URL").ok().map(|base_url| {
            let secret = std::env::var("PAYMENT_SERVICE_SECRET")
                .expect("PAYMENT_SERVICE_SECRET must be set when PAYMENT_SERVICE_URL is set");
            PaymentServiceConfig { base_url, secret }
        });

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            admin_token,
            llm,
            transcript,
            payments,
        }
    }
}
