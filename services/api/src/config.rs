/// Default SMS provider push endpoint.
pub const DEFAULT_SMS_BASE_URL: &str = "http://www.hindit.co.in/API/pushsms.aspx";

/// Credentials and routing for the SMS provider.
#[derive(Debug, Clone)]
pub struct SmsConfig {
    pub base_url: String,
    pub login_id: String,
    pub password: String,
    pub sender_id: String,
    pub route_id: String,
    pub template_id: String,
}

/// API service configuration loaded from environment variables.
///
/// A `.env` file in the working directory is read first when present.
#[derive(Debug)]
pub struct ApiConfig {
    /// PostgreSQL connection URL.
    pub database_url: String,
    /// HS256 secret for access tokens.
    pub jwt_secret: String,
    /// TCP port for the HTTP server (default 3000). Env var: `API_PORT`.
    pub api_port: u16,
    /// Allowed CORS origins. Env var: `CORS_ORIGINS`, comma separated.
    pub cors_origins: Vec<String>,
    pub sms: SmsConfig,
    /// Base URL pinged by the keep-alive job. Disabled when unset.
    pub keep_alive_url: Option<String>,
}

impl ApiConfig {
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();
        Self {
            database_url: std::env::var("DATABASE_URL").expect("DATABASE_URL"),
            jwt_secret: std::env::var("JWT_SECRET").expect("JWT_SECRET"),
            api_port: std::env::var("API_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            cors_origins: parse_origins(
                &std::env::var("CORS_ORIGINS")
                    .unwrap_or_else(|_| "http://localhost:3000".to_owned()),
            ),
            sms: SmsConfig {
                base_url: std::env::var("SMS_BASE_URL")
                    .unwrap_or_else(|_| DEFAULT_SMS_BASE_URL.to_owned()),
                login_id: std::env::var("SMS_LOGIN_ID").expect("SMS_LOGIN_ID"),
                password: std::env::var("SMS_PASSWORD").expect("SMS_PASSWORD"),
                sender_id: std::env::var("SMS_SENDER_ID").expect("SMS_SENDER_ID"),
                route_id: std::env::var("SMS_ROUTE_ID").expect("SMS_ROUTE_ID"),
                template_id: std::env::var("SMS_TEMPLATE_ID").expect("SMS_TEMPLATE_ID"),
            },
            keep_alive_url: std::env::var("KEEP_ALIVE_URL")
                .ok()
                .filter(|v| !v.trim().is_empty()),
        }
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect()
}
