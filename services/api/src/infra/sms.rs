use anyhow::Context as _;
use reqwest::StatusCode;
use url::Url;

use crate::config::SmsConfig;
use crate::domain::repository::SmsGateway;
use crate::error::ApiError;

/// Push-API SMS provider reached over plain HTTP GET.
#[derive(Clone)]
pub struct HttpSmsGateway {
    pub client: reqwest::Client,
    pub config: SmsConfig,
}

impl HttpSmsGateway {
    fn request_url(&self, phone: &str, message: &str) -> Result<Url, url::ParseError> {
        let c = &self.config;
        Url::parse_with_params(
            &c.base_url,
            [
                ("loginID", c.login_id.as_str()),
                ("password", c.password.as_str()),
                ("mobile", phone),
                ("text", message),
                ("senderid", c.sender_id.as_str()),
                ("route_id", c.route_id.as_str()),
                ("Unicode", "0"),
                ("IP", "0.0.0.0"),
                ("Template_id", c.template_id.as_str()),
            ],
        )
    }
}

impl SmsGateway for HttpSmsGateway {
    async fn send(&self, phone: &str, message: &str) -> Result<bool, ApiError> {
        let url = self
            .request_url(phone, message)
            .context("build sms request url")?;
        let resp = self
            .client
            .get(url)
            .send()
            .await
            .context("send sms request")?;
        let status = resp.status();
        if status != StatusCode::OK {
            tracing::warn!(%status, "sms provider rejected message");
        }
        Ok(status == StatusCode::OK)
    }
}
