//! Pushover-backed [`Notifier`].
//!
//! Credentials are resolved by `sig-config` and passed in; never log them.

use serde::Serialize;
use sig_config::{secrets::PushoverSecrets, PushoverSettings};
use tracing::debug;

use crate::{AlertMessage, Notifier, NotifyError};

const MESSAGES_PATH: &str = "/1/messages.json";

/// Wire body for `POST /1/messages.json`.
#[derive(Serialize)]
struct PushoverRequest<'a> {
    token: &'a str,
    user: &'a str,
    title: &'a str,
    message: &'a str,
}

/// Sends alerts to the Pushover messages API. One attempt per alert.
#[derive(Clone)]
pub struct PushoverNotifier {
    http: reqwest::Client,
    messages_url: String,
    secrets: PushoverSecrets,
}

impl std::fmt::Debug for PushoverNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PushoverNotifier")
            .field("messages_url", &self.messages_url)
            .field("secrets", &self.secrets)
            .finish()
    }
}

impl PushoverNotifier {
    pub fn new(settings: &PushoverSettings) -> Result<Self, NotifyError> {
        let http = reqwest::Client::builder()
            .timeout(settings.timeout)
            .build()
            .map_err(|e| NotifyError::Client(e.to_string()))?;

        Ok(Self {
            http,
            messages_url: format!("{}{}", settings.api_url.trim_end_matches('/'), MESSAGES_PATH),
            secrets: settings.secrets.clone(),
        })
    }

    pub fn messages_url(&self) -> &str {
        &self.messages_url
    }
}

#[async_trait::async_trait]
impl Notifier for PushoverNotifier {
    fn name(&self) -> &'static str {
        "pushover"
    }

    async fn send(&self, msg: &AlertMessage) -> Result<(), NotifyError> {
        let token = self
            .secrets
            .token
            .as_deref()
            .ok_or(NotifyError::MissingToken)?;

        let body = PushoverRequest {
            token,
            user: &self.secrets.user,
            title: &msg.title,
            message: &msg.body,
        };

        let resp = self
            .http
            .post(&self.messages_url)
            .json(&body)
            .send()
            .await
            .map_err(|e| NotifyError::Transport(e.without_url().to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(NotifyError::Api {
                status: status.as_u16(),
                body,
            });
        }

        debug!(status = status.as_u16(), "pushover accepted alert");
        Ok(())
    }
}
