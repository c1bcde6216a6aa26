use bon::Builder;

use crate::{
    client::DEFAULT_TIMEOUT,
    constants::UpdateType,
    methods::{Method, check_count},
    objects::{InputFile, InputFileUpload, Update, WebhookInfo},
    prelude::*,
};

/// Use this method to receive incoming updates using long polling. Returns an `Array` of `Update` objects.
#[derive(Clone, Debug, Default, Builder, Serialize)]
#[must_use]
pub struct GetUpdates {
    /// Identifier of the first update to be returned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<i64>,

    /// Limits the number of updates to be retrieved. Values between 1-100 are accepted. Defaults to 100.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    /// Timeout in seconds for long polling.
    ///
    /// Defaults to 0, i.e. usual short polling.
    /// Should be positive, short polling should be used for testing purposes only.
    #[serde(rename = "timeout", skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_updates: Option<Vec<UpdateType>>,
}

impl Method for GetUpdates {
    const NAME: &'static str = "getUpdates";
    const LONG_POLLING: bool = true;

    type Response = Vec<Update>;

    fn timeout(&self) -> Duration {
        DEFAULT_TIMEOUT + Duration::from_secs(self.timeout_secs.unwrap_or_default())
    }

    fn validate(&self) -> Result {
        if let Some(limit) = self.limit {
            check_count("limit", limit as usize, 1..=100)?;
        }
        Ok(())
    }
}

/// Specify a URL and receive incoming updates via an outgoing webhook.
#[derive(Clone, Debug, Builder, Serialize)]
#[must_use]
pub struct SetWebhook {
    /// HTTPS URL to send updates to. Use an empty string to remove webhook integration.
    #[builder(into)]
    pub url: String,

    /// Public key certificate so that the root certificate in use can be checked.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certificate: Option<InputFile>,

    /// The fixed IP address which will be used to send webhook requests instead of the IP
    /// address resolved through DNS.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub ip_address: Option<String>,

    /// The maximum allowed number of simultaneous HTTPS connections to the webhook, 1-100.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_connections: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_updates: Option<Vec<UpdateType>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub drop_pending_updates: Option<bool>,

    /// A secret token to be sent in a header `X-Telegram-Bot-Api-Secret-Token` in every webhook
    /// request, 1-256 characters. Only characters `A-Z`, `a-z`, `0-9`, `_` and `-` are allowed.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub secret_token: Option<String>,
}

impl Method for SetWebhook {
    const NAME: &'static str = "setWebhook";

    type Response = bool;

    fn validate(&self) -> Result {
        if let Some(max_connections) = self.max_connections {
            check_count("max_connections", max_connections as usize, 1..=100)?;
        }
        if let Some(secret_token) = &self.secret_token {
            check_count("secret_token", secret_token.len(), 1..=256)?;
            if !secret_token
                .chars()
                .all(|char_| char_.is_ascii_alphanumeric() || char_ == '_' || char_ == '-')
            {
                return Err(Error::InvalidArgument(
                    "`secret_token` may contain only `A-Z`, `a-z`, `0-9`, `_` and `-`".to_owned(),
                ));
            }
        }
        Ok(())
    }

    fn uploads(&self) -> Vec<&InputFileUpload> {
        self.certificate.iter().filter_map(InputFile::as_upload).collect()
    }
}

/// Remove webhook integration if you decide to switch back to `getUpdates`.
#[derive(Clone, Debug, Default, Builder, Serialize)]
#[must_use]
pub struct DeleteWebhook {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drop_pending_updates: Option<bool>,
}

impl Method for DeleteWebhook {
    const NAME: &'static str = "deleteWebhook";

    type Response = bool;
}

/// Get current webhook status.
#[derive(Clone, Copy, Debug, Serialize)]
#[must_use]
pub struct GetWebhookInfo;

impl Method for GetWebhookInfo {
    const NAME: &'static str = "getWebhookInfo";

    type Response = WebhookInfo;
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn get_updates_ok() -> Result {
        let method = GetUpdates::builder()
            .offset(100)
            .timeout_secs(30)
            .allowed_updates(vec![UpdateType::Message, UpdateType::MessageReaction])
            .build();
        assert_eq!(
            serde_json::to_value(&method)?,
            json!({"offset": 100, "timeout": 30, "allowed_updates": ["message", "message_reaction"]}),
        );
        assert_eq!(method.timeout(), DEFAULT_TIMEOUT + Duration::from_secs(30));
        Ok(())
    }

    #[test]
    fn get_updates_limit_fails() {
        assert!(GetUpdates::builder().limit(0).build().validate().is_err());
        assert!(GetUpdates::builder().limit(101).build().validate().is_err());
    }

    #[test]
    fn set_webhook_secret_token_fails() {
        let method =
            SetWebhook::builder().url("https://example.com/hook").secret_token("not secret!").build();
        assert!(matches!(method.validate(), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn set_webhook_certificate_upload_ok() {
        let method = SetWebhook::builder()
            .url("https://example.com/hook")
            .certificate(InputFile::upload("cert.pem", b"-----BEGIN".as_slice()))
            .build();
        assert_eq!(method.uploads().len(), 1);
    }
}
