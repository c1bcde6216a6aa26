//! Facade of the Bot API.

use std::{fmt::Debug, sync::Arc};

use bon::bon;
use chrono::{DateTime, FixedOffset, Utc};
use secrecy::{ExposeSecret, SecretString};
use tokio::sync::OnceCell;
use url::Url;

use crate::{
    client::{DEFAULT_TIMEOUT, HttpTransport},
    defaults::Defaults,
    methods::{GetFile, GetMe, Method},
    objects::{File, User},
    prelude::*,
    transport::{Payload, Transport},
};

pub const DEFAULT_BASE_URL: &str = "https://api.telegram.org";
pub const DEFAULT_BASE_FILE_URL: &str = "https://api.telegram.org/file";

/// Telegram bot API connection.
///
/// Cloning is cheap, all the clones share the transports and the cached bot user.
#[must_use]
#[derive(Clone)]
pub struct Bot(Arc<Inner>);

struct Inner {
    token: SecretString,
    base_url: Url,
    base_file_url: Url,
    transport: Arc<dyn Transport>,

    /// Used for the methods which block on the server side.
    long_polling_transport: Arc<dyn Transport>,

    defaults: Defaults,

    /// Filled in by [`Bot::initialize`].
    me: OnceCell<User>,
}

#[bon]
impl Bot {
    #[builder]
    pub fn new(
        #[builder(into)] token: String,
        base_url: Option<Url>,
        base_file_url: Option<Url>,
        transport: Option<Arc<dyn Transport>>,
        long_polling_transport: Option<Arc<dyn Transport>>,
        #[builder(default)] defaults: Defaults,
    ) -> Result<Self> {
        if token.is_empty() {
            return Err(Error::InvalidToken("the token is empty".to_owned()));
        }
        let transport: Arc<dyn Transport> = match transport {
            Some(transport) => transport,
            None => Arc::new(HttpTransport::new()?),
        };
        let long_polling_transport: Arc<dyn Transport> = match long_polling_transport {
            Some(transport) => transport,
            None => Arc::new(HttpTransport::new()?),
        };
        Ok(Self(Arc::new(Inner {
            token: SecretString::from(token),
            base_url: base_url.map_or_else(|| Url::parse(DEFAULT_BASE_URL), Ok)?,
            base_file_url: base_file_url.map_or_else(|| Url::parse(DEFAULT_BASE_FILE_URL), Ok)?,
            transport,
            long_polling_transport,
            defaults,
            me: OnceCell::new(),
        })))
    }
}

impl Bot {
    /// Call the Telegram Bot API method.
    ///
    /// The parameters are validated before anything is sent.
    #[instrument(skip_all, fields(method = M::NAME))]
    pub async fn call<M: Method + Sync>(&self, method: &M) -> Result<M::Response> {
        method.validate()?;
        let payload = Payload::from_method(method, &self.0.defaults)?;
        let url = endpoint_url(&self.0.base_url, &self.0.token, M::NAME)?;
        let transport =
            if M::LONG_POLLING { &self.0.long_polling_transport } else { &self.0.transport };
        debug!(n_fields = payload.fields.len(), multipart = payload.is_multipart(), "Calling…");
        let result = match transport.post(url, payload, method.timeout()).await {
            Ok(result) => result,

            // Until the token is proven valid, it is the most likely culprit.
            Err(Error::EndpointNotFound(description)) if !self.0.me.initialized() => {
                return Err(Error::InvalidToken(description));
            }

            Err(error) => {
                warn!("Failed: {error:#}");
                return Err(error);
            }
        };
        Ok(serde_json::from_value(result)?)
    }

    /// Initialize the transports and fetch the bot user.
    #[instrument(skip_all)]
    pub async fn initialize(&self) -> Result<&User> {
        futures::try_join!(self.0.transport.initialize(), self.0.long_polling_transport.initialize())?;
        let me = self.0.me.get_or_try_init(|| self.call(&GetMe)).await?;
        info!(id = me.id, username = me.username.as_deref(), "Initialized");
        Ok(me)
    }

    #[instrument(skip_all)]
    pub async fn shutdown(&self) -> Result {
        futures::try_join!(self.0.transport.shutdown(), self.0.long_polling_transport.shutdown())?;
        info!("Shut down");
        Ok(())
    }

    /// Bot user, available after [`Bot::initialize`].
    #[must_use]
    pub fn me(&self) -> Option<&User> {
        self.0.me.get()
    }

    pub fn defaults(&self) -> &Defaults {
        &self.0.defaults
    }

    /// Convert the timestamp into the default time zone.
    #[must_use]
    pub fn localize(&self, timestamp: DateTime<Utc>) -> DateTime<FixedOffset> {
        self.0.defaults.localize(timestamp)
    }

    /// Download the file contents.
    ///
    /// The file must have been obtained via `getFile`, see also [`Bot::get_and_download_file`].
    #[instrument(skip_all, fields(file_id = %file.file_id))]
    pub async fn download_file(&self, file: &File) -> Result<Vec<u8>> {
        let file_path = file.file_path.as_deref().ok_or_else(|| {
            Error::InvalidArgument(format!("file `{}` has no path, call `getFile` first", file.file_id))
        })?;
        let url = endpoint_url(&self.0.base_file_url, &self.0.token, file_path)?;
        let bytes = self.0.transport.get(url, DEFAULT_TIMEOUT).await?;
        debug!(n_bytes = bytes.len(), "Downloaded");
        Ok(bytes)
    }

    pub async fn get_and_download_file(&self, file_id: impl Into<String>) -> Result<Vec<u8>> {
        let file = GetFile::builder().file_id(file_id).build().call_on(self).await?;
        self.download_file(&file).await
    }
}

impl Debug for Bot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Bot")
            .field("base_url", &self.0.base_url.as_str())
            .field("me", &self.0.me.get().map(|me| me.id))
            .finish_non_exhaustive()
    }
}

fn endpoint_url(base_url: &Url, token: &SecretString, path: &str) -> Result<Url> {
    let base_url = base_url.as_str().trim_end_matches('/');
    Ok(Url::parse(&format!("{base_url}/bot{}/{path}", token.expose_secret()))?)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::{
        constants::ParseMode,
        methods::{GetUpdates, SendLocation, SendMessage},
        testing::RecordingTransport,
    };

    const TOKEN: &str = "123:secret";

    // language=json
    fn me() -> Value {
        json!({"id": 123, "is_bot": true, "first_name": "Test", "username": "test_bot"})
    }

    fn bot(transport: &Arc<RecordingTransport>) -> Result<Bot> {
        Bot::builder()
            .token(TOKEN)
            .transport(transport.clone())
            .long_polling_transport(transport.clone())
            .build()
    }

    #[tokio::test]
    async fn call_ok() -> Result {
        let transport = RecordingTransport::new();
        transport.respond_ok(me()).await?;
        let user = bot(&transport)?.call(&GetMe).await?;
        assert_eq!(user.id, 123);

        let requests = transport.requests().await;
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].url.as_str(), "https://api.telegram.org/bot123:secret/getMe");
        assert_eq!(requests[0].timeout, DEFAULT_TIMEOUT);
        Ok(())
    }

    #[tokio::test]
    async fn initialize_ok() -> Result {
        let transport = RecordingTransport::new();
        transport.respond_ok(me()).await?;
        let bot = bot(&transport)?;
        assert!(bot.me().is_none());
        assert_eq!(bot.initialize().await?.username.as_deref(), Some("test_bot"));
        assert_eq!(bot.me().map(|me| me.id), Some(123));

        // The bot user is cached.
        bot.initialize().await?;
        assert_eq!(transport.requests().await.len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn validation_before_network_fails() -> Result {
        let transport = RecordingTransport::new();
        let method = SendLocation::builder().chat_id(42_i64).latitude(52.0).build();
        let result = bot(&transport)?.call(&method).await;
        assert!(matches!(result, Err(Error::InvalidArgument(_))));
        assert!(transport.requests().await.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn invalid_token_vs_endpoint_not_found_ok() -> Result {
        // language=json
        let not_found = json!({"ok": false, "error_code": 404, "description": "Not Found"});
        let transport = RecordingTransport::new();
        let bot = bot(&transport)?;

        transport.respond(404, &not_found).await?;
        assert!(matches!(bot.call(&GetMe).await, Err(Error::InvalidToken(_))));

        transport.respond_ok(me()).await?;
        bot.initialize().await?;
        transport.respond(404, &not_found).await?;
        assert!(matches!(bot.call(&GetMe).await, Err(Error::EndpointNotFound(_))));
        Ok(())
    }

    #[tokio::test]
    async fn api_error_surfaced_ok() -> Result {
        let transport = RecordingTransport::new();
        transport
            .respond(
                429,
                // language=json
                &json!({
                    "ok": false,
                    "error_code": 429,
                    "description": "Too Many Requests: retry after 3",
                    "parameters": {"retry_after": 3}
                }),
            )
            .await?;
        let result = bot(&transport)?.call(&GetMe).await;
        assert!(matches!(result, Err(Error::TooManyRequests { retry_after_secs: 3 })));
        Ok(())
    }

    #[tokio::test]
    async fn defaults_applied_ok() -> Result {
        let transport = RecordingTransport::new();
        // language=json
        transport
            .respond_ok(json!({"message_id": 1, "date": 0, "chat": {"id": 42, "type": "private"}, "text": "Hi"}))
            .await?;
        let bot = Bot::builder()
            .token(TOKEN)
            .transport(transport.clone())
            .defaults(Defaults::builder().parse_mode(ParseMode::Html).build())
            .build()?;
        let message = SendMessage::builder().chat_id(42_i64).text("<b>Hi</b>").build().call_on(&bot).await?;
        assert_eq!(message.id, 1);

        let requests = transport.requests().await;
        let payload = requests[0].payload.as_ref().ok_or_else(|| anyhow::anyhow!("no payload"))?;
        assert_eq!(payload.fields["parse_mode"], json!("HTML"));
        Ok(())
    }

    #[tokio::test]
    async fn long_polling_transport_ok() -> Result {
        let transport = RecordingTransport::new();
        let long_polling_transport = RecordingTransport::new();
        long_polling_transport.respond_ok(json!([])).await?;
        let bot = Bot::builder()
            .token(TOKEN)
            .transport(transport.clone())
            .long_polling_transport(long_polling_transport.clone())
            .build()?;
        let updates = GetUpdates::builder().timeout_secs(30).build().call_on(&bot).await?;
        assert!(updates.is_empty());

        assert!(transport.requests().await.is_empty());
        let requests = long_polling_transport.requests().await;
        assert_eq!(requests[0].timeout, DEFAULT_TIMEOUT + Duration::from_secs(30));
        Ok(())
    }

    #[tokio::test]
    async fn download_file_ok() -> Result {
        let transport = RecordingTransport::new();
        // language=json
        transport
            .respond_ok(json!({"file_id": "AgAD", "file_unique_id": "U", "file_path": "photos/file_0.jpg"}))
            .await?;
        transport.respond_bytes(b"meow").await;
        let bytes = bot(&transport)?.get_and_download_file("AgAD").await?;
        assert_eq!(bytes, b"meow");

        let requests = transport.requests().await;
        assert_eq!(
            requests[1].url.as_str(),
            "https://api.telegram.org/file/bot123:secret/photos/file_0.jpg",
        );
        assert!(requests[1].payload.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn download_file_without_path_fails() -> Result {
        let transport = RecordingTransport::new();
        // language=json
        let file: File = serde_json::from_value(json!({"file_id": "AgAD", "file_unique_id": "U"}))?;
        let result = bot(&transport)?.download_file(&file).await;
        assert!(matches!(result, Err(Error::InvalidArgument(_))));
        Ok(())
    }

    #[test]
    fn empty_token_fails() {
        let result = Bot::builder().token("").transport(RecordingTransport::new()).build();
        assert!(matches!(result, Err(Error::InvalidToken(_))));
    }

    #[test]
    fn custom_base_url_ok() -> Result {
        let url = endpoint_url(
            &Url::parse("http://localhost:8081/")?,
            &SecretString::from(TOKEN),
            GetMe::NAME,
        )?;
        assert_eq!(url.as_str(), "http://localhost:8081/bot123:secret/getMe");
        Ok(())
    }
}
