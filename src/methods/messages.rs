//! Sending, editing, and deleting messages.

use bon::Builder;
use serde_json::json;

use crate::{
    constants::{ChatAction, ParseMode},
    defaults::DefaultParameter,
    methods::{MESSAGE_DEFAULTS, Method, check_count, check_exclusive},
    objects::{
        ChatId,
        InlineKeyboardMarkup,
        InputFile,
        InputFileUpload,
        InputMedia,
        LinkPreviewOptions,
        Location,
        Message,
        MessageEntity,
        MessageId,
        MessageOrTrue,
        ReactionType,
        ReplyMarkup,
        ReplyParameters,
    },
    prelude::*,
};

/// [Send a message][1].
///
/// [1]: https://core.telegram.org/bots/api#sendmessage
#[derive(Clone, Debug, Builder, Serialize)]
#[must_use]
pub struct SendMessage {
    #[builder(into)]
    pub chat_id: ChatId,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_thread_id: Option<i64>,

    #[builder(into)]
    pub text: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub entities: Option<Vec<MessageEntity>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_preview_options: Option<LinkPreviewOptions>,

    /// Legacy, superseded by `link_preview_options`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_web_page_preview: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_notification: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub protect_content: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_parameters: Option<ReplyParameters>,

    /// Legacy, superseded by `reply_parameters`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to_message_id: Option<i64>,

    /// Legacy, superseded by `reply_parameters`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_sending_without_reply: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub reply_markup: Option<ReplyMarkup>,
}

impl SendMessage {
    /// HTML message without the link preview.
    pub fn quick_html(chat_id: impl Into<ChatId>, text: impl Into<String>) -> Self {
        Self::builder()
            .chat_id(chat_id)
            .text(text)
            .parse_mode(ParseMode::Html)
            .link_preview_options(LinkPreviewOptions::DISABLED)
            .build()
    }
}

impl Method for SendMessage {
    const NAME: &'static str = "sendMessage";
    const DEFAULTS: &'static [DefaultParameter] = &[
        DefaultParameter::ParseMode,
        DefaultParameter::DisableNotification,
        DefaultParameter::ProtectContent,
        DefaultParameter::LinkPreviewOptions,
    ];

    type Response = Message;

    fn validate(&self) -> Result {
        if self.text.is_empty() {
            return Err(Error::InvalidArgument("`text` must not be empty".to_owned()));
        }
        check_exclusive(
            ("disable_web_page_preview", self.disable_web_page_preview.is_some()),
            ("link_preview_options", self.link_preview_options.is_some()),
        )?;
        check_exclusive(
            ("reply_to_message_id", self.reply_to_message_id.is_some()),
            ("reply_parameters", self.reply_parameters.is_some()),
        )
    }

    fn normalize(&self, fields: &mut Map<String, Value>) {
        normalize_link_preview(fields);
        normalize_reply(fields);
    }
}

/// [Forward a message][1] of any kind.
///
/// [1]: https://core.telegram.org/bots/api#forwardmessage
#[derive(Clone, Debug, Builder, Serialize)]
#[must_use]
pub struct ForwardMessage {
    #[builder(into)]
    pub chat_id: ChatId,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_thread_id: Option<i64>,

    /// Chat where the original message was sent.
    #[builder(into)]
    pub from_chat_id: ChatId,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_notification: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub protect_content: Option<bool>,

    /// Message identifier in the chat specified in `from_chat_id`.
    pub message_id: i64,
}

impl Method for ForwardMessage {
    const NAME: &'static str = "forwardMessage";
    const DEFAULTS: &'static [DefaultParameter] =
        &[DefaultParameter::DisableNotification, DefaultParameter::ProtectContent];

    type Response = Message;
}

/// [Copy a message][1] without a link to the original message.
///
/// [1]: https://core.telegram.org/bots/api#copymessage
#[derive(Clone, Debug, Builder, Serialize)]
#[must_use]
pub struct CopyMessage {
    #[builder(into)]
    pub chat_id: ChatId,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_thread_id: Option<i64>,

    #[builder(into)]
    pub from_chat_id: ChatId,

    pub message_id: i64,

    /// New caption for media, 0-1024 characters after entities parsing.
    ///
    /// If not specified, the original caption is kept.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub caption: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption_entities: Option<Vec<MessageEntity>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_notification: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub protect_content: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_parameters: Option<ReplyParameters>,

    /// Legacy, superseded by `reply_parameters`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to_message_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_sending_without_reply: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub reply_markup: Option<ReplyMarkup>,
}

impl Method for CopyMessage {
    const NAME: &'static str = "copyMessage";
    const DEFAULTS: &'static [DefaultParameter] = MESSAGE_DEFAULTS;

    type Response = MessageId;

    fn validate(&self) -> Result {
        check_exclusive(
            ("reply_to_message_id", self.reply_to_message_id.is_some()),
            ("reply_parameters", self.reply_parameters.is_some()),
        )
    }

    fn normalize(&self, fields: &mut Map<String, Value>) {
        normalize_reply(fields);
    }
}

/// [Send a photo][1].
///
/// [1]: https://core.telegram.org/bots/api#sendphoto
#[derive(Clone, Debug, Builder, Serialize)]
#[must_use]
pub struct SendPhoto {
    #[builder(into)]
    pub chat_id: ChatId,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_thread_id: Option<i64>,

    #[builder(into)]
    pub photo: InputFile,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub caption: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption_entities: Option<Vec<MessageEntity>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_spoiler: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_notification: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub protect_content: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_parameters: Option<ReplyParameters>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub reply_markup: Option<ReplyMarkup>,
}

impl Method for SendPhoto {
    const NAME: &'static str = "sendPhoto";
    const DEFAULTS: &'static [DefaultParameter] = MESSAGE_DEFAULTS;

    type Response = Message;

    fn uploads(&self) -> Vec<&InputFileUpload> {
        self.photo.as_upload().into_iter().collect()
    }
}

/// [Send a general file][1].
///
/// [1]: https://core.telegram.org/bots/api#senddocument
#[derive(Clone, Debug, Builder, Serialize)]
#[must_use]
pub struct SendDocument {
    #[builder(into)]
    pub chat_id: ChatId,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_thread_id: Option<i64>,

    #[builder(into)]
    pub document: InputFile,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub thumbnail: Option<InputFile>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub caption: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption_entities: Option<Vec<MessageEntity>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_content_type_detection: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_notification: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub protect_content: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_parameters: Option<ReplyParameters>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub reply_markup: Option<ReplyMarkup>,
}

impl Method for SendDocument {
    const NAME: &'static str = "sendDocument";
    const DEFAULTS: &'static [DefaultParameter] = MESSAGE_DEFAULTS;

    type Response = Message;

    fn uploads(&self) -> Vec<&InputFileUpload> {
        [Some(&self.document), self.thumbnail.as_ref()]
            .into_iter()
            .flatten()
            .filter_map(InputFile::as_upload)
            .collect()
    }
}

/// [Send a static `.WEBP`, animated `.TGS`, or video `.WEBM` sticker][1].
///
/// [1]: https://core.telegram.org/bots/api#sendsticker
#[derive(Clone, Debug, Builder, Serialize)]
#[must_use]
pub struct SendSticker {
    #[builder(into)]
    pub chat_id: ChatId,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_thread_id: Option<i64>,

    #[builder(into)]
    pub sticker: InputFile,

    /// Emoji associated with the sticker; only for just uploaded stickers.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub emoji: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_notification: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub protect_content: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_parameters: Option<ReplyParameters>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub reply_markup: Option<ReplyMarkup>,
}

impl Method for SendSticker {
    const NAME: &'static str = "sendSticker";
    const DEFAULTS: &'static [DefaultParameter] =
        &[DefaultParameter::DisableNotification, DefaultParameter::ProtectContent];

    type Response = Message;

    fn uploads(&self) -> Vec<&InputFileUpload> {
        self.sticker.as_upload().into_iter().collect()
    }
}

/// [Send a group of photos or documents as an album][1].
///
/// [1]: https://core.telegram.org/bots/api#sendmediagroup
#[derive(Clone, Debug, Builder, Serialize)]
#[must_use]
pub struct SendMediaGroup {
    #[builder(into)]
    pub chat_id: ChatId,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_thread_id: Option<i64>,

    /// 2-10 items.
    pub media: Vec<InputMedia>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_notification: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub protect_content: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_parameters: Option<ReplyParameters>,
}

impl Method for SendMediaGroup {
    const NAME: &'static str = "sendMediaGroup";
    const DEFAULTS: &'static [DefaultParameter] =
        &[DefaultParameter::DisableNotification, DefaultParameter::ProtectContent];

    type Response = Vec<Message>;

    fn validate(&self) -> Result {
        check_count("media", self.media.len(), 2..=10)?;
        let n_documents = self.media.iter().filter(|media| media.is_document()).count();
        if n_documents != 0 && n_documents != self.media.len() {
            return Err(Error::InvalidArgument(
                "documents may only be grouped with other documents".to_owned(),
            ));
        }
        Ok(())
    }

    fn uploads(&self) -> Vec<&InputFileUpload> {
        self.media.iter().flat_map(InputMedia::uploads).collect()
    }
}

/// [Send a point on the map][1].
///
/// Either `location` or both `latitude` and `longitude` must be set.
///
/// [1]: https://core.telegram.org/bots/api#sendlocation
#[derive(Clone, Debug, Builder, Serialize)]
#[must_use]
pub struct SendLocation {
    #[builder(into)]
    pub chat_id: ChatId,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_thread_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,

    /// Expanded into the individual parameters upon sending.
    #[serde(skip)]
    pub location: Option<Location>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub horizontal_accuracy: Option<f64>,

    /// Period in seconds during which the location will be updated, 60-86400, or `0x7FFFFFFF`
    /// for live locations that can be edited indefinitely.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub live_period: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub proximity_alert_radius: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_notification: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub protect_content: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_parameters: Option<ReplyParameters>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub reply_markup: Option<ReplyMarkup>,
}

impl Method for SendLocation {
    const NAME: &'static str = "sendLocation";
    const DEFAULTS: &'static [DefaultParameter] =
        &[DefaultParameter::DisableNotification, DefaultParameter::ProtectContent];

    type Response = Message;

    fn validate(&self) -> Result {
        let has_coordinates = self.latitude.is_some() || self.longitude.is_some();
        check_exclusive(("location", self.location.is_some()), ("latitude/longitude", has_coordinates))?;
        if self.location.is_none() && (self.latitude.is_none() || self.longitude.is_none()) {
            return Err(Error::InvalidArgument(
                "either `location` or both `latitude` and `longitude` are required".to_owned(),
            ));
        }
        Ok(())
    }

    fn normalize(&self, fields: &mut Map<String, Value>) {
        let Some(location) = &self.location else { return };
        fields.insert("latitude".to_owned(), json!(location.latitude));
        fields.insert("longitude".to_owned(), json!(location.longitude));
        let optional = [
            ("horizontal_accuracy", location.horizontal_accuracy.map(|accuracy| json!(accuracy))),
            ("live_period", location.live_period.map(Value::from)),
            ("heading", location.heading.map(Value::from)),
            ("proximity_alert_radius", location.proximity_alert_radius.map(Value::from)),
        ];
        for (key, value) in optional {
            if let Some(value) = value {
                fields.entry(key).or_insert(value);
            }
        }
    }
}

/// [Tell the user that something is happening][1] on the bot's side.
///
/// [1]: https://core.telegram.org/bots/api#sendchataction
#[derive(Clone, Debug, Builder, Serialize)]
#[must_use]
pub struct SendChatAction {
    #[builder(into)]
    pub chat_id: ChatId,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_thread_id: Option<i64>,

    pub action: ChatAction,
}

impl Method for SendChatAction {
    const NAME: &'static str = "sendChatAction";

    type Response = bool;
}

/// [Edit text][1] of a message.
///
/// Either `chat_id` with `message_id`, or `inline_message_id` must be set.
///
/// [1]: https://core.telegram.org/bots/api#editmessagetext
#[derive(Clone, Debug, Builder, Serialize)]
#[must_use]
pub struct EditMessageText {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub chat_id: Option<ChatId>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub inline_message_id: Option<String>,

    #[builder(into)]
    pub text: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub entities: Option<Vec<MessageEntity>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_preview_options: Option<LinkPreviewOptions>,

    /// Legacy, superseded by `link_preview_options`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_web_page_preview: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,
}

impl Method for EditMessageText {
    const NAME: &'static str = "editMessageText";
    const DEFAULTS: &'static [DefaultParameter] =
        &[DefaultParameter::ParseMode, DefaultParameter::LinkPreviewOptions];

    /// Edited message, or `true` for inline messages.
    type Response = MessageOrTrue;

    fn validate(&self) -> Result {
        let chat_message = match (&self.chat_id, self.message_id) {
            (Some(_), Some(_)) => true,
            (None, None) => false,
            _ => {
                return Err(Error::InvalidArgument(
                    "`chat_id` and `message_id` must be set together".to_owned(),
                ));
            }
        };
        check_exclusive(
            ("chat_id/message_id", chat_message),
            ("inline_message_id", self.inline_message_id.is_some()),
        )?;
        if !chat_message && self.inline_message_id.is_none() {
            return Err(Error::InvalidArgument(
                "either `chat_id` with `message_id`, or `inline_message_id` is required".to_owned(),
            ));
        }
        check_exclusive(
            ("disable_web_page_preview", self.disable_web_page_preview.is_some()),
            ("link_preview_options", self.link_preview_options.is_some()),
        )
    }

    fn normalize(&self, fields: &mut Map<String, Value>) {
        normalize_link_preview(fields);
    }
}

/// [Delete a message][1], including service messages.
///
/// [1]: https://core.telegram.org/bots/api#deletemessage
#[derive(Clone, Debug, Builder, Serialize)]
#[must_use]
pub struct DeleteMessage {
    #[builder(into)]
    pub chat_id: ChatId,

    pub message_id: i64,
}

impl Method for DeleteMessage {
    const NAME: &'static str = "deleteMessage";

    type Response = bool;
}

/// [Change the chosen reactions][1] on a message.
///
/// [1]: https://core.telegram.org/bots/api#setmessagereaction
#[derive(Clone, Debug, Builder, Serialize)]
#[must_use]
pub struct SetMessageReaction {
    #[builder(into)]
    pub chat_id: ChatId,

    pub message_id: i64,

    /// New reactions to set on the message, empty to remove the reactions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reaction: Option<Vec<ReactionType>>,

    /// Pass `true` to set the reaction with a big animation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_big: Option<bool>,
}

impl Method for SetMessageReaction {
    const NAME: &'static str = "setMessageReaction";

    type Response = bool;
}

/// `disable_web_page_preview` → `link_preview_options`.
fn normalize_link_preview(fields: &mut Map<String, Value>) {
    if let Some(Value::Bool(is_disabled)) = fields.remove("disable_web_page_preview") {
        fields.insert("link_preview_options".to_owned(), json!({"is_disabled": is_disabled}));
    }
}

/// `reply_to_message_id` and `allow_sending_without_reply` → `reply_parameters`.
fn normalize_reply(fields: &mut Map<String, Value>) {
    let allow_sending_without_reply = fields.remove("allow_sending_without_reply");
    if let Some(message_id) = fields.remove("reply_to_message_id") {
        let mut parameters = Map::new();
        parameters.insert("message_id".to_owned(), message_id);
        if let Some(allow) = allow_sending_without_reply {
            parameters.insert("allow_sending_without_reply".to_owned(), allow);
        }
        fields.insert("reply_parameters".to_owned(), Value::Object(parameters));
    } else if let Some(allow) = allow_sending_without_reply {
        if let Some(Value::Object(parameters)) = fields.get_mut("reply_parameters") {
            parameters.entry("allow_sending_without_reply").or_insert(allow);
        }
    }
}
