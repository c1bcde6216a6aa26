use bon::Builder;

use crate::{
    objects::{Extra, WebAppInfo},
    prelude::*,
};

/// Additional interface options of a sent message.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[must_use]
#[serde(untagged)]
pub enum ReplyMarkup {
    InlineKeyboard(InlineKeyboardMarkup),
    ReplyKeyboard(ReplyKeyboardMarkup),
    Remove(ReplyKeyboardRemove),
    ForceReply(ForceReply),
}

impl From<InlineKeyboardMarkup> for ReplyMarkup {
    fn from(markup: InlineKeyboardMarkup) -> Self {
        Self::InlineKeyboard(markup)
    }
}

/// Converts a button into a single-button inline keyboard.
impl From<InlineKeyboardButton> for ReplyMarkup {
    fn from(button: InlineKeyboardButton) -> Self {
        InlineKeyboardMarkup::single_button(button).into()
    }
}

impl From<ReplyKeyboardMarkup> for ReplyMarkup {
    fn from(markup: ReplyKeyboardMarkup) -> Self {
        Self::ReplyKeyboard(markup)
    }
}

impl From<ReplyKeyboardRemove> for ReplyMarkup {
    fn from(markup: ReplyKeyboardRemove) -> Self {
        Self::Remove(markup)
    }
}

impl From<ForceReply> for ReplyMarkup {
    fn from(markup: ForceReply) -> Self {
        Self::ForceReply(markup)
    }
}

/// This object represents an [inline keyboard][1] that appears right next to the message it belongs to.
///
/// [1]: https://core.telegram.org/bots/api#inlinekeyboardmarkup
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[must_use]
pub struct InlineKeyboardMarkup {
    pub inline_keyboard: Vec<Vec<InlineKeyboardButton>>,
}

impl InlineKeyboardMarkup {
    pub fn single_button(button: InlineKeyboardButton) -> Self {
        Self { inline_keyboard: vec![vec![button]] }
    }
}

impl From<Vec<Vec<InlineKeyboardButton>>> for InlineKeyboardMarkup {
    fn from(inline_keyboard: Vec<Vec<InlineKeyboardButton>>) -> Self {
        Self { inline_keyboard }
    }
}

/// This object represents [one button of an inline keyboard][1].
///
/// [1]: https://core.telegram.org/bots/api#inlinekeyboardbutton
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[must_use]
pub struct InlineKeyboardButton {
    /// Label text on the button.
    pub text: String,

    #[serde(flatten)]
    pub payload: InlineKeyboardButtonPayload,
}

impl InlineKeyboardButton {
    pub fn url(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self { text: text.into(), payload: InlineKeyboardButtonPayload::Url(url.into()) }
    }

    pub fn callback(text: impl Into<String>, data: impl Into<String>) -> Self {
        Self { text: text.into(), payload: InlineKeyboardButtonPayload::CallbackData(data.into()) }
    }
}

/// Action of an inline keyboard button, exactly one per button.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[must_use]
pub enum InlineKeyboardButtonPayload {
    /// HTTP or `tg://` URL to be opened when the button is pressed.
    ///
    /// Links `tg://user?id=<user_id>` can be used to mention a user by their identifier
    /// without using a username, if this is allowed by their privacy settings.
    #[serde(rename = "url")]
    Url(String),

    /// Data to be sent in a callback query to the bot when the button is pressed, 1-64 bytes.
    #[serde(rename = "callback_data")]
    CallbackData(String),

    #[serde(rename = "web_app")]
    WebApp(WebAppInfo),

    /// Prompts the user to select one of their chats and inserts the bot's username and
    /// the specified inline query in the input field.
    #[serde(rename = "switch_inline_query")]
    SwitchInlineQuery(String),

    #[serde(rename = "switch_inline_query_current_chat")]
    SwitchInlineQueryCurrentChat(String),

    /// Pay button, must be the first button in the first row.
    #[serde(rename = "pay")]
    Pay(bool),
}

/// [Custom keyboard][1] with reply options.
///
/// [1]: https://core.telegram.org/bots/features#keyboards
#[derive(Clone, Debug, PartialEq, Builder, Deserialize, Serialize)]
#[must_use]
pub struct ReplyKeyboardMarkup {
    pub keyboard: Vec<Vec<KeyboardButton>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_persistent: Option<bool>,

    /// Requests clients to resize the keyboard vertically for optimal fit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resize_keyboard: Option<bool>,

    /// Requests clients to hide the keyboard as soon as it's been used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub one_time_keyboard: Option<bool>,

    /// The placeholder to be shown in the input field when the keyboard is active; 1-64 characters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub input_field_placeholder: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selective: Option<bool>,

    #[serde(flatten)]
    #[builder(default)]
    pub extra: Extra,
}

/// One button of the reply keyboard.
#[derive(Clone, Debug, PartialEq, Builder, Deserialize, Serialize)]
#[must_use]
pub struct KeyboardButton {
    /// Text of the button, sent as a message when the button is pressed.
    #[builder(into)]
    pub text: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_contact: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_location: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub web_app: Option<WebAppInfo>,

    #[serde(flatten)]
    #[builder(default)]
    pub extra: Extra,
}

impl From<&str> for KeyboardButton {
    fn from(text: &str) -> Self {
        Self::builder().text(text).build()
    }
}

/// Removes the current custom keyboard and displays the default letter-keyboard.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[must_use]
pub struct ReplyKeyboardRemove {
    pub remove_keyboard: monostate::MustBe!(true),

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selective: Option<bool>,
}

/// Displays a reply interface to the user, as if the user has selected the bot's message and
/// tapped «Reply».
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[must_use]
pub struct ForceReply {
    pub force_reply: monostate::MustBe!(true),

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_field_placeholder: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selective: Option<bool>,
}
