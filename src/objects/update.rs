use chrono::{DateTime, Utc};

use crate::{
    constants::UpdateType,
    objects::{Chat, Extra, Message, MessageReactionCountUpdated, MessageReactionUpdated, User},
    prelude::*,
};

/// This object represents an incoming [update][1].
///
/// At most one of the optional payloads is present in any given update. Payloads unknown to
/// this crate stay in `extra`.
///
/// [1]: https://core.telegram.org/bots/api#update
#[derive(Clone, Debug, Deserialize, Serialize)]
#[must_use]
pub struct Update {
    /// The update's unique identifier.
    ///
    /// Update identifiers start from a certain positive number and increase sequentially.
    #[serde(rename = "update_id")]
    pub id: i64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<Message>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edited_message: Option<Message>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel_post: Option<Message>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edited_channel_post: Option<Message>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_reaction: Option<MessageReactionUpdated>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_reaction_count: Option<MessageReactionCountUpdated>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub callback_query: Option<CallbackQuery>,

    #[serde(flatten)]
    pub extra: Extra,
}

identity!(Update, i64, |update| update.id);

impl Update {
    /// Type of the payload, if any.
    pub fn kind(&self) -> Option<UpdateType> {
        if self.message.is_some() {
            Some(UpdateType::Message)
        } else if self.edited_message.is_some() {
            Some(UpdateType::EditedMessage)
        } else if self.channel_post.is_some() {
            Some(UpdateType::ChannelPost)
        } else if self.edited_channel_post.is_some() {
            Some(UpdateType::EditedChannelPost)
        } else if self.message_reaction.is_some() {
            Some(UpdateType::MessageReaction)
        } else if self.message_reaction_count.is_some() {
            Some(UpdateType::MessageReactionCount)
        } else if self.callback_query.is_some() {
            Some(UpdateType::CallbackQuery)
        } else {
            self.extra.keys().next().map(|key| UpdateType::from(key.as_str()))
        }
    }

    /// The message carried by the update, whichever kind it is.
    #[must_use]
    pub fn effective_message(&self) -> Option<&Message> {
        self.message
            .as_ref()
            .or(self.edited_message.as_ref())
            .or(self.channel_post.as_ref())
            .or(self.edited_channel_post.as_ref())
            .or_else(|| self.callback_query.as_ref()?.message.as_ref())
    }

    #[must_use]
    pub fn effective_chat(&self) -> Option<&Chat> {
        self.effective_message()
            .map(|message| &message.chat)
            .or_else(|| self.message_reaction.as_ref().map(|reaction| &reaction.chat))
            .or_else(|| self.message_reaction_count.as_ref().map(|reaction| &reaction.chat))
    }

    #[must_use]
    pub fn effective_user(&self) -> Option<&User> {
        if let Some(callback_query) = &self.callback_query {
            return Some(&callback_query.from);
        }
        if let Some(reaction) = &self.message_reaction {
            return reaction.user.as_ref();
        }
        self.effective_message()?.from.as_ref()
    }
}

/// Incoming [callback query][1] from a callback button in an inline keyboard.
///
/// [1]: https://core.telegram.org/bots/api#callbackquery
#[derive(Clone, Debug, Deserialize, Serialize)]
#[must_use]
pub struct CallbackQuery {
    pub id: String,

    pub from: User,

    /// Message sent by the bot with the callback button that originated the query.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<Message>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inline_message_id: Option<String>,

    /// Global identifier, uniquely corresponding to the chat to which the message with
    /// the callback button was sent.
    pub chat_instance: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,

    #[serde(flatten)]
    pub extra: Extra,
}

identity!(CallbackQuery, &str, |query| query.id.as_str());

/// Current status of a [webhook][1].
///
/// [1]: https://core.telegram.org/bots/api#webhookinfo
#[derive(Clone, Debug, Deserialize, Serialize)]
#[must_use]
pub struct WebhookInfo {
    /// Webhook URL, may be empty if webhook is not set up.
    pub url: String,

    pub has_custom_certificate: bool,

    /// Number of updates awaiting delivery.
    pub pending_update_count: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,

    #[serde(default, with = "chrono::serde::ts_seconds_option", skip_serializing_if = "Option::is_none")]
    pub last_error_date: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_error_message: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_connections: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_updates: Option<Vec<UpdateType>>,

    #[serde(flatten)]
    pub extra: Extra,
}

identity!(WebhookInfo, (&str, bool, u32), |info| (
    info.url.as_str(),
    info.has_custom_certificate,
    info.pending_update_count
));

impl WebhookInfo {
    #[must_use]
    pub fn is_set(&self) -> bool {
        !self.url.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_update_ok() -> Result {
        // language=json
        let update: Update = serde_json::from_str(
            r#"{
                "update_id": 100,
                "message": {
                    "message_id": 1,
                    "date": 1700000000,
                    "from": {"id": 7, "is_bot": false, "first_name": "Jane"},
                    "chat": {"id": 7, "type": "private", "first_name": "Jane"},
                    "text": "/start"
                }
            }"#,
        )?;
        assert_eq!(update.kind(), Some(UpdateType::Message));
        assert_eq!(update.effective_chat().map(|chat| chat.id), Some(7));
        assert_eq!(update.effective_user().map(|user| user.id), Some(7));
        Ok(())
    }

    #[test]
    fn unknown_update_ok() -> Result {
        // language=json
        let update: Update =
            serde_json::from_str(r#"{"update_id": 101, "poll": {"id": "1", "question": "?"}}"#)?;
        assert_eq!(update.kind(), Some(UpdateType::Poll));
        assert!(update.effective_message().is_none());
        assert!(update.extra.contains_key("poll"));
        Ok(())
    }

    #[test]
    fn callback_query_ok() -> Result {
        // language=json
        let update: Update = serde_json::from_str(
            r#"{
                "update_id": 102,
                "callback_query": {
                    "id": "42",
                    "from": {"id": 8, "is_bot": false, "first_name": "John"},
                    "chat_instance": "-1",
                    "data": "/yes"
                }
            }"#,
        )?;
        assert_eq!(update.kind(), Some(UpdateType::CallbackQuery));
        assert_eq!(update.effective_user().map(|user| user.id), Some(8));
        assert!(update.effective_chat().is_none());
        Ok(())
    }

    #[test]
    fn webhook_info_ok() -> Result {
        // language=json
        let info: WebhookInfo = serde_json::from_str(
            r#"{"url": "", "has_custom_certificate": false, "pending_update_count": 3, "last_error_date": 1700000000}"#,
        )?;
        assert!(!info.is_set());
        assert_eq!(info.last_error_date.map(|date| date.timestamp()), Some(1_700_000_000));
        Ok(())
    }
}
