use bon::Builder;
use chrono::{DateTime, Utc};
use url::Url;

use crate::{
    constants::{MessageEntityType, ParseMode},
    discriminated,
    objects::{
        Chat,
        ChatId,
        Document,
        Extra,
        InlineKeyboardMarkup,
        MessageOrigin,
        PhotoSize,
        Sticker,
        User,
    },
    prelude::*,
};

/// This object represents a [message][1].
///
/// [1]: https://core.telegram.org/bots/api#message
#[derive(Clone, Debug, Deserialize, Serialize)]
#[must_use]
pub struct Message {
    #[serde(rename = "message_id")]
    pub id: i64,

    /// Unique identifier of a message thread to which the message belongs; for supergroups only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_thread_id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<User>,

    /// Sender of the message when sent on behalf of a chat.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender_chat: Option<Chat>,

    #[serde(with = "chrono::serde::ts_seconds")]
    pub date: DateTime<Utc>,

    pub chat: Chat,

    /// Information about the original message for forwarded messages.
    #[serde(
        default,
        deserialize_with = "discriminated::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub forward_origin: Option<MessageOrigin>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_topic_message: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_to_message: Option<Box<Message>>,

    #[serde(default, with = "chrono::serde::ts_seconds_option", skip_serializing_if = "Option::is_none")]
    pub edit_date: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_signature: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub entities: Vec<MessageEntity>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_preview_options: Option<LinkPreviewOptions>,

    /// Available sizes of the photo.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub photo: Vec<PhotoSize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document: Option<Document>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sticker: Option<Sticker>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub caption_entities: Vec<MessageEntity>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_group_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,

    #[serde(flatten)]
    pub extra: Extra,
}

identity!(Message, (i64, i64), |message| (message.chat.id, message.id));

impl Message {
    /// Public link to the message, available in supergroups and channels only.
    #[must_use]
    pub fn link(&self) -> Option<Url> {
        use crate::constants::ChatType;

        let path = match (&self.chat.kind, &self.chat.username) {
            (ChatType::Supergroup | ChatType::Channel, Some(username)) => {
                format!("{username}/{}", self.id)
            }
            (ChatType::Supergroup | ChatType::Channel, None) => {
                // Private chat links drop the `-100` prefix.
                let chat_id = self.chat.id.to_string();
                format!("c/{}/{}", chat_id.strip_prefix("-100").unwrap_or(&chat_id), self.id)
            }
            _ => return None,
        };
        Url::parse("https://t.me/").ok()?.join(&path).ok()
    }

    /// Text of the entity from the message text.
    ///
    /// Offsets and lengths are in UTF-16 code units.
    #[must_use]
    pub fn entity_text(&self, entity: &MessageEntity) -> Option<String> {
        entity.extract(self.text.as_deref()?)
    }

    /// Text of the entity from the media caption.
    #[must_use]
    pub fn caption_entity_text(&self, entity: &MessageEntity) -> Option<String> {
        entity.extract(self.caption.as_deref()?)
    }

    /// Bot commands mentioned in the message text, like `/start` or `/start@bot`.
    #[must_use]
    pub fn commands(&self) -> Vec<String> {
        self.entities
            .iter()
            .filter(|entity| entity.kind == MessageEntityType::BotCommand)
            .filter_map(|entity| self.entity_text(entity))
            .collect()
    }
}

/// This object represents a unique [message identifier][1].
///
/// [1]: https://core.telegram.org/bots/api#messageid
#[derive(Clone, Debug, Deserialize, Serialize)]
#[must_use]
pub struct MessageId {
    pub message_id: i64,

    #[serde(flatten)]
    pub extra: Extra,
}

identity!(MessageId, i64, |id| id.message_id);

/// Edited message for chat messages, or just `true` for inline messages.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(untagged)]
pub enum MessageOrTrue {
    Message(Box<Message>),
    True(bool),
}

/// This object represents one [special entity][1] in a text message.
///
/// [1]: https://core.telegram.org/bots/api#messageentity
#[derive(Clone, Debug, PartialEq, Eq, Builder, Deserialize, Serialize)]
#[must_use]
pub struct MessageEntity {
    #[serde(rename = "type")]
    pub kind: MessageEntityType,

    /// Offset in UTF-16 code units to the start of the entity.
    pub offset: usize,

    /// Length of the entity in UTF-16 code units.
    pub length: usize,

    /// For `text_link` only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub url: Option<String>,

    /// For `text_mention` only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,

    /// For `pre` only, the programming language of the entity text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub language: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub custom_emoji_id: Option<String>,

    #[serde(flatten)]
    #[builder(default)]
    pub extra: Extra,
}

impl MessageEntity {
    /// Extract the entity text from the message text.
    #[must_use]
    pub fn extract(&self, text: &str) -> Option<String> {
        let units: Vec<u16> = text.encode_utf16().collect();
        let units = units.get(self.offset..self.offset.checked_add(self.length)?)?;
        String::from_utf16(units).ok()
    }
}

/// Describes the [options][1] used for link preview generation.
///
/// [1]: https://core.telegram.org/bots/api#linkpreviewoptions
#[derive(Clone, Debug, Default, PartialEq, Eq, Builder, Deserialize, Serialize)]
#[must_use]
pub struct LinkPreviewOptions {
    /// `true`, if the link preview is disabled
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_disabled: Option<bool>,

    /// URL to use for the link preview.
    ///
    /// If empty, then the first URL found in the message text will be used
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefer_small_media: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefer_large_media: Option<bool>,

    /// `true`, if the link preview must be shown above the message text;
    /// otherwise, the link preview will be shown below the message text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_above_text: Option<bool>,

    #[serde(flatten)]
    #[builder(default)]
    pub extra: Extra,
}

impl LinkPreviewOptions {
    pub const DISABLED: Self = Self {
        is_disabled: Some(true),
        url: None,
        prefer_small_media: None,
        prefer_large_media: None,
        show_above_text: None,
        extra: Extra::new(),
    };
}

/// Describes [reply parameters][1] for the message that is being sent.
///
/// [1]: https://core.telegram.org/bots/api#replyparameters
#[derive(Clone, Debug, PartialEq, Builder, Deserialize, Serialize)]
#[must_use]
pub struct ReplyParameters {
    /// Identifier of the message that will be replied to in the current chat,
    /// or in the chat `chat_id` if it is specified.
    pub message_id: i64,

    /// If the message to be replied to is from a different chat, unique identifier for the chat
    /// or username of the channel.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub chat_id: Option<ChatId>,

    /// Pass `true` if the message should be sent even if the specified message to be replied to is not found.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_sending_without_reply: Option<bool>,

    /// Quoted part of the message to be replied to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub quote: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quote_parse_mode: Option<ParseMode>,

    /// Position of the quote in the original message in UTF-16 code units.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quote_position: Option<usize>,

    #[serde(flatten)]
    #[builder(default)]
    pub extra: Extra,
}

/// This object represents a point on the [map][1].
///
/// [1]: https://core.telegram.org/bots/api#location
#[derive(Clone, Debug, PartialEq, Builder, Deserialize, Serialize)]
#[must_use]
pub struct Location {
    pub latitude: f64,

    pub longitude: f64,

    /// The radius of uncertainty for the location, measured in meters; 0-1500.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub horizontal_accuracy: Option<f64>,

    /// Time relative to the message sending date, during which the location can be updated;
    /// in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_period: Option<u32>,

    /// The direction in which user is moving, in degrees; 1-360.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading: Option<u32>,

    /// The maximum distance for proximity alerts about approaching another chat member, in meters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proximity_alert_radius: Option<u32>,

    #[serde(flatten)]
    #[builder(default)]
    pub extra: Extra,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objects::decode;

    // language=json
    const FORWARDED: &str = r#"{
        "message_id": 7,
        "date": 1700000100,
        "chat": {"id": -100555, "type": "supergroup", "title": "Group"},
        "forward_origin": {
            "type": "channel",
            "date": 1700000000,
            "chat": {"id": -100123, "type": "channel"},
            "message_id": 42
        },
        "text": "/start@test_bot ✨ hello",
        "entities": [
            {"type": "bot_command", "offset": 0, "length": 15},
            {"type": "bold", "offset": 16, "length": 1},
            {"type": "italic", "offset": 18, "length": 5}
        ],
        "has_protected_content": true
    }"#;

    #[test]
    fn forwarded_message_ok() -> Result {
        let message: Message = serde_json::from_str(FORWARDED)?;
        assert_eq!(message.id, 7);
        assert_eq!(message.date.timestamp(), 1_700_000_100);
        let Some(MessageOrigin::Channel(origin)) = &message.forward_origin else {
            unreachable!("expected a channel origin, got {:?}", message.forward_origin);
        };
        assert_eq!(origin.message_id, 42);
        assert_eq!(origin.chat.id, -100_123);
        assert_eq!(message.extra.get("has_protected_content"), Some(&Value::Bool(true)));
        Ok(())
    }

    #[test]
    fn empty_forward_origin_ok() -> Result {
        // language=json
        let message: Message = serde_json::from_str(
            r#"{"message_id": 1, "date": 0, "chat": {"id": 1, "type": "private"}, "forward_origin": {}}"#,
        )?;
        assert!(message.forward_origin.is_none());
        Ok(())
    }

    #[test]
    fn entity_text_ok() -> Result {
        let message: Message = serde_json::from_str(FORWARDED)?;
        assert_eq!(message.commands(), ["/start@test_bot"]);
        assert_eq!(message.entity_text(&message.entities[1]).as_deref(), Some("✨"));
        assert_eq!(message.entity_text(&message.entities[2]).as_deref(), Some("hello"));
        Ok(())
    }

    #[test]
    fn entity_text_surrogate_pair_ok() {
        // 🎉 takes two UTF-16 code units.
        let entity =
            MessageEntity::builder().kind(MessageEntityType::Bold).offset(0).length(2).build();
        assert_eq!(entity.extract("🎉 party").as_deref(), Some("🎉"));
        let out_of_range =
            MessageEntity::builder().kind(MessageEntityType::Bold).offset(5).length(10).build();
        assert_eq!(out_of_range.extract("short"), None);
    }

    #[test]
    fn link_ok() -> Result {
        let message: Message = serde_json::from_str(FORWARDED)?;
        assert_eq!(message.link().map(String::from).as_deref(), Some("https://t.me/c/555/7"));
        Ok(())
    }

    #[test]
    fn equality_ok() -> Result {
        let lhs = decode::<Message>(serde_json::from_str(FORWARDED)?)?;
        let rhs = decode::<Message>(serde_json::from_str(FORWARDED)?)?;
        assert!(lhs.is_some());
        assert_eq!(lhs, rhs);
        Ok(())
    }

    #[test]
    fn message_or_true_ok() -> Result {
        let response: MessageOrTrue = serde_json::from_str("true")?;
        assert!(matches!(response, MessageOrTrue::True(true)));
        Ok(())
    }

    #[test]
    fn link_preview_options_disabled_ok() -> Result {
        assert_eq!(
            serde_json::to_string(&LinkPreviewOptions::DISABLED)?,
            r#"{"is_disabled":true}"#,
        );
        Ok(())
    }
}
