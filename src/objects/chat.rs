use std::{fmt::Display, str::FromStr};

use bon::Builder;
use url::Url;

use crate::{
    constants::ChatType,
    discriminated,
    objects::{Extra, Message, ReactionType},
    prelude::*,
};

/// Unique identifier of a chat, or a username of a channel or a supergroup (in the format
/// `@username`).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(untagged)]
#[must_use]
pub enum ChatId {
    Integer(i64),
    Username(String),
}

impl From<i64> for ChatId {
    fn from(chat_id: i64) -> Self {
        Self::Integer(chat_id)
    }
}

impl From<&str> for ChatId {
    fn from(username: &str) -> Self {
        Self::Username(username.to_owned())
    }
}

impl From<String> for ChatId {
    fn from(username: String) -> Self {
        Self::Username(username)
    }
}

impl FromStr for ChatId {
    type Err = std::convert::Infallible;

    fn from_str(text: &str) -> std::result::Result<Self, Self::Err> {
        Ok(text.parse::<i64>().map_or_else(|_| Self::from(text), Self::Integer))
    }
}

impl Display for ChatId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(chat_id) => Display::fmt(chat_id, f),
            Self::Username(username) => Display::fmt(username, f),
        }
    }
}

/// This object represents a [chat](https://core.telegram.org/bots/api#chat).
#[derive(Clone, Debug, Deserialize, Serialize)]
#[must_use]
pub struct Chat {
    pub id: i64,

    #[serde(rename = "type")]
    pub kind: ChatType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    /// `true`, if the supergroup chat is a forum.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_forum: Option<bool>,

    #[serde(flatten)]
    pub extra: Extra,
}

identity!(Chat, i64, |chat| chat.id);

impl Chat {
    #[must_use]
    pub fn is_private(&self) -> bool {
        self.kind == ChatType::Private
    }

    /// Title for groups and channels, or the full name for private chats.
    #[must_use]
    pub fn effective_name(&self) -> Option<String> {
        if let Some(title) = &self.title {
            return Some(title.clone());
        }
        match (&self.first_name, &self.last_name) {
            (Some(first_name), Some(last_name)) => Some(format!("{first_name} {last_name}")),
            (Some(first_name), None) => Some(first_name.clone()),
            (None, _) => None,
        }
    }

    /// Public `t.me` link, if the chat has a username.
    #[must_use]
    pub fn link(&self) -> Option<Url> {
        let username = self.username.as_deref()?;
        Url::parse("https://t.me/").ok()?.join(username).ok()
    }
}

/// Full information about a chat, returned by `getChat`.
///
/// See also: <https://core.telegram.org/bots/api#chatfullinfo>.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[must_use]
pub struct ChatFullInfo {
    pub id: i64,

    #[serde(rename = "type")]
    pub kind: ChatType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_forum: Option<bool>,

    /// Identifier of the accent color for the chat name and backgrounds.
    pub accent_color_id: i64,

    /// The maximum number of reactions that can be set on a message in the chat.
    pub max_reaction_count: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<ChatPhoto>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invite_link: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pinned_message: Option<Box<Message>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permissions: Option<ChatPermissions>,

    /// List of available reactions allowed in the chat.
    ///
    /// If omitted, then all emoji reactions are allowed.
    #[serde(
        default,
        deserialize_with = "discriminated::optional_list",
        skip_serializing_if = "Option::is_none"
    )]
    pub available_reactions: Option<Vec<ReactionType>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slow_mode_delay: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_auto_delete_time: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sticker_set_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linked_chat_id: Option<i64>,

    #[serde(flatten)]
    pub extra: Extra,
}

identity!(ChatFullInfo, i64, |chat| chat.id);

/// This object represents a [chat photo](https://core.telegram.org/bots/api#chatphoto).
#[derive(Clone, Debug, Deserialize, Serialize)]
#[must_use]
pub struct ChatPhoto {
    /// File identifier of small (160×160) chat photo.
    ///
    /// Can be used only for photo download and only for as long as the photo is not changed.
    pub small_file_id: String,

    pub small_file_unique_id: String,

    /// File identifier of big (640×640) chat photo.
    pub big_file_id: String,

    pub big_file_unique_id: String,

    #[serde(flatten)]
    pub extra: Extra,
}

identity!(ChatPhoto, (&str, &str), |photo| (
    photo.small_file_unique_id.as_str(),
    photo.big_file_unique_id.as_str()
));

/// Describes [actions that a non-administrator user is allowed to take][1] in a chat.
///
/// [1]: https://core.telegram.org/bots/api#chatpermissions
#[derive(Clone, Debug, Default, Builder, Deserialize, Serialize)]
#[must_use]
pub struct ChatPermissions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_send_messages: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_send_audios: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_send_documents: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_send_photos: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_send_videos: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_send_video_notes: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_send_voice_notes: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_send_polls: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_send_other_messages: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_add_web_page_previews: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_change_info: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_invite_users: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_pin_messages: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_manage_topics: Option<bool>,

    #[serde(flatten)]
    #[builder(default)]
    pub extra: Extra,
}

identity!(ChatPermissions, [Option<bool>; 14], |permissions| [
    permissions.can_send_messages,
    permissions.can_send_audios,
    permissions.can_send_documents,
    permissions.can_send_photos,
    permissions.can_send_videos,
    permissions.can_send_video_notes,
    permissions.can_send_voice_notes,
    permissions.can_send_polls,
    permissions.can_send_other_messages,
    permissions.can_add_web_page_previews,
    permissions.can_change_info,
    permissions.can_invite_users,
    permissions.can_pin_messages,
    permissions.can_manage_topics,
]);

impl ChatPermissions {
    /// Every permission granted.
    pub fn all() -> Self {
        Self::from_flag(true)
    }

    /// Every permission revoked.
    pub fn none() -> Self {
        Self::from_flag(false)
    }

    fn from_flag(flag: bool) -> Self {
        let flag = Some(flag);
        Self {
            can_send_messages: flag,
            can_send_audios: flag,
            can_send_documents: flag,
            can_send_photos: flag,
            can_send_videos: flag,
            can_send_video_notes: flag,
            can_send_voice_notes: flag,
            can_send_polls: flag,
            can_send_other_messages: flag,
            can_add_web_page_previews: flag,
            can_change_info: flag,
            can_invite_users: flag,
            can_pin_messages: flag,
            can_manage_topics: flag,
            extra: Extra::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_id_serialize_ok() -> Result {
        assert_eq!(serde_json::to_string(&ChatId::from(-100_123))?, "-100123");
        assert_eq!(serde_json::to_string(&ChatId::from("@channel"))?, r#""@channel""#);
        Ok(())
    }

    #[test]
    fn chat_id_parse_ok() {
        assert_eq!("42".parse(), Ok(ChatId::Integer(42)));
        assert_eq!("@channel".parse(), Ok(ChatId::Username("@channel".to_owned())));
    }

    #[test]
    fn chat_ok() -> Result {
        // language=json
        let chat: Chat = serde_json::from_str(
            r#"{"id": -100123, "type": "channel", "title": "News", "username": "news"}"#,
        )?;
        assert_eq!(chat.kind, ChatType::Channel);
        assert!(!chat.is_private());
        assert_eq!(chat.effective_name().as_deref(), Some("News"));
        assert_eq!(chat.link().map(String::from).as_deref(), Some("https://t.me/news"));
        Ok(())
    }

    #[test]
    fn chat_full_info_ok() -> Result {
        // language=json
        let chat: ChatFullInfo = serde_json::from_str(
            r#"{
                "id": -100123,
                "type": "supergroup",
                "title": "Chat",
                "accent_color_id": 1,
                "max_reaction_count": 11,
                "available_reactions": [{"type": "emoji", "emoji": "👍"}, {}, {"type": "brand_new"}],
                "permissions": {"can_send_messages": true}
            }"#,
        )?;
        let reactions = chat.available_reactions.unwrap_or_default();
        assert_eq!(reactions.len(), 2);
        assert_eq!(reactions[0], ReactionType::emoji("👍"));
        assert_eq!(reactions[1].kind(), "brand_new");
        assert_eq!(chat.permissions.and_then(|permissions| permissions.can_send_messages), Some(true));
        Ok(())
    }

    #[test]
    fn permissions_equality_ok() {
        assert_eq!(ChatPermissions::all(), ChatPermissions::all());
        assert_ne!(ChatPermissions::all(), ChatPermissions::none());
        let permissions = ChatPermissions::builder().can_send_messages(true).build();
        assert_eq!(permissions.can_send_polls, None);
    }

    #[test]
    fn permissions_serialize_ok() -> Result {
        let permissions = ChatPermissions::builder().can_send_messages(false).build();
        assert_eq!(serde_json::to_string(&permissions)?, r#"{"can_send_messages":false}"#);
        Ok(())
    }
}
