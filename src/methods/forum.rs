//! Forum topic management.
//!
//! The bot must be an administrator in the chat with the `can_manage_topics` rights,
//! unless it is the creator of the topic.

use bon::Builder;

use crate::{
    constants::FORUM_TOPIC_ICON_COLORS,
    methods::{Method, check_length},
    objects::{ChatId, ForumTopic},
    prelude::*,
};

/// Create a topic in a forum supergroup chat.
#[derive(Clone, Debug, Builder, Serialize)]
#[must_use]
pub struct CreateForumTopic {
    #[builder(into)]
    pub chat_id: ChatId,

    /// Topic name, 1-128 characters.
    #[builder(into)]
    pub name: String,

    /// Must be one of [`FORUM_TOPIC_ICON_COLORS`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_color: Option<u32>,

    /// Use `getForumTopicIconStickers` to get all allowed custom emoji identifiers.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub icon_custom_emoji_id: Option<String>,
}

impl Method for CreateForumTopic {
    const NAME: &'static str = "createForumTopic";

    type Response = ForumTopic;

    fn validate(&self) -> Result {
        check_length("name", &self.name, 1..=128)?;
        match self.icon_color {
            Some(icon_color) if !FORUM_TOPIC_ICON_COLORS.contains(&icon_color) => {
                Err(Error::InvalidArgument(format!("unsupported `icon_color`: {icon_color:#08X}")))
            }
            _ => Ok(()),
        }
    }
}

/// Edit name and icon of a topic.
#[derive(Clone, Debug, Builder, Serialize)]
#[must_use]
pub struct EditForumTopic {
    #[builder(into)]
    pub chat_id: ChatId,

    pub message_thread_id: i64,

    /// New topic name, 0-128 characters. If not specified or empty, the current name is kept.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub name: Option<String>,

    /// Pass an empty string to remove the icon.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub icon_custom_emoji_id: Option<String>,
}

impl Method for EditForumTopic {
    const NAME: &'static str = "editForumTopic";

    type Response = bool;

    fn validate(&self) -> Result {
        self.name.as_deref().map_or(Ok(()), |name| check_length("name", name, 0..=128))
    }
}

#[derive(Clone, Debug, Builder, Serialize)]
#[must_use]
pub struct CloseForumTopic {
    #[builder(into)]
    pub chat_id: ChatId,

    pub message_thread_id: i64,
}

impl Method for CloseForumTopic {
    const NAME: &'static str = "closeForumTopic";

    type Response = bool;
}

#[derive(Clone, Debug, Builder, Serialize)]
#[must_use]
pub struct ReopenForumTopic {
    #[builder(into)]
    pub chat_id: ChatId,

    pub message_thread_id: i64,
}

impl Method for ReopenForumTopic {
    const NAME: &'static str = "reopenForumTopic";

    type Response = bool;
}

/// Delete a forum topic along with all its messages.
#[derive(Clone, Debug, Builder, Serialize)]
#[must_use]
pub struct DeleteForumTopic {
    #[builder(into)]
    pub chat_id: ChatId,

    pub message_thread_id: i64,
}

impl Method for DeleteForumTopic {
    const NAME: &'static str = "deleteForumTopic";

    type Response = bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_forum_topic_ok() -> Result {
        CreateForumTopic::builder()
            .chat_id(-100_i64)
            .name("Off-topic")
            .icon_color(0x006F_B9F0)
            .build()
            .validate()
    }

    #[test]
    fn create_forum_topic_icon_color_fails() {
        let method =
            CreateForumTopic::builder().chat_id(-100_i64).name("Off-topic").icon_color(0x00FF_FFFF).build();
        assert!(matches!(method.validate(), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn create_forum_topic_name_fails() {
        let empty = CreateForumTopic::builder().chat_id(-100_i64).name("").build();
        assert!(empty.validate().is_err());
        let long = CreateForumTopic::builder().chat_id(-100_i64).name("x".repeat(129)).build();
        assert!(long.validate().is_err());
    }
}
