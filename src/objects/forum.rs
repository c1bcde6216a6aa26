use crate::{objects::Extra, prelude::*};

/// This object represents a [forum topic][1].
///
/// [1]: https://core.telegram.org/bots/api#forumtopic
#[derive(Clone, Debug, Deserialize, Serialize)]
#[must_use]
pub struct ForumTopic {
    /// Unique identifier of the forum topic.
    pub message_thread_id: i64,

    pub name: String,

    /// Color of the topic icon in RGB format.
    pub icon_color: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_custom_emoji_id: Option<String>,

    #[serde(flatten)]
    pub extra: Extra,
}

identity!(ForumTopic, (i64, &str, u32), |topic| (
    topic.message_thread_id,
    topic.name.as_str(),
    topic.icon_color
));
