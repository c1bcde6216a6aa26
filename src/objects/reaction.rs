use chrono::{DateTime, Utc};

use crate::{
    discriminated::{self, DecodeFn, Discriminated, Tagged, Variant, variant},
    objects::{Chat, Extra, User},
    prelude::*,
};

/// This object describes the [type of a reaction][1].
///
/// [1]: https://core.telegram.org/bots/api#reactiontype
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[must_use]
pub enum ReactionType {
    Emoji(ReactionTypeEmoji),
    CustomEmoji(ReactionTypeCustomEmoji),
    Paid(ReactionTypePaid),
    Unknown(UnknownReactionType),
}

impl ReactionType {
    pub fn emoji(emoji: impl Into<String>) -> Self {
        Self::Emoji(ReactionTypeEmoji { emoji: emoji.into(), extra: Extra::new() })
    }

    pub fn custom_emoji(custom_emoji_id: impl Into<String>) -> Self {
        Self::CustomEmoji(ReactionTypeCustomEmoji {
            custom_emoji_id: custom_emoji_id.into(),
            extra: Extra::new(),
        })
    }

    #[must_use]
    pub fn kind(&self) -> &str {
        match self {
            Self::Emoji(_) => ReactionTypeEmoji::KIND,
            Self::CustomEmoji(_) => ReactionTypeCustomEmoji::KIND,
            Self::Paid(_) => ReactionTypePaid::KIND,
            Self::Unknown(reaction) => reaction.kind.as_str(),
        }
    }
}

impl Discriminated for ReactionType {
    const VARIANTS: &'static [(&'static str, DecodeFn<Self>)] = &[
        (ReactionTypeEmoji::KIND, variant::<ReactionTypeEmoji, Self>),
        (ReactionTypeCustomEmoji::KIND, variant::<ReactionTypeCustomEmoji, Self>),
        (ReactionTypePaid::KIND, variant::<ReactionTypePaid, Self>),
    ];

    fn fallback(kind: String, fields: Map<String, Value>) -> serde_json::Result<Self> {
        Ok(Self::Unknown(UnknownReactionType { kind, extra: fields.into_iter().collect() }))
    }
}

impl<'de> Deserialize<'de> for ReactionType {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        discriminated::deserialize(deserializer)
    }
}

impl Serialize for ReactionType {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Emoji(inner) => Tagged::new(ReactionTypeEmoji::KIND, inner).serialize(serializer),
            Self::CustomEmoji(inner) => {
                Tagged::new(ReactionTypeCustomEmoji::KIND, inner).serialize(serializer)
            }
            Self::Paid(inner) => Tagged::new(ReactionTypePaid::KIND, inner).serialize(serializer),
            Self::Unknown(inner) => Tagged::new(&inner.kind, inner).serialize(serializer),
        }
    }
}

impl From<ReactionTypeEmoji> for ReactionType {
    fn from(reaction: ReactionTypeEmoji) -> Self {
        Self::Emoji(reaction)
    }
}

impl From<ReactionTypeCustomEmoji> for ReactionType {
    fn from(reaction: ReactionTypeCustomEmoji) -> Self {
        Self::CustomEmoji(reaction)
    }
}

impl From<ReactionTypePaid> for ReactionType {
    fn from(reaction: ReactionTypePaid) -> Self {
        Self::Paid(reaction)
    }
}

/// The reaction is based on an emoji.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[must_use]
pub struct ReactionTypeEmoji {
    /// Reaction emoji, like «👍» or «🔥».
    pub emoji: String,

    #[serde(flatten)]
    pub extra: Extra,
}

impl Variant for ReactionTypeEmoji {
    const KIND: &'static str = "emoji";
}

identity!(ReactionTypeEmoji, &str, |reaction| reaction.emoji.as_str());

/// The reaction is based on a custom emoji.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[must_use]
pub struct ReactionTypeCustomEmoji {
    pub custom_emoji_id: String,

    #[serde(flatten)]
    pub extra: Extra,
}

impl Variant for ReactionTypeCustomEmoji {
    const KIND: &'static str = "custom_emoji";
}

identity!(ReactionTypeCustomEmoji, &str, |reaction| reaction.custom_emoji_id.as_str());

/// The reaction is paid.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[must_use]
pub struct ReactionTypePaid {
    #[serde(flatten)]
    pub extra: Extra,
}

impl Variant for ReactionTypePaid {
    const KIND: &'static str = "paid";
}

identity!(ReactionTypePaid, &str, |_reaction| ReactionTypePaid::KIND);

#[derive(Clone, Debug, Serialize)]
#[must_use]
pub struct UnknownReactionType {
    #[serde(skip)]
    pub kind: String,

    #[serde(flatten)]
    pub extra: Extra,
}

identity!(UnknownReactionType, &str, |reaction| reaction.kind.as_str());

/// Reaction added to a message along with the number of times it was added.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[must_use]
pub struct ReactionCount {
    #[serde(rename = "type")]
    pub reaction: ReactionType,

    pub total_count: u32,

    #[serde(flatten)]
    pub extra: Extra,
}

/// Change of a reaction on a message performed by a user.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[must_use]
pub struct MessageReactionUpdated {
    pub chat: Chat,

    pub message_id: i64,

    /// The user that changed the reaction, if the user isn't anonymous.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,

    /// The chat on behalf of which the reaction was changed, if the user is anonymous.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actor_chat: Option<Chat>,

    #[serde(with = "chrono::serde::ts_seconds")]
    pub date: DateTime<Utc>,

    #[serde(default, deserialize_with = "discriminated::list")]
    pub old_reaction: Vec<ReactionType>,

    #[serde(default, deserialize_with = "discriminated::list")]
    pub new_reaction: Vec<ReactionType>,

    #[serde(flatten)]
    pub extra: Extra,
}

impl MessageReactionUpdated {
    /// Reactions which were added by this change.
    pub fn added(&self) -> impl Iterator<Item = &ReactionType> {
        self.new_reaction.iter().filter(|reaction| !self.old_reaction.contains(reaction))
    }

    /// Reactions which were removed by this change.
    pub fn removed(&self) -> impl Iterator<Item = &ReactionType> {
        self.old_reaction.iter().filter(|reaction| !self.new_reaction.contains(reaction))
    }
}

/// Changes of anonymous reactions on a message.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[must_use]
pub struct MessageReactionCountUpdated {
    pub chat: Chat,

    pub message_id: i64,

    #[serde(with = "chrono::serde::ts_seconds")]
    pub date: DateTime<Utc>,

    #[serde(default)]
    pub reactions: Vec<ReactionCount>,

    #[serde(flatten)]
    pub extra: Extra,
}
