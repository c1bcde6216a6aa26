//! Origin of a forwarded message.

use chrono::{DateTime, Utc};

use crate::{
    discriminated::{self, DecodeFn, Discriminated, Tagged, Variant, variant},
    objects::{Chat, Extra, User},
    prelude::*,
};

/// This object describes the [origin of a message][1].
///
/// [1]: https://core.telegram.org/bots/api#messageorigin
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[must_use]
pub enum MessageOrigin {
    User(MessageOriginUser),
    HiddenUser(MessageOriginHiddenUser),
    Chat(MessageOriginChat),
    Channel(MessageOriginChannel),
    Unknown(UnknownMessageOrigin),
}

impl MessageOrigin {
    /// Discriminator of the origin.
    #[must_use]
    pub fn kind(&self) -> &str {
        match self {
            Self::User(_) => MessageOriginUser::KIND,
            Self::HiddenUser(_) => MessageOriginHiddenUser::KIND,
            Self::Chat(_) => MessageOriginChat::KIND,
            Self::Channel(_) => MessageOriginChannel::KIND,
            Self::Unknown(origin) => origin.kind.as_str(),
        }
    }

    /// Date the message was sent originally.
    #[must_use]
    pub fn date(&self) -> DateTime<Utc> {
        match self {
            Self::User(origin) => origin.date,
            Self::HiddenUser(origin) => origin.date,
            Self::Chat(origin) => origin.date,
            Self::Channel(origin) => origin.date,
            Self::Unknown(origin) => origin.date,
        }
    }
}

impl Discriminated for MessageOrigin {
    const VARIANTS: &'static [(&'static str, DecodeFn<Self>)] = &[
        (MessageOriginUser::KIND, variant::<MessageOriginUser, Self>),
        (MessageOriginHiddenUser::KIND, variant::<MessageOriginHiddenUser, Self>),
        (MessageOriginChat::KIND, variant::<MessageOriginChat, Self>),
        (MessageOriginChannel::KIND, variant::<MessageOriginChannel, Self>),
    ];

    fn fallback(kind: String, fields: Map<String, Value>) -> serde_json::Result<Self> {
        let mut origin: UnknownMessageOrigin = serde_json::from_value(Value::Object(fields))?;
        origin.kind = kind;
        Ok(Self::Unknown(origin))
    }
}

impl<'de> Deserialize<'de> for MessageOrigin {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        discriminated::deserialize(deserializer)
    }
}

impl Serialize for MessageOrigin {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::User(inner) => Tagged::new(MessageOriginUser::KIND, inner).serialize(serializer),
            Self::HiddenUser(inner) => {
                Tagged::new(MessageOriginHiddenUser::KIND, inner).serialize(serializer)
            }
            Self::Chat(inner) => Tagged::new(MessageOriginChat::KIND, inner).serialize(serializer),
            Self::Channel(inner) => {
                Tagged::new(MessageOriginChannel::KIND, inner).serialize(serializer)
            }
            Self::Unknown(inner) => Tagged::new(&inner.kind, inner).serialize(serializer),
        }
    }
}

/// The message was originally sent by a known user.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[must_use]
pub struct MessageOriginUser {
    #[serde(with = "chrono::serde::ts_seconds")]
    pub date: DateTime<Utc>,

    pub sender_user: User,

    #[serde(flatten)]
    pub extra: Extra,
}

impl Variant for MessageOriginUser {
    const KIND: &'static str = "user";
}

identity!(MessageOriginUser, (&str, DateTime<Utc>), |origin| (MessageOriginUser::KIND, origin.date));

/// The message was originally sent by an unknown user.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[must_use]
pub struct MessageOriginHiddenUser {
    #[serde(with = "chrono::serde::ts_seconds")]
    pub date: DateTime<Utc>,

    /// Name of the user that sent the message originally.
    pub sender_user_name: String,

    #[serde(flatten)]
    pub extra: Extra,
}

impl Variant for MessageOriginHiddenUser {
    const KIND: &'static str = "hidden_user";
}

identity!(MessageOriginHiddenUser, (&str, DateTime<Utc>), |origin| (
    MessageOriginHiddenUser::KIND,
    origin.date
));

/// The message was originally sent on behalf of a chat to a group chat.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[must_use]
pub struct MessageOriginChat {
    #[serde(with = "chrono::serde::ts_seconds")]
    pub date: DateTime<Utc>,

    pub sender_chat: Chat,

    /// For messages originally sent by an anonymous chat administrator, original message author
    /// signature.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_signature: Option<String>,

    #[serde(flatten)]
    pub extra: Extra,
}

impl Variant for MessageOriginChat {
    const KIND: &'static str = "chat";
}

identity!(MessageOriginChat, (&str, DateTime<Utc>), |origin| (MessageOriginChat::KIND, origin.date));

/// The message was originally sent to a channel chat.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[must_use]
pub struct MessageOriginChannel {
    #[serde(with = "chrono::serde::ts_seconds")]
    pub date: DateTime<Utc>,

    /// Channel chat to which the message was originally sent.
    pub chat: Chat,

    /// Unique message identifier inside the chat.
    pub message_id: i64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_signature: Option<String>,

    #[serde(flatten)]
    pub extra: Extra,
}

impl Variant for MessageOriginChannel {
    const KIND: &'static str = "channel";
}

identity!(MessageOriginChannel, (&str, DateTime<Utc>), |origin| (
    MessageOriginChannel::KIND,
    origin.date
));

/// Origin of a type this crate does not know yet.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[must_use]
pub struct UnknownMessageOrigin {
    /// Raw discriminator, empty if it was missing.
    #[serde(skip)]
    pub kind: String,

    #[serde(with = "chrono::serde::ts_seconds")]
    pub date: DateTime<Utc>,

    #[serde(flatten)]
    pub extra: Extra,
}

identity!(UnknownMessageOrigin, (&str, DateTime<Utc>), |origin| (origin.kind.as_str(), origin.date));

macro_rules! impl_from_variant {
    ($($variant:ident($ty:ty)),+ $(,)?) => {
        $(
            impl From<$ty> for MessageOrigin {
                fn from(origin: $ty) -> Self {
                    Self::$variant(origin)
                }
            }
        )+
    };
}

impl_from_variant!(
    User(MessageOriginUser),
    HiddenUser(MessageOriginHiddenUser),
    Chat(MessageOriginChat),
    Channel(MessageOriginChannel),
);

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn channel_ok() -> Result {
        // language=json
        let origin: MessageOrigin = serde_json::from_str(
            r#"{"type": "channel", "date": 1700000000, "chat": {"id": -100123, "type": "channel"}, "message_id": 42}"#,
        )?;
        let MessageOrigin::Channel(channel) = &origin else {
            unreachable!("expected a channel origin, got {origin:?}");
        };
        assert_eq!(channel.message_id, 42);
        assert_eq!(channel.chat.id, -100_123);
        assert_eq!(channel.date.timestamp(), 1_700_000_000);
        assert!(channel.extra.is_empty(), "discriminator must not leak into `extra`");
        assert_eq!(origin.kind(), "channel");
        Ok(())
    }

    #[test]
    fn hidden_user_ok() -> Result {
        // language=json
        let origin: MessageOrigin =
            serde_json::from_str(r#"{"type": "hidden_user", "date": 1, "sender_user_name": "Anon"}"#)?;
        assert!(matches!(
            origin,
            MessageOrigin::HiddenUser(MessageOriginHiddenUser { ref sender_user_name, .. }) if sender_user_name == "Anon",
        ));
        Ok(())
    }

    #[test]
    fn unknown_ok() -> Result {
        // language=json
        let origin: MessageOrigin =
            serde_json::from_str(r#"{"type": "satellite", "date": 5, "orbit": "low"}"#)?;
        let MessageOrigin::Unknown(unknown) = &origin else {
            unreachable!("expected an unknown origin, got {origin:?}");
        };
        assert_eq!(unknown.kind, "satellite");
        assert_eq!(unknown.date.timestamp(), 5);
        assert_eq!(unknown.extra.get("orbit"), Some(&json!("low")));
        assert_eq!(
            serde_json::to_value(&origin)?,
            json!({"type": "satellite", "date": 5, "orbit": "low"}),
        );
        Ok(())
    }

    #[test]
    fn missing_nested_field_fails() {
        // language=json
        let result = serde_json::from_str::<MessageOrigin>(r#"{"type": "user", "date": 1}"#);
        assert!(result.is_err());
    }

    #[test]
    fn serialize_ok() -> Result {
        // language=json
        let raw = json!({"type": "user", "date": 10, "sender_user": {"id": 1, "is_bot": false, "first_name": "Jane"}});
        let origin: MessageOrigin = serde_json::from_value(raw.clone())?;
        assert_eq!(serde_json::to_value(&origin)?, raw);
        Ok(())
    }

    #[test]
    fn equality_ok() -> Result {
        // language=json
        let lhs: MessageOrigin = serde_json::from_str(
            r#"{"type": "chat", "date": 1, "sender_chat": {"id": 5, "type": "group", "title": "A"}}"#,
        )?;
        // language=json
        let rhs: MessageOrigin = serde_json::from_str(
            r#"{"type": "chat", "date": 1, "sender_chat": {"id": 5, "type": "group", "title": "B"}}"#,
        )?;
        assert_eq!(lhs, rhs);

        // language=json
        let lhs: MessageOrigin = serde_json::from_str(
            r#"{"type": "user", "date": 10, "sender_user": {"id": 1, "is_bot": false, "first_name": "A"}}"#,
        )?;
        // language=json
        let rhs: MessageOrigin = serde_json::from_str(
            r#"{"type": "user", "date": 10, "sender_user": {"id": 2, "is_bot": false, "first_name": "B"}}"#,
        )?;
        assert_eq!(lhs, rhs);

        // language=json
        let hidden: MessageOrigin = serde_json::from_str(
            r#"{"type": "hidden_user", "date": 10, "sender_user_name": "A"}"#,
        )?;
        assert_ne!(lhs, hidden);
        Ok(())
    }
}
