//! [Available types](https://core.telegram.org/bots/api#available-types).
//!
//! Every object keeps the fields unknown to this crate in `extra`, so that newer API additions
//! survive decoding and re-serialization. Equality and hashing are defined over the object's
//! identity fields only.

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;

use crate::prelude::*;

/// Implement `PartialEq`, `Eq`, and `Hash` over the identity key of an object.
macro_rules! identity {
    ($ty:ty, $key:ty, |$this:ident| $body:expr) => {
        impl $ty {
            /// Key which defines the object equality.
            #[must_use]
            pub fn identity(&self) -> $key {
                let $this = self;
                $body
            }
        }

        impl PartialEq for $ty {
            fn eq(&self, other: &Self) -> bool {
                self.identity() == other.identity()
            }
        }

        impl Eq for $ty {}

        impl std::hash::Hash for $ty {
            fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
                self.identity().hash(state);
            }
        }
    };
}

pub mod bot_command;
pub mod chat;
pub mod files;
pub mod forum;
pub mod input_media;
pub mod menu_button;
pub mod message;
pub mod message_origin;
pub mod reaction;
pub mod reply_markup;
pub mod sticker;
pub mod update;
pub mod user;

pub use self::{
    bot_command::{BotCommand, BotCommandScope, BotDescription, BotShortDescription},
    chat::{Chat, ChatFullInfo, ChatId, ChatPermissions, ChatPhoto},
    files::{Document, File, InputFile, InputFileUpload, PhotoSize},
    forum::ForumTopic,
    input_media::{InputMedia, InputMediaDocument, InputMediaPhoto},
    menu_button::{MenuButton, MenuButtonCommands, MenuButtonDefault, MenuButtonWebApp, UnknownMenuButton, WebAppInfo},
    message::{
        LinkPreviewOptions,
        Location,
        Message,
        MessageEntity,
        MessageId,
        MessageOrTrue,
        ReplyParameters,
    },
    message_origin::{
        MessageOrigin,
        MessageOriginChannel,
        MessageOriginChat,
        MessageOriginHiddenUser,
        MessageOriginUser,
        UnknownMessageOrigin,
    },
    reaction::{
        MessageReactionCountUpdated,
        MessageReactionUpdated,
        ReactionCount,
        ReactionType,
        ReactionTypeCustomEmoji,
        ReactionTypeEmoji,
        ReactionTypePaid,
        UnknownReactionType,
    },
    reply_markup::{
        ForceReply,
        InlineKeyboardButton,
        InlineKeyboardButtonPayload,
        InlineKeyboardMarkup,
        KeyboardButton,
        ReplyKeyboardMarkup,
        ReplyKeyboardRemove,
        ReplyMarkup,
    },
    sticker::{MaskPosition, Sticker, StickerSet},
    update::{CallbackQuery, Update, WebhookInfo},
    user::User,
};

/// Fields unknown to this crate, preserved verbatim.
pub type Extra = BTreeMap<String, Value>;

/// Decode an object from a raw JSON value.
///
/// `null` and `{}` mean «no object».
pub fn decode<T: DeserializeOwned>(value: Value) -> Result<Option<T>> {
    match value {
        Value::Null => Ok(None),
        Value::Object(ref record) if record.is_empty() => Ok(None),
        value => Ok(Some(serde_json::from_value(value)?)),
    }
}

/// Decode a list of objects, skipping empty records.
///
/// `null` means an empty list.
pub fn decode_list<T: DeserializeOwned>(value: Value) -> Result<Vec<T>> {
    match value {
        Value::Null => Ok(Vec::new()),
        Value::Array(values) => {
            values.into_iter().filter_map(|value| decode(value).transpose()).collect()
        }
        other => Err(Error::Json(serde::de::Error::custom(format!(
            "expected an array, got `{other}`"
        )))),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn decode_empty_ok() -> Result {
        assert!(decode::<User>(json!({}))?.is_none());
        assert!(decode::<User>(Value::Null)?.is_none());
        Ok(())
    }

    #[test]
    fn decode_list_ok() -> Result {
        // language=json
        let value = json!([{"command": "start", "description": "Start"}, {}, {"command": "help", "description": "Help"}]);
        let commands = decode_list::<BotCommand>(value)?;
        assert_eq!(commands.len(), 2);
        assert_eq!(commands[1].command, "help");
        assert!(decode_list::<BotCommand>(Value::Null)?.is_empty());
        Ok(())
    }

    #[test]
    fn decode_list_not_array_fails() {
        assert!(decode_list::<BotCommand>(json!({"command": "start"})).is_err());
    }
}
