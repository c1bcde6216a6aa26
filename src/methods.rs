//! [Available methods](https://core.telegram.org/bots/api#available-methods).

pub mod chats;
pub mod files;
pub mod forum;
pub mod me;
pub mod messages;
pub mod stickers;
pub mod updates;

use std::{future::Future, ops::RangeInclusive};

use serde::de::DeserializeOwned;

pub use self::{
    chats::{GetChat, GetChatMemberCount, LeaveChat, SetChatPermissions, SetChatPhoto},
    files::GetFile,
    forum::{CloseForumTopic, CreateForumTopic, DeleteForumTopic, EditForumTopic, ReopenForumTopic},
    me::{
        Close,
        DeleteMyCommands,
        GetChatMenuButton,
        GetMe,
        GetMyCommands,
        GetMyDescription,
        GetMyShortDescription,
        LogOut,
        SetChatMenuButton,
        SetMyCommands,
        SetMyDescription,
        SetMyShortDescription,
    },
    messages::{
        CopyMessage,
        DeleteMessage,
        EditMessageText,
        ForwardMessage,
        SendChatAction,
        SendDocument,
        SendLocation,
        SendMediaGroup,
        SendMessage,
        SendPhoto,
        SendSticker,
        SetMessageReaction,
    },
    stickers::{GetCustomEmojiStickers, GetForumTopicIconStickers, GetStickerSet},
    updates::{DeleteWebhook, GetUpdates, GetWebhookInfo, SetWebhook},
};
use crate::{
    bot::Bot,
    client::DEFAULT_TIMEOUT,
    defaults::DefaultParameter,
    objects::InputFileUpload,
    prelude::*,
};

/// Telegram bot API method.
pub trait Method: Serialize {
    /// Method name.
    const NAME: &'static str;

    /// Whether the method blocks on the server side, and should go through the long-polling
    /// transport.
    const LONG_POLLING: bool = false;

    /// Parameters which the method accepts from the bot defaults.
    const DEFAULTS: &'static [DefaultParameter] = &[];

    type Response: DeserializeOwned + Send;

    fn timeout(&self) -> Duration {
        DEFAULT_TIMEOUT
    }

    /// Check the parameters before anything is sent.
    fn validate(&self) -> Result {
        Ok(())
    }

    /// Convert legacy parameters of the encoded payload into their modern counterparts.
    fn normalize(&self, _fields: &mut Map<String, Value>) {}

    /// Local files to upload along with the payload.
    fn uploads(&self) -> Vec<&InputFileUpload> {
        Vec::new()
    }

    fn call_on(&self, bot: &Bot) -> impl Future<Output = Result<Self::Response>> + Send
    where
        Self: Sized + Sync,
    {
        bot.call(self)
    }
}

/// Parameters of the message-sending methods which may come from the bot defaults.
pub(crate) const MESSAGE_DEFAULTS: &[DefaultParameter] = &[
    DefaultParameter::ParseMode,
    DefaultParameter::DisableNotification,
    DefaultParameter::ProtectContent,
];

pub(crate) fn check_length(name: &str, value: &str, range: RangeInclusive<usize>) -> Result {
    check_count(name, value.chars().count(), range)
}

pub(crate) fn check_count(name: &str, count: usize, range: RangeInclusive<usize>) -> Result {
    if range.contains(&count) {
        Ok(())
    } else {
        Err(Error::InvalidArgument(format!(
            "`{name}` must be within {}-{}, got {count}",
            range.start(),
            range.end(),
        )))
    }
}

/// Fails if both of the mutually exclusive parameters are set.
pub(crate) fn check_exclusive(lhs: (&str, bool), rhs: (&str, bool)) -> Result {
    if lhs.1 && rhs.1 {
        Err(Error::InvalidArgument(format!("`{}` and `{}` are mutually exclusive", lhs.0, rhs.0)))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_length_ok() -> Result {
        check_length("name", "🙂🙂", 1..=2)?;
        assert!(check_length("name", "", 1..=2).is_err());
        Ok(())
    }

    #[test]
    fn check_exclusive_ok() -> Result {
        check_exclusive(("a", true), ("b", false))?;
        let error = check_exclusive(("a", true), ("b", true)).unwrap_err();
        assert_eq!(error.to_string(), "invalid argument: `a` and `b` are mutually exclusive");
        Ok(())
    }
}
