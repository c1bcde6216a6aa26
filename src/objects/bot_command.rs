use bon::Builder;

use crate::{
    objects::{ChatId, Extra},
    prelude::*,
};

/// This object represents a [bot command][1].
///
/// [1]: https://core.telegram.org/bots/api#botcommand
#[derive(Clone, Debug, Builder, Deserialize, Serialize)]
#[must_use]
pub struct BotCommand {
    /// Text of the command; 1-32 characters.
    ///
    /// Can contain only lowercase English letters, digits and underscores.
    #[builder(into)]
    pub command: String,

    /// Description of the command; 1-256 characters.
    #[builder(into)]
    pub description: String,

    #[serde(flatten)]
    #[builder(default)]
    pub extra: Extra,
}

identity!(BotCommand, (&str, &str), |command| (
    command.command.as_str(),
    command.description.as_str()
));

impl BotCommand {
    /// Check the command against the API limits.
    pub fn validate(&self) -> Result {
        let length = self.command.chars().count();
        if !(1..=32).contains(&length) {
            return Err(Error::InvalidArgument(format!(
                "command `{}` must be 1-32 characters long",
                self.command,
            )));
        }
        if !self
            .command
            .chars()
            .all(|char_| char_.is_ascii_lowercase() || char_.is_ascii_digit() || char_ == '_')
        {
            return Err(Error::InvalidArgument(format!(
                "command `{}` may contain only lowercase English letters, digits and underscores",
                self.command,
            )));
        }
        if !(1..=256).contains(&self.description.chars().count()) {
            return Err(Error::InvalidArgument(format!(
                "description of `{}` must be 1-256 characters long",
                self.command,
            )));
        }
        Ok(())
    }
}

/// [Scope][1] to which bot commands are applied.
///
/// Request-only, the API never returns it.
///
/// [1]: https://core.telegram.org/bots/api#botcommandscope
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[must_use]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BotCommandScope {
    /// Default commands are used if no commands with a narrower scope are specified for the user.
    #[default]
    Default,

    AllPrivateChats,

    AllGroupChats,

    AllChatAdministrators,

    Chat { chat_id: ChatId },

    ChatAdministrators { chat_id: ChatId },

    /// Specific member of a group or supergroup chat.
    ChatMember { chat_id: ChatId, user_id: i64 },
}

/// The bot's [description][1].
///
/// [1]: https://core.telegram.org/bots/api#botdescription
#[derive(Clone, Debug, Deserialize, Serialize)]
#[must_use]
pub struct BotDescription {
    pub description: String,

    #[serde(flatten)]
    pub extra: Extra,
}

identity!(BotDescription, &str, |description| description.description.as_str());

/// The bot's [short description][1].
///
/// [1]: https://core.telegram.org/bots/api#botshortdescription
#[derive(Clone, Debug, Deserialize, Serialize)]
#[must_use]
pub struct BotShortDescription {
    pub short_description: String,

    #[serde(flatten)]
    pub extra: Extra,
}

identity!(BotShortDescription, &str, |description| description.short_description.as_str());

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn validate_ok() -> Result {
        BotCommand::builder().command("start_2").description("Start").build().validate()
    }

    #[test]
    fn validate_uppercase_fails() {
        let command = BotCommand::builder().command("Start").description("Start").build();
        assert!(matches!(command.validate(), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn validate_empty_description_fails() {
        let command = BotCommand::builder().command("start").description("").build();
        assert!(matches!(command.validate(), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn scope_serialize_ok() -> Result {
        assert_eq!(serde_json::to_value(BotCommandScope::Default)?, json!({"type": "default"}));
        assert_eq!(
            serde_json::to_value(BotCommandScope::ChatMember { chat_id: ChatId::from(-5), user_id: 7 })?,
            json!({"type": "chat_member", "chat_id": -5, "user_id": 7}),
        );
        assert_eq!(
            serde_json::to_value(BotCommandScope::AllChatAdministrators)?,
            json!({"type": "all_chat_administrators"}),
        );
        Ok(())
    }
}
