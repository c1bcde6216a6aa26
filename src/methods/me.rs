//! Methods concerning the bot itself.

use bon::Builder;

use crate::{
    methods::{Method, check_count, check_length},
    objects::{BotCommand, BotCommandScope, BotDescription, BotShortDescription, MenuButton, User},
    prelude::*,
};

/// A simple method for testing your bot's authentication token.
///
/// See also: <https://core.telegram.org/bots/api#getme>.
#[derive(Clone, Copy, Debug, Serialize)]
#[must_use]
pub struct GetMe;

impl Method for GetMe {
    const NAME: &'static str = "getMe";

    type Response = User;
}

/// Log out from the cloud Bot API server before launching the bot locally.
#[derive(Clone, Copy, Debug, Serialize)]
#[must_use]
pub struct LogOut;

impl Method for LogOut {
    const NAME: &'static str = "logOut";

    type Response = bool;
}

/// Close the bot instance before moving it from one local server to another.
#[derive(Clone, Copy, Debug, Serialize)]
#[must_use]
pub struct Close;

impl Method for Close {
    const NAME: &'static str = "close";

    type Response = bool;
}

/// Change the list of the bot's commands.
///
/// See also: <https://core.telegram.org/bots/api#setmycommands>.
#[derive(Clone, Debug, Builder, Serialize)]
#[must_use]
pub struct SetMyCommands {
    /// At most 100 commands can be specified.
    pub commands: Vec<BotCommand>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<BotCommandScope>,

    /// A two-letter ISO 639-1 language code.
    ///
    /// If empty, commands will be applied to all users from the given scope,
    /// for whose language there are no dedicated commands.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub language_code: Option<String>,
}

impl Method for SetMyCommands {
    const NAME: &'static str = "setMyCommands";

    type Response = bool;

    fn validate(&self) -> Result {
        check_count("commands", self.commands.len(), 0..=100)?;
        self.commands.iter().try_for_each(BotCommand::validate)
    }
}

/// Get the current list of the bot's commands for the given scope and user language.
#[derive(Clone, Debug, Default, Builder, Serialize)]
#[must_use]
pub struct GetMyCommands {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<BotCommandScope>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub language_code: Option<String>,
}

impl Method for GetMyCommands {
    const NAME: &'static str = "getMyCommands";

    type Response = Vec<BotCommand>;
}

/// Delete the list of the bot's commands for the given scope and user language.
#[derive(Clone, Debug, Default, Builder, Serialize)]
#[must_use]
pub struct DeleteMyCommands {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<BotCommandScope>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub language_code: Option<String>,
}

impl Method for DeleteMyCommands {
    const NAME: &'static str = "deleteMyCommands";

    type Response = bool;
}

/// Change the bot's description, which is shown in the chat with the bot if the chat is empty.
#[derive(Clone, Debug, Default, Builder, Serialize)]
#[must_use]
pub struct SetMyDescription {
    /// New bot description; 0-512 characters.
    ///
    /// Pass an empty string to remove the dedicated description for the given language.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub language_code: Option<String>,
}

impl Method for SetMyDescription {
    const NAME: &'static str = "setMyDescription";

    type Response = bool;

    fn validate(&self) -> Result {
        self.description.as_deref().map_or(Ok(()), |description| {
            check_length("description", description, 0..=512)
        })
    }
}

/// Get the current bot description for the given user language.
#[derive(Clone, Debug, Default, Builder, Serialize)]
#[must_use]
pub struct GetMyDescription {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub language_code: Option<String>,
}

impl Method for GetMyDescription {
    const NAME: &'static str = "getMyDescription";

    type Response = BotDescription;
}

/// Change the bot's short description, which is shown on the bot's profile page.
#[derive(Clone, Debug, Default, Builder, Serialize)]
#[must_use]
pub struct SetMyShortDescription {
    /// New short description for the bot; 0-120 characters.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub short_description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub language_code: Option<String>,
}

impl Method for SetMyShortDescription {
    const NAME: &'static str = "setMyShortDescription";

    type Response = bool;

    fn validate(&self) -> Result {
        self.short_description.as_deref().map_or(Ok(()), |short_description| {
            check_length("short_description", short_description, 0..=120)
        })
    }
}

/// Get the current bot short description for the given user language.
#[derive(Clone, Debug, Default, Builder, Serialize)]
#[must_use]
pub struct GetMyShortDescription {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub language_code: Option<String>,
}

impl Method for GetMyShortDescription {
    const NAME: &'static str = "getMyShortDescription";

    type Response = BotShortDescription;
}

/// Change the bot's menu button in a private chat, or the default menu button.
#[derive(Clone, Debug, Default, Builder, Serialize)]
#[must_use]
pub struct SetChatMenuButton {
    /// Unique identifier for the target private chat.
    ///
    /// If not specified, default bot's menu button will be changed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chat_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub menu_button: Option<MenuButton>,
}

impl Method for SetChatMenuButton {
    const NAME: &'static str = "setChatMenuButton";

    type Response = bool;
}

/// Get the current value of the bot's menu button in a private chat, or the default menu button.
#[derive(Clone, Debug, Default, Builder, Serialize)]
#[must_use]
pub struct GetChatMenuButton {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chat_id: Option<i64>,
}

impl Method for GetChatMenuButton {
    const NAME: &'static str = "getChatMenuButton";

    type Response = MenuButton;
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn set_my_commands_ok() -> Result {
        let method = SetMyCommands::builder()
            .commands(vec![BotCommand::builder().command("start").description("Start").build()])
            .scope(BotCommandScope::AllPrivateChats)
            .build();
        method.validate()?;
        assert_eq!(
            serde_json::to_value(&method)?,
            // language=json
            json!({
                "commands": [{"command": "start", "description": "Start"}],
                "scope": {"type": "all_private_chats"}
            }),
        );
        Ok(())
    }

    #[test]
    fn set_my_commands_too_many_fails() {
        let commands = (0..101)
            .map(|i| BotCommand::builder().command(format!("c{i}")).description("C").build())
            .collect();
        let method = SetMyCommands::builder().commands(commands).build();
        assert!(matches!(method.validate(), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn set_my_description_too_long_fails() {
        let method = SetMyDescription::builder().description("x".repeat(513)).build();
        assert!(method.validate().is_err());
    }

    #[test]
    fn set_chat_menu_button_ok() -> Result {
        let method = SetChatMenuButton::builder()
            .chat_id(42)
            .menu_button(MenuButton::web_app("Open", "https://example.com"))
            .build();
        assert_eq!(
            serde_json::to_value(&method)?,
            json!({
                "chat_id": 42,
                "menu_button": {"type": "web_app", "text": "Open", "web_app": {"url": "https://example.com"}}
            }),
        );
        Ok(())
    }
}
