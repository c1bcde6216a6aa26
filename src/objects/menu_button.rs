use bon::Builder;

use crate::{
    discriminated::{self, DecodeFn, Discriminated, Tagged, Variant, variant},
    objects::Extra,
    prelude::*,
};

/// The [bot's menu button][1] in a private chat.
///
/// [1]: https://core.telegram.org/bots/api#menubutton
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[must_use]
pub enum MenuButton {
    /// Opens the bot's list of commands.
    Commands(MenuButtonCommands),

    /// Launches a [Web App](https://core.telegram.org/bots/webapps).
    WebApp(MenuButtonWebApp),

    /// No specific value for the menu button was set.
    Default(MenuButtonDefault),

    Unknown(UnknownMenuButton),
}

impl MenuButton {
    pub fn commands() -> Self {
        Self::Commands(MenuButtonCommands::default())
    }

    pub fn default_button() -> Self {
        Self::Default(MenuButtonDefault::default())
    }

    pub fn web_app(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self::WebApp(MenuButtonWebApp {
            text: text.into(),
            web_app: WebAppInfo { url: url.into(), extra: Extra::new() },
            extra: Extra::new(),
        })
    }

    #[must_use]
    pub fn kind(&self) -> &str {
        match self {
            Self::Commands(_) => MenuButtonCommands::KIND,
            Self::WebApp(_) => MenuButtonWebApp::KIND,
            Self::Default(_) => MenuButtonDefault::KIND,
            Self::Unknown(button) => button.kind.as_str(),
        }
    }
}

impl Discriminated for MenuButton {
    const VARIANTS: &'static [(&'static str, DecodeFn<Self>)] = &[
        (MenuButtonCommands::KIND, variant::<MenuButtonCommands, Self>),
        (MenuButtonWebApp::KIND, variant::<MenuButtonWebApp, Self>),
        (MenuButtonDefault::KIND, variant::<MenuButtonDefault, Self>),
    ];

    fn fallback(kind: String, fields: Map<String, Value>) -> serde_json::Result<Self> {
        Ok(Self::Unknown(UnknownMenuButton { kind, extra: fields.into_iter().collect() }))
    }
}

impl<'de> Deserialize<'de> for MenuButton {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        discriminated::deserialize(deserializer)
    }
}

impl Serialize for MenuButton {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Commands(inner) => {
                Tagged::new(MenuButtonCommands::KIND, inner).serialize(serializer)
            }
            Self::WebApp(inner) => Tagged::new(MenuButtonWebApp::KIND, inner).serialize(serializer),
            Self::Default(inner) => {
                Tagged::new(MenuButtonDefault::KIND, inner).serialize(serializer)
            }
            Self::Unknown(inner) => Tagged::new(&inner.kind, inner).serialize(serializer),
        }
    }
}

impl From<MenuButtonCommands> for MenuButton {
    fn from(button: MenuButtonCommands) -> Self {
        Self::Commands(button)
    }
}

impl From<MenuButtonWebApp> for MenuButton {
    fn from(button: MenuButtonWebApp) -> Self {
        Self::WebApp(button)
    }
}

impl From<MenuButtonDefault> for MenuButton {
    fn from(button: MenuButtonDefault) -> Self {
        Self::Default(button)
    }
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[must_use]
pub struct MenuButtonCommands {
    #[serde(flatten)]
    pub extra: Extra,
}

impl Variant for MenuButtonCommands {
    const KIND: &'static str = "commands";
}

identity!(MenuButtonCommands, &str, |_button| MenuButtonCommands::KIND);

#[derive(Clone, Debug, Builder, Deserialize, Serialize)]
#[must_use]
pub struct MenuButtonWebApp {
    /// Text on the button.
    #[builder(into)]
    pub text: String,

    /// Description of the Web App that will be launched when the user presses the button.
    pub web_app: WebAppInfo,

    #[serde(flatten)]
    #[builder(default)]
    pub extra: Extra,
}

impl Variant for MenuButtonWebApp {
    const KIND: &'static str = "web_app";
}

identity!(MenuButtonWebApp, (&str, &str), |button| (
    button.text.as_str(),
    button.web_app.url.as_str()
));

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[must_use]
pub struct MenuButtonDefault {
    #[serde(flatten)]
    pub extra: Extra,
}

impl Variant for MenuButtonDefault {
    const KIND: &'static str = "default";
}

identity!(MenuButtonDefault, &str, |_button| MenuButtonDefault::KIND);

#[derive(Clone, Debug, Serialize)]
#[must_use]
pub struct UnknownMenuButton {
    #[serde(skip)]
    pub kind: String,

    #[serde(flatten)]
    pub extra: Extra,
}

identity!(UnknownMenuButton, &str, |button| button.kind.as_str());

/// Describes a [Web App](https://core.telegram.org/bots/webapps).
#[derive(Clone, Debug, Deserialize, Serialize)]
#[must_use]
pub struct WebAppInfo {
    /// HTTPS URL of the Web App.
    pub url: String,

    #[serde(flatten)]
    pub extra: Extra,
}

identity!(WebAppInfo, &str, |info| info.url.as_str());

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn web_app_ok() -> Result {
        // language=json
        let button: MenuButton = serde_json::from_str(
            r#"{"type": "web_app", "text": "Open", "web_app": {"url": "https://example.com/app"}}"#,
        )?;
        assert_eq!(button, MenuButton::web_app("Open", "https://example.com/app"));
        Ok(())
    }

    #[test]
    fn commands_ok() -> Result {
        let button: MenuButton = serde_json::from_value(json!({"type": "commands"}))?;
        assert_eq!(button, MenuButton::commands());
        assert_ne!(button, MenuButton::default_button());
        Ok(())
    }

    #[test]
    fn unknown_ok() -> Result {
        // language=json
        let button: MenuButton = serde_json::from_str(r#"{"type": "totally_new_type"}"#)?;
        let MenuButton::Unknown(unknown) = &button else {
            unreachable!("expected an unknown button, got {button:?}");
        };
        assert_eq!(unknown.kind, "totally_new_type");
        assert!(unknown.extra.is_empty());
        assert_eq!(serde_json::to_value(&button)?, json!({"type": "totally_new_type"}));
        Ok(())
    }

    #[test]
    fn empty_record_fails() {
        assert!(serde_json::from_value::<MenuButton>(json!({})).is_err());
    }
}
