use clap::{Args, Parser, Subcommand};
use tgbotapi::objects::ChatId;

#[derive(Parser)]
#[command(author, version, about, long_about, propagate_version = true)]
pub struct Cli {
    #[command(flatten)]
    pub logging: LoggingArgs,

    #[clap(long, env = "BOT_TOKEN", hide_env_values = true)]
    pub bot_token: String,

    /// Custom Bot API server, for example, a local one.
    #[clap(long, env = "BOT_API_URL")]
    pub base_url: Option<url::Url>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Args)]
pub struct LoggingArgs {
    #[clap(long, env = "SENTRY_DSN")]
    pub sentry_dsn: Option<String>,

    #[clap(long, env = "SENTRY_ENVIRONMENT")]
    pub sentry_environment: Option<String>,

    /// Directives for the stderr log, in the `RUST_LOG` syntax.
    #[clap(long, env = "RUST_LOG", default_value = "info,tgbotapi=debug")]
    pub log_filter: String,
}

#[derive(Subcommand)]
pub enum Command {
    /// Test the bot token.
    GetMe,

    /// Manually check out the bot updates.
    GetUpdates {
        #[clap(long)]
        offset: Option<i64>,

        #[clap(long)]
        limit: Option<u32>,

        #[clap(long)]
        timeout_secs: Option<u64>,

        #[clap(long, value_delimiter = ',', num_args = 1..)]
        allowed_updates: Option<Vec<String>>,
    },

    GetWebhookInfo,

    /// Send a text message.
    SendMessage {
        /// Chat ID or `@username` of the channel.
        #[clap(allow_hyphen_values = true)]
        chat_id: ChatId,

        text: String,

        /// Treat the text as HTML.
        #[clap(long)]
        html: bool,
    },

    /// Show the menu button of the private chat, or the default one.
    GetChatMenuButton {
        #[clap(long)]
        chat_id: Option<i64>,
    },

    /// Replace the bot commands.
    SetMyCommands {
        /// Commands as `command=description`.
        #[clap(value_parser = parse_command, required = true)]
        commands: Vec<(String, String)>,
    },
}

fn parse_command(value: &str) -> Result<(String, String), String> {
    let (command, description) = value
        .split_once('=')
        .ok_or_else(|| format!("`{value}` must look like `command=description`"))?;
    Ok((command.trim_start_matches('/').to_owned(), description.to_owned()))
}
