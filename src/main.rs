mod cli;
mod logging;

use clap::Parser;
use serde::Serialize;
use tgbotapi::{
    Bot,
    Method,
    constants::{ParseMode, UpdateType},
    methods::{GetChatMenuButton, GetUpdates, GetWebhookInfo, SendMessage, SetMyCommands},
    objects::BotCommand,
};
use tracing::info;

use crate::{
    cli::{Cli, Command},
    logging::Logging,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let _logging = Logging::init(cli.logging)?;
    info!(version = clap::crate_version!(), "Starting…");

    let bot = Bot::builder().token(cli.bot_token).maybe_base_url(cli.base_url).build()?;
    let result = run(&bot, cli.command).await;
    bot.shutdown().await?;
    result
}

async fn run(bot: &Bot, command: Command) -> anyhow::Result<()> {
    match command {
        Command::GetMe => print(&bot.initialize().await?),
        Command::GetUpdates { offset, limit, timeout_secs, allowed_updates } => {
            let allowed_updates = allowed_updates.map(|allowed_updates| {
                allowed_updates.iter().map(|update_type| UpdateType::from(update_type.as_str())).collect()
            });
            let updates = GetUpdates::builder()
                .maybe_offset(offset)
                .maybe_limit(limit)
                .maybe_timeout_secs(timeout_secs)
                .maybe_allowed_updates(allowed_updates)
                .build()
                .call_on(bot)
                .await?;
            info!(n_updates = updates.len(), "Received the updates");
            print(&updates)
        }
        Command::GetWebhookInfo => print(&GetWebhookInfo.call_on(bot).await?),
        Command::SendMessage { chat_id, text, html } => {
            let message = SendMessage::builder()
                .chat_id(chat_id)
                .text(text)
                .maybe_parse_mode(html.then_some(ParseMode::Html))
                .build()
                .call_on(bot)
                .await?;
            info!(message_id = message.id, link = ?message.link(), "Sent");
            print(&message)
        }
        Command::GetChatMenuButton { chat_id } => {
            print(&GetChatMenuButton::builder().maybe_chat_id(chat_id).build().call_on(bot).await?)
        }
        Command::SetMyCommands { commands } => {
            let commands = commands
                .into_iter()
                .map(|(command, description)| {
                    BotCommand::builder().command(command).description(description).build()
                })
                .collect();
            let result = SetMyCommands::builder().commands(commands).build().call_on(bot).await?;
            print(&result)
        }
    }
}

fn print(value: &impl Serialize) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
