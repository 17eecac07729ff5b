//! Example guild bot
//!
//! Run with:
//! ```bash
//! BOT_APP_ID=... BOT_TOKEN=... cargo run -p guild-gateway --bin guild-bot
//! ```
//!
//! Configuration is loaded from environment variables (and `.env`).

use guild_common::{try_init_tracing_with_config, BotConfig, TracingConfig};
use guild_gateway::GuildBot;
use guild_rest::SendMessage;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!(error = %e, "Bot stopped");
        eprintln!("guild-bot: {e:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let config = BotConfig::from_env()?;

    if let Err(e) = try_init_tracing_with_config(TracingConfig::for_environment(config.env)) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    info!(env = ?config.env, sandbox = config.is_sandbox(), "Configuration loaded");

    let bot = GuildBot::new(config)?;

    bot.on("READY", |bot, _event| async move {
        let me = bot.me().await?;
        info!(user_id = %me.id, username = %me.username, "Logged in");
        anyhow::Ok(())
    })
    .on("AT_MESSAGE_CREATE", |bot, event| async move {
        let Some(message) = event.as_message() else {
            return anyhow::Ok(());
        };
        let reply = SendMessage::text(format!("{} hello~", message.author.mention()))
            .reply_to(&message.id);
        bot.send_message(&message.channel_id, &reply).await?;
        anyhow::Ok(())
    })
    .on("DIRECT_MESSAGE_CREATE", |bot, event| async move {
        let Some(message) = event.as_message() else {
            return anyhow::Ok(());
        };
        let reply = SendMessage::text("hello~").reply_to(&message.id);
        bot.send_direct_message(&message.guild_id, &reply).await?;
        anyhow::Ok(())
    });

    let signal_bot = bot.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            signal_bot.shutdown();
        }
    });

    bot.run().await?;
    Ok(())
}
