use serenity::all::{Client, GatewayIntents};

use crate::{
    bot::{command, handler::Handler},
    error::AppError,
    state::AppState,
};

/// Builds the Discord client with the command framework and the game message handler.
///
/// Commands are registered globally once the framework is set up.
///
/// # Arguments
/// - `state` - Shared application state, handed to both the commands and the event handler
///
/// # Returns
/// - `Ok(Client)` - Client ready to be started; its `http` is shared with the scheduler
/// - `Err(AppError::DiscordErr)` - The client could not be built
pub async fn init_bot(state: AppState) -> Result<Client, AppError> {
    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MEMBERS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT;

    let framework_state = state.clone();
    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: command::commands(),
            on_error: |error| Box::pin(command::on_error(error)),
            prefix_options: poise::PrefixFrameworkOptions {
                prefix: Some("!".into()),
                ..Default::default()
            },
            ..Default::default()
        })
        .setup(move |ctx, _ready, framework| {
            Box::pin(async move {
                poise::builtins::register_globally(ctx, &framework.options().commands).await?;
                tracing::info!(
                    "Registered {} commands",
                    framework.options().commands.len()
                );
                Ok(framework_state)
            })
        })
        .build();

    let client = Client::builder(&state.config.discord_bot_token, intents)
        .framework(framework)
        .event_handler(Handler::new(state))
        .await?;

    Ok(client)
}

/// Runs the gateway connection until the bot shuts down.
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
