//! Event console for auth-ui.
//!
//! Reads events from stdin, dispatches them on the auth UI channel and
//! prints what a host application listening on that channel would receive.

use std::sync::Arc;

use anyhow::Result;
use auth_ui::AuthNotificationChannel;
use auth_ui::Hub;
use auth_ui::config::Config;
use auth_ui::console::Console;
use auth_ui::logging::setup_logging;
use auth_ui::subscriber::EventLogSubscriber;
use dotenv::dotenv;
use log::debug;
use log::info;
use log::warn;
use tokio::io::AsyncBufReadExt;
use tokio::io::BufReader;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let mut config = Config::new();
    config.load()?;
    let _log_guard = setup_logging(&config)?;
    info!("Starting auth-ui event console on channel \"{}\"", config.channel_name);

    let hub = Arc::new(Hub::new());
    let channel = AuthNotificationChannel::with_name(hub.clone(), &config.channel_name);
    hub.register_subscriber(channel.name(), Arc::new(EventLogSubscriber));

    let state_sub = channel.on_state_change(|state, data| {
        match data {
            Some(data) => println!("state: {state} {data}"),
            None => println!("state: {state}"),
        }
        Ok(())
    });
    let toast_sub = channel.on_toast_error(|message| {
        println!("toast: {message}");
        Ok(())
    });

    run(&Console::new(channel.clone(), &config)).await?;

    state_sub.unsubscribe();
    toast_sub.unsubscribe();
    debug!(
        "{} listener(s) left on channel \"{}\"",
        hub.listener_count(channel.name()),
        channel.name()
    );
    Ok(())
}

async fn run(console: &Console) -> Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    info!("End of input, shutting down.");
                    return Ok(());
                };
                match console.handle_line(&line) {
                    Ok(Some(output)) => println!("{output}"),
                    Ok(None) => {}
                    Err(e) => warn!("Skipping line {line:?}: {e:#}"),
                }
            }
            signal = tokio::signal::ctrl_c() => {
                signal?;
                info!("Ctrl+C received, shutting down.");
                return Ok(());
            }
        }
    }
}
