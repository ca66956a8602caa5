//! Listeners that receive events dispatched on a hub.

use anyhow::Result;
use log::info;
use log::warn;

use crate::event::AuthUiEvent;
use crate::event::Event;

/// Trait for event subscribers.
pub trait Subscriber<E> {
    /// Called synchronously for every event dispatched on the subscribed channel.
    fn callback(&self, event: &E) -> Result<()>;
}

/// Writes every auth UI event to the log.
pub struct EventLogSubscriber;

impl Subscriber<AuthUiEvent> for EventLogSubscriber {
    fn callback(&self, event: &AuthUiEvent) -> Result<()> {
        match event {
            AuthUiEvent::ToastAuthError { message } => {
                warn!("{}: {message}", event.kind());
            }
            AuthUiEvent::AuthStateChange { state, data } => {
                let state = state.map_or("<none>", |s| s.as_str());
                match data {
                    Some(data) => info!("{}: {state} {data}", event.kind()),
                    None => info!("{}: {state}", event.kind()),
                }
            }
        }
        Ok(())
    }
}
