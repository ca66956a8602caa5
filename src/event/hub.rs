//! Named-channel publish/subscribe hub with synchronous fan-out.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use std::sync::PoisonError;
use std::sync::RwLock;

use anyhow::Result;
use log::debug;
use log::warn;
use uuid::Uuid;

use super::Event;
use crate::subscriber::Subscriber;

type Listener<E> = Arc<dyn Fn(&E) -> Result<()> + Send + Sync>;
type Channels<E> = RwLock<HashMap<String, Vec<(ListenerId, Listener<E>)>>>;

/// Identifies one registration on a channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(Uuid);

impl ListenerId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for ListenerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Broadcasts events of type `E` to listeners grouped by channel name.
///
/// Dispatch is synchronous. Listeners of a channel run on the calling
/// thread, one after another, in the order they were registered. The list
/// is snapshotted before the first listener runs, so listeners may register
/// or remove listeners while being called; the change is seen by the next
/// dispatch.
///
/// A listener returning `Err` is logged and the remaining listeners still
/// receive the event. Panics are not caught.
pub struct Hub<E: Event> {
    channels: Channels<E>,
}

impl<E: Event> Hub<E> {
    pub fn new() -> Self {
        Self {
            channels: RwLock::new(HashMap::new()),
        }
    }

    /// Registers `listener` on `channel`.
    pub fn listen<F>(&self, channel: &str, listener: F) -> ListenerId
    where
        F: Fn(&E) -> Result<()> + Send + Sync + 'static,
    {
        let id = ListenerId::new();
        self.channels
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(channel.to_string())
            .or_default()
            .push((id, Arc::new(listener)));

        debug!("Registered listener {id} on channel \"{channel}\"");
        id
    }

    /// Registers a [`Subscriber`] on `channel`.
    pub fn register_subscriber<S>(&self, channel: &str, subscriber: Arc<S>) -> ListenerId
    where
        S: Subscriber<E> + Send + Sync + 'static,
    {
        self.listen(channel, move |event| subscriber.callback(event))
    }

    /// Removes the listener registered under `id`.
    ///
    /// Returns `false` if it was not registered on `channel`.
    pub fn remove(&self, channel: &str, id: ListenerId) -> bool {
        let mut channels = self
            .channels
            .write()
            .unwrap_or_else(PoisonError::into_inner);

        let Some(listeners) = channels.get_mut(channel) else {
            return false;
        };
        let before = listeners.len();
        listeners.retain(|(listener_id, _)| *listener_id != id);
        let removed = listeners.len() != before;

        if listeners.is_empty() {
            channels.remove(channel);
        }
        if removed {
            debug!("Removed listener {id} from channel \"{channel}\"");
        }
        removed
    }

    /// Delivers `event` to every listener currently registered on `channel`.
    pub fn dispatch(&self, channel: &str, event: &E) {
        let listeners: Vec<(ListenerId, Listener<E>)> = {
            let channels = self
                .channels
                .read()
                .unwrap_or_else(PoisonError::into_inner);
            match channels.get(channel) {
                Some(listeners) => listeners.clone(),
                None => return,
            }
        };

        debug!(
            "Dispatching {} on channel \"{channel}\" to {} listener(s)",
            event.kind(),
            listeners.len()
        );

        for (id, listener) in listeners {
            if let Err(e) = listener(event) {
                warn!(
                    "Listener {id} on channel \"{channel}\" failed to handle {}: {e:#}",
                    event.kind()
                );
            }
        }
    }

    pub fn listener_count(&self, channel: &str) -> usize {
        self.channels
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(channel)
            .map_or(0, Vec::len)
    }
}

impl<E: Event> Default for Hub<E> {
    fn default() -> Self {
        Self::new()
    }
}
