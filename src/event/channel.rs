//! Typed notification channel for auth UI lifecycle events.

use std::sync::Arc;
use std::sync::Weak;
use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering;

use anyhow::Result;
use serde_json::Value;

use super::AuthState;
use super::AuthUiEvent;
use super::ToastError;
use super::UI_AUTH_CHANNEL;
use super::hub::Hub;
use super::hub::ListenerId;

/// Broadcasts [`AuthUiEvent`]s on one named channel of a shared [`Hub`].
///
/// Cloning is cheap; clones publish to and listen on the same channel.
#[derive(Clone)]
pub struct AuthNotificationChannel {
    hub: Arc<Hub<AuthUiEvent>>,
    name: Arc<str>,
}

impl AuthNotificationChannel {
    /// Creates a channel named [`UI_AUTH_CHANNEL`] on `hub`.
    pub fn new(hub: Arc<Hub<AuthUiEvent>>) -> Self {
        Self::with_name(hub, UI_AUTH_CHANNEL)
    }

    pub fn with_name(hub: Arc<Hub<AuthUiEvent>>, name: &str) -> Self {
        Self {
            hub,
            name: Arc::from(name),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn hub(&self) -> &Arc<Hub<AuthUiEvent>> {
        &self.hub
    }

    /// Broadcasts an arbitrary event to every listener on the channel.
    pub fn dispatch(&self, event: AuthUiEvent) {
        self.hub.dispatch(&self.name, &event);
    }

    /// Broadcasts a toast error carrying `message`.
    pub fn dispatch_error(&self, message: impl Into<String>) {
        self.dispatch(AuthUiEvent::ToastAuthError {
            message: message.into(),
        });
    }

    /// Broadcasts a toast error built from a backend error record.
    pub fn dispatch_toast_error(&self, error: &ToastError) {
        self.dispatch_error(error.message.clone());
    }

    /// Broadcasts a state transition.
    ///
    /// `next_state` may be `None`; state-change handlers ignore such events.
    pub fn dispatch_state_change(
        &self,
        next_state: impl Into<Option<AuthState>>,
        data: Option<Value>,
    ) {
        self.dispatch(AuthUiEvent::AuthStateChange {
            state: next_state.into(),
            data,
        });
    }

    /// Registers a listener receiving every event on the channel.
    pub fn listen<F>(&self, listener: F) -> Unsubscribe
    where
        F: Fn(&AuthUiEvent) -> Result<()> + Send + Sync + 'static,
    {
        let id = self.hub.listen(&self.name, listener);
        Unsubscribe::new(&self.hub, &self.name, id)
    }

    /// Calls `handler` for every state change that carries a state.
    ///
    /// Toast errors and state changes without a state never reach `handler`.
    pub fn on_state_change<F>(&self, handler: F) -> Unsubscribe
    where
        F: Fn(AuthState, Option<&Value>) -> Result<()> + Send + Sync + 'static,
    {
        self.listen(move |event| match event {
            AuthUiEvent::AuthStateChange {
                state: Some(state),
                data,
            } => handler(*state, data.as_ref()),
            AuthUiEvent::AuthStateChange { state: None, .. } => Ok(()),
            AuthUiEvent::ToastAuthError { .. } => Ok(()),
        })
    }

    /// Calls `handler` with the message of every toast error.
    pub fn on_toast_error<F>(&self, handler: F) -> Unsubscribe
    where
        F: Fn(&str) -> Result<()> + Send + Sync + 'static,
    {
        self.listen(move |event| match event {
            AuthUiEvent::ToastAuthError { message } => handler(message),
            AuthUiEvent::AuthStateChange { .. } => Ok(()),
        })
    }
}

/// Handle that deregisters one listener from its channel.
///
/// Dropping the handle leaves the listener registered. Only an explicit
/// [`Unsubscribe::unsubscribe`] removes it.
#[must_use = "the listener stays registered until `unsubscribe` is called"]
pub struct Unsubscribe {
    hub: Weak<Hub<AuthUiEvent>>,
    channel: Arc<str>,
    id: ListenerId,
    done: AtomicBool,
}

impl Unsubscribe {
    fn new(hub: &Arc<Hub<AuthUiEvent>>, channel: &Arc<str>, id: ListenerId) -> Self {
        Self {
            hub: Arc::downgrade(hub),
            channel: channel.clone(),
            id,
            done: AtomicBool::new(false),
        }
    }

    pub fn id(&self) -> ListenerId {
        self.id
    }

    /// Removes the listener. Calls after the first are no-ops.
    pub fn unsubscribe(&self) {
        if self.done.swap(true, Ordering::SeqCst) {
            return;
        }
        if let Some(hub) = self.hub.upgrade() {
            hub.remove(&self.channel, self.id);
        }
    }

    pub fn is_unsubscribed(&self) -> bool {
        self.done.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use serde_json::json;

    use super::*;

    fn channel() -> AuthNotificationChannel {
        AuthNotificationChannel::new(Arc::new(Hub::new()))
    }

    #[test]
    fn test_toast_error_ignored_by_state_handler() {
        let channel = channel();
        let calls = Arc::new(Mutex::new(0));
        let counter = calls.clone();
        let _sub = channel.on_state_change(move |_, _| {
            *counter.lock().unwrap() += 1;
            Ok(())
        });

        channel.dispatch_error("boom");
        assert_eq!(*calls.lock().unwrap(), 0);
    }

    #[test]
    fn test_absent_state_is_dropped() {
        let channel = channel();
        let calls = Arc::new(Mutex::new(0));
        let counter = calls.clone();
        let _sub = channel.on_state_change(move |_, _| {
            *counter.lock().unwrap() += 1;
            Ok(())
        });

        channel.dispatch_state_change(None, Some(json!({ "ignored": true })));
        assert_eq!(*calls.lock().unwrap(), 0);
    }

    #[test]
    fn test_on_toast_error_receives_message() {
        let channel = channel();
        let messages = Arc::new(Mutex::new(Vec::new()));
        let sink = messages.clone();
        let _sub = channel.on_toast_error(move |message| {
            sink.lock().unwrap().push(message.to_string());
            Ok(())
        });

        channel.dispatch_state_change(AuthState::SignIn, None);
        channel.dispatch_toast_error(&ToastError {
            code: "UserNotFoundException".to_string(),
            name: "UserNotFoundException".to_string(),
            message: "User does not exist.".to_string(),
        });

        assert_eq!(*messages.lock().unwrap(), vec!["User does not exist."]);
    }

    #[test]
    fn test_unsubscribe_after_hub_dropped() {
        let hub = Arc::new(Hub::new());
        let channel = AuthNotificationChannel::new(hub.clone());
        let sub = channel.on_state_change(|_, _| Ok(()));

        drop(channel);
        drop(hub);
        sub.unsubscribe();
        assert!(sub.is_unsubscribed());
    }

    #[test]
    fn test_dropping_handle_keeps_listener() {
        let channel = channel();
        drop(channel.on_state_change(|_, _| Ok(())));
        assert_eq!(channel.hub().listener_count(channel.name()), 1);
    }

    #[test]
    fn test_named_channels_do_not_share_events() {
        let hub = Arc::new(Hub::new());
        let auth = AuthNotificationChannel::new(hub.clone());
        let other = AuthNotificationChannel::with_name(hub, "Other");
        let calls = Arc::new(Mutex::new(0));
        let counter = calls.clone();
        let _sub = auth.on_state_change(move |_, _| {
            *counter.lock().unwrap() += 1;
            Ok(())
        });

        other.dispatch_state_change(AuthState::SignedIn, None);
        assert_eq!(*calls.lock().unwrap(), 0);
    }
}
