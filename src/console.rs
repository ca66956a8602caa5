//! Line format read by the `auth-ui` event console.
//!
//! Each non-empty line is one of:
//! - `state <name> [json]` dispatches a state change, e.g.
//!   `state signedin {"username":"bob"}`
//! - `state` dispatches a state change without a state
//! - `error <message>` dispatches a toast error
//! - `phone <number>` composes a sign-up phone number with the configured
//!   dial code; a rejected number is dispatched as a toast error
//! - a JSON event payload, e.g. `{"event":"ToastAuthError","message":"boom"}`
//!
//! Lines starting with `#` are comments.

use anyhow::Context;
use anyhow::Result;
use anyhow::bail;
use log::debug;
use serde_json::Value;

use crate::config::Config;
use crate::event::AuthState;
use crate::event::AuthUiEvent;
use crate::event::channel::AuthNotificationChannel;
use crate::fields::PhoneNumber;
use crate::fields::compose_phone_number_input;

/// One parsed console line.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Dispatch(AuthUiEvent),
    Phone(String),
}

/// Parses one console line. Blank lines and comments yield `None`.
pub fn parse_line(line: &str) -> Result<Option<Command>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    if line.starts_with('{') {
        let event = serde_json::from_str(line).context("Invalid event payload")?;
        return Ok(Some(Command::Dispatch(event)));
    }

    let (command, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let rest = rest.trim();

    let command = match command {
        "state" => Command::Dispatch(parse_state(rest)?),
        "error" => {
            if rest.is_empty() {
                bail!("`error` needs a message");
            }
            Command::Dispatch(AuthUiEvent::ToastAuthError {
                message: rest.to_string(),
            })
        }
        "phone" => Command::Phone(rest.to_string()),
        other if line.contains('{') => bail!(
            "Unknown command `{other}`; JSON payloads must start with `{{` at the beginning of the line"
        ),
        other => bail!("Unknown command `{other}`; expected `state`, `error`, `phone` or a JSON payload"),
    };
    Ok(Some(command))
}

fn parse_state(args: &str) -> Result<AuthUiEvent> {
    if args.is_empty() {
        return Ok(AuthUiEvent::AuthStateChange {
            state: None,
            data: None,
        });
    }

    let (name, data) = args.split_once(char::is_whitespace).unwrap_or((args, ""));
    let state: AuthState = name.parse()?;
    let data = match data.trim() {
        "" => None,
        json => Some(serde_json::from_str::<Value>(json).context("Invalid state data")?),
    };

    Ok(AuthUiEvent::AuthStateChange {
        state: Some(state),
        data,
    })
}

/// Runs console lines against a channel.
pub struct Console {
    channel: AuthNotificationChannel,
    country_dial_code: String,
}

impl Console {
    pub fn new(channel: AuthNotificationChannel, config: &Config) -> Self {
        Self {
            channel,
            country_dial_code: config.country_dial_code.clone(),
        }
    }

    /// Handles one line. Returns text to show the user, if any.
    pub fn handle_line(&self, line: &str) -> Result<Option<String>> {
        match parse_line(line)? {
            None => Ok(None),
            Some(Command::Dispatch(event)) => {
                self.channel.dispatch(event);
                Ok(None)
            }
            Some(Command::Phone(number)) => {
                let phone = PhoneNumber::new(self.country_dial_code.as_str(), number);
                match compose_phone_number_input(&phone) {
                    Ok(composed) => Ok(Some(format!("phone: {composed}"))),
                    Err(e) => {
                        debug!("Rejected phone number: {e}");
                        self.channel.dispatch_error(e.to_string());
                        Ok(None)
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::Mutex;

    use serde_json::json;

    use super::*;
    use crate::event::hub::Hub;

    fn dispatched(line: &str) -> AuthUiEvent {
        match parse_line(line).unwrap() {
            Some(Command::Dispatch(event)) => event,
            other => panic!("expected an event, got {other:?}"),
        }
    }

    fn console_with_dial_code(code: &str) -> (Console, AuthNotificationChannel) {
        let channel = AuthNotificationChannel::new(Arc::new(Hub::new()));
        let mut config = Config::new();
        config.country_dial_code = code.to_string();
        (Console::new(channel.clone(), &config), channel)
    }

    #[test]
    fn test_parse_state_with_data() {
        assert_eq!(
            dispatched(r#"state signedin {"username": "bob"}"#),
            AuthUiEvent::AuthStateChange {
                state: Some(AuthState::SignedIn),
                data: Some(json!({ "username": "bob" })),
            }
        );
    }

    #[test]
    fn test_parse_bare_state() {
        assert_eq!(
            dispatched("state"),
            AuthUiEvent::AuthStateChange {
                state: None,
                data: None
            }
        );
    }

    #[test]
    fn test_parse_error() {
        assert_eq!(
            dispatched("error  Incorrect username or password."),
            AuthUiEvent::ToastAuthError {
                message: "Incorrect username or password.".to_string()
            }
        );
        assert!(parse_line("error").is_err());
    }

    #[test]
    fn test_parse_json_payload() {
        assert_eq!(
            dispatched(r#"{"event":"ToastAuthError","message":"boom"}"#),
            AuthUiEvent::ToastAuthError {
                message: "boom".to_string()
            }
        );
    }

    #[test]
    fn test_parse_json_payload_with_empty_state() {
        assert_eq!(
            dispatched(r#"{"event":"AuthStateChange","message":""}"#),
            AuthUiEvent::AuthStateChange {
                state: None,
                data: None
            }
        );
    }

    #[test]
    fn test_empty_state_payload_never_reaches_state_handler() {
        let (console, channel) = console_with_dial_code("+1");
        let calls = Arc::new(Mutex::new(0));
        let counter = calls.clone();
        let _sub = channel.on_state_change(move |_, _| {
            *counter.lock().unwrap() += 1;
            Ok(())
        });

        let output = console
            .handle_line(r#"{"event":"AuthStateChange","message":""}"#)
            .unwrap();

        assert_eq!(output, None);
        assert_eq!(*calls.lock().unwrap(), 0);
    }

    #[test]
    fn test_parse_phone() {
        assert_eq!(
            parse_line("phone (555) 555-1212").unwrap(),
            Some(Command::Phone("(555) 555-1212".to_string()))
        );
    }

    #[test]
    fn test_phone_uses_configured_dial_code() {
        let (console, _channel) = console_with_dial_code("+44");
        assert_eq!(
            console.handle_line("phone 20 7946 0958").unwrap(),
            Some("phone: +442079460958".to_string())
        );
    }

    #[test]
    fn test_empty_phone_dispatches_toast_error() {
        let (console, channel) = console_with_dial_code("+1");
        let messages = Arc::new(Mutex::new(Vec::new()));
        let sink = messages.clone();
        let _sub = channel.on_toast_error(move |message| {
            sink.lock().unwrap().push(message.to_string());
            Ok(())
        });

        assert_eq!(console.handle_line("phone").unwrap(), None);
        assert_eq!(
            *messages.lock().unwrap(),
            vec!["Phone number can not be empty"]
        );
    }

    #[test]
    fn test_skips_blank_and_comments() {
        assert_eq!(parse_line("   ").unwrap(), None);
        assert_eq!(parse_line("# sign in flow").unwrap(), None);
    }

    #[test]
    fn test_rejects_unknown_input() {
        assert!(parse_line("state signedIn").is_err());
        assert!(parse_line("login bob").is_err());
        assert!(parse_line("state signin {not json").is_err());
    }

    #[test]
    fn test_misplaced_json_gets_clear_error() {
        let err = parse_line(r#"> {"event":"ToastAuthError","message":"boom"}"#).unwrap_err();
        assert!(
            err.to_string()
                .contains("JSON payloads must start with `{` at the beginning of the line"),
            "unexpected message: {err}"
        );
    }
}
