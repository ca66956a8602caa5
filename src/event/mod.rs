//! Auth UI events and the hub that broadcasts them.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde::Deserializer;
use serde::de;
use serde::Serialize;
use serde_json::Value;

use crate::error::ValidationError;

pub mod channel;
pub mod hub;

/// Name of the channel auth components broadcast on.
pub const UI_AUTH_CHANNEL: &str = "UI Auth";
/// Kind tag of [`AuthUiEvent::ToastAuthError`].
pub const TOAST_AUTH_ERROR_EVENT: &str = "ToastAuthError";
/// Kind tag of [`AuthUiEvent::AuthStateChange`].
pub const AUTH_STATE_CHANGE_EVENT: &str = "AuthStateChange";

/// Marker trait for events that can be dispatched through a [`hub::Hub`].
pub trait Event: Send + Sync + 'static {
    /// Discriminant of the event. Never empty.
    fn kind(&self) -> &'static str;
}

/// Event broadcast on the auth UI channel.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event")]
pub enum AuthUiEvent {
    /// An error that should be surfaced to the user as a toast.
    ToastAuthError { message: String },

    /// The auth flow moved to another state.
    ///
    /// `state` may be absent; such events are dropped by state-change
    /// handlers.
    AuthStateChange {
        #[serde(rename = "message", default, deserialize_with = "deserialize_state")]
        state: Option<AuthState>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        data: Option<Value>,
    },
}

impl Event for AuthUiEvent {
    fn kind(&self) -> &'static str {
        match self {
            AuthUiEvent::ToastAuthError { .. } => TOAST_AUTH_ERROR_EVENT,
            AuthUiEvent::AuthStateChange { .. } => AUTH_STATE_CHANGE_EVENT,
        }
    }
}

/// Reads a state name, treating `null` and `""` as no state.
fn deserialize_state<'de, D>(deserializer: D) -> Result<Option<AuthState>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)?.as_deref() {
        None | Some("") => Ok(None),
        Some(name) => name.parse::<AuthState>().map(Some).map_err(de::Error::custom),
    }
}

/// Error details as reported by the auth backend.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToastError {
    pub code: String,
    pub name: String,
    pub message: String,
}

/// States of the authenticator flow.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AuthState {
    #[serde(rename = "signup")]
    SignUp,
    #[serde(rename = "signout")]
    SignOut,
    #[serde(rename = "signin")]
    SignIn,
    #[serde(rename = "loading")]
    Loading,
    #[serde(rename = "signedout")]
    SignedOut,
    #[serde(rename = "signedin")]
    SignedIn,
    #[serde(rename = "signingup")]
    SigningUp,
    #[serde(rename = "confirmSignUp")]
    ConfirmSignUp,
    #[serde(rename = "confirmsignupcustomflow")]
    ConfirmingSignUpCustomFlow,
    #[serde(rename = "confirmSignIn")]
    ConfirmSignIn,
    #[serde(rename = "confirmsignincustomflow")]
    ConfirmingSignInCustomFlow,
    #[serde(rename = "verifyingattributes")]
    VerifyingAttributes,
    #[serde(rename = "forgotpassword")]
    ForgotPassword,
    #[serde(rename = "resettingpassword")]
    ResetPassword,
    #[serde(rename = "settingMFA")]
    SettingMfa,
    #[serde(rename = "TOTPSetup")]
    TotpSetup,
    #[serde(rename = "customConfirmSignIn")]
    CustomConfirmSignIn,
    #[serde(rename = "verifyContact")]
    VerifyContact,
}

impl AuthState {
    pub const ALL: [AuthState; 18] = [
        AuthState::SignUp,
        AuthState::SignOut,
        AuthState::SignIn,
        AuthState::Loading,
        AuthState::SignedOut,
        AuthState::SignedIn,
        AuthState::SigningUp,
        AuthState::ConfirmSignUp,
        AuthState::ConfirmingSignUpCustomFlow,
        AuthState::ConfirmSignIn,
        AuthState::ConfirmingSignInCustomFlow,
        AuthState::VerifyingAttributes,
        AuthState::ForgotPassword,
        AuthState::ResetPassword,
        AuthState::SettingMfa,
        AuthState::TotpSetup,
        AuthState::CustomConfirmSignIn,
        AuthState::VerifyContact,
    ];

    /// Wire name of the state.
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthState::SignUp => "signup",
            AuthState::SignOut => "signout",
            AuthState::SignIn => "signin",
            AuthState::Loading => "loading",
            AuthState::SignedOut => "signedout",
            AuthState::SignedIn => "signedin",
            AuthState::SigningUp => "signingup",
            AuthState::ConfirmSignUp => "confirmSignUp",
            AuthState::ConfirmingSignUpCustomFlow => "confirmsignupcustomflow",
            AuthState::ConfirmSignIn => "confirmSignIn",
            AuthState::ConfirmingSignInCustomFlow => "confirmsignincustomflow",
            AuthState::VerifyingAttributes => "verifyingattributes",
            AuthState::ForgotPassword => "forgotpassword",
            AuthState::ResetPassword => "resettingpassword",
            AuthState::SettingMfa => "settingMFA",
            AuthState::TotpSetup => "TOTPSetup",
            AuthState::CustomConfirmSignIn => "customConfirmSignIn",
            AuthState::VerifyContact => "verifyContact",
        }
    }
}

impl fmt::Display for AuthState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AuthState {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AuthState::ALL
            .into_iter()
            .find(|state| state.as_str() == s)
            .ok_or_else(|| ValidationError::UnknownAuthState {
                state: s.to_string(),
            })
    }
}
