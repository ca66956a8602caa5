//! auth-ui - Helpers backing an authentication UI widget set.
//!
//! This crate provides:
//! - A typed notification channel for auth state changes and toast errors
//! - Form helpers: phone number composition, username alias validation,
//!   labels for the standard identity claims
//! - Storage key derivation and a wrapper around storage lookups

pub mod config;
pub mod console;
pub mod error;
pub mod event;
pub mod fields;
pub mod i18n;
pub mod logging;
pub mod storage;
pub mod subscriber;

pub use event::AuthState;
pub use event::AuthUiEvent;
pub use event::channel::AuthNotificationChannel;
pub use event::channel::Unsubscribe;
pub use event::hub::Hub;
