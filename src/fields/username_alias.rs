use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;

use crate::error::ValidationError;

/// Attribute a user signs in with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UsernameAlias {
    #[default]
    Username,
    Email,
    PhoneNumber,
}

impl UsernameAlias {
    pub const ALL: [UsernameAlias; 3] = [
        UsernameAlias::Username,
        UsernameAlias::Email,
        UsernameAlias::PhoneNumber,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            UsernameAlias::Username => "username",
            UsernameAlias::Email => "email",
            UsernameAlias::PhoneNumber => "phone_number",
        }
    }
}

impl fmt::Display for UsernameAlias {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UsernameAlias {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UsernameAlias::ALL
            .into_iter()
            .find(|alias| alias.as_str() == s)
            .ok_or_else(|| ValidationError::InvalidUsernameAlias {
                alias: s.to_string(),
                expected: UsernameAlias::ALL
                    .iter()
                    .map(UsernameAlias::as_str)
                    .collect::<Vec<_>>()
                    .join(","),
            })
    }
}

/// Validates a username alias supplied by the host application.
pub fn check_username_alias(alias: &str) -> Result<UsernameAlias, ValidationError> {
    alias.parse()
}
