//! Access to objects in remote blob storage.

use std::fmt;
use std::str::FromStr;

use anyhow::Result;
use async_trait::async_trait;
use log::debug;
use log::error;
use serde::Deserialize;
use serde::Serialize;

use crate::error::ValidationError;

pub mod error;
pub mod key;

pub use error::StorageError;
pub use key::FileInfo;
pub use key::FileToKey;
pub use key::calc_key;

/// Visibility of a stored object.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessLevel {
    #[default]
    Public,
    Protected,
    Private,
}

impl AccessLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccessLevel::Public => "public",
            AccessLevel::Protected => "protected",
            AccessLevel::Private => "private",
        }
    }
}

impl fmt::Display for AccessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AccessLevel {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "public" => Ok(AccessLevel::Public),
            "protected" => Ok(AccessLevel::Protected),
            "private" => Ok(AccessLevel::Private),
            _ => Err(ValidationError::UnknownAccessLevel {
                level: s.to_string(),
            }),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetOptions {
    pub level: AccessLevel,
    /// Whether the backend should record the access for analytics.
    pub track: bool,
    /// Owner of a protected object; `None` means the signed-in user.
    pub identity_id: Option<String>,
}

/// Storage backend able to resolve a key to an object.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StorageProvider: Send + Sync {
    /// Returns the object behind `key`, usually as a URL the UI can load.
    async fn get(&self, key: &str, options: &GetOptions) -> Result<String>;
}

/// Fetches `key` from `provider`.
///
/// Fails with [`StorageError::NoStorageModule`] when no provider is
/// configured. Backend failures are logged before being returned.
#[tracing::instrument(skip(provider, options), fields(level = %options.level))]
pub async fn get_storage_object(
    provider: Option<&dyn StorageProvider>,
    key: &str,
    options: &GetOptions,
) -> Result<String, StorageError> {
    let provider = provider.ok_or(StorageError::NoStorageModule)?;

    debug!("Fetching storage object `{key}` ({} access)", options.level);
    match provider.get(key, options).await {
        Ok(src) => Ok(src),
        Err(e) => {
            error!("Failed to fetch storage object `{key}`: {e:#}");
            Err(StorageError::Fetch {
                key: key.to_string(),
                source: e.into(),
            })
        }
    }
}
