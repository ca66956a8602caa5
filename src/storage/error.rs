#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("No storage module found, please configure a storage provider")]
    NoStorageModule,

    #[error("Failed to fetch storage object `{key}`: {source}")]
    Fetch {
        key: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}
