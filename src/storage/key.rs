use std::fmt;

use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

pub const EMPTY_KEY: &str = "empty_key";

/// Metadata of a file picked for upload.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileInfo {
    pub name: String,
    pub size: u64,
    #[serde(rename = "type")]
    pub content_type: String,
}

/// How a host application wants upload keys derived.
pub enum FileToKey {
    /// Use this key for every file.
    Fixed(String),
    /// Compute the key from the file metadata.
    Callback(Box<dyn Fn(&FileInfo) -> String + Send + Sync>),
    /// Use the encoded JSON text of this value.
    Json(Value),
}

impl fmt::Debug for FileToKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileToKey::Fixed(key) => f.debug_tuple("Fixed").field(key).finish(),
            FileToKey::Callback(_) => f.write_str("Callback(..)"),
            FileToKey::Json(value) => f.debug_tuple("Json").field(value).finish(),
        }
    }
}

/// Derives the storage key for `file`.
///
/// Without `file_to_key` the key is the encoded file name. A `file_to_key`
/// that yields nothing falls back to [`EMPTY_KEY`]. Whitespace in the result
/// is replaced with `_`.
pub fn calc_key(file: &FileInfo, file_to_key: Option<&FileToKey>) -> String {
    let key = match file_to_key {
        None => urlencoding::encode(&file.name).into_owned(),
        Some(file_to_key) => {
            let key = match file_to_key {
                FileToKey::Fixed(key) => key.clone(),
                FileToKey::Callback(callback) => callback(file),
                FileToKey::Json(value) => urlencoding::encode(&value.to_string()).into_owned(),
            };
            if key.is_empty() {
                EMPTY_KEY.to_string()
            } else {
                key
            }
        }
    };

    key.chars()
        .map(|c| if c.is_whitespace() { '_' } else { c })
        .collect()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn photo() -> FileInfo {
        FileInfo {
            name: "holiday photo.png".to_string(),
            size: 2048,
            content_type: "image/png".to_string(),
        }
    }

    #[test]
    fn test_default_key_is_encoded_name() {
        assert_eq!(calc_key(&photo(), None), "holiday%20photo.png");
    }

    #[test]
    fn test_fixed_key_replaces_whitespace() {
        let file_to_key = FileToKey::Fixed("avatars/my avatar".to_string());
        assert_eq!(calc_key(&photo(), Some(&file_to_key)), "avatars/my_avatar");
    }

    #[test]
    fn test_callback_key_sees_file_info() {
        let file_to_key = FileToKey::Callback(Box::new(|file: &FileInfo| {
            format!("{}-{} {}", file.size, file.content_type, file.name)
        }));
        assert_eq!(
            calc_key(&photo(), Some(&file_to_key)),
            "2048-image/png_holiday_photo.png"
        );
    }

    #[test]
    fn test_json_key_is_encoded() {
        let file_to_key = FileToKey::Json(json!({ "a": 1 }));
        assert_eq!(calc_key(&photo(), Some(&file_to_key)), "%7B%22a%22%3A1%7D");
    }

    #[test]
    fn test_empty_result_falls_back() {
        let fixed = FileToKey::Fixed(String::new());
        let callback = FileToKey::Callback(Box::new(|_: &FileInfo| String::new()));
        assert_eq!(calc_key(&photo(), Some(&fixed)), EMPTY_KEY);
        assert_eq!(calc_key(&photo(), Some(&callback)), EMPTY_KEY);
    }

    #[test]
    fn test_empty_name_without_file_to_key_stays_empty() {
        assert_eq!(calc_key(&FileInfo::default(), None), "");
    }
}
