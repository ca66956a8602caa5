//! Translation lookup used for field labels.

use std::collections::HashMap;

/// Keys of the strings the auth fields display.
pub mod keys {
    pub const ADDRESS_LABEL: &str = "ADDRESS_LABEL";
    pub const ADDRESS_PLACEHOLDER: &str = "ADDRESS_PLACEHOLDER";
    pub const NICKNAME_LABEL: &str = "NICKNAME_LABEL";
    pub const NICKNAME_PLACEHOLDER: &str = "NICKNAME_PLACEHOLDER";
    pub const BIRTHDATE_LABEL: &str = "BIRTHDATE_LABEL";
    pub const BIRTHDATE_PLACEHOLDER: &str = "BIRTHDATE_PLACEHOLDER";
    pub const PHONE_LABEL: &str = "PHONE_LABEL";
    pub const PHONE_PLACEHOLDER: &str = "PHONE_PLACEHOLDER";
    pub const EMAIL_LABEL: &str = "EMAIL_LABEL";
    pub const EMAIL_PLACEHOLDER: &str = "EMAIL_PLACEHOLDER";
    pub const PICTURE_LABEL: &str = "PICTURE_LABEL";
    pub const PICTURE_PLACEHOLDER: &str = "PICTURE_PLACEHOLDER";
    pub const FAMILY_NAME_LABEL: &str = "FAMILY_NAME_LABEL";
    pub const FAMILY_NAME_PLACEHOLDER: &str = "FAMILY_NAME_PLACEHOLDER";
    pub const PREFERRED_USERNAME_LABEL: &str = "PREFERRED_USERNAME_LABEL";
    pub const PREFERRED_USERNAME_PLACEHOLDER: &str = "PREFERRED_USERNAME_PLACEHOLDER";
    pub const GENDER_LABEL: &str = "GENDER_LABEL";
    pub const GENDER_PLACEHOLDER: &str = "GENDER_PLACEHOLDER";
    pub const PROFILE_LABEL: &str = "PROFILE_LABEL";
    pub const PROFILE_PLACEHOLDER: &str = "PROFILE_PLACEHOLDER";
    pub const GIVEN_NAME_LABEL: &str = "GIVEN_NAME_LABEL";
    pub const GIVEN_NAME_PLACEHOLDER: &str = "GIVEN_NAME_PLACEHOLDER";
    pub const ZONEINFO_LABEL: &str = "ZONEINFO_LABEL";
    pub const ZONEINFO_PLACEHOLDER: &str = "ZONEINFO_PLACEHOLDER";
    pub const LOCALE_LABEL: &str = "LOCALE_LABEL";
    pub const LOCALE_PLACEHOLDER: &str = "LOCALE_PLACEHOLDER";
    pub const UPDATED_AT_LABEL: &str = "UPDATED_AT_LABEL";
    pub const UPDATED_AT_PLACEHOLDER: &str = "UPDATED_AT_PLACEHOLDER";
    pub const MIDDLE_NAME_LABEL: &str = "MIDDLE_NAME_LABEL";
    pub const MIDDLE_NAME_PLACEHOLDER: &str = "MIDDLE_NAME_PLACEHOLDER";
    pub const WEBSITE_LABEL: &str = "WEBSITE_LABEL";
    pub const WEBSITE_PLACEHOLDER: &str = "WEBSITE_PLACEHOLDER";
    pub const NAME_LABEL: &str = "NAME_LABEL";
    pub const NAME_PLACEHOLDER: &str = "NAME_PLACEHOLDER";
}

const ENGLISH: [(&str, &str); 34] = [
    (keys::ADDRESS_LABEL, "Address"),
    (keys::ADDRESS_PLACEHOLDER, "Enter your address"),
    (keys::NICKNAME_LABEL, "Nickname"),
    (keys::NICKNAME_PLACEHOLDER, "Enter your nickname"),
    (keys::BIRTHDATE_LABEL, "Birthday"),
    (keys::BIRTHDATE_PLACEHOLDER, "Enter your birthday"),
    (keys::PHONE_LABEL, "Phone Number *"),
    (keys::PHONE_PLACEHOLDER, "(555) 555-1212"),
    (keys::EMAIL_LABEL, "Email Address *"),
    (keys::EMAIL_PLACEHOLDER, "Enter your email address"),
    (keys::PICTURE_LABEL, "Picture"),
    (keys::PICTURE_PLACEHOLDER, "Link to a picture"),
    (keys::FAMILY_NAME_LABEL, "Family Name"),
    (keys::FAMILY_NAME_PLACEHOLDER, "Enter your family name"),
    (keys::PREFERRED_USERNAME_LABEL, "Preferred Username"),
    (keys::PREFERRED_USERNAME_PLACEHOLDER, "Enter your preferred username"),
    (keys::GENDER_LABEL, "Gender"),
    (keys::GENDER_PLACEHOLDER, "Enter your gender"),
    (keys::PROFILE_LABEL, "Profile"),
    (keys::PROFILE_PLACEHOLDER, "Add your profile"),
    (keys::GIVEN_NAME_LABEL, "First Name"),
    (keys::GIVEN_NAME_PLACEHOLDER, "Enter your first name"),
    (keys::ZONEINFO_LABEL, "Time zone"),
    (keys::ZONEINFO_PLACEHOLDER, "Enter your time zone"),
    (keys::LOCALE_LABEL, "Locale"),
    (keys::LOCALE_PLACEHOLDER, "Enter your locale"),
    (keys::UPDATED_AT_LABEL, "Updated At"),
    (
        keys::UPDATED_AT_PLACEHOLDER,
        "Enter the time the information was last updated",
    ),
    (keys::MIDDLE_NAME_LABEL, "Middle Name"),
    (keys::MIDDLE_NAME_PLACEHOLDER, "Enter your middle name"),
    (keys::WEBSITE_LABEL, "Website"),
    (keys::WEBSITE_PLACEHOLDER, "Enter your website"),
    (keys::NAME_LABEL, "Full Name"),
    (keys::NAME_PLACEHOLDER, "Enter your full name"),
];

/// Resolves a translation key to display text.
pub trait Translator {
    fn get(&self, key: &str) -> String;
}

/// English strings, with optional per-key overrides.
///
/// Keys without a translation resolve to the key itself.
#[derive(Clone, Debug, Default)]
pub struct DefaultTranslations {
    overrides: HashMap<String, String>,
}

impl DefaultTranslations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_override(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.overrides.insert(key.into(), value.into());
        self
    }
}

impl Translator for DefaultTranslations {
    fn get(&self, key: &str) -> String {
        if let Some(value) = self.overrides.get(key) {
            return value.clone();
        }
        ENGLISH
            .iter()
            .find(|(k, _)| *k == key)
            .map_or_else(|| key.to_string(), |(_, v)| (*v).to_string())
    }
}
