//! Labels for the OpenID Connect standard claims a user pool can require.

use std::collections::BTreeMap;
use std::fmt;

use serde::Deserialize;
use serde::Serialize;

use crate::i18n::Translator;
use crate::i18n::keys;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequiredAttribute {
    Address,
    Nickname,
    Birthdate,
    PhoneNumber,
    Email,
    Picture,
    FamilyName,
    PreferredUsername,
    Gender,
    Profile,
    GivenName,
    Zoneinfo,
    Locale,
    UpdatedAt,
    MiddleName,
    Website,
    Name,
}

impl RequiredAttribute {
    pub const ALL: [RequiredAttribute; 17] = [
        RequiredAttribute::Address,
        RequiredAttribute::Nickname,
        RequiredAttribute::Birthdate,
        RequiredAttribute::PhoneNumber,
        RequiredAttribute::Email,
        RequiredAttribute::Picture,
        RequiredAttribute::FamilyName,
        RequiredAttribute::PreferredUsername,
        RequiredAttribute::Gender,
        RequiredAttribute::Profile,
        RequiredAttribute::GivenName,
        RequiredAttribute::Zoneinfo,
        RequiredAttribute::Locale,
        RequiredAttribute::UpdatedAt,
        RequiredAttribute::MiddleName,
        RequiredAttribute::Website,
        RequiredAttribute::Name,
    ];

    /// Claim name as it appears in tokens and user pool settings.
    pub fn claim(&self) -> &'static str {
        match self {
            RequiredAttribute::Address => "address",
            RequiredAttribute::Nickname => "nickname",
            RequiredAttribute::Birthdate => "birthdate",
            RequiredAttribute::PhoneNumber => "phone_number",
            RequiredAttribute::Email => "email",
            RequiredAttribute::Picture => "picture",
            RequiredAttribute::FamilyName => "family_name",
            RequiredAttribute::PreferredUsername => "preferred_username",
            RequiredAttribute::Gender => "gender",
            RequiredAttribute::Profile => "profile",
            RequiredAttribute::GivenName => "given_name",
            RequiredAttribute::Zoneinfo => "zoneinfo",
            RequiredAttribute::Locale => "locale",
            RequiredAttribute::UpdatedAt => "updated_at",
            RequiredAttribute::MiddleName => "middle_name",
            RequiredAttribute::Website => "website",
            RequiredAttribute::Name => "name",
        }
    }

    /// Translation keys for the label and the placeholder.
    fn translation_keys(&self) -> (&'static str, &'static str) {
        match self {
            RequiredAttribute::Address => (keys::ADDRESS_LABEL, keys::ADDRESS_PLACEHOLDER),
            RequiredAttribute::Nickname => (keys::NICKNAME_LABEL, keys::NICKNAME_PLACEHOLDER),
            RequiredAttribute::Birthdate => (keys::BIRTHDATE_LABEL, keys::BIRTHDATE_PLACEHOLDER),
            RequiredAttribute::PhoneNumber => (keys::PHONE_LABEL, keys::PHONE_PLACEHOLDER),
            RequiredAttribute::Email => (keys::EMAIL_LABEL, keys::EMAIL_PLACEHOLDER),
            RequiredAttribute::Picture => (keys::PICTURE_LABEL, keys::PICTURE_PLACEHOLDER),
            RequiredAttribute::FamilyName => {
                (keys::FAMILY_NAME_LABEL, keys::FAMILY_NAME_PLACEHOLDER)
            }
            RequiredAttribute::PreferredUsername => (
                keys::PREFERRED_USERNAME_LABEL,
                keys::PREFERRED_USERNAME_PLACEHOLDER,
            ),
            RequiredAttribute::Gender => (keys::GENDER_LABEL, keys::GENDER_PLACEHOLDER),
            RequiredAttribute::Profile => (keys::PROFILE_LABEL, keys::PROFILE_PLACEHOLDER),
            RequiredAttribute::GivenName => (keys::GIVEN_NAME_LABEL, keys::GIVEN_NAME_PLACEHOLDER),
            RequiredAttribute::Zoneinfo => (keys::ZONEINFO_LABEL, keys::ZONEINFO_PLACEHOLDER),
            RequiredAttribute::Locale => (keys::LOCALE_LABEL, keys::LOCALE_PLACEHOLDER),
            RequiredAttribute::UpdatedAt => (keys::UPDATED_AT_LABEL, keys::UPDATED_AT_PLACEHOLDER),
            RequiredAttribute::MiddleName => {
                (keys::MIDDLE_NAME_LABEL, keys::MIDDLE_NAME_PLACEHOLDER)
            }
            RequiredAttribute::Website => (keys::WEBSITE_LABEL, keys::WEBSITE_PLACEHOLDER),
            RequiredAttribute::Name => (keys::NAME_LABEL, keys::NAME_PLACEHOLDER),
        }
    }

    pub fn labels(&self, translator: &dyn Translator) -> FieldLabels {
        let (label, placeholder) = self.translation_keys();
        FieldLabels {
            label: translator.get(label),
            placeholder: translator.get(placeholder),
        }
    }
}

impl fmt::Display for RequiredAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.claim())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldLabels {
    pub label: String,
    pub placeholder: String,
}

/// Builds the label table for every standard claim.
pub fn required_attributes_map(
    translator: &dyn Translator,
) -> BTreeMap<RequiredAttribute, FieldLabels> {
    RequiredAttribute::ALL
        .into_iter()
        .map(|attribute| (attribute, attribute.labels(translator)))
        .collect()
}
