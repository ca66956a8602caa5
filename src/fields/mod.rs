//! Helpers for the auth form fields.

pub mod phone;
pub mod required_attributes;
pub mod username_alias;

pub use phone::PhoneNumber;
pub use phone::compose_phone_number_input;
pub use required_attributes::FieldLabels;
pub use required_attributes::RequiredAttribute;
pub use required_attributes::required_attributes_map;
pub use username_alias::UsernameAlias;
pub use username_alias::check_username_alias;
