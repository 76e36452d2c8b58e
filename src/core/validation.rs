use crate::core::field::Field;
use crate::core::form_data::FormData;
use crate::input::validators::{self, Validator};
use indexmap::IndexMap;
use serde::Serialize;

pub const FULL_NAME_REQUIRED: &str = "Full Name is required";
pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Please enter a valid email address";
pub const AVATAR_URL_REQUIRED: &str = "Avatar URL is required";
pub const AVATAR_URL_INVALID: &str = "Please enter a valid image URL (jpg, jpeg, png, or gif)";

/// Field-keyed validation messages. An absent key means the field passed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ErrorMap {
    entries: IndexMap<Field, String>,
}

impl ErrorMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.entries.insert(field, message.into());
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.entries.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.entries.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.entries.iter().map(|(field, msg)| (*field, msg.as_str()))
    }
}

impl FromIterator<(Field, String)> for ErrorMap {
    fn from_iter<T: IntoIterator<Item = (Field, String)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Ordered validators for a single field; the first failure wins.
pub struct FieldRules {
    field: Field,
    validators: Vec<Validator>,
}

impl FieldRules {
    pub fn new(field: Field) -> Self {
        Self {
            field,
            validators: Vec::new(),
        }
    }

    pub fn with_validator(mut self, validator: Validator) -> Self {
        self.validators.push(validator);
        self
    }

    pub fn field(&self) -> Field {
        self.field
    }

    pub fn check(&self, value: &str) -> Result<(), String> {
        for validator in &self.validators {
            validator(value)?;
        }
        Ok(())
    }
}

pub struct FormValidator {
    rules: Vec<FieldRules>,
}

impl FormValidator {
    pub fn new(rules: Vec<FieldRules>) -> Self {
        Self { rules }
    }

    /// The ticket form's rule set.
    pub fn standard() -> Self {
        Self::new(vec![
            FieldRules::new(Field::FullName)
                .with_validator(validators::required(FULL_NAME_REQUIRED)),
            FieldRules::new(Field::Email)
                .with_validator(validators::required(EMAIL_REQUIRED))
                .with_validator(validators::email(EMAIL_INVALID)),
            FieldRules::new(Field::AvatarUrl)
                .with_validator(validators::required(AVATAR_URL_REQUIRED))
                .with_validator(validators::image_url(AVATAR_URL_INVALID)),
        ])
    }

    /// Every field is checked; no short-circuit across fields.
    pub fn validate(&self, form: &FormData) -> ErrorMap {
        self.rules
            .iter()
            .filter_map(|rules| {
                rules
                    .check(form.get(rules.field()))
                    .err()
                    .map(|err| (rules.field(), err))
            })
            .collect()
    }
}

impl Default for FormValidator {
    fn default() -> Self {
        Self::standard()
    }
}

pub fn validate(form: &FormData) -> ErrorMap {
    FormValidator::standard().validate(form)
}
