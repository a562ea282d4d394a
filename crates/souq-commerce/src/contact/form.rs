//! Contact form validation and message composition.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use crate::i18n::{t, Lang};

pub const NAME_MAX: usize = 100;
pub const COMPANY_MAX: usize = 100;
pub const EMAIL_MAX: usize = 255;
pub const PHONE_MAX: usize = 20;
pub const MESSAGE_MAX: usize = 1000;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+'\-]+@[A-Za-z0-9](?:[A-Za-z0-9\-]*[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9\-]*[A-Za-z0-9])?)*\.[A-Za-z]{2,}$")
        .expect("email pattern is valid")
});

/// What the visitor is asking about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum InquiryType {
    Bulk,
    Corporate,
    #[default]
    General,
}

impl InquiryType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InquiryType::Bulk => "bulk",
            InquiryType::Corporate => "corporate",
            InquiryType::General => "general",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "bulk" => Some(InquiryType::Bulk),
            "corporate" => Some(InquiryType::Corporate),
            "general" => Some(InquiryType::General),
            _ => None,
        }
    }

    /// Localized label.
    pub fn label(&self, lang: Lang) -> &'static str {
        let key = match self {
            InquiryType::Bulk => "contact.inquiry_types.bulk",
            InquiryType::Corporate => "contact.inquiry_types.corporate",
            InquiryType::General => "contact.inquiry_types.general",
        };
        crate::i18n::lookup(lang, key).unwrap_or(key)
    }
}

/// Form fields that can fail validation, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactField {
    Name,
    Company,
    Email,
    Phone,
    Message,
}

impl ContactField {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Company => "company",
            ContactField::Email => "email",
            ContactField::Phone => "phone",
            ContactField::Message => "message",
        }
    }
}

/// Why a field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldError {
    Required,
    InvalidEmail,
    TooLong { max: usize },
}

impl FieldError {
    pub fn message_key(&self) -> &'static str {
        match self {
            FieldError::Required => "contact.errors.required",
            FieldError::InvalidEmail => "contact.errors.invalid_email",
            FieldError::TooLong { .. } => "contact.errors.too_long",
        }
    }

    /// Localized message for display next to the field.
    pub fn message(&self, lang: Lang) -> &'static str {
        crate::i18n::lookup(lang, self.message_key()).unwrap_or(self.message_key())
    }
}

/// Field-level validation failures.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContactErrors(BTreeMap<ContactField, FieldError>);

impl ContactErrors {
    pub fn get(&self, field: ContactField) -> Option<FieldError> {
        self.0.get(&field).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ContactField, FieldError)> + '_ {
        self.0.iter().map(|(field, error)| (*field, *error))
    }

    fn insert(&mut self, field: ContactField, error: FieldError) {
        self.0.entry(field).or_insert(error);
    }
}

impl fmt::Display for ContactErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .iter()
            .map(|(field, error)| format!("{}: {}", field.as_str(), error.message(Lang::En)))
            .collect();
        f.write_str(&parts.join(", "))
    }
}

/// The contact form as submitted.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    #[serde(default)]
    pub company: Option<String>,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub inquiry_type: InquiryType,
    pub message: String,
}

impl ContactForm {
    /// Trim every field and check presence, email shape and length bounds.
    ///
    /// Returns the trimmed form on success. A blank company is treated as
    /// absent.
    pub fn validate(&self) -> Result<ContactForm, ContactErrors> {
        let mut errors = ContactErrors::default();

        let name = self.name.trim();
        let company = self
            .company
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty());
        let email = self.email.trim();
        let phone = self.phone.trim();
        let message = self.message.trim();

        require(&mut errors, ContactField::Name, name, NAME_MAX);
        if let Some(company) = company {
            bound(&mut errors, ContactField::Company, company, COMPANY_MAX);
        }
        if !EMAIL_RE.is_match(email) {
            errors.insert(ContactField::Email, FieldError::InvalidEmail);
        }
        bound(&mut errors, ContactField::Email, email, EMAIL_MAX);
        require(&mut errors, ContactField::Phone, phone, PHONE_MAX);
        require(&mut errors, ContactField::Message, message, MESSAGE_MAX);

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(ContactForm {
            name: name.to_string(),
            company: company.map(str::to_string),
            email: email.to_string(),
            phone: phone.to_string(),
            inquiry_type: self.inquiry_type,
            message: message.to_string(),
        })
    }
}

fn require(errors: &mut ContactErrors, field: ContactField, value: &str, max: usize) {
    if value.is_empty() {
        errors.insert(field, FieldError::Required);
    } else {
        bound(errors, field, value, max);
    }
}

fn bound(errors: &mut ContactErrors, field: ContactField, value: &str, max: usize) {
    if value.chars().count() > max {
        errors.insert(field, FieldError::TooLong { max });
    }
}

/// Compose the WhatsApp message for a validated contact form.
pub fn compose_contact_message(form: &ContactForm, lang: Lang) -> String {
    let mut lines = vec![
        t(lang, "contact.whatsapp_intro").to_string(),
        String::new(),
        format!("{}: {}", t(lang, "contact.form.name"), form.name),
    ];
    if let Some(company) = &form.company {
        lines.push(format!("{}: {}", t(lang, "contact.form.company"), company));
    }
    lines.push(format!("{}: {}", t(lang, "contact.form.email"), form.email));
    lines.push(format!("{}: {}", t(lang, "contact.form.phone"), form.phone));
    lines.push(format!(
        "{}: {}",
        t(lang, "contact.form.inquiry_type"),
        form.inquiry_type.label(lang)
    ));
    lines.push(String::new());
    lines.push(format!("{}:", t(lang, "contact.form.message")));
    lines.push(form.message.clone());
    lines.join("\n")
}
