//! Contact form module.

mod form;

pub use form::{
    compose_contact_message, ContactErrors, ContactField, ContactForm, FieldError, InquiryType,
    COMPANY_MAX, EMAIL_MAX, MESSAGE_MAX, NAME_MAX, PHONE_MAX,
};
