//! Send a contact-form inquiry over WhatsApp.

use anyhow::{bail, Result};
use souq_commerce::contact::{ContactForm, InquiryType};
use souq_commerce::CommerceError;

use super::ContactArgs;
use crate::context::Context;

/// Run the contact command.
pub fn run(args: ContactArgs, ctx: &Context) -> Result<()> {
    let Some(inquiry_type) = InquiryType::from_str(&args.inquiry_type) else {
        bail!(
            "Unknown inquiry type '{}'. Available: bulk, corporate, general",
            args.inquiry_type
        );
    };

    let form = ContactForm {
        name: args.name,
        company: args.company,
        email: args.email,
        phone: args.phone,
        inquiry_type,
        message: args.message,
    };

    let store = ctx.storefront(args.open)?;
    match store.submit_contact(&form) {
        Ok(url) => {
            if ctx.output.is_json() {
                ctx.output.json(&serde_json::json!({ "url": url }));
            }
            Ok(())
        }
        Err(CommerceError::InvalidContact(errors)) => {
            if ctx.output.is_json() {
                ctx.output.json(&serde_json::json!({ "errors": errors }));
            } else {
                for (field, error) in errors.iter() {
                    ctx.output
                        .warn(&format!("{}: {}", field.as_str(), error.message(ctx.lang)));
                }
            }
            bail!("Contact form has {} invalid field(s)", errors.len())
        }
        Err(e) => Err(e.into()),
    }
}
