//! Ask about a single product over WhatsApp.

use anyhow::Result;

use super::InquireArgs;
use crate::context::Context;

/// Run the inquire command.
pub fn run(args: InquireArgs, ctx: &Context) -> Result<()> {
    let store = ctx.storefront(args.open)?;
    let properties = store.options(&args.slug)?.selection(
        args.variant.color.as_deref(),
        args.variant.storage.as_deref(),
        args.variant.size.as_deref(),
    )?;

    let url = store.inquire(&args.slug, &properties)?;

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "slug": args.slug,
            "properties": properties,
            "url": url,
        }));
    }

    Ok(())
}
