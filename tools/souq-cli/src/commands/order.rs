//! Build a cart from the command line and hand it to WhatsApp.

use anyhow::{bail, Context as _, Result};
use souq_commerce::catalog::{Catalog, VariantAxis};
use souq_commerce::cart::VariantProperties;

use super::summary::{print_cart, CartSummary};
use super::OrderArgs;
use crate::context::Context;

/// One `--add` argument: a slug plus raw option inputs.
#[derive(Debug, PartialEq)]
pub struct ItemSpec {
    pub slug: String,
    pub color: Option<String>,
    pub storage: Option<String>,
    pub size: Option<String>,
}

impl ItemSpec {
    /// Parse `slug` or `slug:axis=value,axis=value`.
    pub fn parse(input: &str) -> Result<Self> {
        let (slug, rest) = match input.split_once(':') {
            Some((slug, rest)) => (slug.trim(), Some(rest)),
            None => (input.trim(), None),
        };
        if slug.is_empty() {
            bail!("Missing product slug in '{}'", input);
        }

        let mut parsed = ItemSpec {
            slug: slug.to_string(),
            color: None,
            storage: None,
            size: None,
        };

        for pair in rest.unwrap_or_default().split(',').filter(|p| !p.trim().is_empty()) {
            let (axis, value) = pair
                .split_once('=')
                .with_context(|| format!("Expected axis=value, got '{}'", pair))?;
            let Some(axis) = VariantAxis::from_str(axis.trim()) else {
                bail!("Unknown option '{}'. Available: color, storage, size", axis.trim());
            };
            let value = Some(value.trim().to_string());
            match axis {
                VariantAxis::Color => parsed.color = value,
                VariantAxis::Storage => parsed.storage = value,
                VariantAxis::Size => parsed.size = value,
            }
        }

        Ok(parsed)
    }
}

/// Run the order command.
pub fn run(args: OrderArgs, ctx: &Context) -> Result<()> {
    let mut store = ctx.storefront(args.open)?;

    for raw in &args.items {
        let parsed = ItemSpec::parse(raw)?;
        let properties: VariantProperties = store.options(&parsed.slug)?.selection(
            parsed.color.as_deref(),
            parsed.storage.as_deref(),
            parsed.size.as_deref(),
        )?;
        ctx.output.debug(&format!("Adding {} {:?}", parsed.slug, properties));
        store.add_to_cart(&parsed.slug, properties)?;
    }

    let currency = ctx.currency();
    if !ctx.output.is_json() {
        print_cart(
            &ctx.output,
            store.cart().state(),
            |item| {
                store
                    .catalog()
                    .find_by_id(item.product_id)
                    .map(|p| p.category.clone())
            },
            currency,
            ctx.lang,
        );
        ctx.output.info("");
    }

    let url = store.checkout()?;

    if ctx.output.is_json() {
        let mut summary = CartSummary::new(store.cart().state(), currency);
        summary.url = Some(url);
        ctx.output.json(&summary);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_slug() {
        let parsed = ItemSpec::parse("airpods-pro-2").unwrap();
        assert_eq!(parsed.slug, "airpods-pro-2");
        assert_eq!(parsed.color, None);
    }

    #[test]
    fn test_parse_with_options() {
        let parsed = ItemSpec::parse("iphone-15:color=black, storage=256GB").unwrap();
        assert_eq!(parsed.slug, "iphone-15");
        assert_eq!(parsed.color.as_deref(), Some("black"));
        assert_eq!(parsed.storage.as_deref(), Some("256GB"));
        assert_eq!(parsed.size, None);
    }

    #[test]
    fn test_parse_errors() {
        assert!(ItemSpec::parse(":color=black").is_err());
        assert!(ItemSpec::parse("iphone-15:finish=black").is_err());
        assert!(ItemSpec::parse("iphone-15:black").is_err());
    }
}
