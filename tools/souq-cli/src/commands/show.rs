//! Product details.

use anyhow::{Context as _, Result};
use serde::Serialize;
use souq_commerce::catalog::{options_for_category, Catalog, Product, ProductOptions, SHOWCASE_LIMIT};
use souq_commerce::i18n::t;

use super::summary::{directional, price, print_products};
use super::ShowArgs;
use crate::context::Context;

#[derive(Serialize)]
struct ProductDetails<'a> {
    product: &'a Product,
    options: ProductOptions,
    related: Vec<&'a str>,
}

/// Run the show command.
pub fn run(args: ShowArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog()?;
    let product = catalog
        .find_by_slug(&args.slug)
        .with_context(|| format!("Product not found: {}", args.slug))?;
    let options = options_for_category(&product.category);
    let related = catalog.related(product, SHOWCASE_LIMIT);

    if ctx.output.is_json() {
        ctx.output.json(&ProductDetails {
            product,
            options,
            related: related.iter().map(|p| p.slug.as_str()).collect(),
        });
        return Ok(());
    }

    let lang = ctx.lang;
    ctx.output.header(product.name_in(lang));
    ctx.output.kv("ID", &product.id.to_string());
    ctx.output.kv("Category", t(lang, &format!("products.{}", product.category)));
    ctx.output
        .kv(t(lang, "product.price"), &price(product.price, ctx.currency(), lang));
    if product.is_new {
        ctx.output.kv(t(lang, "products.new"), "✓");
    }
    if product.is_featured {
        ctx.output.kv(t(lang, "products.featured"), "✓");
    }
    ctx.output.info("");
    ctx.output.line(&directional(product.description.get(lang), lang));

    let features = product.features.get(lang);
    if !features.is_empty() {
        ctx.output.header(t(lang, "product.features"));
        for feature in features {
            ctx.output.list_item(&directional(feature, lang));
        }
    }

    for axis in options.axes() {
        ctx.output.header(t(lang, axis.label_key()));
        for choice in options.choices(axis) {
            ctx.output
                .list_item(&format!("{} ({})", choice.label.get(lang), choice.value));
        }
    }

    if !related.is_empty() {
        ctx.output.header(t(lang, "product.related"));
        print_products(&ctx.output, &related, ctx.currency(), lang);
    }

    Ok(())
}
