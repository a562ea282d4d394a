//! List and search the catalog.

use anyhow::{bail, Result};
use souq_commerce::catalog::Catalog;
use souq_commerce::i18n::t;
use souq_commerce::search::{Filter, SearchQuery, SortOption};

use super::summary::print_products;
use super::ProductsArgs;
use crate::context::Context;

/// Run the products command.
pub fn run(args: ProductsArgs, ctx: &Context) -> Result<()> {
    let Some(sort) = SortOption::from_str(&args.sort) else {
        bail!(
            "Unknown sort '{}'. Available: position, price-asc, price-desc, name, newest",
            args.sort
        );
    };

    let mut query = SearchQuery::new()
        .with_category(args.category.as_deref())
        .with_sort(sort)
        .with_pagination(args.page, args.per_page);
    if let Some(ref text) = args.search {
        query = query.with_query(text);
    }
    if args.featured {
        query = query.with_filter(Filter::Featured);
    }
    if args.new {
        query = query.with_filter(Filter::New);
    }
    if args.min_price.is_some() || args.max_price.is_some() {
        query = query.with_filter(Filter::price_range(args.min_price, args.max_price));
    }

    let catalog = ctx.catalog()?;
    let results = query.execute(catalog.products());
    ctx.output.debug(&format!("{} matching products", results.pagination.total));

    if ctx.output.is_json() {
        ctx.output.json(&results);
        return Ok(());
    }

    let title = match args.category.as_deref() {
        Some(category) if category != souq_commerce::search::ALL_CATEGORIES => {
            t(ctx.lang, &format!("products.{}", category)).to_string()
        }
        _ => t(ctx.lang, "products.all").to_string(),
    };
    ctx.output.header(&title);

    if results.is_empty() {
        ctx.output.info(t(ctx.lang, "products.no_results"));
        return Ok(());
    }

    print_products(&ctx.output, &results.items, ctx.currency(), ctx.lang);

    let page = &results.pagination;
    ctx.output.info("");
    ctx.output.info(&format!(
        "Showing {}-{} of {} (page {}/{})",
        page.start_item(),
        page.end_item(),
        page.total,
        page.page,
        page.total_pages
    ));

    Ok(())
}
