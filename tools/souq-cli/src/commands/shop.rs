//! Interactive shopping session.

use anyhow::{bail, Result};
use dialoguer::{Confirm, Input, Select};
use souq_commerce::catalog::{Catalog, StaticCatalog, VariantAxis};
use souq_commerce::i18n::t;
use souq_commerce::search::{SearchQuery, ALL_CATEGORIES};
use souq_commerce::{CommerceError, Lang, Storefront};

use super::summary::{describe_properties, print_cart, print_products};
use super::ShopArgs;
use crate::context::Context;

/// Menu entries as translation keys, in menu order.
const ACTIONS: [&str; 10] = [
    "shop.browse",
    "shop.search",
    "shop.add",
    "shop.view_cart",
    "shop.change_quantity",
    "shop.remove",
    "cart.clear",
    "cart.order_via_whatsapp",
    "shop.switch_language",
    "shop.quit",
];

fn menu(lang: Lang) -> Vec<&'static str> {
    ACTIONS.iter().map(|&key| t(lang, key)).collect()
}

/// Run the shop command.
pub fn run(args: ShopArgs, ctx: &Context) -> Result<()> {
    if ctx.output.is_json() || !ctx.output.is_interactive() {
        bail!("The shop command needs an interactive terminal");
    }

    let mut store = ctx.storefront(args.open)?;
    ctx.output.header("Souq");
    print_products(&ctx.output, &store.featured(), ctx.currency(), store.lang());

    loop {
        let lang = store.lang();
        let action = Select::new()
            .with_prompt(t(lang, "shop.prompt"))
            .items(&menu(lang))
            .default(0)
            .interact()?;

        match action {
            0 => browse(&store, ctx)?,
            1 => search(&store, ctx)?,
            2 => add(&mut store, ctx)?,
            3 => show_cart(&store, ctx),
            4 => change_quantity(&mut store, ctx)?,
            5 => remove(&mut store, ctx)?,
            6 => {
                if Confirm::new()
                    .with_prompt(t(store.lang(), "cart.clear"))
                    .default(false)
                    .interact()?
                {
                    store.clear_cart();
                }
            }
            7 => match store.checkout() {
                Ok(_) => {}
                Err(CommerceError::EmptyOrderMessage) => {
                    ctx.output.warn(t(store.lang(), "cart.empty"));
                }
                Err(e) => return Err(e.into()),
            },
            8 => {
                let next = match store.lang() {
                    Lang::En => Lang::Ar,
                    Lang::Ar => Lang::En,
                };
                store.set_lang(next);
                ctx.output
                    .info(&format!("{}: {}", t(next, "shop.language"), next));
            }
            _ => break,
        }
    }

    Ok(())
}

fn browse(store: &Storefront<StaticCatalog>, ctx: &Context) -> Result<()> {
    let lang = store.lang();
    let mut keys = vec![ALL_CATEGORIES];
    keys.extend(store.catalog().categories());
    let labels: Vec<String> = keys
        .iter()
        .map(|key| {
            if *key == ALL_CATEGORIES {
                t(lang, "products.all").to_string()
            } else {
                t(lang, &format!("products.{}", key)).to_string()
            }
        })
        .collect();

    let picked = Select::new()
        .with_prompt(t(lang, "shop.category"))
        .items(&labels)
        .default(0)
        .interact()?;

    let query = SearchQuery::new()
        .with_category(Some(keys[picked]))
        .with_pagination(1, 100);
    let results = store.search(&query);
    ctx.output.header(&labels[picked]);
    print_products(&ctx.output, &results.items, ctx.currency(), lang);
    Ok(())
}

fn search(store: &Storefront<StaticCatalog>, ctx: &Context) -> Result<()> {
    let text: String = Input::new()
        .with_prompt(t(store.lang(), "shop.search"))
        .interact_text()?;
    let results = store.search(&SearchQuery::new().with_query(&text).with_pagination(1, 100));
    if results.is_empty() {
        ctx.output.info(t(store.lang(), "products.no_results"));
    } else {
        print_products(&ctx.output, &results.items, ctx.currency(), store.lang());
    }
    Ok(())
}

fn add(store: &mut Storefront<StaticCatalog>, ctx: &Context) -> Result<()> {
    let lang = store.lang();
    let products = store.catalog().products();
    let names: Vec<&str> = products.iter().map(|p| p.name_in(lang)).collect();
    let picked = Select::new()
        .with_prompt(t(lang, "shop.product"))
        .items(&names)
        .default(0)
        .interact()?;
    let slug = products[picked].slug.clone();

    let options = store.options(&slug)?;
    let mut chosen: [Option<String>; 3] = Default::default();
    for axis in options.axes() {
        let choices = options.choices(axis);
        let labels: Vec<&str> = choices.iter().map(|c| c.label.get(lang).as_str()).collect();
        let index = Select::new()
            .with_prompt(t(lang, axis.label_key()))
            .items(&labels)
            .default(0)
            .interact()?;
        let slot = match axis {
            VariantAxis::Color => 0,
            VariantAxis::Storage => 1,
            VariantAxis::Size => 2,
        };
        chosen[slot] = Some(choices[index].value.clone());
    }

    let properties = options.selection(
        chosen[0].as_deref(),
        chosen[1].as_deref(),
        chosen[2].as_deref(),
    )?;
    ctx.output.debug(&format!("Adding {} {:?}", slug, properties));
    store.add_to_cart(&slug, properties)?;
    Ok(())
}

fn show_cart(store: &Storefront<StaticCatalog>, ctx: &Context) {
    print_cart(
        &ctx.output,
        store.cart().state(),
        |item| {
            store
                .catalog()
                .find_by_id(item.product_id)
                .map(|p| p.category.clone())
        },
        ctx.currency(),
        store.lang(),
    );
}

/// Let the shopper pick a cart line; `None` when the cart is empty.
fn pick_line(store: &Storefront<StaticCatalog>, ctx: &Context, prompt: &str) -> Result<Option<usize>> {
    let lang = store.lang();
    let items = store.cart().items();
    if items.is_empty() {
        ctx.output.info(t(lang, "cart.empty"));
        return Ok(None);
    }

    let labels: Vec<String> = items
        .iter()
        .map(|item| {
            let category = store
                .catalog()
                .find_by_id(item.product_id)
                .map(|p| p.category.as_str());
            let props = describe_properties(item, category, lang);
            if props.is_empty() {
                format!("{} x{}", item.name_in(lang), item.quantity)
            } else {
                format!("{} ({}) x{}", item.name_in(lang), props, item.quantity)
            }
        })
        .collect();

    let index = Select::new()
        .with_prompt(prompt)
        .items(&labels)
        .default(0)
        .interact()?;
    Ok(Some(index))
}

fn change_quantity(store: &mut Storefront<StaticCatalog>, ctx: &Context) -> Result<()> {
    let Some(index) = pick_line(store, ctx, t(store.lang(), "shop.item"))? else {
        return Ok(());
    };
    let item = store.cart().items()[index].clone();
    let quantity: i64 = Input::new()
        .with_prompt(t(store.lang(), "order.quantity"))
        .default(item.quantity)
        .interact_text()?;
    store.update_quantity(item.product_id, item.properties, quantity);
    Ok(())
}

fn remove(store: &mut Storefront<StaticCatalog>, ctx: &Context) -> Result<()> {
    let Some(index) = pick_line(store, ctx, t(store.lang(), "shop.remove"))? else {
        return Ok(());
    };
    let item = store.cart().items()[index].clone();
    store.remove_from_cart(item.product_id, item.properties);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use souq_commerce::i18n::lookup;

    #[test]
    fn test_menu_is_translated_in_both_languages() {
        for key in ACTIONS {
            assert!(lookup(Lang::En, key).is_some(), "missing en: {key}");
            assert!(lookup(Lang::Ar, key).is_some(), "missing ar: {key}");
        }
        let en = menu(Lang::En);
        let ar = menu(Lang::Ar);
        assert_eq!(en[0], "Browse products");
        assert_eq!(ar[0], "تصفح المنتجات");
        assert!(en.iter().zip(&ar).all(|(a, b)| a != b));
    }
}
