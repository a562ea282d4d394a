//! Variant options offered per category.

use anyhow::Result;
use souq_commerce::catalog::options_for_category;
use souq_commerce::i18n::t;

use super::OptionsArgs;
use crate::context::Context;

/// Run the options command.
pub fn run(args: OptionsArgs, ctx: &Context) -> Result<()> {
    let options = options_for_category(&args.category);

    if ctx.output.is_json() {
        ctx.output.json(&options);
        return Ok(());
    }

    ctx.output.header(&format!("Options for {}", args.category));
    if options.is_empty() {
        ctx.output
            .info(&format!("Category '{}' has no selectable options", args.category));
        return Ok(());
    }

    let widths = [10, 14, 24];
    ctx.output.table_row(&["AXIS", "VALUE", "LABEL"], &widths);
    for axis in options.axes() {
        for choice in options.choices(axis) {
            ctx.output.table_row(
                &[
                    t(ctx.lang, axis.label_key()),
                    choice.value.as_str(),
                    choice.label.get(ctx.lang).as_str(),
                ],
                &widths,
            );
        }
    }

    Ok(())
}
