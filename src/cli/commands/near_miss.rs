//! `pantry near-miss` command - Dishes missing exactly one ingredient

use console::style;
use miette::{IntoDiagnostic, Result};

use crate::cli::helpers::{image_search_link, open};
use crate::cli::table::Table;
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::inventory::list_available;
use crate::core::matcher::{find_missing_exactly_one, AvailabilitySet, NearMiss};
use crate::core::names::{normalize, title_case};

#[derive(clap::Args, Debug)]
pub struct NearMissArgs {
    /// Only show dishes missing this ingredient
    #[arg(long)]
    pub missing: Option<String>,
}

pub fn run(args: NearMissArgs, global: &GlobalOpts) -> Result<()> {
    let ctx = open(global)?;

    let table = ctx.pantry.quantities()?;
    let catalog = ctx.pantry.catalog()?;
    let recipes = ctx.pantry.recipes()?;

    // Only catalogued ingredients count here
    let available: AvailabilitySet = list_available(&table, &catalog)
        .iter()
        .map(|a| a.ingredient.as_str())
        .collect();

    let mut near = find_missing_exactly_one(&available, &recipes);
    if let Some(wanted) = &args.missing {
        let wanted = normalize(wanted);
        near.retain(|n| n.missing == wanted);
    }

    match ctx.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&near).into_diagnostic()?);
        }
        OutputFormat::Yaml => {
            print!("{}", serde_yml::to_string(&near).into_diagnostic()?);
        }
        OutputFormat::Tsv | OutputFormat::Csv => {
            let mut out = Table::new(["Dish Name", "Missing Ingredient", "Available Ingredients"]);
            for miss in &near {
                out.push([
                    miss.dish.clone(),
                    title_case(&miss.missing),
                    title_case(&miss.present.join(", ")),
                ]);
            }
            print!("{}", out.render(ctx.format));
        }
        format => print_near(&near, format == OutputFormat::Md, global.quiet),
    }

    Ok(())
}

fn print_near(near: &[NearMiss], markdown: bool, quiet: bool) {
    if near.is_empty() {
        println!("No dishes are missing just one ingredient.");
        return;
    }

    if markdown {
        println!("## Dishes Missing Only 1 Ingredient");
    } else {
        println!("{}", style("Dishes Missing Only 1 Ingredient").bold().underlined());
    }
    if !quiet {
        println!(
            "{}",
            style("(mind you basic condiments such as salt do not count)")
                .dim()
                .italic()
        );
    }

    for miss in near {
        let link = image_search_link(&miss.dish);
        let missing = title_case(&miss.missing);
        let present = title_case(&miss.present.join(", "));

        println!();
        if markdown {
            println!("### {}", miss.dish);
            println!("[Search for images of {}]({})", title_case(&miss.dish), link);
            println!("- **Missing Ingredient:** {}", missing);
            println!("- **Available Ingredients:** {}", present);
        } else {
            println!("{}", style(&miss.dish).red().bold());
            println!("  {}", style(link).dim());
            println!("  Missing Ingredient:    {}", style(missing).yellow());
            println!("  Available Ingredients: {}", present);
        }
    }
}
