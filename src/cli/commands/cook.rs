//! `pantry cook` command - Dishes you can prepare with what is on hand

use console::style;
use miette::{IntoDiagnostic, Result};
use serde::Serialize;

use crate::cli::helpers::{image_search_link, open};
use crate::cli::table::Table;
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::bases::{alternatives_for_base, BaseGroups};
use crate::core::inventory::availability_set;
use crate::core::matcher::{dish_details, find_fully_preparable};
use crate::core::names::title_case;
use crate::core::recipes::DishDetail;

#[derive(clap::Args, Debug)]
pub struct CookArgs {
    /// Skip the alternative pasta lookup
    #[arg(long)]
    pub no_alternatives: bool,
}

/// One preparable dish with its details
#[derive(Debug, Serialize)]
struct DishCard<'a> {
    #[serde(flatten)]
    detail: &'a DishDetail,
    alternatives: Vec<String>,
    image_search: String,
}

pub fn run(args: CookArgs, global: &GlobalOpts) -> Result<()> {
    let ctx = open(global)?;

    let table = ctx.pantry.quantities()?;
    let recipes = ctx.pantry.recipes()?;
    let details = ctx.pantry.details()?;
    let bases = if args.no_alternatives {
        BaseGroups::default()
    } else {
        ctx.pantry.bases()?
    };

    let available = availability_set(&table);
    let preparable = find_fully_preparable(&available, &recipes);
    let cards: Vec<DishCard> = dish_details(&preparable, &details)
        .into_iter()
        .map(|detail| DishCard {
            alternatives: alternatives_for_base(&detail.base, &bases),
            image_search: image_search_link(&detail.key()),
            detail,
        })
        .collect();

    if preparable.len() != cards.len() {
        tracing::debug!(
            preparable = preparable.len(),
            detailed = cards.len(),
            "some preparable dishes have no detail row"
        );
    }

    match ctx.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&cards).into_diagnostic()?);
        }
        OutputFormat::Yaml => {
            print!("{}", serde_yml::to_string(&cards).into_diagnostic()?);
        }
        OutputFormat::Tsv | OutputFormat::Csv => {
            let mut out = Table::new([
                "Dish Name",
                "Base",
                "Cooking Time",
                "Calories per Serving",
                "Level of Cost",
                "Dosage Size",
                "Alternative Pastas",
            ]);
            for card in &cards {
                let d = card.detail;
                out.push([
                    title_case(&d.dish),
                    d.base.clone(),
                    d.cooking_time.clone(),
                    d.calories_per_serving.clone(),
                    d.level_of_cost.clone(),
                    d.dosage_size.clone(),
                    card.alternatives.join(", "),
                ]);
            }
            print!("{}", out.render(ctx.format));
        }
        format => {
            let undetailed = without_details(&preparable, &cards);
            print_cards(
                &cards,
                &undetailed,
                format == OutputFormat::Md,
                global.quiet,
            )
        }
    }

    Ok(())
}

/// Preparable dishes with no row in the detail file, title-cased
fn without_details(preparable: &[String], cards: &[DishCard]) -> Vec<String> {
    preparable
        .iter()
        .filter(|dish| !cards.iter().any(|c| &c.detail.key() == *dish))
        .map(|dish| title_case(dish))
        .collect()
}

fn print_cards(cards: &[DishCard], undetailed: &[String], markdown: bool, quiet: bool) {
    if cards.is_empty() && undetailed.is_empty() {
        println!(
            "{} No dishes can be prepared with the current ingredients.",
            style("✗").red()
        );
        return;
    }

    if markdown {
        println!("## Preparable Dishes");
    } else {
        println!("{}", style("Preparable Dishes").bold().underlined());
    }
    if !quiet {
        println!(
            "{}",
            style("(check manually if you have enough of each available ingredient)")
                .dim()
                .italic()
        );
    }

    for card in cards {
        let d = card.detail;
        let name = title_case(d.dish.trim());
        let alternatives = if card.alternatives.is_empty() {
            "None".to_string()
        } else {
            card.alternatives.join(", ")
        };

        println!();
        if markdown {
            println!("### {}", name);
            println!("[Search for images of {}]({})", name, card.image_search);
        } else {
            println!("{}", style(&name).green().bold());
            println!("  {}", style(&card.image_search).dim());
        }

        let fields = [
            ("Base", d.base.as_str()),
            ("Cooking Time", d.cooking_time.as_str()),
            ("Calories per Serving", d.calories_per_serving.as_str()),
            ("Ingredients & Quantity", d.ingredients_and_quantity.as_str()),
            ("Level of Cost", d.level_of_cost.as_str()),
            ("Dosage Size", d.dosage_size.as_str()),
            ("Alternative Pastas", alternatives.as_str()),
        ];
        for (label, value) in fields {
            if markdown {
                println!("- **{}:** {}", label, value);
            } else {
                println!("  {:<24}{}", format!("{}:", label), value);
            }
        }
    }

    if !undetailed.is_empty() {
        println!();
        println!(
            "{} Also preparable, but missing from the recipe details file: {}",
            style("!").yellow(),
            undetailed.join(", ")
        );
    }
}

