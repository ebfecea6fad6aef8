//! `pantry stock` command - Record quantities and list what is on hand

use clap::Subcommand;
use console::style;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect};
use miette::{IntoDiagnostic, Result};
use serde::Serialize;

use crate::cli::helpers::{format_qty, open};
use crate::cli::table::Table;
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::catalog::{emoji_for, Catalog};
use crate::core::inventory::{
    apply_delta, list_available, parse_delta, parse_deltas, unit_for, AvailableIngredient, Delta,
    UpdateOutcome, ValidationError,
};
use crate::core::store::{MemoryQuantityStore, QuantityTable};

#[derive(Subcommand, Debug)]
pub enum StockCommands {
    /// Add (+) or use (-) quantities
    Update(UpdateArgs),

    /// List ingredients on hand, grouped by category
    List,

    /// Show the stored total for one ingredient
    Show(ShowArgs),
}

#[derive(clap::Args, Debug)]
pub struct UpdateArgs {
    /// Changes as NAME=QTY, e.g. Egg=6 or "Olive Oil=-30"
    #[arg(value_name = "NAME=QTY", allow_hyphen_values = true)]
    pub entries: Vec<String>,

    /// Pick ingredients by category and type the amounts
    #[arg(long, short = 'i', conflicts_with = "entries")]
    pub interactive: bool,

    /// Show the new totals without saving them
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(clap::Args, Debug)]
pub struct ShowArgs {
    /// Ingredient name (annotations like "[large]" are ignored)
    pub name: String,
}

pub fn run(cmd: StockCommands, global: &GlobalOpts) -> Result<()> {
    match cmd {
        StockCommands::Update(args) => run_update(args, global),
        StockCommands::List => run_list(global),
        StockCommands::Show(args) => run_show(args, global),
    }
}

fn run_update(args: UpdateArgs, global: &GlobalOpts) -> Result<()> {
    let ctx = open(global)?;

    let (deltas, errors) = if args.interactive {
        let catalog = ctx.pantry.catalog()?;
        let table = ctx.pantry.quantities()?;
        prompt_deltas(&catalog, &table)?
    } else {
        if args.entries.is_empty() {
            return Err(miette::miette!(
                "Nothing to update. Usage: pantry stock update Egg=6 \"Olive Oil=-30\" (or --interactive)"
            ));
        }
        parse_deltas(&args.entries)
    };

    let outcome = if deltas.is_empty() {
        UpdateOutcome::default()
    } else if args.dry_run {
        let store = MemoryQuantityStore::new(ctx.pantry.quantities()?);
        apply_delta(&store, &deltas)?
    } else {
        apply_delta(&ctx.pantry.store(), &deltas)?
    };

    match ctx.format {
        OutputFormat::Json => {
            let report = UpdateReport { outcome: &outcome, errors: &errors };
            println!("{}", serde_json::to_string_pretty(&report).into_diagnostic()?);
        }
        OutputFormat::Yaml => {
            let report = UpdateReport { outcome: &outcome, errors: &errors };
            print!("{}", serde_yml::to_string(&report).into_diagnostic()?);
        }
        _ => {
            for err in &errors {
                eprintln!("{} {}", style("✗").red(), err);
            }
            if deltas.is_empty() {
                if !global.quiet {
                    println!("{} No valid quantities to save", style("!").yellow());
                }
            } else {
                print_outcome(&outcome, args.dry_run, global);
            }
        }
    }

    Ok(())
}

/// Machine-readable result of `stock update`, including rejected inputs
#[derive(Serialize)]
struct UpdateReport<'a> {
    #[serde(flatten)]
    outcome: &'a UpdateOutcome,
    errors: &'a [ValidationError],
}

fn print_outcome(outcome: &UpdateOutcome, dry_run: bool, global: &GlobalOpts) {
    for warning in &outcome.warnings {
        println!("{} {}", style("!").yellow(), warning);
    }
    for name in &outcome.unknown {
        println!(
            "{} {} is not in the quantities table, skipped",
            style("!").yellow(),
            style(name).cyan()
        );
    }

    if global.verbose || dry_run {
        for applied in &outcome.applied {
            println!(
                "  {}: {} {} {}",
                applied.ingredient,
                format_qty(applied.previous),
                style("→").dim(),
                style(format_qty(applied.total)).cyan()
            );
        }
    }

    if global.quiet {
        return;
    }
    if dry_run {
        println!("{}", style("Dry run complete. Nothing was saved.").yellow());
    } else {
        println!(
            "{} Quantities saved. Use {} to see updates.",
            style("✓").green(),
            style("pantry stock list").yellow()
        );
    }
}

/// Ask for ingredients category by category, then one amount per pick
fn prompt_deltas(
    catalog: &Catalog,
    table: &QuantityTable,
) -> Result<(Vec<Delta>, Vec<ValidationError>)> {
    let theme = ColorfulTheme::default();

    let mut selected = Vec::new();
    for category in catalog.categories() {
        if category.items.is_empty() {
            continue;
        }
        let prompt = format!("{} Category: {}", emoji_for(&category.name), category.name);
        let picks = MultiSelect::with_theme(&theme)
            .with_prompt(prompt.trim())
            .items(&category.items)
            .interact()
            .into_diagnostic()?;
        selected.extend(picks.into_iter().map(|i| category.items[i].clone()));
    }

    let mut deltas = Vec::new();
    let mut errors = Vec::new();
    for ingredient in selected {
        let unit = unit_for(table, &ingredient)
            .map(|u| format!(" ({})", u))
            .unwrap_or_default();
        let input: String = Input::with_theme(&theme)
            .with_prompt(format!("{}{} added(+)/used(-)", ingredient, unit))
            .default("0".to_string())
            .interact_text()
            .into_diagnostic()?;

        match parse_delta(&ingredient, &input) {
            Ok(delta) => deltas.push(delta),
            Err(err) => errors.push(err),
        }
    }

    Ok((deltas, errors))
}

fn run_list(global: &GlobalOpts) -> Result<()> {
    let ctx = open(global)?;
    let table = ctx.pantry.quantities()?;
    let catalog = ctx.pantry.catalog()?;
    let available = list_available(&table, &catalog);

    match ctx.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&available).into_diagnostic()?);
        }
        OutputFormat::Yaml => {
            print!("{}", serde_yml::to_string(&available).into_diagnostic()?);
        }
        OutputFormat::Tsv | OutputFormat::Csv => {
            let mut out = Table::new(["Category", "Ingredient", "Qty", "Unit"]);
            for item in &available {
                out.push([
                    item.category.clone(),
                    item.ingredient.clone(),
                    format_qty(item.qt),
                    item.unit.clone().unwrap_or_default(),
                ]);
            }
            print!("{}", out.render(ctx.format));
        }
        format => print_grouped(&available, format == OutputFormat::Md),
    }

    Ok(())
}

fn print_grouped(available: &[AvailableIngredient], markdown: bool) {
    if available.is_empty() {
        println!("No ingredients available.");
        return;
    }

    let mut current: Option<&str> = None;
    for item in available {
        if current != Some(item.category.as_str()) {
            if current.is_some() {
                println!();
            }
            if markdown {
                println!("### {}", item.category);
            } else {
                println!("{}", style(&item.category).bold().underlined());
            }
            current = Some(item.category.as_str());
        }

        let amount = match &item.unit {
            Some(unit) => format!("{} {}", format_qty(item.qt), unit),
            None => format_qty(item.qt),
        };
        if markdown {
            println!("- {}: **{}**", item.ingredient, amount);
        } else {
            println!("- {}: {}", item.ingredient, style(amount).yellow());
        }
    }
}

fn run_show(args: ShowArgs, global: &GlobalOpts) -> Result<()> {
    let ctx = open(global)?;
    let table = ctx.pantry.quantities()?;

    let row = table.get(&args.name).ok_or_else(|| {
        miette::miette!("'{}' is not in the quantities table", args.name)
    })?;

    match ctx.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(row).into_diagnostic()?);
        }
        OutputFormat::Yaml => {
            print!("{}", serde_yml::to_string(row).into_diagnostic()?);
        }
        _ => {
            let amount = match row.unit() {
                Some(unit) => format!("{} {}", format_qty(row.qt), unit),
                None => format_qty(row.qt),
            };
            println!("{}: {}", row.ingredient, style(amount).cyan());
        }
    }

    Ok(())
}
