//! Command table, dispatch, and handlers.

use std::collections::HashMap;

use colored::Colorize;
use once_cell::sync::Lazy;
use serde::Serialize;

use forecourt_core::{
    audit, storage::DealershipStorage, CatalogService, PurchaseService, ReportService,
    StockService,
};

use crate::cli::format::format_price;
use crate::cli::DeskContext;
use crate::errors::DeskError;

type CommandHandler = fn(&DeskContext, &[String]) -> Result<(), DeskError>;

pub struct CommandEntry {
    pub name: &'static str,
    pub usage: &'static str,
    pub description: &'static str,
    handler: CommandHandler,
}

static COMMANDS: &[CommandEntry] = &[
    CommandEntry {
        name: "add-car",
        usage: "add-car <name> <price> [stock]",
        description: "Add a catalog entry with an initial stock level",
        handler: add_car,
    },
    CommandEntry {
        name: "buy",
        usage: "buy <name> <quantity>",
        description: "Record a purchase and draw down stock",
        handler: buy,
    },
    CommandEntry {
        name: "restock",
        usage: "restock <name> <quantity>",
        description: "Adjust a car's stock level (negative corrects downwards)",
        handler: restock,
    },
    CommandEntry {
        name: "edit-car",
        usage: "edit-car <name> [--name <new>] [--price <amount>]",
        description: "Rename a catalog entry and/or change its price",
        handler: edit_car,
    },
    CommandEntry {
        name: "cars",
        usage: "cars",
        description: "List the catalog with current stock levels",
        handler: cars,
    },
    CommandEntry {
        name: "summary",
        usage: "summary [--json]",
        description: "Revenue for the current month and the two before it",
        handler: summary,
    },
    CommandEntry {
        name: "top-cars",
        usage: "top-cars [--json]",
        description: "Top three sellers per month of the current year",
        handler: top_cars,
    },
    CommandEntry {
        name: "top-cars-revenue",
        usage: "top-cars-revenue [--json]",
        description: "Monthly top sellers with revenue from current prices",
        handler: top_cars_revenue,
    },
    CommandEntry {
        name: "yearly",
        usage: "yearly [--json]",
        description: "The current year's four highest-selling cars",
        handler: yearly,
    },
    CommandEntry {
        name: "check",
        usage: "check",
        description: "Report dangling references and pricing anomalies",
        handler: check,
    },
    CommandEntry {
        name: "lots",
        usage: "lots",
        description: "List persisted lots with catalog and ledger counts",
        handler: lots,
    },
    CommandEntry {
        name: "backup",
        usage: "backup [note]",
        description: "Write a timestamped backup of the current lot",
        handler: backup,
    },
    CommandEntry {
        name: "help",
        usage: "help",
        description: "Show this overview",
        handler: help,
    },
    CommandEntry {
        name: "version",
        usage: "version",
        description: "Print the dealer-desk version",
        handler: version,
    },
];

static REGISTRY: Lazy<HashMap<&'static str, &'static CommandEntry>> =
    Lazy::new(|| COMMANDS.iter().map(|entry| (entry.name, entry)).collect());

pub fn dispatch(ctx: &DeskContext, command: &str, args: &[String]) -> Result<(), DeskError> {
    match REGISTRY.get(command) {
        Some(entry) => (entry.handler)(ctx, args),
        None => Err(DeskError::Command(unknown_command_message(command))),
    }
}

pub fn print_help() {
    println!("{}", "Dealer Desk".bold());
    println!("Inventory and sales reporting for a single-dealer car lot.\n");
    println!("{}", "Commands:".bold());
    for entry in COMMANDS {
        println!("  {:<44} {}", entry.usage, entry.description);
    }
}

fn unknown_command_message(command: &str) -> String {
    let closest = COMMANDS
        .iter()
        .map(|entry| (strsim::levenshtein(command, entry.name), entry.name))
        .min();
    match closest {
        Some((distance, name)) if distance <= 3 => {
            format!("unknown command `{command}`, did you mean `{name}`?")
        }
        _ => format!("unknown command `{command}`, run `help` for the list"),
    }
}

fn usage_error(name: &str) -> DeskError {
    let usage = REGISTRY
        .get(name)
        .map(|entry| entry.usage)
        .unwrap_or(name);
    DeskError::Input(format!("usage: {usage}"))
}

fn parse_price(value: &str) -> Result<f64, DeskError> {
    value
        .parse()
        .map_err(|_| DeskError::Input(format!("`{value}` is not a valid price")))
}

fn parse_quantity(value: &str) -> Result<u32, DeskError> {
    value
        .parse()
        .map_err(|_| DeskError::Input(format!("`{value}` is not a valid quantity")))
}

fn parse_delta(value: &str) -> Result<i64, DeskError> {
    value
        .parse()
        .map_err(|_| DeskError::Input(format!("`{value}` is not a valid adjustment")))
}

fn wants_json(args: &[String]) -> bool {
    args.iter().any(|arg| arg == "--json")
}

fn render_json<T: Serialize>(value: &T) -> Result<(), DeskError> {
    let json =
        serde_json::to_string_pretty(value).map_err(|err| DeskError::Serde(err.to_string()))?;
    println!("{json}");
    Ok(())
}

fn add_car(ctx: &DeskContext, args: &[String]) -> Result<(), DeskError> {
    let (name, price, stock) = match args {
        [name, price] => (name, parse_price(price)?, 0),
        [name, price, stock] => (name, parse_price(price)?, parse_quantity(stock)?),
        _ => return Err(usage_error("add-car")),
    };
    let mut lot = ctx.load_or_create_lot()?;
    CatalogService::add_car(&mut lot, name, price, stock)?;
    ctx.save_lot(&lot)?;
    println!(
        "Added `{name}` at {} with {stock} in stock",
        format_price(price, &ctx.config.currency)
    );
    Ok(())
}

fn buy(ctx: &DeskContext, args: &[String]) -> Result<(), DeskError> {
    let [name, quantity] = args else {
        return Err(usage_error("buy"));
    };
    let quantity = parse_quantity(quantity)?;
    let mut lot = ctx.load_lot()?;
    PurchaseService::buy(&mut lot, &ctx.clock, name, quantity)?;
    ctx.save_lot(&lot)?;
    let level = StockService::level(&lot, name.trim()).unwrap_or(0);
    println!("Purchased {quantity} x `{name}`, {level} left in stock");
    Ok(())
}

fn restock(ctx: &DeskContext, args: &[String]) -> Result<(), DeskError> {
    let [name, delta] = args else {
        return Err(usage_error("restock"));
    };
    let delta = parse_delta(delta)?;
    let mut lot = ctx.load_lot()?;
    let level = StockService::adjust(&mut lot, name, delta)?;
    ctx.save_lot(&lot)?;
    println!("Stock for `{name}` is now {level}");
    Ok(())
}

fn edit_car(ctx: &DeskContext, args: &[String]) -> Result<(), DeskError> {
    let Some((name, flags)) = args.split_first() else {
        return Err(usage_error("edit-car"));
    };
    let mut new_name = None;
    let mut new_price = None;
    let mut flags = flags.iter();
    while let Some(flag) = flags.next() {
        match flag.as_str() {
            "--name" => {
                new_name = Some(
                    flags
                        .next()
                        .ok_or_else(|| usage_error("edit-car"))?
                        .as_str(),
                );
            }
            "--price" => {
                let value = flags.next().ok_or_else(|| usage_error("edit-car"))?;
                new_price = Some(parse_price(value)?);
            }
            other => {
                return Err(DeskError::Input(format!("unknown flag `{other}`")));
            }
        }
    }
    let mut lot = ctx.load_lot()?;
    CatalogService::update_details(&mut lot, name, new_name, new_price)?;
    ctx.save_lot(&lot)?;
    println!("Updated `{name}`");
    Ok(())
}

fn cars(ctx: &DeskContext, _args: &[String]) -> Result<(), DeskError> {
    let lot = ctx.load_lot()?;
    println!("{}", format!("Catalog for `{}`", lot.name).bold());
    for car in CatalogService::list(&lot) {
        let level = lot
            .stock_item(&car.name)
            .map(|item| item.stock.to_string())
            .unwrap_or_else(|| "-".into());
        println!(
            "  {:<24} {:>14} {:>6}",
            car.name,
            format_price(car.price, &ctx.config.currency),
            level
        );
    }
    Ok(())
}

fn summary(ctx: &DeskContext, args: &[String]) -> Result<(), DeskError> {
    let lot = ctx.load_lot()?;
    let summary = ReportService::rolling_summary(&lot, &ctx.clock);
    if wants_json(args) {
        return render_json(&summary);
    }
    println!("{}", "Rolling three-month revenue".bold());
    for row in &summary.months {
        println!(
            "  {:<12} {}",
            row.month.to_string(),
            format_price(row.total_revenue, &ctx.config.currency)
        );
    }
    Ok(())
}

fn top_cars(ctx: &DeskContext, args: &[String]) -> Result<(), DeskError> {
    let lot = ctx.load_lot()?;
    let monthly = ReportService::monthly_top_sellers(&lot, &ctx.clock);
    if wants_json(args) {
        return render_json(&monthly);
    }
    if monthly.is_empty() {
        println!("No sales recorded this year.");
        return Ok(());
    }
    for bucket in &monthly {
        println!("{}", bucket.month.to_string().bold());
        for car in &bucket.top_cars {
            println!("  {:<24} x{}", car.car_name, car.total_quantity);
        }
    }
    Ok(())
}

fn top_cars_revenue(ctx: &DeskContext, args: &[String]) -> Result<(), DeskError> {
    let lot = ctx.load_lot()?;
    let monthly = ReportService::monthly_top_seller_revenue(&lot, &ctx.clock);
    if wants_json(args) {
        return render_json(&monthly);
    }
    if monthly.is_empty() {
        println!("No sales recorded this year.");
        return Ok(());
    }
    for (month, rows) in &monthly {
        println!("{}", month.to_string().bold());
        for row in rows {
            println!(
                "  {:<24} {}",
                row.car_name,
                format_price(row.total_price, &ctx.config.currency)
            );
        }
    }
    Ok(())
}

fn yearly(ctx: &DeskContext, args: &[String]) -> Result<(), DeskError> {
    let lot = ctx.load_lot()?;
    let leaders = ReportService::yearly_leaderboard(&lot, &ctx.clock);
    if wants_json(args) {
        return render_json(&leaders);
    }
    if leaders.is_empty() {
        println!("No sales recorded this year.");
        return Ok(());
    }
    println!("{}", "Yearly top sellers".bold());
    for (rank, car) in leaders.iter().enumerate() {
        println!("  {:>2}. {:<24} x{}", rank + 1, car.car_name, car.total_quantity);
    }
    Ok(())
}

fn check(ctx: &DeskContext, _args: &[String]) -> Result<(), DeskError> {
    let lot = ctx.load_lot()?;
    let warnings = audit::dealership_warnings(&lot);
    if warnings.is_empty() {
        println!("No warnings.");
        return Ok(());
    }
    for warning in &warnings {
        println!("{}", warning.yellow());
    }
    Ok(())
}

fn lots(ctx: &DeskContext, _args: &[String]) -> Result<(), DeskError> {
    let rows = ctx.storage.list_lot_metadata()?;
    if rows.is_empty() {
        println!("No lots saved yet.");
        return Ok(());
    }
    for row in &rows {
        println!(
            "  {:<16} {} cars, {} units in stock, {} sales",
            row.slug, row.car_count, row.stock_units, row.sale_count
        );
    }
    Ok(())
}

fn backup(ctx: &DeskContext, args: &[String]) -> Result<(), DeskError> {
    let note = args.first().map(String::as_str);
    let lot = ctx.load_lot()?;
    let info = ctx.storage.backup_lot(ctx.lot_name(), &lot, note)?;
    println!("Backup created: {}", info.id);
    Ok(())
}

fn help(_ctx: &DeskContext, _args: &[String]) -> Result<(), DeskError> {
    print_help();
    Ok(())
}

fn version(_ctx: &DeskContext, _args: &[String]) -> Result<(), DeskError> {
    println!("dealer-desk {}", env!("CARGO_PKG_VERSION"));
    Ok(())
}
