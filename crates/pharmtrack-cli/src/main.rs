//! `pharmtrack` command-line entry point

use anyhow::Context;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use pharmtrack_cli::render::{
    deliveries_text, inventory_text, summary_text, DeliveryView, InventoryView,
};
use pharmtrack_cli::telemetry::init_tracing;
use pharmtrack_cli::{load_dataset, AppConfig};
use pharmtrack_core::{DashboardSummary, DeliveryTab, InventoryFilter};
use std::path::PathBuf;

fn cli() -> Command {
    let json = Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Print output as JSON");
    let query = Arg::new("query")
        .long("query")
        .short('q')
        .help("Case-insensitive search text");

    Command::new("pharmtrack")
        .version(pharmtrack_cli::VERSION)
        .about("Pharmaceutical instrument inventory and delivery tracker")
        .subcommand_required(true)
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("TOML configuration file"),
        )
        .arg(
            Arg::new("inventory")
                .long("inventory")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("Inventory dataset (JSON array)"),
        )
        .arg(
            Arg::new("deliveries")
                .long("deliveries")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("Deliveries dataset (JSON array)"),
        )
        .arg(
            Arg::new("log-json")
                .long("log-json")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Emit logs as JSON lines on stderr"),
        )
        .subcommand(
            Command::new("inventory")
                .about("List inventory with status filter and badge counts")
                .arg(query.clone())
                .arg(
                    Arg::new("filter")
                        .long("filter")
                        .short('f')
                        .default_value("all")
                        .value_parser(|s: &str| s.parse::<InventoryFilter>())
                        .help("all | in-stock | low-stock | out-of-stock"),
                )
                .arg(json.clone()),
        )
        .subcommand(
            Command::new("deliveries")
                .about("List deliveries with tab filter and badge counts")
                .arg(query)
                .arg(
                    Arg::new("tab")
                        .long("tab")
                        .short('t')
                        .default_value("all")
                        .value_parser(|s: &str| s.parse::<DeliveryTab>())
                        .help("all | active | delivered"),
                )
                .arg(json.clone()),
        )
        .subcommand(
            Command::new("summary")
                .about("Dashboard overview")
                .arg(json),
        )
}

fn resolve_config(matches: &ArgMatches) -> anyhow::Result<AppConfig> {
    let mut config = match matches.get_one::<PathBuf>("config") {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::new(),
    };
    if let Some(path) = matches.get_one::<PathBuf>("inventory") {
        config = config.with_inventory_path(path);
    }
    if let Some(path) = matches.get_one::<PathBuf>("deliveries") {
        config = config.with_deliveries_path(path);
    }
    if matches.get_flag("log-json") {
        config = config.with_json_logs(true);
    }
    Ok(config)
}

fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    let text = serde_json::to_string_pretty(value).context("serializing output")?;
    println!("{text}");
    Ok(())
}

fn run(matches: &ArgMatches) -> anyhow::Result<()> {
    let config = resolve_config(matches)?;
    init_tracing(&config.log)?;
    tracing::debug!(?config, "configuration resolved");

    let dataset = load_dataset(&config)?;

    match matches.subcommand() {
        Some(("inventory", args)) => {
            let mut page = dataset.inventory_page();
            if let Some(query) = args.get_one::<String>("query") {
                page.set_search_query(query.as_str());
            }
            if let Some(filter) = args.get_one::<InventoryFilter>("filter") {
                page.set_active_filter(*filter);
            }

            if args.get_flag("json") {
                print_json(&InventoryView::from_page(&page))?;
            } else {
                print!("{}", inventory_text(&page));
            }
        }
        Some(("deliveries", args)) => {
            let mut page = dataset.deliveries_page();
            if let Some(query) = args.get_one::<String>("query") {
                page.set_search_query(query.as_str());
            }
            if let Some(tab) = args.get_one::<DeliveryTab>("tab") {
                page.set_active_filter(*tab);
            }

            if args.get_flag("json") {
                print_json(&DeliveryView::from_page(&page))?;
            } else {
                print!("{}", deliveries_text(&page));
            }
        }
        Some(("summary", args)) => {
            let summary = DashboardSummary::from_dataset(&dataset);
            if args.get_flag("json") {
                print_json(&summary)?;
            } else {
                print!("{}", summary_text(&summary));
            }
        }
        _ => {}
    }

    Ok(())
}

fn main() {
    let matches = cli().get_matches();
    if let Err(err) = run(&matches) {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
