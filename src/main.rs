//! workhours - compute business hours between job timestamps

use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use workhours::{
    cli::{Cli, Command, parse_cli_timestamp, parse_window},
    output, Result, business_hours, calculate_hours, set_business_hours,
};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging. The --verbose flag widens the default filter but
    // RUST_LOG still wins when set.
    let filter = if cli.verbose {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("workhours=info"))
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"))
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Apply the window before any command runs; a bad window is a hard
    // error, never a silently clamped one.
    if let Some(window_str) = &cli.window {
        let window = parse_window(window_str)?;
        set_business_hours(window.start(), window.end())?;
    }
    info!("using business window {}", business_hours());

    match cli.command {
        Command::Hours { start, end } => {
            let hours = calculate_hours(Some(start.as_str()), Some(end.as_str()));
            println!("{}", output::format_hours(hours, cli.json));
        }
        Command::Breakdown { start, end } => {
            let start = parse_cli_timestamp(&start)?;
            let end = parse_cli_timestamp(&end)?;
            let window = business_hours();
            let segments = window.breakdown(start, end);
            println!("{}", output::format_breakdown(&window, &segments, cli.json));
        }
        Command::Split { start, end } => {
            let start = parse_cli_timestamp(&start)?;
            let end = parse_cli_timestamp(&end)?;
            let window = business_hours();
            let (business, after_hours) = window.split(start, end);
            println!(
                "{}",
                output::format_split(&window, start, end, business, after_hours, cli.json)
            );
        }
    }

    Ok(())
}
