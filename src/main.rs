use anyhow::{Context, Result};
use clap::Parser;
use dsf::app::{handle_fatal_error, init_logging, AppConfig};
use dsf::diagnostics::TracingSink;
use dsf::gdp::{per_capita_gdp, per_capita_gdp_with_debugging, NationalAccounts};
use dsf::greeting::{greet, greet_again_traced, greet_with_trace, GreetingArgs};
use dsf::middleware::{trace, Operation, TraceOptions};
use dsf::person::Person;
use tracing::{info, warn};

/// Run every per-capita GDP and greeting variant once
#[derive(Parser)]
#[command(name = "dsf")]
#[command(about = "Per-capita GDP and tracing middleware demonstrations", long_about = None)]
struct Cli {
    /// Increase log verbosity beyond debug (-v for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log at info level and above
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Population count used for the per-capita calculation
    #[arg(long, default_value_t = 100.0)]
    population: f64,
}

fn main() {
    let cli = Cli::parse();

    let config = if cli.quiet {
        AppConfig::new(0)
    } else {
        AppConfig::new(cli.verbose.saturating_add(1))
    };
    let verbose = config.verbose;

    if let Err(e) = run(&cli, &config) {
        handle_fatal_error(e, verbose);
    }
}

fn run(cli: &Cli, config: &AppConfig) -> Result<()> {
    init_logging(config)?;

    let accounts = NationalAccounts::new(11.0, 12.0, 13.0, 14.0, cli.population);

    let per_capita = per_capita_gdp(accounts, TracingSink).context("per-capita GDP failed")?;
    println!("per-capita GDP: {}", per_capita);

    let traced = per_capita_gdp_with_debugging(TracingSink);
    let per_capita = traced
        .invoke(accounts)
        .context("traced per-capita GDP failed")?;
    println!("per-capita GDP (traced): {}", per_capita);

    greet(GreetingArgs::new("stupid"));

    let traced_greet = trace(greet, TracingSink);
    traced_greet.invoke(GreetingArgs::new("stupid").middle_name("and").last_name("ugly"));

    greet_with_trace(TracingSink, GreetingArgs::new("Matt").last_name("Wilson"));

    greet_again_traced(TracingSink).invoke(GreetingArgs::new("Matt").last_name("Wilson"));

    for (log_start, log_end) in [(true, true), (true, false), (false, true), (false, false)] {
        info!(log_start, log_end, "configurable trace");
        TraceOptions::configurable(log_start, log_end)
            .apply(greet, TracingSink)
            .invoke(GreetingArgs::new("stupid"));
    }

    let mut person = Person::new("Matt", "Wilson");
    println!("display name: {}", person.display_name());

    person
        .set_display_name("Matthew Wilson")
        .context("renaming person")?;
    println!("display name: {}", person.display_name());

    if let Err(e) = person.set_display_name("Matt") {
        warn!("rejected display name: {}", e);
        println!("rejected: {}", e.user_message());
    }

    Ok(())
}
