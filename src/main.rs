//! Bruteforge - brute-force combination generator CLI
//!
//! Parses flags, loads domain templates, enumerates every combination over
//! the configured charset, and routes the substituted lines to a file or to
//! the console.

use std::env;
use std::process;

use bruteforge::{
    cli,
    domains::{expand, load_domains},
    generator::for_each_combination,
    logger,
    output::{Console, OutputWriter},
    Config, Result,
};

fn main() {
    let tokens: Vec<String> = env::args().skip(1).collect();

    // Silence applies to everything, including flag validation errors, so
    // the console sink is selected before arguments are resolved.
    let console = Console::new(cli::silent_requested(&tokens));

    let config = match cli::parse_args(tokens) {
        Ok(config) => config,
        Err(e) => fail(e, console),
    };

    if let Err(e) = run(&config, console) {
        fail(e, console);
    }
}

fn run(config: &Config, console: Console) -> Result<()> {
    let domains = load_domains(&config.domains)?;
    let mut writer = OutputWriter::open(&config.output, console)?;

    tracing::debug!(
        total = config.charset.total_combinations(config.length),
        templates = domains.len(),
        "Starting enumeration"
    );

    for_each_combination(config.charset, config.length, |combination| {
        for domain in &domains {
            writer.emit(&expand(domain, combination))?;
        }
        Ok(())
    })
}

fn fail(err: bruteforge::BruteforgeError, console: Console) -> ! {
    if err.should_log() {
        logger::log_error(&err, console);
    }
    console.say(&err.user_message());
    process::exit(1);
}
