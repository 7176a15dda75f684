use clap::Parser;
use memokit::cli::{commands, Cli, Commands};
use memokit::types::config::Config;
use memokit::MemokitResult;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> MemokitResult<()> {
    let cli = Cli::parse();

    // Load configuration first (no logging yet). A file that exists must be valid.
    let config = if cli.config.exists() {
        Config::load(&cli.config)?
    } else {
        Config::default_config()
    };

    // Determine log level: CLI flags take precedence over config
    let log_level = if cli.quiet {
        "error".to_string()
    } else if cli.verbose {
        "debug".to_string()
    } else {
        config.general.log_level.clone()
    };

    let filter = EnvFilter::from_default_env().add_directive(
        format!("memokit={}", log_level)
            .parse()
            .unwrap_or_else(|_| "memokit=info".parse().expect("fallback directive is valid")),
    );

    let registry = tracing_subscriber::registry().with(filter);
    if config.general.log_format == "json" {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry.with(fmt::layer().with_writer(std::io::stderr)).init();
    }

    tracing::debug!("Configuration loaded from: {}", cli.config.display());

    match cli.command {
        Commands::Init { path } => commands::init(path)?,
        Commands::Fib { n } => commands::fib(n, &config, cli.json)?,
        Commands::Binom { n, m } => commands::binom(n, m, &config, cli.json)?,
        Commands::Gcd { a, b } => commands::gcd(a, b, cli.json)?,
        Commands::Compare { lhs, rhs } => commands::compare(&lhs, &rhs, &config, cli.json)?,
        Commands::Version => commands::version(),
    }

    Ok(())
}
