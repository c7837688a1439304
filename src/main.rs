use anyhow::Context;
use clap::{CommandFactory, Parser};
use lexi::{cli::Cli, headless};
use lexi_core::config::Config;
use lexi_sources::{Source, TextSource};
use std::time::Duration;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logging is configured from the config file, so any load failure is
    // reported once the subscriber exists.
    let (config, load_error) = match &cli.config {
        Some(path) => (
            Config::load_from(path)
                .with_context(|| format!("reading config {}", path.display()))?,
            None,
        ),
        None => match Config::load() {
            Ok(config) => (config, None),
            Err(err) => (Config::defaults(), Some(err)),
        },
    };

    init_logging(&cli, &config)?;
    if let Some(err) = load_error {
        tracing::warn!(error = %err, "config file unreadable, using defaults");
    }

    let Some(location) = cli
        .source
        .clone()
        .or_else(|| config.source.default_source().map(str::to_string))
    else {
        Cli::command()
            .error(
                clap::error::ErrorKind::MissingRequiredArgument,
                "no SOURCE given and no [source] default configured",
            )
            .exit()
    };

    // An unusable source degrades to an empty dictionary, like a failed read.
    let (entries, source_name) =
        match Source::parse(&location, Duration::from_secs(config.source.http_timeout_secs)) {
            Ok(source) => {
                let runtime = tokio::runtime::Builder::new_current_thread()
                    .enable_all()
                    .build()?;
                (runtime.block_on(lexi_sources::load(&source)), source.describe())
            }
            Err(err) => {
                tracing::error!(source = %location, error = %err, "could not open dictionary source");
                (Vec::new(), location)
            }
        };

    if cli.headless {
        let stdout = std::io::stdout();
        let stderr = std::io::stderr();
        headless::run(
            &entries,
            &cli.query,
            cli.format,
            cli.count,
            &config.search,
            &mut stdout.lock(),
            &mut stderr.lock(),
        )?;
        return Ok(());
    }

    lexi_tui::run(entries, source_name, config)
}

fn init_logging(cli: &Cli, config: &Config) -> anyhow::Result<()> {
    let filter = |default: &str| {
        tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default))
    };

    if cli.debug {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&config.log.file)
            .with_context(|| format!("opening debug log {}", config.log.file.display()))?;
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(filter("debug"))
            .init();
        tracing::info!(
            "lexi debug log started, tail -f {}",
            config.log.file.display()
        );
    } else if cli.headless {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(filter("warn"))
            .init();
    }
    Ok(())
}
