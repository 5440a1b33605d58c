use super::args::{Cli, Commands, ConfigCommand};
use super::handlers::{self, HandlerContext};
use crate::logging;
use anyhow::{Context, Result, bail};
use pubassist_runtime::config::resolve_config_path;
use pubassist_runtime::Config;
use std::future::Future;
use std::path::PathBuf;

pub fn run(cli: Cli) -> Result<()> {
    logging::init(cli.log_level);

    let config_path = resolve_config_path(cli.config.as_deref())?;

    // must not fail on a broken existing file
    if let Commands::Config {
        command: ConfigCommand::Init { force },
    } = cli.command
    {
        let ctx = HandlerContext::new(Config::default(), config_path, cli.format);
        return handlers::config::init(&ctx, force);
    }

    let mut config = Config::load_from(&config_path)
        .with_context(|| format!("failed to load config from {}", config_path.display()))?
        .apply_env();
    if let Some(url) = cli.api_url {
        config = config.with_api_url(url);
    }
    config.validate()?;
    tracing::debug!(
        path = %config_path.display(),
        base_url = %config.api.base_url,
        "configuration resolved"
    );

    let ctx = HandlerContext::new(config, config_path, cli.format);

    match cli.command {
        Commands::Articles { text, file, page } => {
            let text = read_text(text, file)?;
            block_on(handlers::articles::handle(&ctx, &text, page))
        }

        Commands::Journals { text, file, page } => {
            let text = read_text(text, file)?;
            block_on(handlers::journals::handle(&ctx, &text, page))
        }

        Commands::Authors { query, page } => block_on(handlers::authors::handle(&ctx, &query, page)),

        Commands::Author { id } => block_on(handlers::author::handle(&ctx, id)),

        Commands::Hype {
            keywords,
            publications,
        } => block_on(handlers::hype::handle(&ctx, &keywords, &publications)),

        Commands::Suggest { target } => block_on(handlers::suggest::handle(&ctx, target)),

        Commands::Strip {
            page,
            items,
            page_size,
        } => handlers::strip::handle(&ctx, page, items, page_size),

        Commands::Config { command } => match command {
            ConfigCommand::Show => handlers::config::show(&ctx),
            ConfigCommand::Init { force } => handlers::config::init(&ctx, force),
        },
    }
}

fn read_text(text: Option<String>, file: Option<PathBuf>) -> Result<String> {
    let text = match (text, file) {
        (Some(text), _) => text,
        (None, Some(path)) => std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        (None, None) => bail!("either TEXT or --file is required"),
    };
    if text.trim().is_empty() {
        bail!("text must not be empty");
    }
    Ok(text)
}

fn block_on<F>(future: F) -> Result<()>
where
    F: Future<Output = Result<()>>,
{
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    runtime.block_on(future)
}
