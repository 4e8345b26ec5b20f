use std::path::Path;

use anyhow::Context;
use colored::Colorize;
use docket_server::{DocketServer, ServerConfig};
use docket_store::ActorDirectory;

use crate::cli::*;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Serve(args) => cmd_serve(args),
        Command::Config(args) => cmd_config(args),
        Command::Actors(args) => cmd_actors(args),
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<ServerConfig> {
    match path {
        Some(path) => ServerConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display())),
        None => Ok(ServerConfig::default()),
    }
}

fn cmd_serve(args: ServeArgs) -> anyhow::Result<()> {
    let mut config = load_config(args.config.as_deref())?;
    if let Some(bind) = args.bind {
        config.bind_addr = bind;
    }
    tracing::debug!(?config, "effective configuration");

    println!("{} docket on {}", "▶".green().bold(), config.bind_addr.to_string().bold());
    let runtime = tokio::runtime::Runtime::new().context("starting async runtime")?;
    runtime.block_on(DocketServer::new(config).serve())?;
    Ok(())
}

fn cmd_config(args: ConfigArgs) -> anyhow::Result<()> {
    let config = load_config(args.config.as_deref())?;
    print!("{}", config.to_toml_string()?);
    Ok(())
}

/// The actor set a server built from `config` would serve.
fn served_actors(config: ServerConfig) -> ActorDirectory {
    ActorDirectory::new(config.actors)
}

fn cmd_actors(args: ConfigArgs) -> anyhow::Result<()> {
    let actors = served_actors(load_config(args.config.as_deref())?);
    if actors.is_empty() {
        println!("No actors configured.");
        return Ok(());
    }
    for actor in actors.iter() {
        println!("  {} {}", actor.id.to_string().yellow(), actor.name);
    }
    Ok(())
}
