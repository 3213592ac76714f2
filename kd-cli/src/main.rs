#![cfg_attr(coverage, feature(coverage_attribute))]
mod crd;
mod list;
mod read;
mod schema;

use clap::{
    crate_version,
    Parser,
    Subcommand,
};
use kd_core::config::ProviderConfig;
use kd_core::logging;
use kd_core::prelude::*;
use kd_core::provider::Provider;
use tracing::*;

#[derive(Parser)]
#[command(
    about = "command-line app for inspecting the kubedata Kubernetes data sources",
    version,
    propagate_version = true
)]
struct KdCommandRoot {
    #[command(subcommand)]
    subcommand: KdSubcommand,

    #[arg(short, long, global = true, long_help = "provider config file")]
    config_file: Option<String>,

    #[arg(short, long, default_value = "warn")]
    verbosity: String,
}

#[derive(Subcommand)]
enum KdSubcommand {
    #[command(about = "print the CRDs for every kind the provider can read")]
    Crd,

    #[command(about = "list the available data sources", visible_alias = "ls")]
    List,

    #[command(about = "read one object through its data source", visible_alias = "r")]
    Read(read::Args),

    #[command(about = "print the schema for a data source")]
    Schema(schema::Args),

    #[command(about = "kdctl version")]
    Version,
}

fn load_provider(config_file: Option<&str>) -> anyhow::Result<(ProviderConfig, Provider)> {
    let config = match config_file {
        Some(filename) => ProviderConfig::load(filename)?,
        None => ProviderConfig::default(),
    };
    let (provider, diags) = Provider::from_config(&config)?;
    for d in diags.iter() {
        warn!("{d}");
    }
    Ok((config, provider))
}

#[tokio::main]
async fn main() -> EmptyResult {
    let args = KdCommandRoot::parse();
    logging::setup_for_cli(&args.verbosity);

    match &args.subcommand {
        KdSubcommand::Crd => crd::cmd(),
        KdSubcommand::List => {
            let (_, provider) = load_provider(args.config_file.as_deref())?;
            list::cmd(&provider)
        },
        KdSubcommand::Read(read_args) => {
            let (config, provider) = load_provider(args.config_file.as_deref())?;
            read::cmd(read_args, config, &provider).await
        },
        KdSubcommand::Schema(schema_args) => {
            let (_, provider) = load_provider(args.config_file.as_deref())?;
            schema::cmd(schema_args, &provider)
        },
        KdSubcommand::Version => {
            println!("kdctl {}", crate_version!());
            Ok(())
        },
    }
}
