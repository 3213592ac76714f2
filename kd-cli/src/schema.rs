use kd_core::errors::*;
use kd_core::prelude::*;
use kd_core::provider::Provider;

#[derive(clap::Args)]
pub struct Args {
    #[arg(long_help = "data source type name, or the group/version.Kind of the resource")]
    pub type_name: String,
}

pub fn cmd(args: &Args, provider: &Provider) -> EmptyResult {
    let Some(ds) = provider.data_source(&args.type_name) else {
        bail!("no data source named {}; try `kdctl list`", args.type_name);
    };
    println!("{}", serde_json::to_string_pretty(&ds.schema())?);

    Ok(())
}
