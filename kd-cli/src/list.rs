use kd_core::prelude::*;
use kd_core::provider::Provider;

pub fn cmd(provider: &Provider) -> EmptyResult {
    for ds in provider.data_sources() {
        println!("{}\t{}", ds.metadata(provider.type_name()), ds.descriptor().gvk());
    }

    Ok(())
}
