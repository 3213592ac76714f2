use kd_core::catalog;
use kd_core::prelude::*;

pub fn cmd() -> EmptyResult {
    for crd in catalog::crds() {
        print!("---\n{}", serde_yaml::to_string(&crd)?);
    }

    Ok(())
}
