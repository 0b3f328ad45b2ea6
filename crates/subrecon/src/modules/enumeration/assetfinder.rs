use super::EnumerationModule;
use crate::exec::run_command;
use crate::modules::Module;
use crate::Result;
use async_trait::async_trait;
use tracing::{debug, instrument};

const BINARY: &str = "/home/user/go/bin/assetfinder";

// region:        --- Module info

pub struct Assetfinder {}

impl Assetfinder {
    pub fn new() -> Self {
        Self {}
    }
}

impl Module for Assetfinder {
    fn name(&self) -> String {
        "enumeration/assetfinder".to_string()
    }

    fn description(&self) -> String {
        "Related-domain discovery with assetfinder".to_string()
    }
}

// endregion:     --- Module info

#[async_trait]
impl EnumerationModule for Assetfinder {
    #[instrument(name = "enumerate", level = "debug", fields(module = %self.name()), skip_all)]
    async fn enumerate(&self, domain: &str) -> Result<Vec<String>> {
        let stdout = run_command(BINARY, &[domain]).await?;

        let subdomains: Vec<String> = stdout
            .lines()
            .map(|line| line.trim().to_string())
            .filter(|line| !line.is_empty())
            .collect();

        debug!("{} collected", subdomains.len());
        Ok(subdomains)
    }
}
