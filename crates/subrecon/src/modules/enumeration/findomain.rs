use super::EnumerationModule;
use crate::exec::run_command;
use crate::modules::Module;
use crate::Result;
use async_trait::async_trait;
use tracing::{debug, instrument};

const BINARY: &str = "/usr/bin/findomain";

// region:        --- Module info

pub struct Findomain {}

impl Findomain {
    pub fn new() -> Self {
        Self {}
    }
}

impl Module for Findomain {
    fn name(&self) -> String {
        "enumeration/findomain".to_string()
    }

    fn description(&self) -> String {
        "Certificate transparency lookups with findomain".to_string()
    }
}

// endregion:     --- Module info

#[async_trait]
impl EnumerationModule for Findomain {
    #[instrument(name = "enumerate", level = "debug", fields(module = %self.name()), skip_all)]
    async fn enumerate(&self, domain: &str) -> Result<Vec<String>> {
        let stdout = run_command(BINARY, &["-t", domain, "--quiet"]).await?;

        let subdomains: Vec<String> = stdout
            .lines()
            .map(|line| line.trim().to_string())
            .filter(|line| !line.is_empty())
            .collect();

        debug!("{} collected", subdomains.len());
        Ok(subdomains)
    }
}
