pub mod assetfinder;
pub mod findomain;
pub mod subfinder;

use super::Module;
use crate::Result;
use async_trait::async_trait;

#[async_trait]
pub trait EnumerationModule: Module {
    async fn enumerate(&self, domain: &str) -> Result<Vec<String>>;
}
