use crate::exec::run_with_stdin;
use crate::Result;
use tracing::{info, instrument};

const BINARY: &str = "/home/user/go/bin/httpx";

/// Stream the resolved hosts through httpx and keep one status line per
/// reachable host, verbatim, in tool output order.
#[instrument(name = "probing", level = "info", skip_all)]
pub async fn check(hosts: &[String]) -> Result<Vec<String>> {
    info!("{:12} - {:?}", "TO PROBE", hosts.len());

    let input = hosts.join("\n");
    let lines = run_with_stdin(BINARY, &["-silent", "-status-code", "-title"], &input).await?;

    info!("{:12} - {:?}", "WEB ACTIVE", lines.len());
    Ok(lines)
}
