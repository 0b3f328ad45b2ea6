use crate::exec::run_with_stdin;
use crate::Result;
use std::collections::HashSet;
use tracing::{info, instrument};

const BINARY: &str = "/home/user/go/bin/dnsx";

/// Filter `subdomains` down to hosts with at least one A, AAAA or CNAME
/// record, by streaming the whole set through dnsx.
#[instrument(name = "resolution", level = "info", skip_all)]
pub async fn validate(subdomains: &[String]) -> Result<Vec<String>> {
    info!("{:12} - {:?}", "TO RESOLVE", subdomains.len());

    let input = subdomains.join("\n");
    let lines = run_with_stdin(BINARY, &["-silent", "-a", "-aaaa", "-cname"], &input).await?;

    let resolved = parse_resolved(&lines);
    info!("{:12} - {:?}", "RESOLVED", resolved.len());
    Ok(resolved)
}

/// dnsx prints the host first, then the record data. Keep the host only,
/// deduplicated (one line per record type) and sorted.
fn parse_resolved(lines: &[String]) -> Vec<String> {
    let hosts: HashSet<String> = lines
        .iter()
        .filter_map(|line| line.split_whitespace().next())
        .map(|host| host.to_string())
        .collect();

    let mut resolved: Vec<String> = hosts.into_iter().collect();
    resolved.sort();
    resolved
}
