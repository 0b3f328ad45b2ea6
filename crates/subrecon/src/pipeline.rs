use crate::modules;
use crate::report::{self, StagePaths};
use crate::{clean, dns, probe, screenshot};
use crate::{Result, OUTPUT_DIR};
use std::collections::HashSet;
use tracing::{info, instrument};

// region:        --- Pipeline main function

#[tokio::main]
#[instrument(name = "recon", level = "info", skip_all)]
pub async fn run(target: &str, enable_screenshots: bool) -> Result<()> {
    let paths = StagePaths::new(OUTPUT_DIR.as_ref(), target);

    let raw = enumerate_subdomains(target).await?;
    if raw.is_empty() {
        info!("{:12} - no subdomains found, stopping", "EMPTY");
        return Ok(());
    }
    report::write_lines(&paths.raw, &raw)?;
    info!("{:12} - {} subdomains saved to {}", "RAW", raw.len(), paths.raw.display());

    let resolved = dns::validate(&raw).await?;
    if resolved.is_empty() {
        info!("{:12} - no DNS-resolvable subdomains, stopping", "EMPTY");
        return Ok(());
    }
    report::write_lines(&paths.dns_validated, &resolved)?;
    info!(
        "{:12} - {} hosts saved to {}",
        "DNS VALID",
        resolved.len(),
        paths.dns_validated.display()
    );

    let web_active = probe::check(&resolved).await?;
    if web_active.is_empty() {
        info!("{:12} - no web-accessible subdomains, stopping", "EMPTY");
        return Ok(());
    }
    report::write_lines(&paths.web_active, &web_active)?;
    info!(
        "{:12} - {} hosts saved to {}",
        "WEB ACTIVE",
        web_active.len(),
        paths.web_active.display()
    );

    clean::clean_web_active_file(&paths.web_active, &paths.web_clean)?;
    info!("{:12} - cleaned urls saved to {}", "WEB CLEAN", paths.web_clean.display());

    if enable_screenshots {
        screenshot::run_eyewitness(&paths.web_clean, OUTPUT_DIR.as_ref()).await?;
    }

    Ok(())
}

// endregion:     --- Pipeline main function

// region:        --- Pipeline stages

#[instrument(name = "enumeration", level = "info", skip_all)]
async fn enumerate_subdomains(target: &str) -> Result<Vec<String>> {
    let modules = modules::enumeration_modules();
    let total = modules.len();

    let mut results = Vec::with_capacity(total);
    for (i, module) in modules.iter().enumerate() {
        info!("{:12} - [{}/{}] {}", "RUNNING", i + 1, total, module.name());
        results.push(module.enumerate(target).await?);
    }

    Ok(merge_results(results))
}

/// Union of every tool's lines, sorted so the persisted file does not
/// depend on tool ordering.
fn merge_results(results: Vec<Vec<String>>) -> Vec<String> {
    let set: HashSet<String> = results.into_iter().flatten().collect();
    let mut merged: Vec<String> = set.into_iter().collect();
    merged.sort();
    merged
}

// endregion:     --- Pipeline stages

#[cfg(test)]
mod tests {
    use super::merge_results;

    fn owned(lines: &[&str]) -> Vec<String> {
        lines.iter().map(|line| line.to_string()).collect()
    }

    #[test]
    fn union_is_deduplicated_and_sorted() {
        let results = vec![
            owned(&["b.example.com", "a.example.com"]),
            owned(&["c.example.com", "a.example.com"]),
        ];
        assert_eq!(
            merge_results(results),
            owned(&["a.example.com", "b.example.com", "c.example.com"])
        );
    }

    #[test]
    fn union_does_not_depend_on_tool_ordering() {
        let first = owned(&["a.example.com", "b.example.com"]);
        let second = owned(&["b.example.com", "c.example.com"]);

        let one_way = merge_results(vec![first.clone(), second.clone()]);
        let other_way = merge_results(vec![second, first]);
        assert_eq!(one_way, other_way);
    }

    #[test]
    fn empty_tool_outputs_merge_to_nothing() {
        assert!(merge_results(vec![Vec::new(), Vec::new(), Vec::new()]).is_empty());
    }
}
