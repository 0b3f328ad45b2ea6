use crate::exec::run_command;
use crate::report::ensure_dir;
use crate::Result;
use std::path::Path;
use tracing::{info, instrument};

const EYEWITNESS: &str = "/home/user/go/bin/EyeWitness/Python/EyeWitness.py";

/// Render every cleaned URL with EyeWitness under a headless X server and
/// write the report directory.
#[instrument(name = "screenshots", level = "info", skip_all)]
pub async fn run_eyewitness(input_file: &Path, output_dir: &Path) -> Result<()> {
    info!("{:12} - starting EyeWitness analysis", "SCREENSHOTS");

    let report_dir = output_dir.join("EyeWitness_Report");
    ensure_dir(&report_dir)?;

    let input = input_file.to_string_lossy();
    let report = report_dir.to_string_lossy();
    run_command(
        "xvfb-run",
        &[
            "python3",
            EYEWITNESS,
            "--web",
            "-f",
            &input,
            "-d",
            &report,
            "--no-prompt",
            "--timeout",
            "30",
            "--threads",
            "3",
            "--max-retries",
            "2",
            "--resolve",
            "--width",
            "1920",
            "--height",
            "1080",
        ],
    )
    .await?;

    info!("{:12} - report saved to {}", "SCREENSHOTS", report_dir.display());
    Ok(())
}
