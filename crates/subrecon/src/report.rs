use crate::Result;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{error, info};

// region:        --- Stage outputs

/// One output file per pipeline stage, all named by sanitized domain.
pub struct StagePaths {
    pub raw: PathBuf,
    pub dns_validated: PathBuf,
    pub web_active: PathBuf,
    pub web_clean: PathBuf,
}

impl StagePaths {
    pub fn new(output_dir: &Path, domain: &str) -> Self {
        let safe = sanitize_domain(domain);
        Self {
            raw: output_dir.join(format!("{}_raw.txt", safe)),
            dns_validated: output_dir.join(format!("{}_dns_validated.txt", safe)),
            web_active: output_dir.join(format!("{}_web_active.txt", safe)),
            web_clean: output_dir.join(format!("{}_web_clean.txt", safe)),
        }
    }
}

/// Make a domain safe to use in file names.
pub fn sanitize_domain(domain: &str) -> String {
    domain.replace('.', "_")
}

// endregion:     --- Stage outputs

// region:        --- Filesystem utils

pub fn ensure_dir(dir: &Path) -> Result<bool> {
    if dir.is_dir() {
        Ok(false)
    } else {
        fs::create_dir_all(dir)?;
        Ok(true)
    }
}

pub fn write_lines(path: &Path, lines: &[String]) -> Result<()> {
    let mut file = File::create(path)?;
    file.write_all(lines.join("\n").as_bytes())?;
    Ok(())
}

/// Delete every `*.txt` file in the results directory, leaving anything
/// else (the EyeWitness report, log files) alone.
pub fn clear_output_files(output_dir: &Path) -> Result<()> {
    if !output_dir.is_dir() {
        info!("{:12} - {} does not exist", "NO DIR", output_dir.display());
        return Ok(());
    }

    let mut deleted = 0;
    for entry in fs::read_dir(output_dir)? {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "txt") {
            match fs::remove_file(&path) {
                Ok(()) => deleted += 1,
                Err(err) => error!("{:12} - {}: {}", "DELETE", path.display(), err),
            }
        }
    }

    info!("{:12} - {} files removed from {}", "CLEARED", deleted, output_dir.display());
    Ok(())
}

// endregion:     --- Filesystem utils

#[cfg(test)]
mod tests {
    use super::{clear_output_files, sanitize_domain, write_lines, StagePaths};
    use std::fs;
    use std::path::PathBuf;

    fn temp_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("subrecon_{}_{}", name, std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn sanitizes_dots_in_domains() {
        assert_eq!(sanitize_domain("sub.example.com"), "sub_example_com");
    }

    #[test]
    fn stage_paths_are_named_by_stage() {
        let paths = StagePaths::new("SR".as_ref(), "example.com");
        assert_eq!(paths.raw, PathBuf::from("SR/example_com_raw.txt"));
        assert_eq!(paths.dns_validated, PathBuf::from("SR/example_com_dns_validated.txt"));
        assert_eq!(paths.web_active, PathBuf::from("SR/example_com_web_active.txt"));
        assert_eq!(paths.web_clean, PathBuf::from("SR/example_com_web_clean.txt"));
    }

    #[test]
    fn writes_lines_without_trailing_newline() {
        let dir = temp_dir("write");
        let path = dir.join("out.txt");
        write_lines(&path, &["a.example.com".to_string(), "b.example.com".to_string()]).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "a.example.com\nb.example.com");
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn clear_removes_only_txt_files() {
        let dir = temp_dir("clear");
        fs::write(dir.join("example_com_raw.txt"), "a").unwrap();
        fs::write(dir.join("example_com_web_active.txt"), "b").unwrap();
        fs::write(dir.join("run_1.log"), "log").unwrap();

        clear_output_files(&dir).unwrap();

        assert!(!dir.join("example_com_raw.txt").exists());
        assert!(!dir.join("example_com_web_active.txt").exists());
        assert!(dir.join("run_1.log").exists());
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn clear_on_missing_dir_is_not_an_error() {
        let dir = std::env::temp_dir().join("subrecon_does_not_exist");
        assert!(clear_output_files(&dir).is_ok());
    }
}
