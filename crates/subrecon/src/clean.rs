use crate::Result;
use lazy_regex::regex;
use std::fs;
use std::path::Path;
use tracing::{info, instrument};

/// Strip ANSI escape sequences and keep only the leading HTTP(S) URL of
/// each line. Lines with no leading URL are dropped entirely.
pub fn clean_lines<'a, I>(lines: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let ansi = regex!(r"\x1B\[[0-?]*[ -/]*[@-~]");

    lines
        .into_iter()
        .filter_map(|line| {
            let stripped = ansi.replace_all(line, "");
            let url = stripped.split_whitespace().next()?;
            if url.starts_with("http://") || url.starts_with("https://") {
                Some(url.to_string())
            } else {
                None
            }
        })
        .collect()
}

/// Rewrite the web-active file into a plain URL list EyeWitness can read.
#[instrument(name = "cleaning", level = "info", skip_all)]
pub fn clean_web_active_file(input: &Path, output: &Path) -> Result<()> {
    let content = fs::read_to_string(input)?;
    let urls = clean_lines(content.lines());
    fs::write(output, urls.join("\n"))?;

    info!("{:12} - {:?}", "URLS KEPT", urls.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::clean_lines;

    #[test]
    fn strips_ansi_and_keeps_leading_url() {
        let line = "\x1b[32mhttps://www.example.com\x1b[0m [\x1b[33m301\x1b[0m] [Moved]";
        assert_eq!(clean_lines([line]), vec!["https://www.example.com"]);
    }

    #[test]
    fn keeps_plain_urls_untouched() {
        let lines = ["http://api.example.com [200] [API]", "https://example.com"];
        assert_eq!(
            clean_lines(lines),
            vec!["http://api.example.com", "https://example.com"]
        );
    }

    #[test]
    fn drops_lines_without_a_leading_url() {
        let lines = [
            "ftp://files.example.com [200]",
            "no url at all",
            "",
            "[200] https://late.example.com",
        ];
        assert!(clean_lines(lines).is_empty());
    }

    #[test]
    fn drops_lines_that_are_pure_escape_noise() {
        assert!(clean_lines(["\x1b[2K\x1b[0m"]).is_empty());
    }
}
