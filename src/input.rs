//! Assertion source: positional argument, file, or stdin (`-`).

use anyhow::anyhow;
use std::io::Read;
use std::path::Path;

pub fn read_assertion(inline: Option<&str>, file: Option<&Path>) -> anyhow::Result<String> {
    match (inline, file) {
        (Some(_), Some(_)) => Err(anyhow!("Pass the assertion inline or with --file, not both")),
        (Some(s), None) => Ok(s.to_string()),
        (None, Some(p)) if p == Path::new("-") => {
            let mut s = String::new();
            std::io::stdin()
                .read_to_string(&mut s)
                .map_err(|e| anyhow!("Failed to read assertion from stdin: {}", e))?;
            Ok(s)
        }
        (None, Some(p)) => std::fs::read_to_string(p)
            .map_err(|e| anyhow!("Failed to read assertion {}: {}", p.display(), e)),
        (None, None) => Err(anyhow!("No assertion given (pass it as an argument or use --file)")),
    }
}
