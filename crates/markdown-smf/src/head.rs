use std::path::PathBuf;

use tracing::warn;

use crate::convert::{HEAD_LINE_LIMIT, PLACEHOLDER_HEAD};
use crate::error::ConvertResult;

/// Where the sender's address block comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeadSource {
    File(PathBuf),
    Inline(Vec<String>),
    Placeholder,
}

/// Reads the address block, keeping at most the first seven lines.
pub fn load_head(source: &HeadSource) -> ConvertResult<Vec<String>> {
    let lines: Vec<String> = match source {
        HeadSource::File(path) => std::fs::read_to_string(path)?
            .lines()
            .map(str::to_string)
            .collect(),
        HeadSource::Inline(lines) => lines.clone(),
        HeadSource::Placeholder => PLACEHOLDER_HEAD.iter().map(|line| line.to_string()).collect(),
    };

    if lines.len() > HEAD_LINE_LIMIT {
        warn!(
            supplied = lines.len(),
            kept = HEAD_LINE_LIMIT,
            "head block truncated"
        );
    }
    Ok(lines.into_iter().take(HEAD_LINE_LIMIT).collect())
}
