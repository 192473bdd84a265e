use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use sdstats::{parse_sample, ParsedSample};
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to read stdin")]
    Stdin(#[source] io::Error),
    #[error("{count} input value(s) are not numbers, first was {first:?}")]
    Rejected { count: usize, first: String },
}

/// Splits free-form text into value tokens.
pub fn tokenize(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| c == ',' || c == ';' || c.is_whitespace())
        .filter(|token| !token.is_empty())
}

fn read_stdin() -> Result<String, InputError> {
    let mut text = String::new();
    io::stdin()
        .read_to_string(&mut text)
        .map_err(InputError::Stdin)?;
    Ok(text)
}

fn read_source(path: &Path) -> Result<String, InputError> {
    if path == Path::new("-") {
        return read_stdin();
    }
    fs::read_to_string(path).map_err(|source| InputError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Collects the raw tokens from positional values, files, or stdin when neither is given.
pub fn gather_tokens(values: &[String], files: &[PathBuf]) -> Result<Vec<String>, InputError> {
    let mut tokens: Vec<String> = values
        .iter()
        .flat_map(|value| tokenize(value))
        .map(str::to_string)
        .collect();
    debug!(count = tokens.len(), "tokens from arguments");

    for path in files {
        let text = read_source(path)?;
        let before = tokens.len();
        tokens.extend(tokenize(&text).map(str::to_string));
        debug!(path = %path.display(), count = tokens.len() - before, "tokens from file");
    }

    if values.is_empty() && files.is_empty() {
        let text = read_stdin()?;
        tokens.extend(tokenize(&text).map(str::to_string));
        debug!(count = tokens.len(), "tokens from stdin");
    }

    Ok(tokens)
}

/// Validates every token, logging rejects. In strict mode any reject is an error.
pub fn validate_tokens(tokens: &[String], strict: bool) -> Result<ParsedSample, InputError> {
    let sample = parse_sample(tokens);
    for rejected in &sample.rejected {
        warn!(index = rejected.index, raw = %rejected.raw, "skipping non-numeric value");
    }
    if strict {
        if let Some(first) = sample.rejected.first() {
            return Err(InputError::Rejected {
                count: sample.rejected.len(),
                first: first.raw.clone(),
            });
        }
    }
    Ok(sample)
}
