// Comma-separated user input, e.g. "5, 3, 8, 1" or "a, b, c"

use crate::error::{ExplorerError, Result};

pub fn parse_integers(text: &str) -> Result<Vec<i64>> {
    tokens(text)?
        .into_iter()
        .enumerate()
        .map(|(position, token)| {
            token.parse::<i64>().map_err(|_| ExplorerError::Parse {
                token: token.to_string(),
                position,
            })
        })
        .collect()
}

pub fn parse_elements(text: &str) -> Result<Vec<String>> {
    Ok(tokens(text)?.into_iter().map(str::to_string).collect())
}

fn tokens(text: &str) -> Result<Vec<&str>> {
    if text.trim().is_empty() {
        return Err(ExplorerError::EmptyInput);
    }
    text.split(',')
        .map(str::trim)
        .enumerate()
        .map(|(position, token)| {
            if token.is_empty() {
                Err(ExplorerError::Parse { token: String::new(), position })
            } else {
                Ok(token)
            }
        })
        .collect()
}
