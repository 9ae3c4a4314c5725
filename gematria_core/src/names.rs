//! Combined calculation over several names (first name, father's name, ...).

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{GematriaError, Result};
use crate::{GematriaResult, Method, calculate, is_hebrew_text};

/// Maximum number of names accepted in one calculation.
pub const MAX_NAMES: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameResult {
    pub text: String,
    /// Whether the input contained Hebrew at all; `false` means the name
    /// contributed nothing and the caller may want to warn.
    pub hebrew: bool,
    #[serde(flatten)]
    pub result: GematriaResult,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamesResult {
    pub method: Method,
    pub names: Vec<NameResult>,
    pub total: u64,
}

impl NamesResult {
    /// Names that contain no Hebrew characters.
    pub fn non_hebrew(&self) -> impl Iterator<Item = &NameResult> {
        self.names.iter().filter(|n| !n.hebrew)
    }
}

/// Calculate each name separately and sum the totals.
pub fn calculate_names<S: AsRef<str>>(names: &[S], method: Method) -> Result<NamesResult> {
    if names.is_empty() {
        return Err(GematriaError::NoNames);
    }
    if names.len() > MAX_NAMES {
        return Err(GematriaError::TooManyNames {
            given: names.len(),
            max: MAX_NAMES,
        });
    }

    let names: Vec<NameResult> = names
        .iter()
        .map(|name| {
            let text = name.as_ref();
            let hebrew = is_hebrew_text(text);
            if !hebrew {
                warn!("Name '{text}' contains no Hebrew characters");
            }
            NameResult {
                text: text.to_string(),
                hebrew,
                result: calculate(text, method),
            }
        })
        .collect();

    let total = names.iter().map(|n| n.result.total).sum();
    debug!("Combined {method} gematria of {} names: {total}", names.len());

    Ok(NamesResult {
        method,
        names,
        total,
    })
}
