use serde::Serialize;

use crate::error::{Error, Result};
use crate::matcher::MatchResult;

const HEADER: &str = "Znalezione formy oboczne:";
const NOTHING_FOUND: &str = "Nie znaleziono form obocznych, które znajdują się w słowniku.";

#[derive(Debug, Clone, Default, Serialize)]
pub struct Report {
    pub groups_checked: usize,
    pub results: Vec<MatchResult>,
}

impl Report {
    #[must_use]
    pub const fn new(groups_checked: usize, results: Vec<MatchResult>) -> Self {
        Self {
            groups_checked,
            results,
        }
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Two lines per result: the dictionary group, then the forms found.
    pub fn render_text(&self) -> String {
        if self.results.is_empty() {
            return format!("{NOTHING_FOUND}\n");
        }

        let mut out = format!("{HEADER}\n\n");
        for result in &self.results {
            out.push_str(&format!(
                "Grupa ze słownika: {}\nZnaleziono w tekście: {}\n\n",
                result.group,
                result.found.join(", ")
            ));
        }
        out
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| Error::Report(e.to_string()))
    }
}
