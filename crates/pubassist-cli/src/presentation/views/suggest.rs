use std::fmt;

use crate::presentation::view_models::{Style, SuggestViewModel};
use crate::presentation::formatters::dimmed;

pub struct SuggestView<'a> {
    data: &'a SuggestViewModel,
    style: Style,
}

impl<'a> SuggestView<'a> {
    pub fn new(data: &'a SuggestViewModel, style: Style) -> Self {
        Self { data, style }
    }
}

impl<'a> fmt::Display for SuggestView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.data.query.is_empty() {
            return Ok(());
        }
        if self.data.suggestions.is_empty() {
            return writeln!(f, "No {} matching \"{}\".", self.data.target, self.data.query);
        }

        for suggestion in &self.data.suggestions {
            writeln!(
                f,
                "{}  {}",
                suggestion.label,
                dimmed(&format!("#{}", suggestion.id), self.style)
            )?;
        }
        Ok(())
    }
}
