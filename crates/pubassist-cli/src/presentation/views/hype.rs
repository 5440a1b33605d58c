use std::fmt;

use crate::presentation::formatters::{format_value, heading, truncate};
use crate::presentation::view_models::{HypeViewModel, Style};

const COLUMN_WIDTH: usize = 12;

pub struct HypeView<'a> {
    data: &'a HypeViewModel,
    style: Style,
}

impl<'a> HypeView<'a> {
    pub fn new(data: &'a HypeViewModel, style: Style) -> Self {
        Self { data, style }
    }
}

impl<'a> fmt::Display for HypeView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let matrix = &self.data.matrix;

        if !self.data.publications.is_empty() {
            let names: Vec<&str> = self
                .data
                .publications
                .iter()
                .map(|p| p.name.as_str())
                .collect();
            writeln!(f, "Within: {}", names.join(", "))?;
        }

        if matrix.labels().is_empty() {
            return writeln!(f, "No data.");
        }

        let mut header = format!("{:<8}", "PERIOD");
        for name in matrix.series_names() {
            header.push_str(&format!(
                " {:>width$}",
                truncate(name, COLUMN_WIDTH),
                width = COLUMN_WIDTH
            ));
        }
        writeln!(f, "{}", heading(header.trim_end(), self.style))?;

        for (label, row) in matrix.cells() {
            let mut line = format!("{:<8}", label);
            for value in row {
                line.push_str(&format!(
                    " {:>width$}",
                    format_value(Some(*value)),
                    width = COLUMN_WIDTH
                ));
            }
            writeln!(f, "{}", line)?;
        }

        Ok(())
    }
}
