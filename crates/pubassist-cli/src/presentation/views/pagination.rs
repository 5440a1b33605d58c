use std::fmt;

use crate::presentation::formatters::{heading, page_summary, strip_line};
use crate::presentation::view_models::{Style, StripViewModel};

pub struct StripView<'a> {
    data: &'a StripViewModel,
    style: Style,
}

impl<'a> StripView<'a> {
    pub fn new(data: &'a StripViewModel, style: Style) -> Self {
        Self { data, style }
    }
}

impl<'a> fmt::Display for StripView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.data.last_page == 0 {
            return writeln!(f, "No results.");
        }

        let title = format!(
            "{} ({} per page)",
            page_summary(self.data.page, self.data.last_page, self.data.item_count),
            self.data.page_size
        );
        writeln!(f, "{}", heading(&title, self.style))?;
        writeln!(f, "{}", strip_line(&self.data.strip))
    }
}
