use std::fmt;

use crate::presentation::formatters::{
    dimmed, format_score, format_value, heading, page_summary, single_line, strip_line, truncate,
};
use crate::presentation::view_models::{ArticlePageViewModel, JournalPageViewModel, Style};

const TITLE_WIDTH: usize = 72;
const ABSTRACT_WIDTH: usize = 160;

// --------------------------------------------------------
// Article suggestions
// --------------------------------------------------------

pub struct ArticlePageView<'a> {
    data: &'a ArticlePageViewModel,
    style: Style,
}

impl<'a> ArticlePageView<'a> {
    pub fn new(data: &'a ArticlePageViewModel, style: Style) -> Self {
        Self { data, style }
    }
}

impl<'a> fmt::Display for ArticlePageView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let results = &self.data.results;
        if results.items.is_empty() {
            return writeln!(f, "No matching articles.");
        }

        let title = format!(
            "Articles for \"{}\" ({})",
            truncate(&single_line(&self.data.text), 40),
            page_summary(results.page, results.last_page, results.item_count)
        );
        writeln!(f, "{}", heading(&title, self.style))?;
        writeln!(f)?;

        for (offset, result) in results.items.iter().enumerate() {
            let article = &result.article;
            writeln!(
                f,
                "{:>4}. {:<width$}  {}",
                self.data.first_rank + offset,
                truncate(&single_line(&article.title), TITLE_WIDTH),
                format_score(result.score),
                width = TITLE_WIDTH
            )?;

            let mut meta = vec![article.identifier.clone()];
            if let Some(date) = article.issue_date {
                meta.push(date.to_string());
            }
            writeln!(f, "      {}", dimmed(&meta.join("  "), self.style))?;

            if !article.abstract_text.trim().is_empty() {
                writeln!(
                    f,
                    "      {}",
                    truncate(&single_line(&article.abstract_text), ABSTRACT_WIDTH)
                )?;
            }
        }

        writeln!(f)?;
        writeln!(f, "{}", strip_line(&results.strip))
    }
}

// --------------------------------------------------------
// Journal suggestions
// --------------------------------------------------------

pub struct JournalPageView<'a> {
    data: &'a JournalPageViewModel,
    style: Style,
}

impl<'a> JournalPageView<'a> {
    pub fn new(data: &'a JournalPageViewModel, style: Style) -> Self {
        Self { data, style }
    }
}

impl<'a> fmt::Display for JournalPageView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let results = &self.data.results;
        if results.items.is_empty() {
            return writeln!(f, "No matching journals.");
        }

        let title = format!(
            "Journals for \"{}\" ({})",
            truncate(&single_line(&self.data.text), 40),
            page_summary(results.page, results.last_page, results.item_count)
        );
        writeln!(f, "{}", heading(&title, self.style))?;
        writeln!(f)?;

        for (offset, row) in results.items.iter().enumerate() {
            let journal = &row.journal;
            let kind = if journal.is_journal { "journal" } else { "conference" };
            writeln!(
                f,
                "{:>4}. {:<width$}  {}",
                self.data.first_rank + offset,
                truncate(&journal.name, TITLE_WIDTH),
                format_score(journal.score),
                width = TITLE_WIDTH
            )?;
            writeln!(
                f,
                "      {}",
                dimmed(&format!("{}  {}", journal.identifier, kind), self.style)
            )?;

            if !row.rankings.is_empty() {
                let rankings: Vec<String> = row
                    .rankings
                    .iter()
                    .map(|r| format!("{} {} ({})", r.kind, format_value(r.value), r.date))
                    .collect();
                writeln!(f, "      {}", rankings.join(" · "))?;
            }
        }

        writeln!(f)?;
        writeln!(f, "{}", strip_line(&results.strip))
    }
}
