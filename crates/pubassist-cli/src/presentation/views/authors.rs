use std::fmt;

use crate::presentation::formatters::{dimmed, heading, page_summary, strip_line, truncate};
use crate::presentation::view_models::Style;
use pubassist_runtime::{AuthorDetails, AuthorSearchView, Section};
use pubassist_types::Article;

const TITLE_WIDTH: usize = 72;

fn article_line(article: &Article) -> String {
    match article.issue_date {
        Some(date) => format!("{}  ({})", truncate(&article.title, TITLE_WIDTH), date),
        None => truncate(&article.title, TITLE_WIDTH),
    }
}

fn unavailable<T>(f: &mut fmt::Formatter, section: &Section<T>) -> fmt::Result {
    match &section.error {
        Some(error) => writeln!(f, "  unavailable: {}", error),
        None => writeln!(f, "  unavailable"),
    }
}

// --------------------------------------------------------
// Author search
// --------------------------------------------------------

pub struct AuthorSearchResultView<'a> {
    data: &'a AuthorSearchView,
    style: Style,
}

impl<'a> AuthorSearchResultView<'a> {
    pub fn new(data: &'a AuthorSearchView, style: Style) -> Self {
        Self { data, style }
    }
}

impl<'a> fmt::Display for AuthorSearchResultView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let Some(results) = &self.data.results else {
            return writeln!(f, "Enter an author name to search.");
        };
        if results.items.is_empty() {
            return writeln!(f, "No authors matching \"{}\".", self.data.query);
        }

        let title = format!(
            "Authors matching \"{}\" ({})",
            self.data.query,
            page_summary(results.page, results.last_page, results.item_count)
        );
        writeln!(f, "{}", heading(&title, self.style))?;
        writeln!(f)?;

        for hit in &results.items {
            writeln!(
                f,
                "{}  {}",
                hit.author.full_name,
                dimmed(&format!("#{}", hit.author.id), self.style)
            )?;
            for article in &hit.most_cited {
                writeln!(f, "    - {}", article_line(article))?;
            }
        }

        writeln!(f)?;
        writeln!(f, "{}", strip_line(&results.strip))
    }
}

// --------------------------------------------------------
// Author details
// --------------------------------------------------------

pub struct AuthorDetailsView<'a> {
    data: &'a AuthorDetails,
    style: Style,
}

impl<'a> AuthorDetailsView<'a> {
    pub fn new(data: &'a AuthorDetails, style: Style) -> Self {
        Self { data, style }
    }
}

impl<'a> fmt::Display for AuthorDetailsView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = self
            .data
            .author
            .data
            .as_ref()
            .map_or_else(|| format!("Author #{}", self.data.id), |a| a.full_name.clone());
        writeln!(f, "{}", heading(&name, self.style))?;
        writeln!(f)?;

        match &self.data.articles.data {
            Some(articles) => {
                writeln!(f, "{}", heading(&format!("Articles ({})", articles.len()), self.style))?;
                for article in articles {
                    writeln!(f, "  - {}", article_line(article))?;
                }
            }
            None => {
                writeln!(f, "{}", heading("Articles", self.style))?;
                unavailable(f, &self.data.articles)?;
            }
        }
        writeln!(f)?;

        match &self.data.coreferrers.data {
            Some(coreferrers) if coreferrers.is_empty() => {
                writeln!(f, "{}", heading("Co-referrers", self.style))?;
                writeln!(f, "  none")?;
            }
            Some(coreferrers) => {
                writeln!(f, "{}", heading("Co-referrers", self.style))?;
                writeln!(f, "  {:<40} {:>5} {:>8} {:>7}", "AUTHOR", "REFS", "BACKREFS", "WEIGHT")?;
                for coreferrer in coreferrers {
                    writeln!(
                        f,
                        "  {:<40} {:>5} {:>8} {:>7}",
                        truncate(&coreferrer.author.full_name, 40),
                        coreferrer.references.len(),
                        coreferrer.backreferences.len(),
                        coreferrer.weight()
                    )?;
                }
            }
            None => {
                writeln!(f, "{}", heading("Co-referrers", self.style))?;
                unavailable(f, &self.data.coreferrers)?;
            }
        }

        Ok(())
    }
}
