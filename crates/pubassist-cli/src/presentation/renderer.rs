use super::view_models::{CommandResultViewModel, CreateView, Style};
use crate::types::OutputFormat;
use anyhow::Result;
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use serde::Serialize;

/// Writes view models to stdout as JSON or text.
pub struct ConsoleRenderer {
    json_mode: bool,
    style: Style,
}

impl ConsoleRenderer {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            json_mode: format == OutputFormat::Json,
            style: Style {
                color: std::io::stdout().is_terminal(),
            },
        }
    }

    pub fn render<T>(&self, result: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView,
    {
        if self.json_mode {
            println!("{}", serde_json::to_string_pretty(&result)?);
            return Ok(());
        }

        print!("{}", render_text(&result, self.style));
        Ok(())
    }
}

/// Text form of a result, notes last.
pub fn render_text<T>(result: &CommandResultViewModel<T>, style: Style) -> String
where
    T: Serialize + CreateView,
{
    let mut out = result.content.create_view(style).to_string();
    for note in &result.notes {
        if style.color {
            out.push_str(&format!("{} {}\n", "note:".yellow().bold(), note));
        } else {
            out.push_str(&format!("note: {}\n", note));
        }
    }
    out
}
