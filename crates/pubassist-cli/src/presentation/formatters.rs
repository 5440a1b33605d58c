use super::view_models::Style;
use owo_colors::OwoColorize;
use pubassist_engine::PageStrip;

/// Shorten `text` to at most `max` characters, ending with `…` when cut.
pub fn truncate(text: &str, max: usize) -> String {
    let text = text.trim();
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{}…", kept.trim_end())
}

/// Collapse runs of whitespace (abstracts arrive with hard line breaks).
pub fn single_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

pub fn format_score(score: f64) -> String {
    format!("{:.3}", score)
}

/// Ranking values: integers print without decimals, everything else with up to 5.
pub fn format_value(value: Option<f64>) -> String {
    match value {
        None => "-".to_string(),
        Some(v) if v.fract() == 0.0 => format!("{}", v as i64),
        Some(v) => {
            let text = format!("{:.5}", v);
            text.trim_end_matches('0').trim_end_matches('.').to_string()
        }
    }
}

pub fn heading(text: &str, style: Style) -> String {
    if style.color {
        text.bold().to_string()
    } else {
        text.to_string()
    }
}

pub fn dimmed(text: &str, style: Style) -> String {
    if style.color {
        text.dimmed().to_string()
    } else {
        text.to_string()
    }
}

/// One-line page strip: `‹ … 4 5 [6] 7 … ›`.
pub fn strip_line(strip: &PageStrip) -> String {
    let mut tokens = Vec::new();
    if strip.previous.enabled {
        tokens.push("‹".to_string());
    }
    if strip.more_left.enabled {
        tokens.push("…".to_string());
    }
    for entry in &strip.pages {
        if entry.enabled {
            tokens.push(entry.page_num.to_string());
        } else {
            tokens.push(format!("[{}]", entry.page_num));
        }
    }
    if strip.more_right.enabled {
        tokens.push("…".to_string());
    }
    if strip.next.enabled {
        tokens.push("›".to_string());
    }
    tokens.join(" ")
}

/// "page 2 of 4, 35 results"
pub fn page_summary(page: usize, last_page: usize, item_count: usize) -> String {
    let noun = if item_count == 1 { "result" } else { "results" };
    format!("page {} of {}, {} {}", page, last_page, item_count, noun)
}
