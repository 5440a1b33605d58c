use std::fmt;

use crate::presentation::formatters::dimmed;
use crate::presentation::view_models::{ConfigInitViewModel, ConfigViewModel, Style};

pub struct ConfigView<'a> {
    data: &'a ConfigViewModel,
    style: Style,
}

impl<'a> ConfigView<'a> {
    pub fn new(data: &'a ConfigViewModel, style: Style) -> Self {
        Self { data, style }
    }
}

impl<'a> fmt::Display for ConfigView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let origin = if self.data.exists {
            format!("# {}", self.data.path)
        } else {
            format!("# {} (not found, using defaults)", self.data.path)
        };
        writeln!(f, "{}", dimmed(&origin, self.style))?;
        write!(f, "{}", self.data.toml)
    }
}

pub struct ConfigInitView<'a> {
    data: &'a ConfigInitViewModel,
}

impl<'a> ConfigInitView<'a> {
    pub fn new(data: &'a ConfigInitViewModel, _style: Style) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for ConfigInitView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Wrote default config to {}", self.data.path)
    }
}
