use crate::presentation::{CommandResultViewModel, ConsoleRenderer, CreateView};
use crate::types::OutputFormat;
use anyhow::Result;
use pubassist_runtime::{ApiClient, BrowseSettings, Config, HttpTransport};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Resolved configuration plus presentation utilities shared by handlers
pub struct HandlerContext {
    pub config: Config,
    pub config_path: PathBuf,
    pub format: OutputFormat,
}

impl HandlerContext {
    pub fn new(config: Config, config_path: PathBuf, format: OutputFormat) -> Self {
        Self {
            config,
            config_path,
            format,
        }
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn client(&self) -> Result<ApiClient<HttpTransport>> {
        Ok(ApiClient::from_config(&self.config)?)
    }

    pub fn settings(&self) -> BrowseSettings {
        BrowseSettings::from(&self.config.browse)
    }

    /// 1-based rank of the first item on `page`
    pub fn first_rank(&self, page: usize) -> usize {
        (page.max(1) - 1) * self.settings().page_size + 1
    }

    pub fn render<T>(&self, view_model: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView,
    {
        ConsoleRenderer::new(self.format).render(view_model)
    }
}
