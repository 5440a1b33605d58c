use super::HandlerContext;
use crate::presentation::CommandResultViewModel;
use crate::presentation::view_models::{ConfigInitViewModel, ConfigViewModel};
use anyhow::{Result, bail};
use pubassist_runtime::Config;

pub fn show(ctx: &HandlerContext) -> Result<()> {
    let path = ctx.config_path();
    ctx.render(CommandResultViewModel::new(ConfigViewModel {
        path: path.display().to_string(),
        exists: path.exists(),
        toml: toml::to_string_pretty(&ctx.config)?,
        config: ctx.config.clone(),
    }))
}

/// Write defaults to the context's config path.
pub fn init(ctx: &HandlerContext, force: bool) -> Result<()> {
    let path = ctx.config_path();
    if path.exists() && !force {
        bail!(
            "config already exists at {} (use --force to overwrite)",
            path.display()
        );
    }

    Config::default().save_to(path)?;
    ctx.render(CommandResultViewModel::new(ConfigInitViewModel {
        path: path.display().to_string(),
    }))
}
