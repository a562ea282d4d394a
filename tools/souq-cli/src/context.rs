//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use souq_commerce::catalog::StaticCatalog;
use souq_commerce::order::OrderChannel;
use souq_commerce::{Currency, Lang, Storefront};

use crate::collaborators::{ConsoleNotifier, SystemLinkOpener};
use crate::config::CliConfig;
use crate::output::Output;

/// Config file names, in lookup order.
pub const CONFIG_NAMES: [&str; 3] = ["souq.toml", ".souq.toml", "souq.json"];

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
    /// Interface language (flag, else config).
    pub lang: Lang,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, lang: Option<Lang>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let config = if let Some(path) = config_path {
            CliConfig::load(path)?
        } else {
            // Try to find config in current directory or parent directories
            find_config(&cwd)
                .map(|path| CliConfig::load(&path.to_string_lossy()))
                .transpose()?
                .unwrap_or_default()
        };

        let lang = lang.unwrap_or_else(|| config.store.lang());
        Ok(Self {
            config,
            output,
            cwd,
            lang,
        })
    }

    pub fn currency(&self) -> Currency {
        self.config.store.currency()
    }

    /// Load the configured catalog, or the built-in one.
    pub fn catalog(&self) -> Result<StaticCatalog> {
        match self.config.store.catalog_path {
            Some(ref path) => {
                let path = self.resolve_path(path);
                self.output
                    .debug(&format!("Loading catalog: {}", path.display()));
                Ok(StaticCatalog::from_path(&path)?)
            }
            None => Ok(StaticCatalog::builtin()?),
        }
    }

    /// The configured WhatsApp order channel.
    pub fn channel(&self) -> Result<OrderChannel> {
        OrderChannel::new(&self.config.store.whatsapp_number)
            .context("Invalid store.whatsapp_number in config")
    }

    /// A storefront session wired to the console.
    pub fn storefront(&self, open_links: bool) -> Result<Storefront<StaticCatalog>> {
        Ok(Storefront::new(
            self.catalog()?,
            self.channel()?,
            Box::new(SystemLinkOpener::new(self.output.clone(), open_links)),
            Box::new(ConsoleNotifier::new(self.output.clone())),
        )
        .with_lang(self.lang))
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        if PathBuf::from(path).is_absolute() {
            PathBuf::from(path)
        } else {
            self.cwd.join(path)
        }
    }
}

/// Find the nearest config file, walking up from `start`.
pub fn find_config(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        for name in &CONFIG_NAMES {
            let config_path = current.join(name);
            if config_path.exists() {
                return Some(config_path);
            }
        }

        if !current.pop() {
            break;
        }
    }

    None
}
