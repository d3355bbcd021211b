//! Command handlers, one module per subcommand.

pub mod completions;
pub mod config;
pub mod generate;
pub mod init;
pub mod list;

use tracing::{debug, info};
use vimkit_adapters::{BuiltinCatalog, CatalogOverlayLoader, OverlayCatalog};
use vimkit_core::application::TemplateCatalog;

use crate::{config::AppConfig, error::CliResult};

/// Built-in catalog, with overlays from `paths.catalog_dir` when configured.
pub(crate) fn load_catalog(config: &AppConfig) -> CliResult<Box<dyn TemplateCatalog>> {
    let Some(dir) = config.catalog_dir() else {
        debug!("no catalog_dir configured, using built-in catalog");
        return Ok(Box::new(BuiltinCatalog::new()));
    };

    let overlay = CatalogOverlayLoader::new(dir).load_all()?;
    let catalog = OverlayCatalog::new(overlay);
    info!(
        dir = %dir.display(),
        entries = catalog.overlay_len(),
        "catalog overlays loaded"
    );
    Ok(Box::new(catalog))
}
