//! Loading the seed registry at startup.

use std::path::{Path, PathBuf};

use cap_std::{ambient_authority, fs::Dir};
use example_data::{RegistryError, SeedRegistry};
use thiserror::Error;
use tracing::info;

use super::{ConversionError, PortalCatalogue};
use crate::config::PortalSettings;
use crate::domain::unread_count;

/// Errors returned while loading the portal's master lists.
#[derive(Debug, Error)]
pub enum StartupError {
    /// Registry file could not be read.
    #[error("failed to read registry at {path}: {source}")]
    RegistryRead {
        /// Path to the registry file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// Registry parsing failed.
    #[error("registry parse error: {0}")]
    Registry(#[from] RegistryError),
    /// A seed record failed domain validation.
    #[error("seed conversion error: {0}")]
    Conversion(#[from] ConversionError),
}

/// Load the registry named by `settings` and log a summary.
pub fn load_portal_catalogue(settings: &PortalSettings) -> Result<PortalCatalogue, StartupError> {
    let path = settings.registry_path();
    let catalogue = load_catalogue(&path)?;
    info!(
        registry = %path.display(),
        services = catalogue.services.len(),
        pools = catalogue.pools.len(),
        orders = catalogue.orders.len(),
        messages = catalogue.messages.len(),
        unread = unread_count(&catalogue.messages),
        tier = %catalogue.membership.current_tier().name,
        "portal catalogue loaded"
    );
    Ok(catalogue)
}

/// Read, parse and convert the registry at `path`.
pub fn load_catalogue(path: &Path) -> Result<PortalCatalogue, StartupError> {
    let registry = read_registry(path)?;
    Ok(PortalCatalogue::from_registry(&registry)?)
}

fn read_registry(path: &Path) -> Result<SeedRegistry, StartupError> {
    let read_error = |source: std::io::Error| StartupError::RegistryRead {
        path: path.to_path_buf(),
        source,
    };
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let file_name = path.file_name().ok_or_else(|| {
        read_error(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "registry path must be a file",
        ))
    })?;
    let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(read_error)?;
    let contents = dir.read_to_string(Path::new(file_name)).map_err(read_error)?;
    Ok(SeedRegistry::from_json(&contents)?)
}
