use anyhow::{Context, Result, bail};
use log::{debug, info};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::platform::{Os, PlatformKey};
use crate::runtime::Runtime;

mod paths;

use paths::{dest_path, source_path};

/// Mode applied to the installed binary on non-Windows targets.
const EXECUTABLE_MODE: u32 = 0o755;

#[derive(Debug, Error)]
pub enum InstallError {
    #[error("Binary not found: {}", .0.display())]
    BinaryNotFound(PathBuf),
}

/// Install the catalog entry matching the running platform under its
/// canonical name.
#[tracing::instrument(skip(runtime))]
pub fn install<R: Runtime>(runtime: R, catalog_dir: &Path, tool: &str) -> Result<()> {
    if tool.is_empty() {
        bail!("Tool name must not be empty");
    }

    let key = PlatformKey::detect()?;
    println!("Platform: {}", key);

    run(&runtime, catalog_dir, tool, key)
}

/// Install for an explicit platform key.
///
/// The source entry is copied over whatever is at the destination; a
/// partially written destination from an earlier failure is simply
/// overwritten on the next run.
#[tracing::instrument(skip(runtime))]
pub fn run<R: Runtime>(
    runtime: &R,
    catalog_dir: &Path,
    tool: &str,
    key: PlatformKey,
) -> Result<()> {
    let source = source_path(catalog_dir, tool, key);
    let dest = dest_path(catalog_dir, tool, key);

    if !runtime.exists(&source) {
        return Err(InstallError::BinaryNotFound(source).into());
    }

    debug!("Copying {:?} to {:?}", source, dest);
    runtime
        .copy(&source, &dest)
        .with_context(|| format!("Failed to install {:?}", dest))?;

    if key.os != Os::Windows {
        runtime
            .set_permissions(&dest, EXECUTABLE_MODE)
            .with_context(|| format!("Failed to mark {:?} executable", dest))?;
    }

    info!("Installed {:?}", dest);
    println!("✓ {} installed successfully!", tool);

    Ok(())
}
