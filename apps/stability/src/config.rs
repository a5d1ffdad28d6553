//! # Config Module
//!
//! Server settings. Values come from command-line flags with environment
//! fallbacks (see [`crate::cli`]); there is no config file.

use crate::error::AppError;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};

/// Default listening port.
pub const DEFAULT_PORT: u16 = 8080;

/// Default build output directory.
pub const DEFAULT_DIST_DIR: &str = "dist";

/// Name of the single-page entry document.
pub const INDEX_FILE: &str = "index.html";

/// Settings for the static file server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    pub dist_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            dist_dir: PathBuf::from(DEFAULT_DIST_DIR),
        }
    }
}

impl ServerConfig {
    /// Socket address to bind.
    #[must_use]
    pub fn address(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Path of `index.html` inside the build directory.
    #[must_use]
    pub fn index_path(&self) -> PathBuf {
        index_path(&self.dist_dir)
    }

    /// Fail unless the build directory exists.
    pub fn ensure_dist(&self) -> Result<(), AppError> {
        if self.dist_dir.is_dir() {
            Ok(())
        } else {
            Err(AppError::DistMissing(self.dist_dir.clone()))
        }
    }
}

/// Path of `index.html` inside `dist_dir`.
#[must_use]
pub fn index_path(dist_dir: &Path) -> PathBuf {
    dist_dir.join(INDEX_FILE)
}

// =============================================================================
// TESTS
// =============================================================================
