use std::net::SocketAddr;
use std::path::PathBuf;

use crate::error::ServerError;

/// Server configuration. Built in `main` with fixed defaults; the server
/// reads no environment variables and no config files.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address the HTTP listener binds to.
    pub bind_addr: SocketAddr,
    /// Directory served under the `/static` mount.
    pub static_root: PathBuf,
    /// File name under `static_root` returned for `/`.
    pub index_file: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8000)),
            static_root: PathBuf::from("static"),
            index_file: "index.html".to_string(),
        }
    }
}

impl ServerConfig {
    /// Full path of the entry document served for `/`.
    pub fn entry_document(&self) -> PathBuf {
        self.static_root.join(&self.index_file)
    }

    /// Fail-fast startup check. The static root and entry document must
    /// exist before the listener starts; running with a broken mount is
    /// worse than refusing to start.
    pub fn validate(&self) -> Result<(), ServerError> {
        if !self.static_root.is_dir() {
            return Err(ServerError::StaticRootMissing(self.static_root.clone()));
        }
        let entry = self.entry_document();
        if !entry.is_file() {
            return Err(ServerError::EntryDocumentMissing(entry));
        }
        Ok(())
    }
}
