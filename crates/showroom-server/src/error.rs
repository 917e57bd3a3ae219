use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur during server startup.
///
/// Requests have no application-level failure modes of their own: a missing
/// static file is answered with a plain 404 by the static mount, and the
/// catalog endpoint cannot fail. Everything here aborts startup instead.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("static root '{0}' does not exist or is not a directory")]
    StaticRootMissing(PathBuf),

    #[error("entry document '{0}' not found")]
    EntryDocumentMissing(PathBuf),
}
