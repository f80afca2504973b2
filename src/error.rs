use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures that end a run before anything is reported.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("path does not exist: {}", .0.display())]
    PathNotFound(PathBuf),

    #[error("path is neither a file nor a directory: {}", .0.display())]
    UnsupportedPath(PathBuf),

    #[error("cannot access {}: {source}", path.display())]
    Inaccessible {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
