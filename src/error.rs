use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Kernel(#[from] kernel_lib::Error),

    #[error("cannot read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("cannot write {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("io error: {0}")]
    Io(#[from] io::Error),

    #[error("the path {} doesn't exist", .0.display())]
    PathNotFound(PathBuf),

    #[error("{} and {} should either both be directories or files", .fin.display(), .fout.display())]
    MixedPaths { fin: PathBuf, fout: PathBuf },

    #[error("--fin-fmt and --fout-fmt must be given together")]
    MissingFormat,

    #[error("format string {0:?} has no `{{}}` placeholder")]
    BadFormat(String),

    #[error("bad glob pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("{0}")]
    Glob(#[from] glob::GlobError),
}
