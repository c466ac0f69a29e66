//! Error types.

use std::path::PathBuf;

/// Error from converting a single markdown document.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Input that cannot be converted: unbalanced inline delimiters, a code
    /// block missing a fence, a quote line without its marker, or a heading
    /// with no text.
    #[error("malformed markdown: {0}")]
    MalformedMarkdown(String),

    /// The document has no level-1 heading to use as its title.
    #[error("no level-1 heading found")]
    TitleNotFound,
}

impl Error {
    pub(crate) fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedMarkdown(message.into())
    }
}

/// Error from building a site.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    /// I/O error on a specific path.
    #[error("I/O error on {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A markdown page failed to convert.
    #[error("failed to render {}", .path.display())]
    Render {
        path: PathBuf,
        #[source]
        source: Error,
    },

    /// Configuration file could not be parsed.
    #[error("invalid config file {}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// A directory the build needs does not exist.
    #[error("directory not found: {}", .0.display())]
    MissingDirectory(PathBuf),
}

impl SiteError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
