//! Error types for icon copying and verification

use std::{io, path::PathBuf};

use thiserror::Error;

/// Result alias used throughout the library
pub type IconResult<T> = Result<T, IconError>;

/// Fatal failures. A missing source icon during a copy run is not one of
/// these; it is reported as a status line instead.
#[derive(Debug, Error)]
pub enum IconError {
    /// The destination root could not be created
    #[error("failed to create destination directory '{}': {source}", path.display())]
    CreateDestination {
        path:   PathBuf,
        #[source]
        source: io::Error,
    },

    /// An existing source icon could not be read or its copy written
    #[error("failed to copy '{}' to '{}': {source}", from.display(), to.display())]
    Copy {
        from:   PathBuf,
        to:     PathBuf,
        #[source]
        source: io::Error,
    },

    /// Source and destination resolve to the same file
    #[error("'{}' and '{}' are the same file", from.display(), to.display())]
    SameFile { from: PathBuf, to: PathBuf },

    /// Timestamps could not be carried over to a copied icon
    #[error("failed to preserve timestamps on '{}': {source}", path.display())]
    PreserveTimes {
        path:   PathBuf,
        #[source]
        source: io::Error,
    },

    /// File metadata could not be read
    #[error("failed to read metadata for '{}': {source}", path.display())]
    Metadata {
        path:   PathBuf,
        #[source]
        source: io::Error,
    },

    /// An icon required by verification is absent
    #[error("missing icon: {}", path.display())]
    MissingIcon { path: PathBuf },

    /// An icon required by verification exists but could not be read
    #[error("failed to read icon '{}': {source}", path.display())]
    ReadIcon {
        path:   PathBuf,
        #[source]
        source: io::Error,
    },

    /// The settings file could not be read
    #[error("failed to read config file '{}': {source}", path.display())]
    ConfigRead {
        path:   PathBuf,
        #[source]
        source: io::Error,
    },

    /// The settings file is not valid
    #[error("failed to parse config file '{}': {source}", path.display())]
    ConfigParse {
        path:   PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// The status stream could not be written
    #[error("failed to write status output: {0}")]
    Output(#[source] io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_paths() {
        let err = IconError::Copy {
            from:   PathBuf::from("/src/icon-72x72.png"),
            to:     PathBuf::from("/dst/icon-72x72.png"),
            source: io::Error::from(io::ErrorKind::PermissionDenied),
        };
        let message = err.to_string();
        assert!(message.contains("/src/icon-72x72.png"));
        assert!(message.contains("/dst/icon-72x72.png"));
    }

    #[test]
    fn test_missing_icon_message() {
        let err = IconError::MissingIcon { path: PathBuf::from("/src/icon-96x96.png") };
        assert_eq!(err.to_string(), "missing icon: /src/icon-96x96.png");
    }
}
