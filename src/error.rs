// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Playlist(PlaylistError),
    Engine(EngineError),
}

/// Errors reported by the playlist cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaylistError {
    /// A new playlist was requested with zero entries.
    Empty,
    /// The current item was requested while the playlist is empty.
    NoCurrent,
}

/// Errors reported by the playback engine capability.
///
/// `Init` is the only error that is fatal to the process, and only at
/// startup. `Load` and `Command` are recovered locally: the shell stays
/// usable and the user can retry.
#[derive(Debug, Clone)]
pub enum EngineError {
    /// The engine itself could not be brought up (missing runtime, no
    /// suitable playback element).
    Init(String),

    /// A media source could not be opened or prerolled.
    Load { source: String, reason: String },

    /// A transport command was rejected while the state machine expected
    /// it to succeed.
    Command {
        command: &'static str,
        reason: String,
    },
}

impl EngineError {
    pub fn load(source: impl fmt::Display, reason: impl Into<String>) -> Self {
        EngineError::Load {
            source: source.to_string(),
            reason: reason.into(),
        }
    }

    pub fn command(command: &'static str, reason: impl Into<String>) -> Self {
        EngineError::Command {
            command,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for PlaylistError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaylistError::Empty => write!(f, "playlist is empty"),
            PlaylistError::NoCurrent => write!(f, "playlist has no current item"),
        }
    }
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::Init(reason) => {
                write!(f, "playback engine unavailable: {}", reason)
            }
            EngineError::Load { source, reason } => {
                write!(f, "cannot open {}: {}", source, reason)
            }
            EngineError::Command { command, reason } => {
                write!(f, "{} rejected by engine: {}", command, reason)
            }
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Playlist(e) => write!(f, "Playlist Error: {}", e),
            Error::Engine(e) => write!(f, "Engine Error: {}", e),
        }
    }
}

impl From<PlaylistError> for Error {
    fn from(err: PlaylistError) -> Self {
        Error::Playlist(err)
    }
}

impl From<EngineError> for Error {
    fn from(err: EngineError) -> Self {
        Error::Engine(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
