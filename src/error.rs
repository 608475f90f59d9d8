use std::io;

#[derive(Debug, thiserror::Error)]
pub enum OsdError {
    #[error("volume OSD window not found after {attempts} attempts")]
    NotFound { attempts: u32 },

    #[error("{call} failed: {source}")]
    Os {
        call: &'static str,
        #[source]
        source: io::Error,
    },

    #[cfg(not(windows))]
    #[error("the volume OSD can only be toggled on Windows")]
    Unsupported,
}

impl OsdError {
    pub fn os(call: &'static str, source: impl Into<io::Error>) -> Self {
        Self::Os { call, source: source.into() }
    }
}

pub type Result<T> = std::result::Result<T, OsdError>;
