use std::fmt;

/// Rejected engine configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Too narrow for a piece to spawn and move, or wider than supported.
    InvalidWidth(u16),
    InvalidHeight(u16),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidWidth(w) => write!(
                f,
                "invalid board width {} (expected {}..={})",
                w,
                crate::config::MIN_WIDTH,
                crate::config::MAX_DIMENSION
            ),
            ConfigError::InvalidHeight(h) => write!(
                f,
                "invalid board height {} (expected {}..={})",
                h,
                crate::config::MIN_HEIGHT,
                crate::config::MAX_DIMENSION
            ),
        }
    }
}

impl std::error::Error for ConfigError {}
