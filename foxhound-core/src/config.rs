//! Game configuration

use crate::board::{check_dimension, DEFAULT_DIM, MAX_DIM, MIN_DIM};

/// Settings fixed at game start
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameConfig {
    /// Board side length
    pub dim: i8,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self { dim: DEFAULT_DIM }
    }
}

impl GameConfig {
    /// Config from an optional dimension argument
    ///
    /// A missing argument gives the default board. An argument that is not
    /// a number, or not within the supported range, is reported and the
    /// default is used instead.
    pub fn from_arg(arg: Option<&str>) -> Self {
        let Some(arg) = arg else {
            return Self::default();
        };

        match parse_dimension(arg) {
            Some(dim) => Self { dim },
            None => {
                tracing::warn!(
                    "Invalid dimension argument {:?} (must be between {} and {}), using default {}",
                    arg,
                    MIN_DIM,
                    MAX_DIM,
                    DEFAULT_DIM
                );
                Self::default()
            }
        }
    }
}

fn parse_dimension(arg: &str) -> Option<i8> {
    let dim: i8 = arg.trim().parse().ok()?;
    check_dimension(dim).ok()?;
    Some(dim)
}
