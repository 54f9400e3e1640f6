//! The fixed set of states a machine may occupy.
//!
//! The allowed set is a closed enumeration and does not depend on the states
//! a configuration declares. A configuration may name other states, but the
//! machine will refuse to enter them.

use std::fmt;
use std::str::FromStr;

/// One of the four states a machine may occupy.
///
/// Parses from and displays as its lowercase identifier.
///
/// # Example
///
/// ```rust
/// use moodset::core::MoodState;
///
/// let state: MoodState = "hungry".parse().unwrap();
/// assert_eq!(state, MoodState::Hungry);
/// assert_eq!(state.name(), "hungry");
/// assert!("Hungry".parse::<MoodState>().is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum MoodState {
    #[default]
    Normal,
    Busy,
    Hungry,
    Sleeping,
}

impl MoodState {
    /// Every allowed state, in reporting order.
    pub const ALL: [MoodState; 4] = [
        MoodState::Normal,
        MoodState::Busy,
        MoodState::Hungry,
        MoodState::Sleeping,
    ];

    /// Identifier used in configurations and logs.
    pub fn name(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Busy => "busy",
            Self::Hungry => "hungry",
            Self::Sleeping => "sleeping",
        }
    }

    /// Look up an allowed state by identifier. Matching is exact.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|state| state.name() == name)
    }
}

impl fmt::Display for MoodState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a string does not name an allowed state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{0}' is not an allowed state")]
pub struct UnknownState(pub String);

impl FromStr for MoodState {
    type Err = UnknownState;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| UnknownState(s.to_string()))
    }
}
