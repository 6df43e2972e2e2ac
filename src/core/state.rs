//! State trait for dialogue positions.
//!
//! A state names a position in the conversation tree. Methods are pure so
//! states can be compared, logged and recorded in history freely.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for states tracked by a conversation.
///
/// # Required Traits
///
/// - `Clone`: states are copied into history records
/// - `PartialEq`: states are compared when checking paths
/// - `Debug`: states appear in diagnostics
/// - `Serialize` + `Deserialize`: history can be dumped alongside a session
///
/// # Example
///
/// ```rust
/// use winnebago::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Menu {
///     Top,
///     Submenu,
///     Closed,
/// }
///
/// impl State for Menu {
///     fn name(&self) -> &str {
///         match self {
///             Self::Top => "Top",
///             Self::Submenu => "Submenu",
///             Self::Closed => "Closed",
///         }
///     }
///
///     fn is_final(&self) -> bool {
///         matches!(self, Self::Closed)
///     }
/// }
///
/// assert!(Menu::Closed.is_final());
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;

    /// Check if this is a terminal state.
    ///
    /// No handler runs once a conversation reaches a final state.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum Menu {
        Top,
        Submenu,
        Closed,
    }

    impl State for Menu {
        fn name(&self) -> &str {
            match self {
                Self::Top => "Top",
                Self::Submenu => "Submenu",
                Self::Closed => "Closed",
            }
        }

        fn is_final(&self) -> bool {
            matches!(self, Self::Closed)
        }
    }

    #[test]
    fn state_name_returns_correct_value() {
        assert_eq!(Menu::Top.name(), "Top");
        assert_eq!(Menu::Submenu.name(), "Submenu");
        assert_eq!(Menu::Closed.name(), "Closed");
    }

    #[test]
    fn is_final_identifies_terminal_states() {
        assert!(!Menu::Top.is_final());
        assert!(!Menu::Submenu.is_final());
        assert!(Menu::Closed.is_final());
    }

    #[test]
    fn state_serializes_correctly() {
        let json = serde_json::to_string(&Menu::Submenu).unwrap();
        let deserialized: Menu = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, Menu::Submenu);
    }
}
