//! Guard predicates over session data.
//!
//! Guards are pure boolean functions that decide whether a handler may act
//! on the current session. They carry a label so a refused check can be
//! logged by name.

/// Pure predicate that decides whether a transition may run.
///
/// # Example
///
/// ```rust
/// use winnebago::core::Guard;
///
/// let non_empty = Guard::new("non-empty", |s: &String| !s.is_empty());
///
/// assert!(non_empty.check(&"hike".to_string()));
/// assert!(!non_empty.check(&String::new()));
/// assert_eq!(non_empty.label(), "non-empty");
/// ```
pub struct Guard<T> {
    label: &'static str,
    predicate: Box<dyn Fn(&T) -> bool + Send + Sync>,
}

impl<T> Guard<T> {
    /// Create a guard from a pure predicate function.
    ///
    /// The predicate must be deterministic and thread-safe (Send + Sync).
    pub fn new<F>(label: &'static str, predicate: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Guard {
            label,
            predicate: Box::new(predicate),
        }
    }

    /// A guard that always passes.
    pub fn always(label: &'static str) -> Self {
        Self::new(label, |_| true)
    }

    /// Check if the guard allows the transition.
    pub fn check(&self, value: &T) -> bool {
        (self.predicate)(value)
    }

    pub fn label(&self) -> &'static str {
        self.label
    }
}

impl<T> std::fmt::Debug for Guard<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Guard").field("label", &self.label).finish()
    }
}
