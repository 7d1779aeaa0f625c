use std::collections::HashMap;

/// The variables live at a point in the evaluation.
///
/// A single flat map is shared by a whole top-level evaluation. Nested `let`
/// forms still behave lexically because every binding is added right before
/// its body is evaluated and released right after, strictly nested and
/// depth-first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scope {
    variables: HashMap<String, i32>,
}

impl Scope {
    /// Creates an empty scope.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if `name` is currently bound.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    /// Binds `name` to `value`, replacing any previous binding.
    ///
    /// The evaluator checks [`Scope::contains`] before binding, so a `let`
    /// never replaces a live name.
    pub fn bind(&mut self, name: &str, value: i32) {
        self.variables.insert(name.to_string(), value);
    }

    /// Returns the value bound to `name`, if any.
    ///
    /// # Example
    /// ```
    /// use letcalc::interpreter::evaluator::scope::Scope;
    ///
    /// let mut scope = Scope::new();
    /// scope.bind("x", 10);
    /// assert_eq!(scope.lookup("x"), Some(10));
    /// assert_eq!(scope.lookup("y"), None);
    /// ```
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<i32> {
        self.variables.get(name).copied()
    }

    /// Removes the binding for `name`, returning its value.
    pub fn release(&mut self, name: &str) -> Option<i32> {
        self.variables.remove(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}
