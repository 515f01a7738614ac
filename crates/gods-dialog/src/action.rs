use std::fmt;
use std::rc::Rc;

use indexmap::IndexMap;

use crate::console::Console;
use crate::error::DialogError;

/// What a menu does after an action ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow<T> {
    /// Keep reading input in the current menu.
    Continue,
    /// Leave the current menu, returning the value to its caller.
    Exit(T),
}

/// Action callback. Bound arguments are captured by the closure.
pub type Handler<S, T> = Rc<dyn Fn(&mut Console<'_>, &mut S) -> Result<Flow<T>, DialogError>>;

/// A described action bound to one key.
pub struct MenuAction<S, T> {
    pub description: String,
    pub handler: Handler<S, T>,
}

impl<S, T> Clone for MenuAction<S, T> {
    fn clone(&self) -> Self {
        Self {
            description: self.description.clone(),
            handler: Rc::clone(&self.handler),
        }
    }
}

impl<S, T> fmt::Debug for MenuAction<S, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MenuAction")
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

/// Ordered key → action map for one menu.
///
/// Keys are unique: inserting an existing key replaces its action and keeps
/// its position. Order only matters for the help listing.
pub struct ActionTable<S, T> {
    actions: IndexMap<String, MenuAction<S, T>>,
}

impl<S, T> ActionTable<S, T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            actions: IndexMap::new(),
        }
    }

    /// Builder form of [`insert`](Self::insert).
    #[must_use]
    pub fn action<F>(
        mut self,
        key: impl Into<String>,
        description: impl Into<String>,
        handler: F,
    ) -> Self
    where
        F: Fn(&mut Console<'_>, &mut S) -> Result<Flow<T>, DialogError> + 'static,
    {
        self.insert(key, description, handler);
        self
    }

    pub fn insert<F>(
        &mut self,
        key: impl Into<String>,
        description: impl Into<String>,
        handler: F,
    ) where
        F: Fn(&mut Console<'_>, &mut S) -> Result<Flow<T>, DialogError> + 'static,
    {
        self.actions.insert(
            key.into(),
            MenuAction {
                description: description.into(),
                handler: Rc::new(handler),
            },
        );
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&MenuAction<S, T>> {
        self.actions.get(key)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.actions.contains_key(key)
    }

    /// `(key, description)` pairs in table order.
    pub fn listing(&self) -> impl Iterator<Item = (&str, &str)> {
        self.actions
            .iter()
            .map(|(key, action)| (key.as_str(), action.description.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

impl<S, T> Default for ActionTable<S, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, T> Clone for ActionTable<S, T> {
    fn clone(&self) -> Self {
        Self {
            actions: self.actions.clone(),
        }
    }
}

impl<S, T> fmt::Debug for ActionTable<S, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.listing()).finish()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{ActionTable, Flow};

    fn table() -> ActionTable<u32, ()> {
        ActionTable::new()
            .action("a", "first", |_, n: &mut u32| {
                *n += 1;
                Ok(Flow::Continue)
            })
            .action("q", "quit", |_, _| Ok(Flow::Exit(())))
    }

    #[test]
    fn listing_keeps_insertion_order() {
        let table = table();
        let listing: Vec<_> = table.listing().collect();
        assert_eq!(listing, [("a", "first"), ("q", "quit")]);
    }

    #[test]
    fn reinserting_a_key_replaces_in_place() {
        let mut table = table();
        table.insert("a", "replaced", |_, _| Ok(Flow::Continue));

        assert_eq!(table.len(), 2);
        let keys: Vec<_> = table.listing().map(|(k, _)| k).collect();
        assert_eq!(keys, ["a", "q"]);
        assert_eq!(table.get("a").map(|a| a.description.as_str()), Some("replaced"));
    }

    #[test]
    fn clone_is_independent() {
        let original = table();
        let mut copy = original.clone();
        copy.insert("x", "extra", |_, _| Ok(Flow::Continue));

        assert_eq!(original.len(), 2);
        assert!(!original.contains_key("x"));
        assert_eq!(copy.len(), 3);
    }
}
