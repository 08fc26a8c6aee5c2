use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use super::Value;

/// One frame of lexical scope. Lookups that miss the local frame walk the
/// `outer` chain, which is how a function literal's captured environment
/// and the caller's fresh call frame compose into closures.
#[derive(Debug, Default)]
pub struct Environment {
    store: HashMap<String, Value>,
    outer: Option<Rc<RefCell<Environment>>>,
}

impl Environment {
    pub fn new() -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self::default()))
    }

    /// A fresh frame chained to `outer`, used for a function call's
    /// parameter bindings.
    pub fn enclosed(outer: Rc<RefCell<Environment>>) -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self {
            store: HashMap::new(),
            outer: Some(outer),
        }))
    }

    /// Looks up `name` in this frame, then each outer frame in turn.
    pub fn get(&self, name: &str) -> Option<Value> {
        match self.store.get(name) {
            Some(value) => Some(value.clone()),
            None => self
                .outer
                .as_ref()
                .and_then(|outer| outer.borrow().get(name)),
        }
    }

    /// Binds `name` in this frame. `let` always creates in the current
    /// frame, even if an outer frame already binds the same name —
    /// shadowing, not mutation.
    pub fn set(&mut self, name: impl Into<String>, value: Value) {
        self.store.insert(name.into(), value);
    }
}
