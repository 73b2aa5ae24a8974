use std::cell::RefCell;
use std::rc::{Rc, Weak};

use indexmap::IndexMap;
use tracing::trace;

use crate::error::{LayoutError, LayoutResult};

use super::{ComponentNode, LayoutComponent, SharedComponent};

/// Render-scoped registry from declared component name to live component.
///
/// Entries are weak: the layout tree owns its components and the registry
/// only resolves names to them. A dropped component reads as absent.
#[derive(Default)]
pub struct ComponentMap {
    entries: IndexMap<String, Weak<RefCell<dyn LayoutComponent>>>,
}

impl ComponentMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `component` under its own declared name.
    pub fn register(&mut self, component: &SharedComponent) -> LayoutResult<()> {
        let name = component.borrow().name().to_owned();
        self.insert(name, component)
    }

    pub fn insert(
        &mut self,
        name: impl Into<String>,
        component: &SharedComponent,
    ) -> LayoutResult<()> {
        let name = name.into();
        if self.entries.contains_key(&name) {
            return Err(LayoutError::DuplicateComponent { name });
        }
        trace!(name = %name, "register component");
        self.entries.insert(name, Rc::downgrade(component));
        Ok(())
    }

    /// Registers every drawable host of `tree`, root included, in pre-order.
    pub fn register_tree(&mut self, tree: &ComponentNode) -> LayoutResult<()> {
        let root = std::iter::once(tree);
        for node in root.chain(tree.descendants()) {
            if let Some(component) = node.model().host().as_drawable() {
                self.register(component)?;
            }
        }
        Ok(())
    }

    pub fn get(&self, name: &str) -> LayoutResult<SharedComponent> {
        self.entries
            .get(name)
            .and_then(Weak::upgrade)
            .ok_or_else(|| LayoutError::UnknownComponent {
                name: name.to_owned(),
            })
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries
            .get(name)
            .is_some_and(|entry| entry.strong_count() > 0)
    }

    pub fn remove(&mut self, name: &str) -> bool {
        self.entries.shift_remove(name).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl std::fmt::Debug for ComponentMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.entries.keys()).finish()
    }
}
