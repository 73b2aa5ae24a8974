use super::Host;

/// Model attached to a layout tree node.
#[derive(Debug, Clone)]
pub struct NodeModel {
    host: Host,
}

impl NodeModel {
    #[must_use]
    pub fn new(host: Host) -> Self {
        Self { host }
    }

    #[must_use]
    pub fn host(&self) -> &Host {
        &self.host
    }
}

/// One node of the assembled layout tree.
///
/// Child order is the draw and alignment visitation order.
#[derive(Debug, Clone)]
pub struct ComponentNode {
    id: String,
    model: NodeModel,
    children: Vec<ComponentNode>,
}

impl ComponentNode {
    #[must_use]
    pub fn new(id: impl Into<String>, host: Host) -> Self {
        Self {
            id: id.into(),
            model: NodeModel::new(host),
            children: Vec::new(),
        }
    }

    /// Container node without a drawable host.
    #[must_use]
    pub fn passive(id: impl Into<String>) -> Self {
        Self::new(id, Host::Passive)
    }

    #[must_use]
    pub fn with_child(mut self, child: ComponentNode) -> Self {
        self.children.push(child);
        self
    }

    #[must_use]
    pub fn with_children(mut self, children: impl IntoIterator<Item = ComponentNode>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn push_child(&mut self, child: ComponentNode) {
        self.children.push(child);
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn model(&self) -> &NodeModel {
        &self.model
    }

    #[must_use]
    pub fn children(&self) -> &[ComponentNode] {
        &self.children
    }

    /// Number of nodes below this one.
    #[must_use]
    pub fn descendant_count(&self) -> usize {
        self.children
            .iter()
            .map(|child| 1 + child.descendant_count())
            .sum()
    }

    /// Descendants in pre-order.
    pub fn descendants(&self) -> impl Iterator<Item = &ComponentNode> {
        let mut stack: Vec<&ComponentNode> = self.children.iter().rev().collect();
        std::iter::from_fn(move || {
            let node = stack.pop()?;
            stack.extend(node.children.iter().rev());
            Some(node)
        })
    }
}
