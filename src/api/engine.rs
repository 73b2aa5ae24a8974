use tracing::debug;

use crate::core::{ComponentNode, SharedComponent};
use crate::error::LayoutResult;
use crate::layout::{
    AlignmentPlan, AlignmentStats, LayoutContext, TraversalStats, draw_component, draw_layout,
    plan_alignment, remove_element, resolve_alignment,
};

use super::LayoutDescriptor;

/// Outcome of one full render cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderSummary {
    pub draw: TraversalStats,
    pub alignment: AlignmentStats,
}

/// Orchestration facade consumed by host applications.
///
/// Owns the component tree and the render-scoped context. Every drawable
/// host of the tree is registered in the context's component map on
/// construction.
#[derive(Debug)]
pub struct LayoutEngine {
    context: LayoutContext,
    tree: ComponentNode,
}

impl LayoutEngine {
    pub fn new(mut context: LayoutContext, tree: ComponentNode) -> LayoutResult<Self> {
        context.component_map_mut().register_tree(&tree)?;
        debug!(
            node_count = tree.descendant_count(),
            registered = context.component_map().len(),
            "layout engine init"
        );
        Ok(Self { context, tree })
    }

    pub fn from_descriptor(descriptor: &LayoutDescriptor) -> LayoutResult<Self> {
        let tree = descriptor.root.build_tree()?;
        let context = LayoutContext::new(descriptor.config.clone(), descriptor.coordinates.clone());
        Self::new(context, tree)
    }

    /// Mounts the render backend.
    pub fn mount(&mut self) -> LayoutResult<()> {
        draw_layout(&mut self.context)
    }

    pub fn draw(&self) -> LayoutResult<TraversalStats> {
        draw_component(&self.tree)
    }

    pub fn align(&mut self) -> LayoutResult<AlignmentStats> {
        resolve_alignment(&mut self.context, &self.tree)
    }

    /// Computes alignment geometry for the whole tree without applying it.
    pub fn plan_alignment(&self) -> LayoutResult<AlignmentPlan> {
        plan_alignment(&self.context, &self.tree)
    }

    pub fn apply_plan(&mut self, plan: AlignmentPlan) -> LayoutResult<AlignmentStats> {
        plan.apply(&mut self.context)
    }

    /// Mounts the backend, draws the tree, then resolves alignments.
    pub fn render(&mut self) -> LayoutResult<RenderSummary> {
        self.mount()?;
        let draw = self.draw()?;
        let alignment = self.align()?;
        Ok(RenderSummary { draw, alignment })
    }

    /// Removes a rendered element. The tree keeps the node it backed.
    pub fn remove_element(&mut self, id: &str) -> LayoutResult<bool> {
        remove_element(&mut self.context, id)
    }

    pub fn component(&self, name: &str) -> LayoutResult<SharedComponent> {
        self.context.component_map().get(name)
    }

    #[must_use]
    pub fn context(&self) -> &LayoutContext {
        &self.context
    }

    pub fn context_mut(&mut self) -> &mut LayoutContext {
        &mut self.context
    }

    #[must_use]
    pub fn tree(&self) -> &ComponentNode {
        &self.tree
    }
}
