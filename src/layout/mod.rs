//! Alignment resolution and draw orchestration over component trees.
//!
//! Both passes walk the same tree depth-first, pre-order, and share one
//! render-scoped `LayoutContext`.

mod alignment;
mod alignment_plan;
mod alignment_resolver;
mod context;
mod drawing_manager;
mod node_lookup;

pub use alignment::aligned_box;
pub use alignment_plan::{AlignmentPlan, PlannedAlignment, plan_alignment};
pub use alignment_resolver::{AlignmentStats, resolve_alignment};
pub use context::{HTML_RENDERER_TAG, LayoutConfig, LayoutContext, RendererSlot};
pub use drawing_manager::{
    TraversalStats, draw_component, draw_layout, position_element, remove_element, render_html,
};
pub use node_lookup::find_node;
