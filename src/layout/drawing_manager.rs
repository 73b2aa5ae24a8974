use tracing::{debug, warn};

use crate::core::{ComponentNode, DrawConfig};
use crate::error::LayoutResult;
use crate::render::HtmlRenderer;

use super::{HTML_RENDERER_TAG, LayoutContext, RendererSlot};

/// Counters collected by one draw pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TraversalStats {
    /// Nodes the traversal recursed into.
    pub visited: usize,
    /// Drawable hosts whose `draw` was invoked.
    pub drawn: usize,
}

/// Mounts the render backend selected by the context's renderer slot.
pub fn draw_layout(context: &mut LayoutContext) -> LayoutResult<()> {
    // Once mounted the slot holds a renderer rather than a tag, so later
    // calls always take the default arm. Both arms set up the HTML backend.
    let tag = context.renderer_slot().tag().map(str::to_owned);
    match tag.as_deref() {
        Some(HTML_RENDERER_TAG) => render_html(context),
        _ => render_html(context),
    }
}

/// Builds an HTML renderer over the context's layout data, stores it on the
/// context and creates its container under the configured mount point.
pub fn render_html(context: &mut LayoutContext) -> LayoutResult<()> {
    let renderer = HtmlRenderer::new(context.data().to_vec());
    context.set_renderer_slot(RendererSlot::Html(renderer));
    let mount = context.mount().to_owned();
    let class_name = context.class_name().to_owned();
    context.renderer_mut()?.create_html(&mount, &class_name)?;
    debug!(mount = %mount, "mounted html renderer");
    Ok(())
}

/// Invokes `draw` on every drawable descendant of `node`, parents first.
///
/// Passive nodes are not drawn but their subtrees are still walked.
pub fn draw_component(node: &ComponentNode) -> LayoutResult<TraversalStats> {
    let mut stats = TraversalStats::default();
    draw_children(node, &mut stats)?;
    debug!(
        visited = stats.visited,
        drawn = stats.drawn,
        "draw component pass"
    );
    Ok(stats)
}

fn draw_children(node: &ComponentNode, stats: &mut TraversalStats) -> LayoutResult<()> {
    for child in node.children() {
        stats.visited += 1;
        if let Some(host) = child.model().host().as_drawable() {
            host.borrow_mut().draw()?;
            stats.drawn += 1;
        }
        draw_children(child, stats)?;
    }
    Ok(())
}

/// Creates or repositions the element described by `config`.
pub fn position_element(context: &mut LayoutContext, config: &DrawConfig) -> LayoutResult<()> {
    context.renderer_mut()?.create_and_position_div(config)
}

/// Detaches the rendered element bearing `id`.
///
/// A missing element is a no-op returning `false`. The layout tree node
/// backed by the element is left untouched.
pub fn remove_element(context: &mut LayoutContext, id: &str) -> LayoutResult<bool> {
    let removed = context.renderer_mut()?.remove_element(id);
    if !removed {
        warn!(id, "remove_element: no rendered element with this id");
    }
    Ok(removed)
}
