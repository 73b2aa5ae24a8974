mod html_renderer;
mod null_renderer;

pub use html_renderer::{HtmlContainer, HtmlElement, HtmlRenderer};
pub use null_renderer::NullRenderer;

use serde::{Deserialize, Serialize};

use crate::core::{BoundBox, DrawConfig};
use crate::error::LayoutResult;

/// Identity and extent of one rendered node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderedNode {
    id: String,
    bound_box: BoundBox,
}

impl RenderedNode {
    #[must_use]
    pub fn new(id: impl Into<String>, bound_box: BoundBox) -> Self {
        Self {
            id: id.into(),
            bound_box,
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn bound_box(&self) -> BoundBox {
        self.bound_box
    }
}

/// Entry of a renderer's coordinate list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    node: RenderedNode,
}

impl Coordinate {
    #[must_use]
    pub fn new(id: impl Into<String>, bound_box: BoundBox) -> Self {
        Self {
            node: RenderedNode::new(id, bound_box),
        }
    }

    #[must_use]
    pub fn node(&self) -> &RenderedNode {
        &self.node
    }

    pub(crate) fn set_bound_box(&mut self, bound_box: BoundBox) {
        self.node.bound_box = bound_box;
    }
}

/// Contract implemented by any render backend driven by the layout passes.
///
/// Backends own element creation; the layout core only tells them where
/// each element goes.
pub trait RendererAdapter {
    /// Rendered nodes known to this backend, in render order.
    fn coordinates(&self) -> &[Coordinate];

    /// Creates the element `config.id`, or repositions it when it exists.
    fn create_and_position_div(&mut self, config: &DrawConfig) -> LayoutResult<()>;

    /// Sets up the backend container under `mount`.
    fn create_html(&mut self, mount: &str, class_name: &str) -> LayoutResult<()>;

    /// Detaches the element bearing `id`. Returns `false` when no such
    /// element exists.
    fn remove_element(&mut self, id: &str) -> bool;
}
