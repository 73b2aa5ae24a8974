use serde::{Deserialize, Serialize};

use crate::core::ComponentMap;
use crate::error::{LayoutError, LayoutResult};
use crate::render::{Coordinate, HtmlRenderer, RendererAdapter};

pub const HTML_RENDERER_TAG: &str = "html";

/// Bootstrap configuration of a render context.
///
/// Serializable so hosts can keep layout setup next to their chart config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutConfig {
    #[serde(default = "default_mount")]
    pub mount: String,
    #[serde(default = "default_class_name")]
    pub class_name: String,
    #[serde(default = "default_renderer")]
    pub renderer: String,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            mount: default_mount(),
            class_name: default_class_name(),
            renderer: default_renderer(),
        }
    }
}

impl LayoutConfig {
    #[must_use]
    pub fn new(mount: impl Into<String>, class_name: impl Into<String>) -> Self {
        Self {
            mount: mount.into(),
            class_name: class_name.into(),
            renderer: default_renderer(),
        }
    }

    #[must_use]
    pub fn with_renderer(mut self, renderer: impl Into<String>) -> Self {
        self.renderer = renderer.into();
        self
    }

    pub fn from_json_str(input: &str) -> LayoutResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| LayoutError::InvalidData(format!("failed to parse layout config: {e}")))
    }
}

fn default_mount() -> String {
    "body".to_owned()
}

fn default_class_name() -> String {
    "layout-container".to_owned()
}

fn default_renderer() -> String {
    HTML_RENDERER_TAG.to_owned()
}

/// Current renderer of a context: a backend tag until a backend is mounted.
pub enum RendererSlot {
    Tag(String),
    Html(HtmlRenderer),
    Custom(Box<dyn RendererAdapter>),
}

impl RendererSlot {
    #[must_use]
    pub fn tag(&self) -> Option<&str> {
        match self {
            Self::Tag(tag) => Some(tag.as_str()),
            Self::Html(_) | Self::Custom(_) => None,
        }
    }
}

impl std::fmt::Debug for RendererSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Tag(tag) => f.debug_tuple("Tag").field(tag).finish(),
            Self::Html(renderer) => f.debug_tuple("Html").field(renderer).finish(),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// State shared by the draw and alignment passes of one render.
///
/// Owns the component registry so its lifetime is bound to the render.
#[derive(Debug)]
pub struct LayoutContext {
    renderer: RendererSlot,
    component_map: ComponentMap,
    data: Vec<Coordinate>,
    mount: String,
    class_name: String,
}

impl LayoutContext {
    /// Creates a context over `data`, the coordinates of the computed tree layout.
    #[must_use]
    pub fn new(config: LayoutConfig, data: Vec<Coordinate>) -> Self {
        Self {
            renderer: RendererSlot::Tag(config.renderer),
            component_map: ComponentMap::new(),
            data,
            mount: config.mount,
            class_name: config.class_name,
        }
    }

    #[must_use]
    pub fn renderer_slot(&self) -> &RendererSlot {
        &self.renderer
    }

    pub fn set_renderer_slot(&mut self, slot: RendererSlot) {
        self.renderer = slot;
    }

    pub fn set_renderer<R: RendererAdapter + 'static>(&mut self, renderer: R) {
        self.renderer = RendererSlot::Custom(Box::new(renderer));
    }

    pub fn renderer(&self) -> LayoutResult<&dyn RendererAdapter> {
        match &self.renderer {
            RendererSlot::Html(renderer) => Ok(renderer),
            RendererSlot::Custom(renderer) => Ok(renderer.as_ref()),
            RendererSlot::Tag(tag) => Err(unmounted(tag)),
        }
    }

    pub fn renderer_mut(&mut self) -> LayoutResult<&mut dyn RendererAdapter> {
        match &mut self.renderer {
            RendererSlot::Html(renderer) => Ok(renderer),
            RendererSlot::Custom(renderer) => Ok(renderer.as_mut()),
            RendererSlot::Tag(tag) => Err(unmounted(tag)),
        }
    }

    #[must_use]
    pub fn html_renderer(&self) -> Option<&HtmlRenderer> {
        match &self.renderer {
            RendererSlot::Html(renderer) => Some(renderer),
            RendererSlot::Tag(_) | RendererSlot::Custom(_) => None,
        }
    }

    #[must_use]
    pub fn component_map(&self) -> &ComponentMap {
        &self.component_map
    }

    pub fn component_map_mut(&mut self) -> &mut ComponentMap {
        &mut self.component_map
    }

    #[must_use]
    pub fn data(&self) -> &[Coordinate] {
        &self.data
    }

    pub fn set_data(&mut self, data: Vec<Coordinate>) {
        self.data = data;
    }

    #[must_use]
    pub fn mount(&self) -> &str {
        &self.mount
    }

    #[must_use]
    pub fn class_name(&self) -> &str {
        &self.class_name
    }
}

fn unmounted(tag: &str) -> LayoutError {
    LayoutError::RenderBackend(format!("renderer `{tag}` has not been mounted"))
}
