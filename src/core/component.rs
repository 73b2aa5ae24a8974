use std::cell::RefCell;
use std::rc::Rc;

use crate::error::LayoutResult;

use super::{AlignmentKind, SpatialConfig};

/// Shared handle to a live component.
///
/// The layout tree owns components through this handle; the component map
/// only keeps weak references to them.
pub type SharedComponent = Rc<RefCell<dyn LayoutComponent>>;

/// Capability set of a drawable, alignable component.
pub trait LayoutComponent {
    /// Draws the component into its backing element.
    fn draw(&mut self) -> LayoutResult<()>;

    /// Name of the component this one is positioned against.
    fn align_with(&self) -> Option<&str>;

    fn alignment(&self) -> AlignmentKind;

    fn class_name(&self) -> &str;

    /// Registry key of this component.
    fn name(&self) -> &str;

    /// Id of the rendered element backing this component.
    fn render_at(&self) -> &str;

    fn set_spatial_config(&mut self, config: SpatialConfig);

    fn spatial_config(&self) -> Option<SpatialConfig> {
        None
    }
}

/// Host backing one layout tree node.
///
/// Drawability is decided when the tree is assembled.
#[derive(Clone)]
pub enum Host {
    Drawable(SharedComponent),
    Passive,
}

impl Host {
    #[must_use]
    pub fn drawable<C: LayoutComponent + 'static>(component: C) -> Self {
        Self::Drawable(Rc::new(RefCell::new(component)))
    }

    #[must_use]
    pub fn as_drawable(&self) -> Option<&SharedComponent> {
        match self {
            Self::Drawable(component) => Some(component),
            Self::Passive => None,
        }
    }

    #[must_use]
    pub fn is_drawable(&self) -> bool {
        matches!(self, Self::Drawable(_))
    }
}

impl std::fmt::Debug for Host {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Drawable(component) => match component.try_borrow() {
                Ok(component) => f.debug_tuple("Drawable").field(&component.name()).finish(),
                Err(_) => f.write_str("Drawable(<borrowed>)"),
            },
            Self::Passive => f.write_str("Passive"),
        }
    }
}

/// Plain rectangular component used by declarative trees.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxComponent {
    name: String,
    class_name: String,
    render_at: String,
    align_with: Option<String>,
    alignment: AlignmentKind,
    spatial_config: Option<SpatialConfig>,
    draw_count: usize,
}

impl BoxComponent {
    #[must_use]
    pub fn new(name: impl Into<String>, render_at: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            class_name: String::new(),
            render_at: render_at.into(),
            align_with: None,
            alignment: AlignmentKind::Unrecognized(String::new()),
            spatial_config: None,
            draw_count: 0,
        }
    }

    #[must_use]
    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = class_name.into();
        self
    }

    #[must_use]
    pub fn aligned_with(mut self, target: impl Into<String>, alignment: AlignmentKind) -> Self {
        self.align_with = Some(target.into());
        self.alignment = alignment;
        self
    }

    #[must_use]
    pub fn draw_count(&self) -> usize {
        self.draw_count
    }
}

impl LayoutComponent for BoxComponent {
    fn draw(&mut self) -> LayoutResult<()> {
        self.draw_count += 1;
        Ok(())
    }

    fn align_with(&self) -> Option<&str> {
        self.align_with.as_deref()
    }

    fn alignment(&self) -> AlignmentKind {
        self.alignment.clone()
    }

    fn class_name(&self) -> &str {
        &self.class_name
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn render_at(&self) -> &str {
        &self.render_at
    }

    fn set_spatial_config(&mut self, config: SpatialConfig) {
        self.spatial_config = Some(config);
    }

    fn spatial_config(&self) -> Option<SpatialConfig> {
        self.spatial_config
    }
}
