use indexmap::IndexMap;
use serde::Serialize;
use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::core::{BoundBox, DrawConfig};
use crate::error::{LayoutError, LayoutResult};
use crate::render::{Coordinate, RendererAdapter};

pub type ClassList = SmallVec<[String; 2]>;

fn class_list(class_name: &str) -> ClassList {
    class_name.split_whitespace().map(str::to_owned).collect()
}

/// Root element all positioned elements are attached to.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HtmlContainer {
    pub mount: String,
    pub classes: ClassList,
}

/// Absolutely positioned element managed by the HTML backend.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HtmlElement {
    pub id: String,
    pub classes: ClassList,
    pub bound_box: BoundBox,
}

/// In-memory HTML backend.
///
/// Built from the coordinates of a computed tree layout. `create_html`
/// materializes one element per coordinate; later positioning calls upsert
/// elements and keep the coordinate list in sync.
#[derive(Debug, Clone, Default)]
pub struct HtmlRenderer {
    coordinates: Vec<Coordinate>,
    container: Option<HtmlContainer>,
    elements: IndexMap<String, HtmlElement>,
}

impl HtmlRenderer {
    #[must_use]
    pub fn new(data: Vec<Coordinate>) -> Self {
        Self {
            coordinates: data,
            container: None,
            elements: IndexMap::new(),
        }
    }

    #[must_use]
    pub fn container(&self) -> Option<&HtmlContainer> {
        self.container.as_ref()
    }

    #[must_use]
    pub fn element(&self, id: &str) -> Option<&HtmlElement> {
        self.elements.get(id)
    }

    pub fn elements(&self) -> impl Iterator<Item = &HtmlElement> {
        self.elements.values()
    }

    #[must_use]
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }
}

impl RendererAdapter for HtmlRenderer {
    fn coordinates(&self) -> &[Coordinate] {
        &self.coordinates
    }

    fn create_and_position_div(&mut self, config: &DrawConfig) -> LayoutResult<()> {
        if self.container.is_none() {
            return Err(LayoutError::RenderBackend(format!(
                "cannot position element `{}` before the html container is created",
                config.id
            )));
        }
        if !config.rect.is_finite() {
            return Err(LayoutError::RenderBackend(format!(
                "element `{}` geometry must be finite",
                config.id
            )));
        }

        let classes = class_list(&config.class_name);
        match self.elements.get_mut(&config.id) {
            Some(element) => {
                element.classes = classes;
                element.bound_box = config.rect;
            }
            None => {
                self.elements.insert(
                    config.id.clone(),
                    HtmlElement {
                        id: config.id.clone(),
                        classes,
                        bound_box: config.rect,
                    },
                );
            }
        }

        match self
            .coordinates
            .iter_mut()
            .find(|point| point.node().id() == config.id)
        {
            Some(point) => point.set_bound_box(config.rect),
            None => self
                .coordinates
                .push(Coordinate::new(config.id.clone(), config.rect)),
        }
        trace!(id = %config.id, "position html element");
        Ok(())
    }

    fn create_html(&mut self, mount: &str, class_name: &str) -> LayoutResult<()> {
        if mount.is_empty() {
            return Err(LayoutError::RenderBackend(
                "html mount point must not be empty".to_owned(),
            ));
        }
        self.container = Some(HtmlContainer {
            mount: mount.to_owned(),
            classes: class_list(class_name),
        });
        self.elements = self
            .coordinates
            .iter()
            .map(|point| {
                let node = point.node();
                (
                    node.id().to_owned(),
                    HtmlElement {
                        id: node.id().to_owned(),
                        classes: ClassList::new(),
                        bound_box: node.bound_box(),
                    },
                )
            })
            .collect();
        debug!(
            mount,
            element_count = self.elements.len(),
            "create html container"
        );
        Ok(())
    }

    fn remove_element(&mut self, id: &str) -> bool {
        let removed = self.elements.shift_remove(id).is_some();
        self.coordinates.retain(|point| point.node().id() != id);
        removed
    }
}
