use crate::core::DrawConfig;
use crate::error::LayoutResult;
use crate::render::{Coordinate, RendererAdapter};

/// Headless renderer used by tests and benches.
///
/// Positioning updates the matching coordinate in place so chained
/// alignments observe republished boxes. Every config is recorded.
#[derive(Debug, Default)]
pub struct NullRenderer {
    coordinates: Vec<Coordinate>,
    pub positioned: Vec<DrawConfig>,
    pub mounted: Option<(String, String)>,
}

impl NullRenderer {
    #[must_use]
    pub fn new(coordinates: Vec<Coordinate>) -> Self {
        Self {
            coordinates,
            positioned: Vec::new(),
            mounted: None,
        }
    }

    #[must_use]
    pub fn position_count(&self) -> usize {
        self.positioned.len()
    }
}

impl RendererAdapter for NullRenderer {
    fn coordinates(&self) -> &[Coordinate] {
        &self.coordinates
    }

    fn create_and_position_div(&mut self, config: &DrawConfig) -> LayoutResult<()> {
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
        self.positioned.push(config.clone());
        Ok(())
    }

    fn create_html(&mut self, mount: &str, class_name: &str) -> LayoutResult<()> {
        self.mounted = Some((mount.to_owned(), class_name.to_owned()));
        Ok(())
    }

    fn remove_element(&mut self, id: &str) -> bool {
        let before = self.coordinates.len();
        self.coordinates.retain(|point| point.node().id() != id);
        self.coordinates.len() != before
    }
}
