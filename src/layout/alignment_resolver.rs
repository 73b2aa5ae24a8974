use tracing::{debug, trace, warn};

use crate::core::{AlignmentKind, BoundBox, ComponentNode, DrawConfig, SharedComponent};
use crate::error::{LayoutError, LayoutResult};

use super::LayoutContext;
use super::alignment::aligned_box;
use super::drawing_manager::position_element;
use super::node_lookup::find_node;

/// Counters collected by one alignment pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AlignmentStats {
    /// Nodes the traversal recursed into.
    pub visited: usize,
    /// Components repositioned and republished.
    pub aligned: usize,
    /// Components whose alignment tag was not recognized.
    pub unrecognized: usize,
}

/// Alignment declaration read off a drawable host.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct AlignmentRequest {
    pub(super) name: String,
    pub(super) class_name: String,
    pub(super) target: String,
    pub(super) kind: AlignmentKind,
}

impl AlignmentRequest {
    /// Returns `None` when the host declares no alignment target.
    pub(super) fn from_host(host: &SharedComponent) -> Option<Self> {
        let host = host.borrow();
        let target = host.align_with().filter(|target| !target.is_empty())?;
        Some(Self {
            name: host.name().to_owned(),
            class_name: host.class_name().to_owned(),
            target: target.to_owned(),
            kind: host.alignment(),
        })
    }

    fn unresolved(&self, target: &str) -> LayoutError {
        LayoutError::ReferenceResolution {
            component: self.name.clone(),
            target: target.to_owned(),
        }
    }

    /// Looks up the component's own box and its target's box, then computes
    /// the aligned rectangle. `Ok(None)` means the tag is unrecognized.
    pub(super) fn resolve(
        &self,
        context: &LayoutContext,
        id: &str,
        lookup: impl Fn(&str) -> Option<(String, BoundBox)>,
    ) -> LayoutResult<Option<DrawConfig>> {
        let (point_id, node) = lookup(id).ok_or_else(|| self.unresolved(id))?;
        let render_at = context
            .component_map()
            .get(&self.target)
            .map_err(|_| self.unresolved(&self.target))?
            .borrow()
            .render_at()
            .to_owned();
        let (_, reference) = lookup(&render_at).ok_or_else(|| self.unresolved(&render_at))?;

        Ok(aligned_box(node, reference, &self.kind)
            .map(|rect| DrawConfig::new(point_id, self.class_name.clone(), rect)))
    }
}

/// Writes `config`'s geometry into the component registered as `name`.
pub(super) fn publish_spatial_config(
    context: &LayoutContext,
    name: &str,
    config: &DrawConfig,
) -> LayoutResult<()> {
    context
        .component_map()
        .get(name)?
        .borrow_mut()
        .set_spatial_config(config.rect.to_spatial_config());
    Ok(())
}

/// Resolves declared alignments for every descendant of `node`, pre-order.
///
/// Each aligned component is repositioned through the renderer and its new
/// geometry is published to the registry before its descendants are visited,
/// so later components can align against it. The first failure aborts the
/// pass; geometry already published stays in place.
pub fn resolve_alignment(
    context: &mut LayoutContext,
    node: &ComponentNode,
) -> LayoutResult<AlignmentStats> {
    let mut stats = AlignmentStats::default();
    resolve_children(context, node, &mut stats)?;
    debug!(
        visited = stats.visited,
        aligned = stats.aligned,
        unrecognized = stats.unrecognized,
        "resolve alignment pass"
    );
    Ok(stats)
}

fn resolve_children(
    context: &mut LayoutContext,
    node: &ComponentNode,
    stats: &mut AlignmentStats,
) -> LayoutResult<()> {
    for component in node.children() {
        stats.visited += 1;
        if let Some(request) = component
            .model()
            .host()
            .as_drawable()
            .and_then(AlignmentRequest::from_host)
        {
            align_component(context, component.id(), &request, stats)?;
        }
        resolve_children(context, component, stats)?;
    }
    Ok(())
}

fn align_component(
    context: &mut LayoutContext,
    id: &str,
    request: &AlignmentRequest,
    stats: &mut AlignmentStats,
) -> LayoutResult<()> {
    let resolved = request.resolve(context, id, |lookup_id| {
        find_node(context, lookup_id)
            .map(|point| (point.node().id().to_owned(), point.node().bound_box()))
    })?;
    let Some(config) = resolved else {
        stats.unrecognized += 1;
        warn!(
            component = %request.name,
            alignment = %request.kind,
            "unrecognized alignment; component left in place"
        );
        return Ok(());
    };

    position_element(context, &config)?;
    publish_spatial_config(context, &request.name, &config)?;
    stats.aligned += 1;
    trace!(
        component = %request.name,
        target = %request.target,
        alignment = %request.kind,
        top = config.rect.top,
        left = config.rect.left,
        "aligned component"
    );
    Ok(())
}
