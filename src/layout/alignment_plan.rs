use indexmap::IndexMap;
use tracing::debug;

use crate::core::{ComponentNode, DrawConfig};
use crate::error::LayoutResult;

use super::LayoutContext;
use super::alignment_resolver::{AlignmentRequest, AlignmentStats, publish_spatial_config};
use super::drawing_manager::position_element;
use super::node_lookup::find_node;

/// Geometry computed for one component, not yet applied.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedAlignment {
    /// Registry name the geometry is published under.
    pub name: String,
    pub config: DrawConfig,
}

/// Alignment geometry for a whole tree, indexed by element id.
///
/// Equivalent to `resolve_alignment` as long as the `align_with` graph is
/// acyclic and every target precedes its dependents in pre-order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AlignmentPlan {
    placements: IndexMap<String, PlannedAlignment>,
    stats: AlignmentStats,
}

impl AlignmentPlan {
    #[must_use]
    pub fn placement(&self, id: &str) -> Option<&PlannedAlignment> {
        self.placements.get(id)
    }

    pub fn placements(&self) -> impl Iterator<Item = &PlannedAlignment> {
        self.placements.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.placements.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Positions every planned element and publishes its geometry, in plan
    /// order.
    pub fn apply(self, context: &mut LayoutContext) -> LayoutResult<AlignmentStats> {
        for placement in self.placements.values() {
            position_element(context, &placement.config)?;
            publish_spatial_config(context, &placement.name, &placement.config)?;
        }
        debug!(applied = self.placements.len(), "apply alignment plan");
        Ok(self.stats)
    }
}

/// Computes every alignment below `node` without touching the renderer or
/// the registry.
///
/// Boxes planned earlier in the walk shadow the renderer's coordinates, so
/// chained alignments see their target's planned geometry.
pub fn plan_alignment(
    context: &LayoutContext,
    node: &ComponentNode,
) -> LayoutResult<AlignmentPlan> {
    let mut plan = AlignmentPlan::default();
    plan_children(context, node, &mut plan)?;
    debug!(
        visited = plan.stats.visited,
        planned = plan.placements.len(),
        "plan alignment pass"
    );
    Ok(plan)
}

fn plan_children(
    context: &LayoutContext,
    node: &ComponentNode,
    plan: &mut AlignmentPlan,
) -> LayoutResult<()> {
    for component in node.children() {
        plan.stats.visited += 1;
        if let Some(request) = component
            .model()
            .host()
            .as_drawable()
            .and_then(AlignmentRequest::from_host)
        {
            let resolved = request.resolve(context, component.id(), |id| {
                plan.placements
                    .get(id)
                    .map(|planned| (planned.config.id.clone(), planned.config.rect))
                    .or_else(|| {
                        find_node(context, id)
                            .map(|point| (point.node().id().to_owned(), point.node().bound_box()))
                    })
            })?;
            match resolved {
                Some(config) => {
                    plan.stats.aligned += 1;
                    plan.placements.insert(
                        config.id.clone(),
                        PlannedAlignment {
                            name: request.name,
                            config,
                        },
                    );
                }
                None => plan.stats.unrecognized += 1,
            }
        }
        plan_children(context, component, plan)?;
    }
    Ok(())
}
