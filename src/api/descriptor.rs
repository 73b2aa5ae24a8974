use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::core::{AlignmentKind, BoxComponent, ComponentNode, Host};
use crate::error::{LayoutError, LayoutResult};
use crate::layout::LayoutConfig;
use crate::render::Coordinate;

pub const LAYOUT_DESCRIPTOR_JSON_SCHEMA_V1: u32 = 1;

/// Drawable part of a declared component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawableDescriptor {
    pub name: String,
    #[serde(default)]
    pub class_name: String,
    /// Element id backing the component; defaults to the node id.
    #[serde(default)]
    pub render_at: Option<String>,
    #[serde(default)]
    pub align_with: Option<String>,
    #[serde(default)]
    pub alignment: Option<AlignmentKind>,
}

/// Declared layout tree node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentDescriptor {
    pub id: String,
    #[serde(default)]
    pub drawable: Option<DrawableDescriptor>,
    #[serde(default)]
    pub children: Vec<ComponentDescriptor>,
}

impl ComponentDescriptor {
    #[must_use]
    pub fn passive(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            drawable: None,
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn drawable(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            drawable: Some(DrawableDescriptor {
                name: name.into(),
                class_name: String::new(),
                render_at: None,
                align_with: None,
                alignment: None,
            }),
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        if let Some(drawable) = self.drawable.as_mut() {
            drawable.class_name = class_name.into();
        }
        self
    }

    #[must_use]
    pub fn aligned_with(mut self, target: impl Into<String>, alignment: AlignmentKind) -> Self {
        if let Some(drawable) = self.drawable.as_mut() {
            drawable.align_with = Some(target.into());
            drawable.alignment = Some(alignment);
        }
        self
    }

    #[must_use]
    pub fn with_child(mut self, child: ComponentDescriptor) -> Self {
        self.children.push(child);
        self
    }

    /// Assembles the component tree this descriptor declares.
    ///
    /// Node ids must be non-empty and unique across the whole tree.
    pub fn build_tree(&self) -> LayoutResult<ComponentNode> {
        self.build_node(&mut HashSet::new())
    }

    fn build_node<'a>(&'a self, seen_ids: &mut HashSet<&'a str>) -> LayoutResult<ComponentNode> {
        if self.id.is_empty() {
            return Err(LayoutError::InvalidData(
                "component id must not be empty".to_owned(),
            ));
        }
        if !seen_ids.insert(&self.id) {
            return Err(LayoutError::InvalidData(format!(
                "component id `{}` is declared more than once",
                self.id
            )));
        }

        let host = match &self.drawable {
            None => Host::Passive,
            Some(drawable) => {
                if drawable.name.is_empty() {
                    return Err(LayoutError::InvalidData(format!(
                        "drawable component `{}` must declare a name",
                        self.id
                    )));
                }
                let render_at = drawable.render_at.as_deref().unwrap_or(&self.id);
                let mut component = BoxComponent::new(drawable.name.clone(), render_at)
                    .with_class_name(drawable.class_name.clone());
                if let Some(target) = &drawable.align_with {
                    let alignment = drawable
                        .alignment
                        .clone()
                        .unwrap_or_else(|| AlignmentKind::Unrecognized(String::new()));
                    component = component.aligned_with(target.clone(), alignment);
                }
                Host::drawable(component)
            }
        };

        let children = self
            .children
            .iter()
            .map(|child| child.build_node(seen_ids))
            .collect::<LayoutResult<Vec<_>>>()?;
        Ok(ComponentNode::new(self.id.clone(), host).with_children(children))
    }
}

/// Declarative description of one render: context config, precomputed tree
/// layout coordinates and the component tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutDescriptor {
    #[serde(default)]
    pub config: LayoutConfig,
    #[serde(default)]
    pub coordinates: Vec<Coordinate>,
    pub root: ComponentDescriptor,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutDescriptorJsonContractV1 {
    pub schema_version: u32,
    pub layout: LayoutDescriptor,
}

impl LayoutDescriptor {
    pub fn to_json_contract_v1_pretty(&self) -> LayoutResult<String> {
        let payload = LayoutDescriptorJsonContractV1 {
            schema_version: LAYOUT_DESCRIPTOR_JSON_SCHEMA_V1,
            layout: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            LayoutError::InvalidData(format!("failed to serialize layout contract v1: {e}"))
        })
    }

    /// Accepts either a bare descriptor or a versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> LayoutResult<Self> {
        if let Ok(descriptor) = serde_json::from_str::<LayoutDescriptor>(input) {
            return Ok(descriptor);
        }
        let payload: LayoutDescriptorJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            LayoutError::InvalidData(format!("failed to parse layout json payload: {e}"))
        })?;
        if payload.schema_version != LAYOUT_DESCRIPTOR_JSON_SCHEMA_V1 {
            return Err(LayoutError::InvalidData(format!(
                "unsupported layout schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.layout)
    }
}
