mod descriptor;
mod engine;

pub use descriptor::{
    ComponentDescriptor, DrawableDescriptor, LAYOUT_DESCRIPTOR_JSON_SCHEMA_V1, LayoutDescriptor,
    LayoutDescriptorJsonContractV1,
};
pub use engine::{LayoutEngine, RenderSummary};
