pub mod component;
pub mod component_map;
pub mod tree;
pub mod types;

pub use component::{BoxComponent, Host, LayoutComponent, SharedComponent};
pub use component_map::ComponentMap;
pub use tree::{ComponentNode, NodeModel};
pub use types::{AlignmentKind, BoundBox, DrawConfig, SpatialConfig};
