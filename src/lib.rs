//! chart-layout: alignment resolution and draw orchestration for chart
//! component trees.
//!
//! Components declare which other component they align with and on which
//! edge. The layout passes compute final pixel geometry from already
//! rendered boxes and drive the order drawable components are visited in.

pub mod api;
pub mod core;
pub mod error;
pub mod layout;
pub mod render;
pub mod telemetry;

pub use api::{LayoutDescriptor, LayoutEngine};
pub use error::{LayoutError, LayoutResult};
