use std::fmt;

use serde::{Deserialize, Serialize};

/// Rendered extent of an element in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BoundBox {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundBox {
    #[must_use]
    pub const fn new(top: f64, left: f64, width: f64, height: f64) -> Self {
        Self {
            top,
            left,
            width,
            height,
        }
    }

    #[must_use]
    pub fn right(self) -> f64 {
        self.left + self.width
    }

    #[must_use]
    pub fn bottom(self) -> f64 {
        self.top + self.height
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.top.is_finite()
            && self.left.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
    }

    #[must_use]
    pub fn to_spatial_config(self) -> SpatialConfig {
        SpatialConfig {
            x: self.left,
            y: self.top,
            height: self.height,
            width: self.width,
        }
    }
}

/// Geometry published back to a component after alignment.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SpatialConfig {
    pub x: f64,
    pub y: f64,
    pub height: f64,
    pub width: f64,
}

/// Input of the renderer's create-and-position primitive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawConfig {
    pub id: String,
    pub class_name: String,
    #[serde(flatten)]
    pub rect: BoundBox,
}

impl DrawConfig {
    #[must_use]
    pub fn new(id: impl Into<String>, class_name: impl Into<String>, rect: BoundBox) -> Self {
        Self {
            id: id.into(),
            class_name: class_name.into(),
            rect,
        }
    }
}

/// Edge or axis a component snaps to relative to its alignment target.
///
/// Tags other than the six known ones are kept as `Unrecognized` and resolve
/// to a no-op.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AlignmentKind {
    Left,
    Right,
    Top,
    Bottom,
    HCenter,
    VCenter,
    Unrecognized(String),
}

impl AlignmentKind {
    #[must_use]
    pub fn as_tag(&self) -> &str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::HCenter => "h-center",
            Self::VCenter => "v-center",
            Self::Unrecognized(tag) => tag.as_str(),
        }
    }

    #[must_use]
    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Unrecognized(_))
    }
}

impl From<&str> for AlignmentKind {
    fn from(tag: &str) -> Self {
        match tag {
            "left" => Self::Left,
            "right" => Self::Right,
            "top" => Self::Top,
            "bottom" => Self::Bottom,
            "h-center" => Self::HCenter,
            "v-center" => Self::VCenter,
            other => Self::Unrecognized(other.to_owned()),
        }
    }
}

impl From<String> for AlignmentKind {
    fn from(tag: String) -> Self {
        Self::from(tag.as_str())
    }
}

impl From<AlignmentKind> for String {
    fn from(kind: AlignmentKind) -> Self {
        match kind {
            AlignmentKind::Unrecognized(tag) => tag,
            known => known.as_tag().to_owned(),
        }
    }
}

impl fmt::Display for AlignmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}
