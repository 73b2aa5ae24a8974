use thiserror::Error;

pub type LayoutResult<T> = Result<T, LayoutError>;

#[derive(Debug, Error)]
pub enum LayoutError {
    /// An alignment reference could not be resolved to a registry entry or a
    /// rendered coordinate.
    #[error("component `{component}` references unresolved target `{target}`")]
    ReferenceResolution { component: String, target: String },

    #[error("no component registered under name `{name}`")]
    UnknownComponent { name: String },

    #[error("component name `{name}` is already registered")]
    DuplicateComponent { name: String },

    #[error("render backend failure: {0}")]
    RenderBackend(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}
