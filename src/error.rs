use std::error::Error;
use std::fmt;
use std::io;

/// Everything that can go wrong between loading a scene and writing the image.
#[derive(Debug)]
pub enum TraceError {
    /// A ray was built from a zero-length or non-finite direction.
    DegenerateDirection,
    /// Render parameters that cannot produce an image.
    InvalidConfig(String),
    /// A sphere refers to a material the scene file never defines.
    UnknownMaterial { sphere: usize, name: String },
    SceneParse(serde_json::Error),
    Image(image::ImageError),
    Io(io::Error),
}

impl fmt::Display for TraceError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TraceError::DegenerateDirection => {
                write!(f, "ray direction has zero length and cannot be normalized")
            }
            TraceError::InvalidConfig(reason) => write!(f, "invalid render configuration: {}", reason),
            TraceError::UnknownMaterial { sphere, name } => {
                write!(f, "sphere #{} uses undefined material '{}'", sphere, name)
            }
            TraceError::SceneParse(e) => write!(f, "failed to parse scene: {}", e),
            TraceError::Image(e) => write!(f, "failed to encode image: {}", e),
            TraceError::Io(e) => write!(f, "i/o error: {}", e),
        }
    }
}

impl Error for TraceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            TraceError::SceneParse(e) => Some(e),
            TraceError::Image(e) => Some(e),
            TraceError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for TraceError {
    fn from(e: io::Error) -> Self {
        TraceError::Io(e)
    }
}

impl From<image::ImageError> for TraceError {
    fn from(e: image::ImageError) -> Self {
        TraceError::Image(e)
    }
}

impl From<serde_json::Error> for TraceError {
    fn from(e: serde_json::Error) -> Self {
        TraceError::SceneParse(e)
    }
}

pub type Result<T> = std::result::Result<T, TraceError>;
