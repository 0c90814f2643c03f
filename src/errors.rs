use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum SketchError {
    /// A drag update arrived with no gesture in progress.
    NoActiveGesture,
    /// Nothing with coordinates to export.
    EmptySketch,
}

impl std::error::Error for SketchError {}

impl fmt::Display for SketchError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SketchError::NoActiveGesture => write!(f, "Extending a gesture that was never started."),
            SketchError::EmptySketch => write!(f, "Empty/Dimensionless sketch"),
        }
    }
}
