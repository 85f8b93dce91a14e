use thiserror::Error;

/// MJCF builder error
///
/// Enum which manages errors in the MJCFBuilder crate
#[derive(Debug, Error)]
pub enum MJCFBuilderError {
    /// No schema is registered under the requested type path
    #[error("unknown element type: {0}")]
    UnknownElement(String),
    /// A schema-bound element was given an attribute its schema does not declare
    #[error("unknown attribute {attribute} on {element}")]
    UnknownAttribute {
        /// Tag of the element.
        element: String,
        /// The rejected attribute name.
        attribute: String,
    },
    /// An attribute name that the markup mapping keeps for itself
    #[error("reserved attribute name {attribute} on {element}")]
    ReservedAttribute {
        /// Tag of the element.
        element: String,
        /// The rejected attribute name.
        attribute: String,
    },
    /// A required attribute was not supplied at construction
    #[error("missing required attribute {attribute} on {element}")]
    MissingRequiredAttribute {
        /// Tag of the element.
        element: String,
        /// The omitted attribute name.
        attribute: &'static str,
    },
    /// The intermediate markup mapping is not in the expected shape
    #[error("malformed markup mapping: {0}")]
    MalformedMapping(String),
    /// Error generating the output XML structure
    #[error("XML builder error: {0}")]
    XMLBuilderError(String),
    /// Error writing a rendered document to disk
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
