//! Builder for MJCF (MuJoCo XML format) documents.
//!
//! An [`Element`] tree is assembled from schema types looked up by name,
//! converted to an intermediate nested mapping in which repeated child tags
//! are grouped into lists, and rendered as an indented XML document.
//!
//! ```
//! use mjcfbuilder::Element;
//!
//! let mut mujoco = Element::construct("Mujoco", [("model", "test")])?;
//! let mut body = Element::construct("Body", [("name", "torso")])?;
//! for size in ["1", "2", "3"] {
//!     body.add_child(Element::construct("Geom", [("size", size)])?);
//! }
//! let worldbody = mujoco.add_child(Element::of_type("Worldbody")?);
//! worldbody.add_child(body);
//!
//! let xml = mujoco.render()?;
//! assert!(xml.contains("model=\"test\""));
//! # Ok::<(), mjcfbuilder::MJCFBuilderError>(())
//! ```

pub mod element;
pub mod error;
pub mod generate_output;
pub mod mapping;
pub mod options;
pub mod schema;
pub mod value;

mod attribute;
mod schema_table;
mod write;

pub use element::Element;
pub use error::MJCFBuilderError;
pub use options::RenderOptions;
pub use value::AttributeValue;
