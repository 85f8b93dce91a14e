use crate::error::MJCFBuilderError;
use crate::schema_table::SCHEMAS;

/// Group of element types sharing a type-path prefix.
///
/// The same type name can appear in several namespaces with different
/// attribute lists, e.g. `Joint` (a kinematic joint), `default.Joint` (joint
/// defaults of a class) and `fixed.Joint` (a joint term of a fixed tendon).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Namespace {
    Elements,
    Default,
    Equality,
    Fixed,
    Sensor,
    Visual,
}

impl Namespace {
    pub fn prefix(&self) -> &'static str {
        match self {
            Namespace::Elements => "elements",
            Namespace::Default => "default",
            Namespace::Equality => "equality",
            Namespace::Fixed => "fixed",
            Namespace::Sensor => "sensor",
            Namespace::Visual => "visual",
        }
    }

    fn from_prefix(prefix: &str) -> Option<Namespace> {
        match prefix.to_ascii_lowercase().as_str() {
            "elements" => Some(Namespace::Elements),
            "default" => Some(Namespace::Default),
            "equality" => Some(Namespace::Equality),
            "fixed" => Some(Namespace::Fixed),
            "sensor" => Some(Namespace::Sensor),
            "visual" => Some(Namespace::Visual),
            _ => None,
        }
    }
}

/// Declared default of a schema attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeDefault {
    /// Defaults to the given value.
    Value(&'static str),
    /// Unset unless the caller supplies a value.
    Absent,
    /// Must be supplied at construction.
    Required,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeSpec {
    pub name: &'static str,
    pub default: AttributeDefault,
}

impl AttributeSpec {
    pub(crate) const fn value(name: &'static str, default: &'static str) -> AttributeSpec {
        AttributeSpec {
            name,
            default: AttributeDefault::Value(default),
        }
    }

    pub(crate) const fn absent(name: &'static str) -> AttributeSpec {
        AttributeSpec {
            name,
            default: AttributeDefault::Absent,
        }
    }

    pub(crate) const fn required(name: &'static str) -> AttributeSpec {
        AttributeSpec {
            name,
            default: AttributeDefault::Required,
        }
    }

    pub fn is_required(&self) -> bool {
        self.default == AttributeDefault::Required
    }

    pub(crate) fn default_value(&self) -> Option<&'static str> {
        match self.default {
            AttributeDefault::Value(value) => Some(value),
            AttributeDefault::Absent | AttributeDefault::Required => None,
        }
    }
}

/// Record describing one concrete element type: its tag and the ordered list
/// of attributes it accepts.
#[derive(Debug, PartialEq, Eq)]
pub struct ElementSchema {
    pub namespace: Namespace,
    pub type_name: &'static str,
    pub tag: &'static str,
    pub attributes: &'static [AttributeSpec],
}

impl ElementSchema {
    pub fn attribute(&self, name: &str) -> Option<&'static AttributeSpec> {
        self.attributes.iter().find(|spec| spec.name == name)
    }

    pub fn required_attributes(&self) -> impl Iterator<Item = &'static AttributeSpec> {
        self.attributes.iter().filter(|spec| spec.is_required())
    }

    /// The `namespace.Type` path resolving to this schema.
    pub fn path(&self) -> String {
        format!("{}.{}", self.namespace.prefix(), self.type_name)
    }
}

/// Every registered element schema.
pub fn schemas() -> &'static [ElementSchema] {
    SCHEMAS
}

/// Find the schema for a type path.
///
/// A bare name such as `Geom` resolves in the `elements` namespace, a
/// qualified one such as `sensor.Touch` in the named namespace. Type names
/// are matched case-insensitively.
pub fn lookup(type_path: &str) -> Result<&'static ElementSchema, MJCFBuilderError> {
    let (namespace, type_name) = match type_path.split_once('.') {
        Some((prefix, type_name)) => match Namespace::from_prefix(prefix) {
            Some(namespace) => (namespace, type_name),
            None => return Err(MJCFBuilderError::UnknownElement(type_path.to_string())),
        },
        None => (Namespace::Elements, type_path),
    };

    SCHEMAS
        .iter()
        .find(|schema| {
            schema.namespace == namespace && schema.type_name.eq_ignore_ascii_case(type_name)
        })
        .ok_or_else(|| MJCFBuilderError::UnknownElement(type_path.to_string()))
}
