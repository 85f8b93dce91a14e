use std::fmt;

/// Value held by an element attribute.
///
/// MJCF attributes are untyped strings on the wire. The variants only decide
/// how a value is formatted: booleans are lower-case and vectors are space
/// separated.
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeValue {
    Text(String),
    Bool(bool),
    Integer(i64),
    Real(f64),
    Vector(Vec<f64>),
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeValue::Text(text) => f.write_str(text),
            AttributeValue::Bool(flag) => write!(f, "{}", flag),
            AttributeValue::Integer(number) => write!(f, "{}", number),
            AttributeValue::Real(number) => write!(f, "{}", number),
            AttributeValue::Vector(numbers) => {
                for (index, number) in numbers.iter().enumerate() {
                    if index > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{}", number)?;
                }
                Ok(())
            }
        }
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        AttributeValue::Text(value.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        AttributeValue::Text(value)
    }
}

impl From<&String> for AttributeValue {
    fn from(value: &String) -> Self {
        AttributeValue::Text(value.clone())
    }
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        AttributeValue::Bool(value)
    }
}

impl From<i32> for AttributeValue {
    fn from(value: i32) -> Self {
        AttributeValue::Integer(i64::from(value))
    }
}

impl From<i64> for AttributeValue {
    fn from(value: i64) -> Self {
        AttributeValue::Integer(value)
    }
}

impl From<u32> for AttributeValue {
    fn from(value: u32) -> Self {
        AttributeValue::Integer(i64::from(value))
    }
}

impl From<f64> for AttributeValue {
    fn from(value: f64) -> Self {
        AttributeValue::Real(value)
    }
}

impl From<Vec<f64>> for AttributeValue {
    fn from(value: Vec<f64>) -> Self {
        AttributeValue::Vector(value)
    }
}

impl From<&[f64]> for AttributeValue {
    fn from(value: &[f64]) -> Self {
        AttributeValue::Vector(value.to_vec())
    }
}

impl<const N: usize> From<[f64; N]> for AttributeValue {
    fn from(value: [f64; N]) -> Self {
        AttributeValue::Vector(value.to_vec())
    }
}
