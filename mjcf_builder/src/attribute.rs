use crate::value::AttributeValue;

/// Attribute names which are reserved words in generated bindings. They are
/// stored with a trailing underscore and emitted under the literal name.
const RESERVED_NAMES: [&str; 1] = ["class"];

/// Storage key for an attribute name, e.g. `class` -> `class_`.
pub(crate) fn escape_name(name: &str) -> String {
    if RESERVED_NAMES.contains(&name) {
        format!("{}_", name)
    } else {
        name.to_string()
    }
}

/// Name an attribute is emitted under, e.g. `class_` -> `class`.
pub(crate) fn public_name(key: &str) -> &str {
    match key.strip_suffix('_') {
        Some(stem) if RESERVED_NAMES.contains(&stem) => stem,
        _ => key,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct AttributeSlot {
    pub(crate) default: Option<&'static str>,
    pub(crate) value: Option<AttributeValue>,
    pub(crate) explicit: bool,
}

impl AttributeSlot {
    pub(crate) fn new(default: Option<&'static str>) -> Self {
        AttributeSlot {
            default,
            value: None,
            explicit: false,
        }
    }

    pub(crate) fn set(&mut self, value: AttributeValue) {
        self.value = Some(value);
        self.explicit = true;
    }

    pub(crate) fn unset(&mut self) {
        self.value = None;
        self.explicit = true;
    }

    pub(crate) fn effective(&self) -> Option<String> {
        if self.explicit {
            return self.value.as_ref().map(|value| value.to_string());
        }

        self.default.map(|value| value.to_string())
    }

    /// String form to emit, if any.
    ///
    /// Explicit values always render, even when equal to the default, since
    /// a default class may have changed what the default means.
    pub(crate) fn rendered(&self, omit_defaults: bool) -> Option<String> {
        if !self.explicit && omit_defaults {
            return None;
        }

        self.effective()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserved_names_round_trip() {
        assert_eq!(escape_name("class"), "class_");
        assert_eq!(public_name("class_"), "class");
        assert_eq!(escape_name("name"), "name");
        assert_eq!(public_name("name_"), "name_");
        assert_eq!(public_name("type"), "type");
    }

    #[test]
    fn test_slot_rendering() {
        let mut slot = AttributeSlot::new(Some("hinge"));
        assert_eq!(slot.rendered(true), None);
        assert_eq!(slot.rendered(false).as_deref(), Some("hinge"));

        slot.set(AttributeValue::from("hinge"));
        assert_eq!(slot.rendered(true).as_deref(), Some("hinge"));

        slot.unset();
        assert_eq!(slot.rendered(false), None);
        assert_eq!(slot.effective(), None);
    }
}
