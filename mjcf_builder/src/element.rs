use crate::attribute::{AttributeSlot, escape_name, public_name};
use crate::error::MJCFBuilderError;
use crate::generate_output::generate_output;
use crate::mapping::{
    ATTRIBUTE_PREFIX, MarkupMap, MarkupValue, ORDER_KEY, is_reserved_attribute, is_reserved_tag,
    merge_child,
};
use crate::options::RenderOptions;
use crate::schema::{ElementSchema, lookup};
use crate::value::AttributeValue;
use crate::write::write_atomic;
use indexmap::IndexMap;
use std::path::Path;
use tracing::debug;

/// One node of an MJCF document tree.
///
/// An element owns its children. Attaching a child moves it into the parent,
/// so a node can only ever sit at one place in one tree; attach a `clone()`
/// to repeat a subtree.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    tag: String,
    schema: Option<&'static ElementSchema>,
    attributes: IndexMap<String, AttributeSlot>,
    children: Vec<Element>,
}

impl Element {
    /// Create a schema-less element which accepts any attribute name except
    /// `__order__`.
    ///
    /// Tags starting with `@` or `#` are refused when the tree is rendered.
    pub fn new(tag: impl Into<String>) -> Self {
        Element {
            tag: tag.into(),
            schema: None,
            attributes: IndexMap::new(),
            children: vec![],
        }
    }

    fn from_schema(schema: &'static ElementSchema) -> Self {
        let mut attributes = IndexMap::new();
        for spec in schema.attributes.iter() {
            attributes.insert(spec.name.to_string(), AttributeSlot::new(spec.default_value()));
        }

        Element {
            tag: schema.tag.to_string(),
            schema: Some(schema),
            attributes,
            children: vec![],
        }
    }

    /// Create an element of a schema type with the given attribute values.
    ///
    /// Attributes not supplied keep their schema default. Fails if the type
    /// path is unknown, a name is not declared by the type, or a required
    /// attribute is missing.
    pub fn construct<I, K, V>(type_path: &str, values: I) -> Result<Self, MJCFBuilderError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<AttributeValue>,
    {
        let schema = lookup(type_path)?;
        let mut element = Element::from_schema(schema);

        for (name, value) in values {
            element.set(name.as_ref(), value)?;
        }

        for spec in schema.required_attributes() {
            let supplied = element
                .attributes
                .get(spec.name)
                .is_some_and(|slot| slot.explicit && slot.value.is_some());
            if !supplied {
                return Err(MJCFBuilderError::MissingRequiredAttribute {
                    element: element.tag.clone(),
                    attribute: spec.name,
                });
            }
        }

        Ok(element)
    }

    /// Create an element of a schema type with every attribute defaulted.
    pub fn of_type(type_path: &str) -> Result<Self, MJCFBuilderError> {
        Element::construct(type_path, std::iter::empty::<(&str, AttributeValue)>())
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn schema(&self) -> Option<&'static ElementSchema> {
        self.schema
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut [Element] {
        &mut self.children
    }

    fn check_attribute_name(&self, name: &str) -> Result<(), MJCFBuilderError> {
        if is_reserved_attribute(name) {
            return Err(MJCFBuilderError::ReservedAttribute {
                element: self.tag.clone(),
                attribute: name.to_string(),
            });
        }
        Ok(())
    }

    fn slot_mut(&mut self, name: &str) -> Result<&mut AttributeSlot, MJCFBuilderError> {
        let key = escape_name(name);
        if self.schema.is_none() {
            self.check_attribute_name(name)?;
            return Ok(self
                .attributes
                .entry(key)
                .or_insert_with(|| AttributeSlot::new(None)));
        }

        match self.attributes.get_mut(&key) {
            Some(slot) => Ok(slot),
            None => Err(MJCFBuilderError::UnknownAttribute {
                element: self.tag.clone(),
                attribute: name.to_string(),
            }),
        }
    }

    /// Set an attribute explicitly. It is emitted even if it equals the
    /// schema default.
    pub fn set<V: Into<AttributeValue>>(
        &mut self,
        name: &str,
        value: V,
    ) -> Result<&mut Self, MJCFBuilderError> {
        self.slot_mut(name)?.set(value.into());
        Ok(self)
    }

    /// Clear an attribute explicitly so it is never emitted.
    pub fn unset(&mut self, name: &str) -> Result<&mut Self, MJCFBuilderError> {
        self.slot_mut(name)?.unset();
        Ok(self)
    }

    /// Effective string value of an attribute: the explicit value, else the
    /// schema default.
    pub fn attribute(&self, name: &str) -> Option<String> {
        self.attributes
            .get(&escape_name(name))
            .and_then(AttributeSlot::effective)
    }

    /// Append a child and return it for further building.
    pub fn add_child(&mut self, child: Element) -> &mut Element {
        let index = self.children.len();
        self.children.push(child);
        &mut self.children[index]
    }

    pub fn add_children<I: IntoIterator<Item = Element>>(&mut self, children: I) {
        for child in children {
            self.add_child(child);
        }
    }

    fn to_mapping_at(
        &self,
        order: Option<usize>,
        options: &RenderOptions,
    ) -> Result<MarkupMap, MJCFBuilderError> {
        if is_reserved_tag(&self.tag) {
            return Err(MJCFBuilderError::MalformedMapping(format!(
                "tag {} collides with a mapping key",
                self.tag
            )));
        }

        let mut content = MarkupMap::new();
        for (key, slot) in self.attributes.iter() {
            if let Some(value) = slot.rendered(options.omit_defaults) {
                content.insert(
                    format!("{}{}", ATTRIBUTE_PREFIX, public_name(key)),
                    MarkupValue::Text(value),
                );
            }
        }

        if let Some(order) = order {
            content.insert(ORDER_KEY.to_string(), MarkupValue::Text(order.to_string()));
        }

        for (index, child) in self.children.iter().enumerate() {
            merge_child(&mut content, child.to_mapping_at(Some(index), options)?)?;
        }

        let mut mapping = MarkupMap::new();
        mapping.insert(self.tag.clone(), MarkupValue::Map(content));
        Ok(mapping)
    }

    /// Intermediate `{tag: {attributes..., children...}}` form of the tree.
    pub fn to_mapping(&self, options: &RenderOptions) -> Result<MarkupMap, MJCFBuilderError> {
        self.to_mapping_at(None, options)
    }

    /// Render the tree as an MJCF document with default options.
    pub fn render(&self) -> Result<String, MJCFBuilderError> {
        self.render_with(&RenderOptions::default())
    }

    pub fn render_with(&self, options: &RenderOptions) -> Result<String, MJCFBuilderError> {
        debug!("rendering <{}> with {} children", self.tag, self.children.len());
        let mapping = self.to_mapping(options)?;
        generate_output(&mapping, options)
    }

    /// Render and atomically write the document to `path`.
    pub fn write_to<P: AsRef<Path>>(
        &self,
        path: P,
        options: &RenderOptions,
    ) -> Result<(), MJCFBuilderError> {
        let output = self.render_with(options)?;
        write_atomic(path.as_ref(), &output)
    }
}
