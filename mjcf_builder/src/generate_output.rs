use crate::error::MJCFBuilderError;
use crate::mapping::{ATTRIBUTE_PREFIX, MarkupMap, MarkupValue, ORDER_KEY};
use crate::options::RenderOptions;
use std::string::String;
use xml_builder::{XMLBuilder, XMLElement, XMLVersion};

fn child_order(value: &MarkupValue) -> Option<usize> {
    value
        .as_map()
        .and_then(|map| map.get(ORDER_KEY))
        .and_then(MarkupValue::as_text)
        .and_then(|order| order.parse().ok())
}

fn generate_element(
    tag: &str,
    value: &MarkupValue,
    options: &RenderOptions,
) -> Result<XMLElement, MJCFBuilderError> {
    let mut xml_element = XMLElement::new(tag);

    let content = match value {
        MarkupValue::Text(text) => {
            if let Err(err) = xml_element.add_text(text.clone()) {
                return Err(MJCFBuilderError::XMLBuilderError(err.to_string()));
            }
            return Ok(xml_element);
        }
        MarkupValue::List(_) => {
            return Err(MJCFBuilderError::MalformedMapping(format!(
                "nested list under {}",
                tag
            )));
        }
        MarkupValue::Map(content) => content,
    };

    let mut children = vec![];
    for (key, entry) in content.iter() {
        if key == ORDER_KEY {
            continue;
        }

        if let Some(name) = key.strip_prefix(ATTRIBUTE_PREFIX) {
            let Some(attribute) = entry.as_text() else {
                return Err(MJCFBuilderError::MalformedMapping(format!(
                    "attribute {} on {} is not a scalar",
                    name, tag
                )));
            };
            xml_element.add_attribute(name, attribute);
            continue;
        }

        match entry {
            MarkupValue::List(values) => {
                for value in values.iter() {
                    children.push((key.as_str(), value));
                }
            }
            _ => children.push((key.as_str(), entry)),
        }
    }

    if options.preserve_child_order {
        // Stable, so unordered children keep their relative order at the end.
        children.sort_by_key(|(_, value)| child_order(value).unwrap_or(usize::MAX));
    }

    for (child_tag, child_value) in children {
        let child = generate_element(child_tag, child_value, options)?;

        if let Err(err) = xml_element.add_child(child) {
            return Err(MJCFBuilderError::XMLBuilderError(err.to_string()));
        }
    }

    Ok(xml_element)
}

/// Render a single-root mapping into an XML document string.
pub fn generate_output(
    mapping: &MarkupMap,
    options: &RenderOptions,
) -> Result<String, MJCFBuilderError> {
    let mut roots = mapping.iter();
    let (Some((tag, content)), None) = (roots.next(), roots.next()) else {
        return Err(MJCFBuilderError::MalformedMapping(
            "document must have exactly one root".to_string(),
        ));
    };

    let mut xml = XMLBuilder::new()
        .version(XMLVersion::XML1_0)
        .encoding("utf-8".into())
        .indent(options.pretty)
        .break_lines(options.pretty)
        .expand_empty_tags(!options.short_empty_elements)
        .build();

    let root_element = generate_element(tag, content, options)?;

    let mut writer: Vec<u8> = Vec::new();
    xml.set_root_element(root_element);
    let result = xml.generate(&mut writer);
    if let Err(err) = result {
        return Err(MJCFBuilderError::XMLBuilderError(err.to_string()));
    }

    String::from_utf8(writer).map_err(|err| MJCFBuilderError::XMLBuilderError(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_needs_one_root() {
        let options = RenderOptions::default();

        let mut mapping = MarkupMap::new();
        assert!(generate_output(&mapping, &options).is_err());

        mapping.insert("a".to_string(), MarkupValue::Map(MarkupMap::new()));
        mapping.insert("b".to_string(), MarkupValue::Map(MarkupMap::new()));
        match generate_output(&mapping, &options) {
            Err(MJCFBuilderError::MalformedMapping(_)) => (),
            other => panic!("Unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_root_list_is_rejected() {
        let mut mapping = MarkupMap::new();
        mapping.insert(
            "mujoco".to_string(),
            MarkupValue::List(vec![
                MarkupValue::Map(MarkupMap::new()),
                MarkupValue::Map(MarkupMap::new()),
            ]),
        );

        match generate_output(&mapping, &RenderOptions::default()) {
            Err(MJCFBuilderError::MalformedMapping(message)) => assert!(message.contains("mujoco")),
            other => panic!("Unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_unordered_children_follow_ordered_ones() {
        let mut late = MarkupMap::new();
        late.insert("@name".to_string(), MarkupValue::Text("late".to_string()));
        let mut early = MarkupMap::new();
        early.insert("@name".to_string(), MarkupValue::Text("early".to_string()));
        early.insert(ORDER_KEY.to_string(), MarkupValue::Text("0".to_string()));

        let mut content = MarkupMap::new();
        content.insert("site".to_string(), MarkupValue::Map(late));
        content.insert("geom".to_string(), MarkupValue::Map(early));
        let mut mapping = MarkupMap::new();
        mapping.insert("body".to_string(), MarkupValue::Map(content));

        let output = generate_output(&mapping, &RenderOptions::default()).unwrap();
        let early_at = output.find("early").unwrap();
        let late_at = output.find("late").unwrap();
        assert!(early_at < late_at);
        assert!(!output.contains("__order__"));
    }
}
