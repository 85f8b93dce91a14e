#[cfg(test)]
mod tests {
    use mjcfbuilder::Element;
    use mjcfbuilder::schema::{AttributeDefault, Namespace, lookup, schemas};
    use std::collections::HashSet;

    #[test]
    fn test_bare_name_resolves_in_elements() {
        let schema = lookup("Geom").unwrap();
        assert_eq!(schema.namespace, Namespace::Elements);
        assert_eq!(schema.tag, "geom");
        assert_eq!(schema.path(), "elements.Geom");
    }

    #[test]
    fn test_qualified_names() {
        let touch = lookup("sensor.Touch").unwrap();
        assert_eq!(touch.namespace, Namespace::Sensor);
        assert_eq!(touch.tag, "touch");

        let fixed_joint = lookup("fixed.Joint").unwrap();
        let joint = lookup("Joint").unwrap();
        assert_eq!(fixed_joint.tag, joint.tag);
        assert_ne!(fixed_joint.attributes, joint.attributes);
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(lookup("worldbody").unwrap(), lookup("Worldbody").unwrap());
        assert_eq!(lookup("Sensor.touch").unwrap(), lookup("sensor.Touch").unwrap());
    }

    #[test]
    fn test_every_schema_resolves_by_path() {
        let mut seen = HashSet::new();
        for schema in schemas() {
            assert_eq!(schema.tag, schema.type_name.to_lowercase());
            assert!(seen.insert(schema.path()), "duplicate schema {}", schema.path());
            assert_eq!(lookup(&schema.path()).unwrap(), schema);
        }
    }

    #[test]
    fn test_attribute_names_are_unique() {
        for schema in schemas() {
            let mut names = HashSet::new();
            for spec in schema.attributes {
                assert!(
                    names.insert(spec.name),
                    "{} declares {} twice",
                    schema.path(),
                    spec.name
                );
            }
        }
    }

    #[test]
    fn test_declared_defaults() {
        let mujoco = lookup("Mujoco").unwrap();
        assert_eq!(
            mujoco.attribute("model").unwrap().default,
            AttributeDefault::Value("MuJoCo Model")
        );

        let geom = lookup("Geom").unwrap();
        assert_eq!(geom.attribute("name").unwrap().default, AttributeDefault::Absent);
        assert!(geom.attribute("class_").is_some());
        assert!(geom.attribute("class").is_none());

        let required: Vec<&str> = lookup("Inertial")
            .unwrap()
            .required_attributes()
            .map(|spec| spec.name)
            .collect();
        assert_eq!(required, vec!["mass", "pos"]);
    }

    #[test]
    fn test_default_class_types_mirror_elements() {
        let geom = lookup("Geom").unwrap();
        let default_geom = lookup("default.Geom").unwrap();
        assert_eq!(default_geom.tag, "geom");

        let expected: Vec<&str> = geom
            .attributes
            .iter()
            .map(|spec| spec.name)
            .filter(|name| *name != "name" && *name != "class_")
            .collect();
        let actual: Vec<&str> = default_geom.attributes.iter().map(|spec| spec.name).collect();
        assert_eq!(actual, expected);
        assert!(
            default_geom
                .attributes
                .iter()
                .all(|spec| spec.default == AttributeDefault::Absent)
        );
    }

    #[test]
    fn test_constructed_element_uses_schema_tag() {
        let touch = Element::construct("sensor.Touch", [("site", "fingertip")]).unwrap();
        assert_eq!(touch.tag(), "touch");
        assert_eq!(touch.schema(), Some(lookup("sensor.Touch").unwrap()));

        let free = Element::new("anything");
        assert_eq!(free.schema(), None);
    }
}
