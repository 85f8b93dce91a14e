#[cfg(test)]
mod tests {
    use mjcfbuilder::{AttributeValue, Element, MJCFBuilderError, RenderOptions};
    use roxmltree::{Document, Node};
    use std::fs;
    use std::path::PathBuf;
    use workspace_root::get_workspace_root;

    fn fixture_path(filename: &str) -> PathBuf {
        let mut path = get_workspace_root();
        path.push("fixtures");
        path.push(filename);
        path
    }

    fn read_file(path: &PathBuf) -> String {
        let message = format!("Could not read file: {}", path.display());
        fs::read_to_string(path).expect(&message)
    }

    fn build(type_path: &str, values: Vec<(&str, AttributeValue)>) -> Element {
        Element::construct(type_path, values).unwrap()
    }

    fn inverted_pendulum() -> Element {
        let mut pole = build(
            "Body",
            vec![("name", "pole".into()), ("pos", [0.0, 0.0, 0.0].into())],
        );
        pole.add_children([
            build(
                "Joint",
                vec![
                    ("axis", [0.0, 1.0, 0.0].into()),
                    ("name", "hinge".into()),
                    ("pos", [0.0, 0.0, 0.0].into()),
                    ("range", [-90.0, 90.0].into()),
                    ("type", "hinge".into()),
                ],
            ),
            build(
                "Geom",
                vec![
                    ("fromto", [0.0, 0.0, 0.0, 0.001, 0.0, 0.6].into()),
                    ("name", "cpole".into()),
                    ("rgba", [0.0, 0.7, 0.7, 1.0].into()),
                    ("size", [0.049, 0.3].into()),
                    ("type", "capsule".into()),
                ],
            ),
        ]);

        let mut cart = build(
            "Body",
            vec![("name", "cart".into()), ("pos", [0.0, 0.0, 0.0].into())],
        );
        cart.add_children([
            build(
                "Joint",
                vec![
                    ("axis", [1.0, 0.0, 0.0].into()),
                    ("limited", true.into()),
                    ("name", "slider".into()),
                    ("pos", [0.0, 0.0, 0.0].into()),
                    ("range", [-1.0, 1.0].into()),
                    ("type", "slide".into()),
                ],
            ),
            build(
                "Geom",
                vec![
                    ("name", "cart".into()),
                    ("pos", [0.0, 0.0, 0.0].into()),
                    ("quat", [0.707, 0.0, 0.707, 0.0].into()),
                    ("size", [0.1, 0.1].into()),
                    ("type", "capsule".into()),
                ],
            ),
            pole,
        ]);

        let mut worldbody = Element::of_type("Worldbody").unwrap();
        worldbody.add_children([
            build(
                "Geom",
                vec![
                    ("name", "rail".into()),
                    ("pos", [0.0, 0.0, 0.0].into()),
                    ("quat", [0.707, 0.0, 0.707, 0.0].into()),
                    ("rgba", [0.3, 0.3, 0.7, 1.0].into()),
                    ("size", [0.02, 1.0].into()),
                    ("type", "capsule".into()),
                ],
            ),
            cart,
        ]);

        let mut default = Element::of_type("Default").unwrap();
        default.add_children([
            build(
                "default.Joint",
                vec![
                    ("armature", 0.into()),
                    ("damping", 1.into()),
                    ("limited", true.into()),
                ],
            ),
            build(
                "default.Geom",
                vec![
                    ("contype", 0.into()),
                    ("friction", [1.0, 0.1, 0.1].into()),
                    ("rgba", [0.7, 0.7, 0.0, 1.0].into()),
                ],
            ),
            Element::of_type("default.Tendon").unwrap(),
            build("default.Motor", vec![("ctrlrange", [-3.0, 3.0].into())]),
        ]);

        let mut actuator = Element::of_type("Actuator").unwrap();
        actuator.add_child(build(
            "Motor",
            vec![
                ("gear", 100.into()),
                ("joint", "slider".into()),
                ("name", "slide".into()),
            ],
        ));

        let mut mujoco = build("Mujoco", vec![("model", "inverted pendulum".into())]);
        mujoco.add_children([
            build("Compiler", vec![("inertiafromgeom", true.into())]),
            default,
            build(
                "Option",
                vec![
                    ("gravity", [0.0, 0.0, -9.81].into()),
                    ("integrator", "RK4".into()),
                    ("timestep", 0.02.into()),
                ],
            ),
            build("Size", vec![("nstack", 3000.into())]),
            worldbody,
            actuator,
        ]);

        mujoco
    }

    fn check_same_tree(actual: Node, expected: Node) {
        assert_eq!(actual.tag_name().name(), expected.tag_name().name());

        let actual_attributes: Vec<(&str, &str)> = actual
            .attributes()
            .map(|attribute| (attribute.name(), attribute.value()))
            .collect();
        let expected_attributes: Vec<(&str, &str)> = expected
            .attributes()
            .map(|attribute| (attribute.name(), attribute.value()))
            .collect();
        assert_eq!(
            actual_attributes,
            expected_attributes,
            "attributes of <{}>",
            expected.tag_name().name()
        );

        let actual_children: Vec<Node> = actual.children().filter(|n| n.is_element()).collect();
        let expected_children: Vec<Node> =
            expected.children().filter(|n| n.is_element()).collect();
        assert_eq!(
            actual_children.len(),
            expected_children.len(),
            "children of <{}>",
            expected.tag_name().name()
        );

        for (actual_child, expected_child) in actual_children.into_iter().zip(expected_children) {
            check_same_tree(actual_child, expected_child);
        }
    }

    #[test]
    fn test_inverted_pendulum_matches_fixture() {
        let expected = read_file(&fixture_path("inverted_pendulum.xml"));
        let actual = inverted_pendulum().render().unwrap();

        let expected_document = Document::parse(&expected).unwrap();
        let actual_document = Document::parse(&actual).unwrap();
        check_same_tree(
            actual_document.root_element(),
            expected_document.root_element(),
        );
    }

    #[test]
    fn test_output_is_an_xml_document() {
        let output = inverted_pendulum().render().unwrap();

        assert!(output.starts_with("<?xml"));
        assert!(output.contains("version=\"1.0\""));
        assert!(output.lines().any(|line| line.starts_with(char::is_whitespace)));
        assert!(output.contains("<tendon"));
        assert!(!output.contains("</tendon>"));
    }

    #[test]
    fn test_compact_output() {
        let options = RenderOptions {
            pretty: false,
            short_empty_elements: false,
            ..RenderOptions::default()
        };
        let output = inverted_pendulum().render_with(&options).unwrap();

        assert!(!output.lines().any(|line| line.starts_with(char::is_whitespace)));
        assert!(output.contains("</tendon>"));
    }

    #[test]
    fn test_write_to_file() {
        let directory = tempfile::tempdir().unwrap();
        let path = directory.path().join("inverted_pendulum.xml");
        let model = inverted_pendulum();
        let options = RenderOptions::default();

        model.write_to(&path, &options).unwrap();
        assert_eq!(read_file(&path), model.render_with(&options).unwrap());

        // Overwrites an existing document in place.
        let minimal = Element::construct("Mujoco", [("model", "minimal")]).unwrap();
        minimal.write_to(&path, &options).unwrap();
        assert_eq!(read_file(&path), minimal.render_with(&options).unwrap());

        let entries = fs::read_dir(directory.path()).unwrap().count();
        assert_eq!(entries, 1);
    }

    #[test]
    fn test_write_to_missing_directory() {
        let directory = tempfile::tempdir().unwrap();
        let path = directory.path().join("missing").join("model.xml");

        let result = inverted_pendulum().write_to(&path, &RenderOptions::default());
        match result {
            Err(MJCFBuilderError::Io(_)) => (),
            other => panic!("Unexpected result: {:?}", other),
        }
        assert!(!path.exists());
    }
}
