use vtree::{element, ElementType, Node, PropValue, Props, Renderable};

#[test]
fn minimal() {
    let e = element!(br);
    assert_eq!(e.ty().tag_name(), Some("br"));
    assert!(e.props().is_empty());
}

#[test]
fn props() {
    let e = element! {
        input(r#type: "checkbox", checked: true, "data-index": 3, title: None::<&str>)
    };
    let attrs: Vec<_> = e.props().attrs().collect();
    assert_eq!(
        attrs,
        [
            ("type", &PropValue::from("checkbox")),
            ("checked", &PropValue::from(true)),
            ("data-index", &PropValue::from(3)),
            ("title", &PropValue::Null),
        ]
    );
}

#[test]
fn keyword_props() {
    let e = element!(label(for: "name"));
    assert_eq!(e.props().get_str("for"), Some("name"));
}

#[test]
fn children() {
    let e = element! {
        p {
            "text"
            0
            span { "nested" }
        }
    };
    assert_eq!(e.children().len(), 3);
    assert_eq!(e.children()[0], Node::from("text"));
    assert_eq!(e.children()[1], Node::from(0));
    match &e.children()[2] {
        Node::Element(span) => assert_eq!(span.children(), [Node::from("nested")]),
        other => panic!("expected an element, got {:?}", other),
    }
}

#[test]
fn expression_children() {
    let items = vec!["a", "b"];
    let show_footer = false;
    let e = element! {
        ul {
            #(items.iter().map(|item| element!(li { #(*item) })).collect::<Vec<_>>())
            #(show_footer.then(|| element!(footer)))
        }
    };
    assert_eq!(e.children().len(), 2);
}

#[test]
fn string_tags() {
    let e = element!("my-widget"(size: 2) { "hi" });
    assert_eq!(e.ty().tag_name(), Some("my-widget"));
    assert_eq!(e.children(), [Node::from("hi")]);
}

#[test]
fn fragment() {
    let e = element! {
        Fragment {
            "a"
            "b"
        }
    };
    assert_eq!(e.ty(), &ElementType::Fragment);
    assert_eq!(e.to_string(), "a\nb");
}

#[test]
fn plain_function_components() {
    #[allow(non_snake_case)]
    fn Greeting(props: &Props) -> Renderable {
        element!(b { #(props.get_str("name").unwrap_or("you")) }).into()
    }

    let e = element!(Greeting(name: "Ada"));
    assert!(matches!(e.ty(), ElementType::Component(_)));
    assert_eq!(e.to_string(), "<b>\n  Ada\n</b>");
}
