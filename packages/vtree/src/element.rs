use crate::{render::Renderer, Component, Number, PropValue, Props};
use std::{
    fmt::{self, Display},
    io::{self, stdout, Write},
    vec,
};

/// The marker type which can be used as an element's type to group children without a wrapping
/// tag.
///
/// When rendered, a fragment's children are spliced into its parent at the fragment's own depth.
///
/// # Example
///
/// ```
/// # use vtree::*;
/// let e = create_element(Fragment, None, ["Line 1", "Line 2"]);
/// assert_eq!(e.to_string(), "Line 1\nLine 2");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Fragment;

/// The type of an [`Element`].
#[derive(Clone, Debug, PartialEq)]
pub enum ElementType {
    /// A markup tag, such as `div`.
    Tag(String),
    /// A functional component which is expanded at render time.
    Component(Component),
    /// A group of children with no wrapping tag.
    Fragment,
}

impl ElementType {
    /// Gets the tag name if this is a [`ElementType::Tag`].
    pub fn tag_name(&self) -> Option<&str> {
        match self {
            Self::Tag(name) => Some(name),
            _ => None,
        }
    }
}

impl From<&str> for ElementType {
    fn from(name: &str) -> Self {
        Self::Tag(name.to_string())
    }
}

impl From<String> for ElementType {
    fn from(name: String) -> Self {
        Self::Tag(name)
    }
}

impl From<Fragment> for ElementType {
    fn from(_: Fragment) -> Self {
        Self::Fragment
    }
}

impl From<Component> for ElementType {
    fn from(component: Component) -> Self {
        Self::Component(component)
    }
}

/// A canonical node in the tree.
///
/// Elements are created via [`create_element`] or the [`element!`](crate::element!) macro. Their
/// children are always flattened, and never contain `null` or boolean values.
#[derive(Clone, Debug, PartialEq)]
pub struct Element {
    ty: ElementType,
    props: Props,
}

impl Element {
    /// Gets the type of the element.
    pub fn ty(&self) -> &ElementType {
        &self.ty
    }

    /// Gets the properties of the element. These include its children.
    pub fn props(&self) -> &Props {
        &self.props
    }

    /// Gets the children of the element.
    pub fn children(&self) -> &[Node] {
        self.props.children()
    }

    /// Renders the element and writes it to stdout, followed by a newline.
    pub fn print(&self) {
        // Ignore failures to write to stdout, as `println!` would panic instead.
        let _ = self.write(stdout());
    }

    /// Renders the element and writes it to the given writer, followed by a newline.
    pub fn write<W: Write>(&self, mut w: W) -> io::Result<()> {
        writeln!(w, "{}", self)
    }
}

impl Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&Renderer::default().render_element_or_diagnostic(self, 0))
    }
}

/// A child of an [`Element`] after normalization.
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    /// Text content.
    Text(String),
    /// Numeric content.
    Number(Number),
    /// A nested element.
    Element(Element),
}

/// Any value which can be used as a child, or passed to the renderer.
///
/// `Null` and boolean values are accepted so that children can be written conditionally. They are
/// dropped when an element is built. Lists may be nested to any depth and are flattened when an
/// element is built.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Renderable {
    /// Nothing. Dropped from children.
    #[default]
    Null,
    /// A boolean. Dropped from children.
    Bool(bool),
    /// Text content.
    Text(String),
    /// Numeric content.
    Number(Number),
    /// An element.
    Element(Element),
    /// A sequence of renderables.
    List(Vec<Renderable>),
}

impl Renderable {
    /// Returns a short description of the value's shape, suitable for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "boolean",
            Self::Text(_) => "string",
            Self::Number(_) => "number",
            Self::Element(_) => "element",
            Self::List(_) => "list",
        }
    }
}

impl From<Node> for Renderable {
    fn from(node: Node) -> Self {
        match node {
            Node::Text(s) => Self::Text(s),
            Node::Number(n) => Self::Number(n),
            Node::Element(e) => Self::Element(e),
        }
    }
}

impl From<&Node> for Renderable {
    fn from(node: &Node) -> Self {
        node.clone().into()
    }
}

impl From<Element> for Renderable {
    fn from(e: Element) -> Self {
        Self::Element(e)
    }
}

impl From<Element> for Node {
    fn from(e: Element) -> Self {
        Self::Element(e)
    }
}

impl From<()> for Renderable {
    fn from(_: ()) -> Self {
        Self::Null
    }
}

impl From<bool> for Renderable {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for Renderable {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<&String> for Renderable {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

impl From<String> for Renderable {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Number> for Renderable {
    fn from(value: Number) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for Node {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Node {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<PropValue> for Renderable {
    fn from(value: PropValue) -> Self {
        match value {
            PropValue::Str(s) => Self::Text(s),
            PropValue::Number(n) => Self::Number(n),
            PropValue::Bool(b) => Self::Bool(b),
            PropValue::Null => Self::Null,
        }
    }
}

impl<T: Into<Renderable>> From<Option<T>> for Renderable {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl<T: Into<Renderable>> From<Vec<T>> for Renderable {
    fn from(items: Vec<T>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Renderable>, const N: usize> From<[T; N]> for Renderable {
    fn from(items: [T; N]) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Renderable>> FromIterator<T> for Renderable {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::List(iter.into_iter().map(Into::into).collect())
    }
}

macro_rules! impl_from_number {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Renderable {
                fn from(value: $ty) -> Self {
                    Self::Number(value.into())
                }
            }

            impl From<$ty> for Node {
                fn from(value: $ty) -> Self {
                    Self::Number(value.into())
                }
            }
        )*
    };
}

impl_from_number!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

/// Flattens `root` into `dest`, dropping `null` and boolean values.
///
/// Lists are expanded in place, left to right, to any depth. This uses an explicit stack of
/// iterators so that deeply nested input can't exhaust the call stack.
pub(crate) fn flatten_into(dest: &mut Vec<Node>, root: Renderable) {
    let mut stack: Vec<vec::IntoIter<Renderable>> = match root {
        Renderable::List(items) => vec![items.into_iter()],
        other => vec![vec![other].into_iter()],
    };
    while let Some(top) = stack.last_mut() {
        let Some(item) = top.next() else {
            stack.pop();
            continue;
        };
        match item {
            Renderable::Null | Renderable::Bool(_) => {}
            Renderable::Text(s) => dest.push(Node::Text(s)),
            Renderable::Number(n) => dest.push(Node::Number(n)),
            Renderable::Element(e) => dest.push(Node::Element(e)),
            Renderable::List(items) => stack.push(items.into_iter()),
        }
    }
}

/// Flattens a renderable into a sequence of nodes. See [`create_element`] for the rules.
pub fn flatten<T: Into<Renderable>>(value: T) -> Vec<Node> {
    let mut nodes = Vec::new();
    flatten_into(&mut nodes, value.into());
    nodes
}

/// Builds an [`Element`].
///
/// - `props` may be `None`, which is treated as an empty record.
/// - `children` may be nested to any depth. It's flattened in order, and `null` and boolean values
///   are dropped. Empty strings and zeros are kept.
/// - If `props` already has children, they are appended after `children`.
///
/// This never fails.
///
/// # Example
///
/// ```
/// # use vtree::*;
/// let e = create_element(
///     "ul",
///     None,
///     vec![
///         Renderable::from(create_element("li", None, ["a"])),
///         Renderable::from(false),
///         Renderable::from(vec![create_element("li", None, ["b"])]),
///     ],
/// );
/// assert_eq!(e.children().len(), 2);
/// ```
pub fn create_element<T, P, C>(ty: T, props: P, children: C) -> Element
where
    T: Into<ElementType>,
    P: Into<Option<Props>>,
    C: Into<Renderable>,
{
    let mut props = props.into().unwrap_or_default();
    let from_props = props.take_children();

    let mut nodes = flatten(children);
    nodes.extend(from_props);
    props.set_children(nodes);

    Element {
        ty: ty.into(),
        props,
    }
}

/// Builds a [`Fragment`] element with the given children.
pub fn fragment<C: Into<Renderable>>(children: C) -> Element {
    create_element(Fragment, None, children)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_create_element() {
        let e = create_element("div", Props::new().attr("class", "hello"), ["Hello ", "World", "!"]);
        assert_eq!(e.ty().tag_name(), Some("div"));
        assert_eq!(e.props().get_str("class"), Some("hello"));
        assert_eq!(
            e.children(),
            [Node::from("Hello "), Node::from("World"), Node::from("!")]
        );
    }

    #[test]
    fn test_missing_props() {
        let e = create_element("br", None, ());
        assert!(e.props().is_empty());
        assert!(e.children().is_empty());
    }

    #[test]
    fn test_filtering() {
        let e = create_element(
            "p",
            None,
            vec![
                Renderable::Null,
                Renderable::from(true),
                Renderable::from(""),
                Renderable::from(false),
                Renderable::from(0),
                Renderable::from(None::<&str>),
            ],
        );
        assert_eq!(e.children(), [Node::from(""), Node::from(0)]);
    }

    #[test]
    fn test_deep_flattening_preserves_order() {
        let e = create_element(
            "p",
            None,
            vec![
                Renderable::from("a"),
                Renderable::from(vec![
                    Renderable::from("b"),
                    Renderable::from(vec![Renderable::from(vec!["c", "d"])]),
                    Renderable::from("e"),
                ]),
                Renderable::from("f"),
            ],
        );
        let texts: Vec<_> = e
            .children()
            .iter()
            .map(|n| match n {
                Node::Text(s) => s.as_str(),
                _ => panic!("expected text"),
            })
            .collect();
        assert_eq!(texts, ["a", "b", "c", "d", "e", "f"]);
    }

    #[test]
    fn test_very_deep_nesting() {
        let mut value = Renderable::from("leaf");
        for _ in 0..100_000 {
            value = Renderable::List(vec![value]);
        }
        assert_eq!(flatten(value), [Node::from("leaf")]);
    }

    #[test]
    fn test_props_children_come_last() {
        let props = Props::new().attr("id", "x").with_children(["from props"]);
        let e = create_element("div", props, ["positional"]);
        assert_eq!(
            e.children(),
            [Node::from("positional"), Node::from("from props")]
        );
        assert_eq!(e.props().attrs().count(), 1);
    }

    #[test]
    fn test_bare_props_child() {
        let props = Props::new().attr("children", 5);
        let e = create_element("div", props, ());
        assert_eq!(e.children(), [Node::from(5)]);
    }

    #[test]
    fn test_fragment() {
        let e = fragment(["a", "b"]);
        assert_eq!(e.ty(), &ElementType::Fragment);
        assert_eq!(e.children().len(), 2);
    }

    #[test]
    fn test_write() {
        let mut out = Vec::new();
        create_element("hr", None, ()).write(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "<hr />\n");
    }

    fn arb_renderable() -> impl Strategy<Value = Renderable> {
        let leaf = prop_oneof![
            Just(Renderable::Null),
            any::<bool>().prop_map(Renderable::Bool),
            "[a-z]{0,3}".prop_map(Renderable::Text),
            any::<i32>().prop_map(Renderable::from),
        ];
        leaf.prop_recursive(4, 32, 4, |inner| {
            prop::collection::vec(inner, 0..4).prop_map(Renderable::List)
        })
    }

    fn renderable_leaves(value: &Renderable, out: &mut Vec<Renderable>) {
        match value {
            Renderable::List(items) => {
                for item in items {
                    renderable_leaves(item, out);
                }
            }
            other => out.push(other.clone()),
        }
    }

    proptest! {
        #[test]
        fn built_children_are_canonical(children in arb_renderable()) {
            let e = create_element("div", None, children.clone());

            // Same leaves, in order, minus the filtered values.
            let mut leaves = Vec::new();
            renderable_leaves(&children, &mut leaves);
            let expected: Vec<Node> = leaves
                .into_iter()
                .filter_map(|leaf| match leaf {
                    Renderable::Text(s) => Some(Node::Text(s)),
                    Renderable::Number(n) => Some(Node::Number(n)),
                    _ => None,
                })
                .collect();
            prop_assert_eq!(e.children(), expected.as_slice());
        }

        #[test]
        fn flattening_is_idempotent(children in arb_renderable()) {
            let once = flatten(children);
            let twice = flatten(once.iter().map(Renderable::from).collect::<Renderable>());
            prop_assert_eq!(once, twice);
        }
    }
}
