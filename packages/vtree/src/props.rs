use crate::{element::flatten_into, Node, PropValue, Renderable};
use indexmap::IndexMap;

/// The name of the reserved property which holds an element's children.
pub const CHILDREN: &str = "children";

/// The properties of an element: an ordered record of attributes, plus the element's children.
///
/// Attributes keep the order in which they were first set, which is also the order in which they
/// are rendered. Children are never stored as an attribute. Setting the reserved `children` key
/// appends to the children instead.
///
/// # Example
///
/// ```
/// # use vtree::*;
/// let props = Props::new()
///     .attr("id", "main")
///     .attr("hidden", false)
///     .attr("tabindex", 0);
/// assert_eq!(props.get("id"), Some(&PropValue::from("main")));
/// assert_eq!(props.attrs().count(), 3);
/// assert!(props.children().is_empty());
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Props {
    attrs: IndexMap<String, PropValue>,
    children: Vec<Node>,
}

impl Props {
    /// Creates an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an attribute, returning the updated record.
    pub fn attr<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<PropValue>,
    {
        self.insert(key, value);
        self
    }

    /// Appends children, returning the updated record.
    ///
    /// The value is flattened and `null` and boolean values are dropped, exactly as they would be
    /// for positional children.
    pub fn with_children<T: Into<Renderable>>(mut self, children: T) -> Self {
        self.extend_children(children);
        self
    }

    /// Sets an attribute in place.
    ///
    /// If the key is `children`, the value is appended to the children rather than stored as an
    /// attribute.
    pub fn insert<K, V>(&mut self, key: K, value: V)
    where
        K: Into<String>,
        V: Into<PropValue>,
    {
        let key = key.into();
        let value = value.into();
        if key == CHILDREN {
            self.extend_children(Renderable::from(value));
        } else {
            self.attrs.insert(key, value);
        }
    }

    /// Appends children in place.
    pub fn extend_children<T: Into<Renderable>>(&mut self, children: T) {
        flatten_into(&mut self.children, children.into());
    }

    /// Gets an attribute value by name.
    pub fn get(&self, key: &str) -> Option<&PropValue> {
        self.attrs.get(key)
    }

    /// Gets an attribute value as a string slice, if it is one.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(PropValue::as_str)
    }

    /// Iterates over the attributes in insertion order.
    pub fn attrs(&self) -> impl Iterator<Item = (&str, &PropValue)> {
        self.attrs.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Gets the children.
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Returns true if there are no attributes and no children.
    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty() && self.children.is_empty()
    }

    pub(crate) fn take_children(&mut self) -> Vec<Node> {
        std::mem::take(&mut self.children)
    }

    pub(crate) fn set_children(&mut self, children: Vec<Node>) {
        self.children = children;
    }
}

impl<K, V> FromIterator<(K, V)> for Props
where
    K: Into<String>,
    V: Into<PropValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut props = Self::new();
        for (k, v) in iter {
            props.insert(k, v);
        }
        props
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_order() {
        let props = Props::new().attr("b", 1).attr("a", 2).attr("c", 3);
        let keys: Vec<_> = props.attrs().map(|(k, _)| k).collect();
        assert_eq!(keys, ["b", "a", "c"]);
    }

    #[test]
    fn test_overwrite_keeps_position() {
        let props = Props::new().attr("a", 1).attr("b", 2).attr("a", 3);
        let attrs: Vec<_> = props.attrs().collect();
        assert_eq!(
            attrs,
            [("a", &PropValue::from(3)), ("b", &PropValue::from(2))]
        );
    }

    #[test]
    fn test_children_key_is_reserved() {
        let props = Props::new().attr("children", "text").attr("id", "x");
        assert_eq!(props.get(CHILDREN), None);
        assert_eq!(props.children(), [Node::from("text")]);
        assert_eq!(props.attrs().count(), 1);
    }

    #[test]
    fn test_children_are_flattened() {
        let props = Props::new()
            .with_children(vec![
                Renderable::from("a"),
                Renderable::Null,
                Renderable::from(vec![Renderable::from(false), Renderable::from(0)]),
            ])
            .with_children("b");
        assert_eq!(
            props.children(),
            [Node::from("a"), Node::from(0), Node::from("b")]
        );
    }

    #[test]
    fn test_from_iter() {
        let props: Props = [("class", "x"), ("id", "y")].into_iter().collect();
        assert_eq!(props.get_str("class"), Some("x"));
        assert_eq!(props.get_str("id"), Some("y"));
    }

    #[test]
    fn test_is_empty() {
        assert!(Props::new().is_empty());
        assert!(!Props::new().attr("a", true).is_empty());
        assert!(!Props::new().with_children("a").is_empty());
        assert!(Props::new().with_children(Renderable::Null).is_empty());
    }
}
