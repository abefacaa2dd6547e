use crate::{Props, Renderable};
use std::{
    any::{type_name, Any},
    error::Error,
    fmt,
    panic::{self, AssertUnwindSafe},
    rc::Rc,
};

/// The error type returned by fallible components.
///
/// Any error type can be converted into this with `?`, as can strings via `.into()`.
pub type ComponentError = Box<dyn Error + Send + Sync>;

/// The result of invoking a component.
pub type ComponentResult = Result<Renderable, ComponentError>;

type ComponentFn = dyn Fn(&Props) -> ComponentResult;

/// A functional component: a callable which maps a [`Props`] record to a [`Renderable`] value.
///
/// Components are invoked by the renderer each time the element that references them is rendered.
/// If the callable returns an error or panics, the renderer emits a placeholder in place of the
/// component's output and carries on with the rest of the tree.
///
/// Two components are equal if they share the same underlying callable.
///
/// # Example
///
/// ```
/// # use vtree::*;
/// let greeting = Component::new(|props: &Props| {
///     let name = props.get_str("name").unwrap_or("stranger");
///     create_element("p", None, [format!("Hello, {}!", name)]).into()
/// });
/// let e = create_element(greeting, Props::new().attr("name", "Ada"), ());
/// assert_eq!(e.to_string(), "<p>\n  Hello, Ada!\n</p>");
/// ```
#[derive(Clone)]
pub struct Component {
    name: &'static str,
    f: Rc<ComponentFn>,
}

impl Component {
    /// Creates a component which can't fail.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&Props) -> Renderable + 'static,
    {
        Self {
            name: type_name::<F>(),
            f: Rc::new(move |props: &Props| Ok(f(props))),
        }
    }

    /// Creates a component which may fail.
    pub fn fallible<F>(f: F) -> Self
    where
        F: Fn(&Props) -> ComponentResult + 'static,
    {
        Self {
            name: type_name::<F>(),
            f: Rc::new(f),
        }
    }

    /// Replaces the name used to identify the component in logs.
    pub fn with_name(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    /// Gets the name used to identify the component in logs.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Invokes the component.
    ///
    /// Panics raised by the component are caught and returned as errors.
    pub fn invoke(&self, props: &Props) -> ComponentResult {
        match panic::catch_unwind(AssertUnwindSafe(|| (self.f)(props))) {
            Ok(result) => result,
            Err(payload) => Err(panic_message(payload).into()),
        }
    }
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Ok(s) = payload.downcast::<String>() {
        *s
    } else {
        "component panicked".to_string()
    }
}

impl PartialEq for Component {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.f, &other.f)
    }
}

impl fmt::Debug for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Component").field(&self.name).finish()
    }
}

/// Conversion into a [`Component`].
///
/// This is implemented for plain functions and closures with the signature
/// `Fn(&Props) -> Renderable`, which lets them be used directly as element types.
pub trait IntoComponent {
    /// Performs the conversion.
    fn into_component(self) -> Component;
}

impl IntoComponent for Component {
    fn into_component(self) -> Component {
        self
    }
}

impl<F> IntoComponent for F
where
    F: Fn(&Props) -> Renderable + 'static,
{
    fn into_component(self) -> Component {
        Component::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::create_element;

    fn title(props: &Props) -> Renderable {
        create_element("h1", None, [props.get_str("text").unwrap_or_default()]).into()
    }

    #[test]
    fn test_invoke() {
        let c = title.into_component();
        let out = c.invoke(&Props::new().attr("text", "hi")).unwrap();
        assert_eq!(out, Renderable::from(create_element("h1", None, ["hi"])));
        assert!(c.name().ends_with("title"));
    }

    #[test]
    fn test_invoke_error() {
        let c = Component::fallible(|_| Err("no data".into()));
        let err = c.invoke(&Props::new()).unwrap_err();
        assert_eq!(err.to_string(), "no data");
    }

    #[test]
    fn test_invoke_panic() {
        let c = Component::new(|_| panic!("boom"));
        let err = c.invoke(&Props::new()).unwrap_err();
        assert_eq!(err.to_string(), "boom");

        let c = Component::new(|props| panic!("bad prop: {:?}", props.get("x")));
        let err = c.invoke(&Props::new()).unwrap_err();
        assert_eq!(err.to_string(), "bad prop: None");
    }

    #[test]
    fn test_equality_is_identity() {
        let a = Component::new(title);
        let b = Component::new(title);
        assert_eq!(a, a.clone());
        assert_ne!(a, b);
    }

    #[test]
    fn test_debug() {
        let c = Component::new(title).with_name("Title");
        assert_eq!(format!("{:?}", c), "Component(\"Title\")");
    }
}
