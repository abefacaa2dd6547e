use crate::{escape, Element, ElementType, Node, Props, RenderConfig, RenderError, Renderable};
use log::{debug, error, trace, warn};

/// Serializes trees into indented markup.
///
/// The output is a pure function of the tree, the starting depth, and the [`RenderConfig`].
///
/// # Example
///
/// ```
/// # use vtree::*;
/// let tree = create_element("p", Props::new().attr("class", "note"), ["hi"]);
/// let renderer = Renderer::new(RenderConfig::default().with_indent_width(4));
/// assert_eq!(
///     renderer.render(tree).unwrap(),
///     "<p class=\"note\">\n    hi\n</p>"
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    /// Creates a renderer with the given configuration.
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Returns the renderer's configuration.
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Renders a value at depth 0.
    pub fn render<T: Into<Renderable>>(&self, value: T) -> Result<String, RenderError> {
        self.render_at(value, 0)
    }

    /// Renders a value with every line indented by at least `depth` levels.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::DepthLimitExceeded`] if the tree nests more deeply than the
    /// configured limit. Failing components and unrecognized nodes are not errors: they're
    /// replaced by placeholders in the output.
    pub fn render_at<T: Into<Renderable>>(
        &self,
        value: T,
        depth: usize,
    ) -> Result<String, RenderError> {
        let value = value.into();
        debug!(kind = value.kind(), depth; "Rendering tree");
        let out = self.renderable(&value, depth, 0)?;
        trace!(bytes = out.len(); "Rendered tree");
        Ok(out)
    }

    /// Renders a value, replacing the whole output with a diagnostic if rendering fails.
    pub(crate) fn render_or_diagnostic(&self, value: &Renderable, depth: usize) -> String {
        or_diagnostic(self.renderable(value, depth, 0))
    }

    pub(crate) fn render_element_or_diagnostic(&self, e: &Element, depth: usize) -> String {
        or_diagnostic(self.element(e, depth, 0))
    }

    fn indent(&self, depth: usize) -> String {
        " ".repeat(depth * self.config.indent_width())
    }

    fn enter(&self, level: usize) -> Result<usize, RenderError> {
        match self.config.max_depth() {
            Some(limit) if level >= limit => Err(RenderError::DepthLimitExceeded { limit }),
            _ => Ok(level + 1),
        }
    }

    fn primitive(&self, text: &str, depth: usize) -> String {
        format!("{}{}", self.indent(depth), escape(text))
    }

    fn placeholder(&self, message: &str, depth: usize) -> String {
        format!("{}<!-- {} -->", self.indent(depth), message)
    }

    fn renderable(
        &self,
        value: &Renderable,
        depth: usize,
        level: usize,
    ) -> Result<String, RenderError> {
        match value {
            Renderable::Text(s) => Ok(self.primitive(s, depth)),
            Renderable::Number(n) => Ok(self.primitive(&n.to_string(), depth)),
            Renderable::List(items) => {
                let level = self.enter(level)?;
                let lines = items
                    .iter()
                    .map(|item| self.renderable(item, depth, level))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(lines.join("\n"))
            }
            Renderable::Element(e) => self.element(e, depth, level),
            Renderable::Null | Renderable::Bool(_) => {
                warn!(kind = value.kind(); "Unknown node type");
                Ok(self.placeholder(&format!("Unknown node type: {}", value.kind()), depth))
            }
        }
    }

    fn node(&self, node: &Node, depth: usize, level: usize) -> Result<String, RenderError> {
        match node {
            Node::Text(s) => Ok(self.primitive(s, depth)),
            Node::Number(n) => Ok(self.primitive(&n.to_string(), depth)),
            Node::Element(e) => self.element(e, depth, level),
        }
    }

    fn nodes(&self, nodes: &[Node], depth: usize, level: usize) -> Result<String, RenderError> {
        let lines = nodes
            .iter()
            .map(|node| self.node(node, depth, level))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(lines.join("\n"))
    }

    fn element(&self, e: &Element, depth: usize, level: usize) -> Result<String, RenderError> {
        let level = self.enter(level)?;
        match e.ty() {
            ElementType::Fragment => {
                trace!(depth; "Rendering fragment");
                self.nodes(e.children(), depth, level)
            }
            ElementType::Component(component) => {
                trace!(component = component.name(), depth; "Expanding component");
                match component.invoke(e.props()) {
                    Ok(output) => self.renderable(&output, depth, level),
                    Err(err) => {
                        warn!(component = component.name(), err:%; "Component failed to render");
                        Ok(self.placeholder(&format!("Error rendering component: {}", err), depth))
                    }
                }
            }
            ElementType::Tag(tag) => {
                trace!(tag, depth; "Rendering tag");
                let indent = self.indent(depth);
                let open = match attributes(e.props()) {
                    attrs if attrs.is_empty() => tag.to_string(),
                    attrs => format!("{} {}", tag, attrs),
                };
                if e.children().is_empty() {
                    return Ok(format!("{}<{} />", indent, open));
                }
                let children = self.nodes(e.children(), depth + 1, level)?;
                Ok(format!(
                    "{indent}<{open}>\n{children}\n{indent}</{tag}>",
                    indent = indent,
                    open = open,
                    children = children,
                    tag = tag,
                ))
            }
        }
    }
}

fn or_diagnostic(result: Result<String, RenderError>) -> String {
    result.unwrap_or_else(|err| {
        error!(err:%; "Render failed");
        format!("<!-- Render failed: {} -->", err)
    })
}

/// Builds the attribute string for a tag: `true` renders the bare key, `false` and `null` render
/// nothing, and anything else renders `key="value"` with the value escaped.
fn attributes(props: &Props) -> String {
    props
        .attrs()
        .filter_map(|(key, value)| match value.as_bool() {
            Some(true) => Some(key.to_string()),
            Some(false) => None,
            None => value
                .as_attribute_text()
                .map(|text| format!("{}=\"{}\"", key, escape(&text))),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Renders a value to markup, starting at the given indentation depth.
///
/// Each level of depth is two spaces. Failing components and unrecognized nodes are rendered as
/// comment placeholders. This uses the default [`RenderConfig`], under which rendering can't
/// fail; use a [`Renderer`] to render with other settings.
///
/// # Example
///
/// ```
/// # use vtree::*;
/// assert_eq!(render_to_text("a & b", 1), "  a &amp; b");
/// assert_eq!(render_to_text(create_element("br", None, ()), 0), "<br />");
/// ```
pub fn render_to_text<T: Into<Renderable>>(value: T, depth: usize) -> String {
    Renderer::default().render_or_diagnostic(&value.into(), depth)
}
