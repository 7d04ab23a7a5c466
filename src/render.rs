mod element;
mod tag;

/// Number of spaces added per nesting level
pub const INDENT_SIZE: usize = 2;

/// Trait for rendering a tree node and its subtree as indented markup
pub trait Render {
    /// Appends the node rendered at nesting depth `indent` to `out`
    fn render_into(&self, indent: usize, out: &mut String);

    /// Renders the node as if it sat `indent` levels deep
    fn render_at(&self, indent: usize) -> String {
        let mut out = String::new();
        self.render_into(indent, &mut out);
        out
    }

    /// Renders the node as a top-level fragment
    fn render(&self) -> String {
        self.render_at(0)
    }
}

/// Helper functions shared between the element and tag renderers
pub mod helpers {
    use super::INDENT_SIZE;

    /// Creates the indentation for a tag line and for the text line beneath it
    pub fn create_indentation(indent: usize) -> (String, String) {
        let indent_str = " ".repeat(indent * INDENT_SIZE);
        let inner_indent = " ".repeat((indent + 1) * INDENT_SIZE);
        (indent_str, inner_indent)
    }

    pub fn push_line(out: &mut String, indent: &str, line: &str) {
        out.push_str(indent);
        out.push_str(line);
        out.push('\n');
    }

    pub fn closing_tag(name: &str) -> String {
        format!("</{}>", name)
    }

    /// Formats attributes in insertion order, each with a leading space
    pub fn format_attributes(attributes: &[(String, String)]) -> String {
        attributes
            .iter()
            .map(|(key, value)| format!(" {}=\"{}\"", key, value))
            .collect()
    }
}
