use super::{helpers, Render};
use crate::element::Element;

impl Render for Element {
    fn render_into(&self, indent: usize, out: &mut String) {
        let (indent_str, inner_indent) = helpers::create_indentation(indent);

        helpers::push_line(out, &indent_str, &format!("<{}>", self.name()));

        if !self.text().is_empty() {
            helpers::push_line(out, &inner_indent, self.text());
        }

        for child in self.children() {
            child.render_into(indent + 1, out);
        }

        helpers::push_line(out, &indent_str, &helpers::closing_tag(self.name()));
    }
}
