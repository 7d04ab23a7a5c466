use super::{helpers, Render};
use crate::tag::Tag;

impl Render for Tag {
    fn render_into(&self, indent: usize, out: &mut String) {
        let (indent_str, inner_indent) = helpers::create_indentation(indent);
        let name = self.kind().name();
        let attributes = helpers::format_attributes(self.attributes());

        // Childless, textless tags close themselves
        if self.children().is_empty() && self.text().is_empty() {
            helpers::push_line(out, &indent_str, &format!("<{}{}/>", name, attributes));
            return;
        }

        helpers::push_line(out, &indent_str, &format!("<{}{}>", name, attributes));

        if !self.text().is_empty() {
            helpers::push_line(out, &inner_indent, self.text());
        }

        for child in self.children() {
            child.render_into(indent + 1, out);
        }

        helpers::push_line(out, &indent_str, &helpers::closing_tag(name));
    }
}
