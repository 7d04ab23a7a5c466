use crate::{builder::HtmlBuilder, element::Element};

/// The `ul` list with `Hello` and `World` items
pub fn greeting_list() -> Element {
    let mut builder = HtmlBuilder::new("ul");
    builder.add_child("li", "Hello").add_child("li", "World");
    builder.build()
}

/// A chain of `depth + 1` nested `div` elements, each with a `level-N` text line
pub fn nested_tree(depth: usize) -> Element {
    (0..depth).rev().fold(
        Element::new("div", format!("level-{}", depth)),
        |child, level| {
            let mut parent = Element::new("div", format!("level-{}", level));
            parent.push_child(child);
            parent
        },
    )
}
