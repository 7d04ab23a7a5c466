#![allow(clippy::panic_in_result_fn)]
#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::indexing_slicing)]

use tagtree::test_utils::*;

const GREETING: &str = "<ul>\n  <li>\n    Hello\n  </li>\n  <li>\n    World\n  </li>\n</ul>\n";

#[test]
fn traditional_builder_calls() {
    let mut builder = HtmlBuilder::new("ul");
    builder.add_child("li", "Hello");
    builder.add_child("li", "World");

    assert_eq!(builder.render(), GREETING);
}

#[test]
fn fluent_builder_calls() {
    let mut builder = HtmlBuilder::new("ul");
    builder.add_child("li", "Hello").add_child("li", "World");

    assert_eq!(builder.render(), GREETING);
}

#[test]
fn static_factory_builder() {
    let element = Element::builder("ul")
        .with_child("li", "Hello")
        .with_child("li", "World")
        .build();

    assert_eq!(element.render(), GREETING);
}

#[test]
fn all_idioms_build_the_same_tree() {
    let mut sequential = HtmlBuilder::new("ul");
    sequential.add_child("li", "Hello");
    sequential.add_child("li", "World");

    let factory = Element::builder("ul")
        .with_child("li", "Hello")
        .with_child("li", "World")
        .build();

    assert_eq!(sequential.build(), factory);
    assert_eq!(greeting_list(), factory);
}

#[test]
fn new_builder_has_childless_root() {
    let builder = HtmlBuilder::new("table");
    assert_eq!(builder.root().name(), "table");
    assert!(builder.root().children().is_empty());
    assert_eq!(builder.render(), "<table>\n</table>\n");
}

#[test]
fn root_name_is_fixed() {
    let mut builder = HtmlBuilder::new("ul");
    builder.add_child("ol", "").add_child("li", "x");

    let root = builder.build();
    assert_eq!(root.name(), "ul");
    assert_eq!(root.children().len(), 2);
}

#[test]
fn children_are_only_appended_to_root() {
    let element = Element::builder("ul")
        .with_child("li", "a")
        .with_child("li", "b")
        .build();

    assert!(element.children().iter().all(|c| c.children().is_empty()));
}

#[test]
fn render_during_construction_reflects_progress() {
    let mut builder = HtmlBuilder::new("ul");
    let empty = builder.render();
    builder.add_child("li", "Hello");
    let one = builder.render();

    assert_ne!(empty, one);
    assert_eq!(one, "<ul>\n  <li>\n    Hello\n  </li>\n</ul>\n");
}

#[test]
fn build_hands_over_what_root_showed() {
    let mut builder = HtmlBuilder::new("ul");
    builder.add_child("li", "Hello");
    let snapshot = builder.root().clone();

    assert_eq!(builder.build(), snapshot);
}
