#![allow(clippy::panic_in_result_fn)]
#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::indexing_slicing)]

use proptest::collection::vec;
use proptest::prelude::*;
use tagtree::test_utils::*;

// Strategy for tag names
fn name_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9]{0,7}"
}

// Strategy for single-line text that cannot be mistaken for a tag line
fn text_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z0-9 ,.]{1,30}".prop_map(|s| format!("t:{}", s))
}

fn children_strategy() -> impl Strategy<Value = Vec<(String, String)>> {
    vec((name_strategy(), text_strategy()), 0..20)
}

fn build(root: &str, children: &[(String, String)]) -> Element {
    let mut builder = HtmlBuilder::new(root);
    for (name, text) in children {
        builder.add_child(name.as_str(), text.as_str());
    }
    builder.build()
}

proptest! {
    #[test]
    fn test_render_idempotent(root in name_strategy(), children in children_strategy()) {
        let element = build(&root, &children);
        prop_assert_eq!(element.render(), element.render());
    }

    #[test]
    fn test_children_keep_call_order(root in name_strategy(), children in children_strategy()) {
        let element = build(&root, &children);
        prop_assert_eq!(element.children().len(), children.len());

        let rendered_texts: Vec<String> = element
            .render()
            .lines()
            .map(str::trim_start)
            .filter(|l| l.starts_with("t:"))
            .map(String::from)
            .collect();
        let expected: Vec<String> = children.iter().map(|(_, t)| t.trim_start().to_string()).collect();
        prop_assert_eq!(rendered_texts, expected);
    }

    #[test]
    fn test_builder_idioms_agree(root in name_strategy(), children in children_strategy()) {
        let sequential = build(&root, &children);
        let factory = children
            .iter()
            .fold(Element::builder(root.as_str()), |b, (n, t)| b.with_child(n.as_str(), t.as_str()))
            .build();
        prop_assert_eq!(sequential, factory);
    }

    #[test]
    fn test_indentation_by_depth(depth in 0usize..12) {
        let rendered = nested_tree(depth).render();

        for line in rendered.lines() {
            let spaces = indentation_of(line);
            let trimmed = line.trim_start();
            match trimmed.strip_prefix("level-") {
                Some(level) => {
                    let level: usize = level.parse().unwrap();
                    prop_assert_eq!(spaces, (level + 1) * INDENT_SIZE);
                }
                None => prop_assert!(trimmed == "<div>" || trimmed == "</div>"),
            }
        }

        let closing: Vec<usize> = rendered
            .lines()
            .filter(|l| l.trim_start() == "</div>")
            .map(indentation_of)
            .collect();
        let expected: Vec<usize> = (0..=depth).rev().map(|d| d * INDENT_SIZE).collect();
        prop_assert_eq!(closing, expected);
    }

    #[test]
    fn test_self_closing_iff_empty(
        url in "[a-z:/.]{1,20}",
        texts in vec(text_strategy(), 0..3),
        with_image in any::<bool>(),
    ) {
        let image: Tag = Image::new(url.as_str()).into();
        prop_assert_eq!(image.render(), format!("<img src=\"{}\"/>\n", url));

        let mut children: Vec<Tag> = texts.iter().map(|t| Paragraph::new(t.as_str()).into()).collect();
        if with_image {
            children.push(image);
        }
        let is_empty = children.is_empty();
        let paragraph: Tag = Paragraph::with_children(children).into();

        prop_assert_eq!(paragraph.is_self_closing(), is_empty);
        prop_assert_eq!(paragraph.render().starts_with("<p/>"), is_empty);
        prop_assert_eq!(paragraph.render().contains("</p>"), !is_empty);
    }

    #[test]
    fn test_facet_last_write_wins(first in text_strategy(), company in text_strategy(), second in text_strategy()) {
        let mut builder = Person::create();
        builder.lives().at(first.as_str());
        builder.works().at(company.as_str());
        builder.lives().at(second.as_str());
        let person = builder.build();

        prop_assert_eq!(person.street_address(), second.as_str());
        prop_assert_eq!(person.company_name(), company.as_str());
    }
}
