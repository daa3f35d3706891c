pub mod display;
pub mod normalize;

use crate::document::{Element, Node};

pub use display::display_text;
pub use normalize::canonicalize;

/// Concatenate the text of every text leaf under `node`, in document order.
///
/// No separators are inserted between fragments, so `<b>a</b>c` yields `"ac"`.
/// Non-text leaves contribute nothing.
pub fn extract_text(node: &Node) -> String {
    match node {
        Node::Element(el) => element_text(el),
        Node::Text(text) => text.clone(),
        Node::Other => String::new(),
    }
}

/// [`extract_text`] for an element reached directly rather than through a [`Node`].
pub fn element_text(el: &Element) -> String {
    el.children.iter().map(extract_text).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Document;

    #[test]
    fn test_interleaved_markup_keeps_source_order() {
        let doc = Document::parse(
            "t",
            "<paragraph>Sec. <enum>2</enum>(a) <i>In</i> <b>gen<u>er</u>al</b>.</paragraph>",
        )
        .unwrap();
        assert_eq!(element_text(doc.root()), "Sec. 2(a) In general.");
    }

    #[test]
    fn test_other_nodes_contribute_nothing() {
        let doc = Document::parse("t", "<p>a<!-- hidden -->b<?pi x?>c</p>").unwrap();
        assert_eq!(element_text(doc.root()), "abc");
    }

    #[test]
    fn test_text_and_other_leaves() {
        assert_eq!(extract_text(&Node::Text("x y".into())), "x y");
        assert_eq!(extract_text(&Node::Other), "");
        assert_eq!(extract_text(&Node::Element(Element::new("empty"))), "");
    }

    #[test]
    fn test_repeated_fragments_are_not_deduplicated() {
        let doc = Document::parse("t", "<p><s>ab</s><s>ab</s>\n</p>").unwrap();
        assert_eq!(element_text(doc.root()), "abab\n");
    }
}
