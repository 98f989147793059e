use crate::syntax::Selector;
use html::{Node, NodePath};

// Check if an element matches a selector
pub fn matches_selector(node: &Node, selector: &Selector) -> bool {
    let Node::Element { name, .. } = node else {
        return false;
    };
    match selector {
        Selector::Universal => true,
        Selector::Type(t) => name.eq_ignore_ascii_case(t),
        Selector::Id(want) => node.attr("id") == Some(want.as_str()),
        Selector::Class(want) => node.attr_has_token("class", want),
    }
}

/// Path to the first descendant element of `root` matching `selector`, in
/// document order. The root itself is never a candidate.
pub fn query_selector_path(root: &Node, selector: &Selector) -> Option<NodePath> {
    fn walk(node: &Node, selector: &Selector, path: &mut NodePath) -> bool {
        for (i, c) in node.children().iter().enumerate() {
            path.push(i);
            if matches_selector(c, selector) || walk(c, selector, path) {
                return true;
            }
            path.pop();
        }
        false
    }

    let mut path = Vec::new();
    walk(root, selector, &mut path).then_some(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use html::{node_at_path, parse_document};

    fn sel(s: &str) -> Selector {
        Selector::parse(s).expect("valid selector")
    }

    #[test]
    fn finds_first_match_in_document_order() {
        let dom = parse_document(
            r#"<div class="post"><p id="a">one</p></div><section class="post lead"><p>two</p></section>"#,
        );
        assert_eq!(query_selector_path(&dom, &sel(".post")), Some(vec![0]));
        assert_eq!(query_selector_path(&dom, &sel(".lead")), Some(vec![1]));
        assert_eq!(query_selector_path(&dom, &sel("#a")), Some(vec![0, 0]));
        assert_eq!(query_selector_path(&dom, &sel("P")), Some(vec![0, 0]));
        assert_eq!(query_selector_path(&dom, &sel("#missing")), None);
    }

    #[test]
    fn root_is_not_a_candidate() {
        let dom = parse_document("<pre><pre>x</pre></pre>");
        let outer = node_at_path(&dom, &[0]).expect("outer pre");
        assert_eq!(query_selector_path(outer, &sel("pre")), Some(vec![0]));
    }

    #[test]
    fn universal_matches_elements_only() {
        let dom = parse_document("text<b>x</b>");
        assert_eq!(query_selector_path(&dom, &sel("*")), Some(vec![1]));
    }
}
