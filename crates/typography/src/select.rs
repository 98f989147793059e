//! Picks the text nodes the rule table may rewrite.

use html::{Node, NodePath};

use crate::config::TypographyConfig;

/// A text node selected for rewriting, addressed relative to the scanned root.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextTarget {
    pub path: NodePath,
    /// The node's previous sibling is an inline element, so the text gets a
    /// zero-width space prefix before the rules run.
    pub follows_inline: bool,
}

// U+FEFF counts as whitespace for this check, as in ECMAScript `\s`.
fn is_whitespace_only(text: &str) -> bool {
    text.chars().all(|c| c.is_whitespace() || c == '\u{FEFF}')
}

/// Text nodes under `root` in document order, minus whitespace-only nodes,
/// anything inside a preformatted element below `root`, and nodes whose
/// direct parent is a verbatim element.
pub fn select_text_nodes(root: &Node, config: &TypographyConfig) -> Vec<TextTarget> {
    struct Walk<'c> {
        config: &'c TypographyConfig,
        path: NodePath,
        out: Vec<TextTarget>,
    }

    impl Walk<'_> {
        fn children_of(&mut self, parent: &Node) {
            let verbatim_parent = parent
                .element_name()
                .is_some_and(|name| self.config.verbatim_parents.contains(name));
            let children = parent.children();

            for (i, child) in children.iter().enumerate() {
                self.path.push(i);
                match child {
                    Node::Text { text, .. } => {
                        if !verbatim_parent && !is_whitespace_only(text) {
                            let follows_inline = i
                                .checked_sub(1)
                                .and_then(|prev| children[prev].element_name())
                                .is_some_and(|name| self.config.inline_tags.contains(name));
                            self.out.push(TextTarget {
                                path: self.path.clone(),
                                follows_inline,
                            });
                        }
                    }
                    Node::Element { name, .. } => {
                        if !self.config.preformatted_tags.contains(name) {
                            self.children_of(child);
                        }
                    }
                    Node::Document { .. } | Node::Comment { .. } => {}
                }
                self.path.pop();
            }
        }
    }

    let mut walk = Walk {
        config,
        path: Vec::new(),
        out: Vec::new(),
    };
    walk.children_of(root);
    walk.out
}
