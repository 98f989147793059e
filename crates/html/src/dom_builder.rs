use crate::types::{Id, Node, Token};

/// Build a node tree from a token stream.
///
/// An end tag closes the nearest open element with the same name, closing
/// anything opened after it. An end tag with no matching open element is
/// dropped. Elements still open at the end of input are closed implicitly.
pub fn build_dom(tokens: &[Token]) -> Node {
    // Bottom of the stack is always the document node.
    let mut open: Vec<Node> = vec![Node::empty_document()];

    for token in tokens {
        match token {
            Token::Doctype(s) => {
                if let Some(Node::Document { doctype, .. }) = open.first_mut() {
                    *doctype = Some(s.clone());
                }
            }
            Token::Comment(c) => append_child(
                &mut open,
                Node::Comment {
                    id: Id::UNASSIGNED,
                    text: c.clone(),
                },
            ),
            Token::Text(txt) => {
                if !txt.is_empty() {
                    append_child(&mut open, Node::text(txt.as_str()));
                }
            }
            Token::StartTag {
                name,
                attributes,
                self_closing,
            } => {
                let element = Node::Element {
                    id: Id::UNASSIGNED,
                    name: name.clone(),
                    attributes: attributes.clone(),
                    children: Vec::new(),
                };
                if *self_closing {
                    append_child(&mut open, element);
                } else {
                    open.push(element);
                }
            }
            Token::EndTag(name) => {
                let Some(depth) = open
                    .iter()
                    .rposition(|node| node.is_element_named(name))
                else {
                    log::trace!(target: "html.dom_builder", "dropping stray end tag </{name}>");
                    continue;
                };
                while open.len() > depth {
                    close_top(&mut open);
                }
            }
        }
    }

    while open.len() > 1 {
        close_top(&mut open);
    }
    open.pop().unwrap_or_else(Node::empty_document)
}

fn append_child(open: &mut [Node], child: Node) {
    if let Some(children) = open.last_mut().and_then(Node::children_mut) {
        children.push(child);
    }
}

fn close_top(open: &mut Vec<Node>) {
    if open.len() < 2 {
        return;
    }
    if let Some(node) = open.pop() {
        append_child(open, node);
    }
}
