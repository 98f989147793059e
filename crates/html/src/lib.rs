//! Minimal HTML document model: tokenizer, tree builder, serializer and a
//! host [`Document`] with a loading lifecycle.

pub mod document;
pub mod serialize;
pub mod traverse;

mod dom_builder;
mod entities;
mod tokenizer;
mod types;

pub use crate::document::{ContentLoadedListener, Document, ReadyState};
pub use crate::dom_builder::build_dom;
pub use crate::serialize::serialize;
pub use crate::tokenizer::{Tokenizer, tokenize};
pub use crate::traverse::{
    NodePath, assign_node_ids, find_first, find_first_element, find_node_by_id, node_at_path,
    node_at_path_mut, path_to_id,
};
pub use crate::types::{Id, Node, NodeId, Token};

/// Tokenize, build and number a complete document.
pub fn parse_document(input: &str) -> Node {
    let mut dom = build_dom(&tokenize(input));
    assign_node_ids(&mut dom);
    dom
}
