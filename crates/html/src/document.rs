//! Host document: owns the node tree and models the loading lifecycle.
//!
//! A document created with [`Document::loading`] accepts streamed bytes until
//! [`Document::finish`] parses them. Finishing is the content-loaded signal:
//! every listener registered while loading runs exactly once, in
//! registration order, against the freshly built tree.

use crate::{Node, assign_node_ids, build_dom, tokenize};
use tools::Utf8Decoder;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReadyState {
    Loading,
    Interactive,
    Complete,
}

pub type ContentLoadedListener = Box<dyn FnOnce(&mut Node)>;

pub struct Document {
    state: ReadyState,
    decoder: Option<Utf8Decoder>,
    dom: Node,
    listeners: Vec<ContentLoadedListener>,
}

impl Document {
    pub fn loading() -> Self {
        Self {
            state: ReadyState::Loading,
            decoder: Some(Utf8Decoder::new()),
            dom: Node::empty_document(),
            listeners: Vec::new(),
        }
    }

    /// A document whose source is already fully available.
    pub fn parse(source: &str) -> Self {
        Self {
            state: ReadyState::Complete,
            decoder: None,
            dom: crate::parse_document(source),
            listeners: Vec::new(),
        }
    }

    pub fn ready_state(&self) -> ReadyState {
        self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state == ReadyState::Loading
    }

    /// Feed source bytes. Ignored once the document has finished loading.
    pub fn push_bytes(&mut self, bytes: &[u8]) {
        match self.decoder.as_mut() {
            Some(decoder) => decoder.push(bytes),
            None => log::warn!(
                target: "html.document",
                "ignoring {} bytes pushed after load completed",
                bytes.len()
            ),
        }
    }

    /// Register a content-loaded listener. On a document that already
    /// finished loading the listener runs immediately.
    pub fn add_content_loaded_listener(&mut self, listener: impl FnOnce(&mut Node) + 'static) {
        if self.is_loading() {
            self.listeners.push(Box::new(listener));
        } else {
            listener(&mut self.dom);
        }
    }

    pub fn pending_listeners(&self) -> usize {
        self.listeners.len()
    }

    /// Parse the buffered source and raise the content-loaded signal.
    /// Calling this more than once has no further effect.
    pub fn finish(&mut self) {
        let Some(decoder) = self.decoder.take() else {
            return;
        };
        let source = decoder.finish();
        let mut dom = build_dom(&tokenize(&source));
        assign_node_ids(&mut dom);
        self.dom = dom;
        self.state = ReadyState::Interactive;

        let listeners = std::mem::take(&mut self.listeners);
        log::debug!(
            target: "html.document",
            "content loaded: {} source bytes, {} listeners",
            source.len(),
            listeners.len()
        );
        for listener in listeners {
            listener(&mut self.dom);
        }
        self.state = ReadyState::Complete;
    }

    pub fn dom(&self) -> &Node {
        &self.dom
    }

    pub fn dom_mut(&mut self) -> &mut Node {
        &mut self.dom
    }

    pub fn into_dom(self) -> Node {
        self.dom
    }
}
