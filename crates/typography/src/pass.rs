use css::{Selector, query_selector_path, strip_properties};
use html::{Node, NodePath, find_first_element, node_at_path_mut, path_to_id};

use crate::config::{RootSelector, TypographyConfig};
use crate::error::TypographyError;
use crate::rules::{RuleTable, ZERO_WIDTH_SPACE, default_rules};
use crate::select::select_text_nodes;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PassReport {
    /// Text nodes that made it through selection.
    pub texts_scanned: usize,
    /// Selected text nodes whose content changed.
    pub texts_rewritten: usize,
    /// Text nodes that received the zero-width-space prefix.
    pub texts_guarded: usize,
    /// Inline style declarations dropped.
    pub declarations_removed: usize,
}

/// Rewrites punctuation in a document's visible text and strips inline font
/// overrides. One value runs any number of passes; each pass is synchronous.
#[derive(Clone, Debug)]
pub struct Typographer {
    config: TypographyConfig,
    rules: RuleTable,
}

impl Default for Typographer {
    fn default() -> Self {
        Self::new(TypographyConfig::default())
    }
}

impl Typographer {
    pub fn new(config: TypographyConfig) -> Self {
        Self {
            config,
            rules: default_rules().clone(),
        }
    }

    pub fn with_rules(config: TypographyConfig, rules: RuleTable) -> Self {
        Self { config, rules }
    }

    pub fn config(&self) -> &TypographyConfig {
        &self.config
    }

    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    /// Rewrite text under the configured root, then strip style overrides
    /// under `<body>`.
    pub fn run(&self, document: &mut Node) -> Result<PassReport, TypographyError> {
        let root_path = self.resolve_root(document)?;
        let mut report = PassReport::default();

        if let Some(root) = node_at_path_mut(document, &root_path) {
            self.rewrite_text(root, &mut report);
        }
        report.declarations_removed = self.strip_styles(document);

        log::debug!(
            target: "typography",
            "pass done: scanned={} rewritten={} guarded={} declarations_removed={}",
            report.texts_scanned,
            report.texts_rewritten,
            report.texts_guarded,
            report.declarations_removed
        );
        Ok(report)
    }

    /// Path from the document to the subtree the text pass scans.
    pub fn resolve_root(&self, document: &Node) -> Result<NodePath, TypographyError> {
        match &self.config.root {
            None => Ok(Vec::new()),
            Some(RootSelector::Node(id)) => {
                path_to_id(document, *id).ok_or(TypographyError::RootNotFound(*id))
            }
            Some(RootSelector::Selector(source)) => {
                let selector = Selector::parse(source)
                    .ok_or_else(|| TypographyError::InvalidSelector(source.clone()))?;
                Ok(query_selector_path(document, &selector).unwrap_or_else(|| {
                    log::warn!(
                        target: "typography",
                        "root selector {source:?} matched nothing; scanning the whole document"
                    );
                    Vec::new()
                }))
            }
        }
    }

    fn rewrite_text(&self, root: &mut Node, report: &mut PassReport) {
        let targets = select_text_nodes(root, &self.config);
        report.texts_scanned = targets.len();

        for target in targets {
            let Some(Node::Text { text, .. }) = node_at_path_mut(root, &target.path) else {
                continue;
            };
            let mut input = String::with_capacity(text.len() + ZERO_WIDTH_SPACE.len_utf8());
            if target.follows_inline {
                input.push(ZERO_WIDTH_SPACE);
                report.texts_guarded += 1;
            }
            input.push_str(text);

            let output = self.rules.apply(&input);
            if output != *text {
                log::trace!(target: "typography", "rewrote {text:?} -> {output:?}");
                report.texts_rewritten += 1;
                *text = output;
            }
        }
    }

    /// Applies to elements strictly below `<body>`; a document without a body
    /// is treated as a fragment and every element is considered.
    fn strip_styles(&self, document: &mut Node) -> usize {
        if self.config.strip_properties.is_empty() {
            return 0;
        }
        match find_first_element(document, "body") {
            Some(body_path) => match node_at_path_mut(document, &body_path) {
                Some(body) => body
                    .children_mut()
                    .map(|children| {
                        children
                            .iter_mut()
                            .map(|c| strip_styles_in(c, &self.config.strip_properties))
                            .sum::<usize>()
                    })
                    .unwrap_or(0),
                None => 0,
            },
            None => strip_styles_in(document, &self.config.strip_properties),
        }
    }
}

fn strip_styles_in(node: &mut Node, properties: &[String]) -> usize {
    let mut removed = 0;
    if let Some(style) = node.attr_mut("style") {
        let (kept, count) = strip_properties(style, properties);
        if count > 0 {
            *style = kept;
            removed += count;
        }
    }
    if let Some(children) = node.children_mut() {
        for c in children {
            removed += strip_styles_in(c, properties);
        }
    }
    removed
}
