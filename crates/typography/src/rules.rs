//! The ordered replacement table.
//!
//! Order is load-bearing: opening-quote rules run before the catch-all quote
//! rules, and longer dash sequences are rewritten before the shorter ones
//! that would otherwise consume them.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::TypographyError;

pub const ZERO_WIDTH_SPACE: char = '\u{200B}';

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Limit {
    All,
    First,
}

#[derive(Clone, Debug)]
pub struct Rule {
    pattern: Regex,
    replacement: &'static str,
    limit: Limit,
}

impl Rule {
    /// `replacement` uses `regex` expansion syntax (`${1}`).
    pub fn new(pattern: &str, replacement: &'static str) -> Result<Rule, TypographyError> {
        Ok(Rule {
            pattern: Regex::new(pattern)?,
            replacement,
            limit: Limit::All,
        })
    }

    pub fn first_only(mut self) -> Rule {
        self.limit = Limit::First;
        self
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    pub fn replacement(&self) -> &'static str {
        self.replacement
    }

    pub fn limit(&self) -> Limit {
        self.limit
    }

    pub fn apply<'t>(&self, text: &'t str) -> Cow<'t, str> {
        match self.limit {
            Limit::All => self.pattern.replace_all(text, self.replacement),
            Limit::First => self.pattern.replace(text, self.replacement),
        }
    }
}

#[derive(Clone, Debug)]
pub struct RuleTable {
    rules: Vec<Rule>,
}

impl RuleTable {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Run every rule in order, each over the whole output of the previous one.
    pub fn apply(&self, text: &str) -> String {
        let mut current = text.to_string();
        for rule in &self.rules {
            if let Cow::Owned(next) = rule.apply(&current) {
                current = next;
            }
        }
        current
    }
}

impl Default for RuleTable {
    fn default() -> Self {
        default_rules().clone()
    }
}

static DEFAULT_RULES: LazyLock<RuleTable> = LazyLock::new(|| {
    // (pattern, replacement, first occurrence only)
    const TABLE: &[(&str, &str, bool)] = &[
        ("``", "\u{201C}", false),
        ("''", "\u{201D}", false),
        // Decades, e.g. ’80s. A quotation that itself starts with a decade
        // ('80s John Travolta was awesome.') comes out with a closing mark.
        (r"['‘](\d\d)s", "\u{2019}${1}s", false),
        ("`", "\u{2018}", false),
        (r#"(^|\s|\()""#, "${1}\u{201C}", false),
        ("\"", "\u{201D}", false),
        (r"(^|\s|\()'", "${1}\u{2018}", false),
        ("'", "\u{2019}", false),
        (r"\b–\b", "\u{200A}\u{2013}\u{200A}", false),
        (r"\b—\b", "\u{2009}\u{2014}\u{2009}", false),
        (" — ", "\u{2009}\u{2014}\u{2009}", false),
        ("---", "\u{2009}\u{2014}\u{2009}", false),
        (" - | -- ", "\u{2009}\u{2013}\u{2009}", false),
        ("--", "\u{200A}\u{2013}\u{200A}", false),
        (r"\(no pun intended\)", "", true),
        (r"\(pun intended\)", "", true),
        ("alot", "a lot", false),
        (r"\.\.\.", "\u{2026}", false),
    ];

    let rules = TABLE
        .iter()
        .map(|&(pattern, replacement, first)| {
            let rule = Rule::new(pattern, replacement)
                .unwrap_or_else(|e| panic!("built-in typography rule {pattern:?}: {e}"));
            if first { rule.first_only() } else { rule }
        })
        .collect();
    RuleTable::new(rules)
});

pub fn default_rules() -> &'static RuleTable {
    &DEFAULT_RULES
}
