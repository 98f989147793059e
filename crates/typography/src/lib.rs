//! Typographic normalization for HTML documents.
//!
//! Straight quotes become directional quotes, ASCII dash runs become en and
//! em dashes with narrow spacing, `...` becomes an ellipsis, and inline
//! `font-family`/`font-size` overrides are dropped from the body. Text inside
//! `<pre>`, and directly inside `<code>`, `<style>` and `<script>`, is left
//! alone. Markdown sources are handled by [`markdown`], which leaves code
//! blocks as written.
//!
//! ```
//! use typography::Typographer;
//!
//! let mut dom = html::parse_document("<p>\"Hello\" -- it's me...</p>");
//! Typographer::default().run(&mut dom).unwrap();
//! assert_eq!(
//!     html::serialize(&dom),
//!     "<p>\u{201C}Hello\u{201D}\u{2009}\u{2013}\u{2009}it\u{2019}s me\u{2026}</p>"
//! );
//! ```

pub mod config;
pub mod error;
pub mod markdown;
pub mod pass;
pub mod rules;
pub mod schedule;
pub mod select;
pub mod text;

pub use config::{RootSelector, TagSet, TypographyConfig};
pub use error::TypographyError;
pub use markdown::{markdown_preview, markdown_text, typogrify_markdown};
pub use pass::{PassReport, Typographer};
pub use rules::{Limit, Rule, RuleTable, default_rules};
pub use schedule::Scheduled;
pub use select::{TextTarget, select_text_nodes};
pub use text::{preview, truncate_chars, typogrify};
