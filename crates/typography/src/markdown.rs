//! Typography for markdown sources: rendered HTML for article bodies and
//! plain-text previews built from the document's text.

use pulldown_cmark::{Event, Parser, Tag, TagEnd, TextMergeStream, html};

use crate::text::{preview, typogrify};

/// Render `source` to HTML, typesetting text outside code blocks. Inline
/// code spans and raw HTML pass through untouched.
pub fn typogrify_markdown(source: &str) -> String {
    let mut in_code_block = false;
    let events = TextMergeStream::new(Parser::new(source)).map(|event| match event {
        Event::Start(Tag::CodeBlock(kind)) => {
            in_code_block = true;
            Event::Start(Tag::CodeBlock(kind))
        }
        Event::End(TagEnd::CodeBlock) => {
            in_code_block = false;
            Event::End(TagEnd::CodeBlock)
        }
        Event::Text(text) if !in_code_block => Event::Text(typogrify(&text).into()),
        other => other,
    });

    let mut out = String::with_capacity(source.len() + source.len() / 2);
    html::push_html(&mut out, events);
    out
}

/// The readable text of `source`: text and inline code, with blocks and line
/// breaks joined by single spaces. Code blocks are left out.
pub fn markdown_text(source: &str) -> String {
    let mut out = String::with_capacity(source.len());
    let mut in_code_block = false;

    for event in Parser::new(source) {
        match event {
            Event::Start(Tag::CodeBlock(_)) => in_code_block = true,
            Event::End(TagEnd::CodeBlock) => in_code_block = false,
            Event::Text(text) | Event::Code(text) if !in_code_block => out.push_str(&text),
            Event::SoftBreak
            | Event::HardBreak
            | Event::End(TagEnd::Paragraph | TagEnd::Heading(_) | TagEnd::Item) => {
                if !out.is_empty() && !out.ends_with(char::is_whitespace) {
                    out.push(' ');
                }
            }
            _ => {}
        }
    }

    out.truncate(out.trim_end().len());
    out
}

/// [`preview`] over the readable text of a markdown source.
pub fn markdown_preview(source: &str, max_chars: usize) -> String {
    preview(&markdown_text(source), max_chars)
}
