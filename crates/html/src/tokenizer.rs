//! Practical HTML tokenizer for documents the typographer rewrites.
//!
//! Tag and attribute names are ASCII `[A-Za-z0-9:_-]` and are lowercased.
//! Attribute values may be double-quoted, single-quoted, unquoted or absent.
//! `<script>` and `<style>` bodies are rawtext: no tags or entities inside.
//!
//! Known limitations:
//! - No HTML5 parse-error recovery; malformed markup degrades to text.
//! - Rawtext close-tag scanning accepts only ASCII whitespace before `>`.
use crate::entities::decode_entities;
use crate::types::Token;
use memchr::memchr;

const COMMENT_START: &str = "<!--";
const COMMENT_END: &str = "-->";

// Close tags are only matched at an ASCII `<`, which never appears inside a
// UTF-8 continuation byte.
const SCRIPT_CLOSE_TAG: &[u8] = b"</script";
const STYLE_CLOSE_TAG: &[u8] = b"</style";

pub(crate) fn is_void_element(name: &str) -> bool {
    matches!(
        name,
        "area"
            | "base"
            | "br"
            | "col"
            | "embed"
            | "hr"
            | "img"
            | "input"
            | "link"
            | "meta"
            | "param"
            | "source"
            | "track"
            | "wbr"
    )
}

pub(crate) fn is_rawtext_element(name: &str) -> bool {
    name == "script" || name == "style"
}

fn is_name_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'-' || b == b'_' || b == b':'
}

fn starts_with_ignore_ascii_case_at(haystack: &[u8], start: usize, needle: &[u8]) -> bool {
    haystack
        .get(start..start + needle.len())
        .is_some_and(|s| s.eq_ignore_ascii_case(needle))
}

/// Returns `(start, end)` of the first `</tag\s*>` in `haystack`, `end` exclusive.
fn find_rawtext_close_tag(haystack: &str, close_tag: &[u8]) -> Option<(usize, usize)> {
    let bytes = haystack.as_bytes();
    let n = close_tag.len();
    let mut i = 0;
    while i + n <= bytes.len() {
        i += memchr(b'<', &bytes[i..])?;
        if starts_with_ignore_ascii_case_at(bytes, i, close_tag) {
            let mut k = i + n;
            while k < bytes.len() && bytes[k].is_ascii_whitespace() {
                k += 1;
            }
            if bytes.get(k) == Some(&b'>') {
                return Some((i, k + 1));
            }
        }
        i += 1;
    }
    None
}

pub struct Tokenizer<'a> {
    input: &'a str,
    pos: usize,
    out: Vec<Token>,
}

impl<'a> Tokenizer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            out: Vec::new(),
        }
    }

    fn bytes(&self) -> &'a [u8] {
        self.input.as_bytes()
    }

    fn at_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    fn skip_whitespace(&mut self) {
        let bytes = self.bytes();
        while self.pos < bytes.len() && bytes[self.pos].is_ascii_whitespace() {
            self.pos += 1;
        }
    }

    fn take_name(&mut self) -> &'a str {
        let bytes = self.bytes();
        let start = self.pos;
        while self.pos < bytes.len() && is_name_byte(bytes[self.pos]) {
            self.pos += 1;
        }
        &self.input[start..self.pos]
    }

    pub fn run(mut self) -> Vec<Token> {
        // Slices are only cut at ASCII structural bytes, so every endpoint is a
        // UTF-8 char boundary.
        while !self.at_end() {
            if self.bytes()[self.pos] != b'<' {
                self.text();
                continue;
            }
            let rest = &self.input[self.pos..];
            if rest.starts_with(COMMENT_START) {
                self.comment();
            } else if starts_with_ignore_ascii_case_at(self.bytes(), self.pos, b"<!doctype") {
                if !self.doctype() {
                    // Unterminated doctype: keep the remainder as text.
                    let input = self.input;
                    self.push_text(&input[self.pos..]);
                    self.pos = self.input.len();
                }
            } else if rest.starts_with("</") {
                self.end_tag();
            } else if self.bytes().get(self.pos + 1).is_some_and(|b| b.is_ascii_alphabetic()) {
                self.start_tag();
            } else {
                // A lone `<` is ordinary text.
                self.push_text("<");
                self.pos += 1;
            }
        }
        log::trace!(target: "html.tokenizer", "tokenized {} bytes into {} tokens", self.input.len(), self.out.len());
        self.out
    }

    fn push_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if let Some(Token::Text(prev)) = self.out.last_mut() {
            prev.push_str(text);
        } else {
            self.out.push(Token::Text(text.to_string()));
        }
    }

    fn text(&mut self) {
        let start = self.pos;
        let end = memchr(b'<', &self.bytes()[start..])
            .map(|rel| start + rel)
            .unwrap_or(self.input.len());
        self.pos = end;
        let decoded = decode_entities(&self.input[start..end]);
        self.push_text(&decoded);
    }

    fn comment(&mut self) {
        let body_start = self.pos + COMMENT_START.len();
        match self.input[body_start..].find(COMMENT_END) {
            Some(rel) => {
                self.out
                    .push(Token::Comment(self.input[body_start..body_start + rel].to_string()));
                self.pos = body_start + rel + COMMENT_END.len();
            }
            None => {
                self.out.push(Token::Comment(self.input[body_start..].to_string()));
                self.pos = self.input.len();
            }
        }
    }

    /// Returns false when the doctype is unterminated.
    fn doctype(&mut self) -> bool {
        let rest = &self.input[self.pos + 2..];
        let Some(end) = rest.find('>') else {
            return false;
        };
        self.out.push(Token::Doctype(rest[..end].trim().to_string()));
        self.pos += 2 + end + 1;
        true
    }

    fn end_tag(&mut self) {
        self.pos += 2;
        let name = self.take_name().to_ascii_lowercase();
        let bytes = self.bytes();
        while self.pos < bytes.len() && bytes[self.pos] != b'>' {
            self.pos += 1;
        }
        if self.pos < bytes.len() {
            self.pos += 1;
        }
        if !name.is_empty() {
            self.out.push(Token::EndTag(name));
        }
    }

    fn start_tag(&mut self) {
        self.pos += 1;
        let name = self.take_name().to_ascii_lowercase();
        let mut attributes = Vec::new();
        let mut self_closing = false;

        loop {
            self.skip_whitespace();
            let Some(&b) = self.bytes().get(self.pos) else {
                break;
            };
            if b == b'>' {
                self.pos += 1;
                break;
            }
            if b == b'/' {
                self.pos += 1;
                if self.bytes().get(self.pos) == Some(&b'>') {
                    self_closing = true;
                    self.pos += 1;
                    break;
                }
                continue;
            }
            let attr_name = self.take_name();
            if attr_name.is_empty() {
                // Unsupported byte in attribute position; skip it.
                self.pos += self.input[self.pos..].chars().next().map_or(1, char::len_utf8);
                continue;
            }
            let attr_name = attr_name.to_ascii_lowercase();
            self.skip_whitespace();
            let value = if self.bytes().get(self.pos) == Some(&b'=') {
                self.pos += 1;
                self.skip_whitespace();
                Some(self.attribute_value())
            } else {
                None
            };
            attributes.push((attr_name, value));
        }

        if is_void_element(&name) {
            self_closing = true;
        }
        let rawtext = is_rawtext_element(&name) && !self_closing;
        self.out.push(Token::StartTag {
            name: name.clone(),
            attributes,
            self_closing,
        });
        if rawtext {
            self.rawtext(name);
        }
    }

    fn attribute_value(&mut self) -> String {
        let bytes = self.bytes();
        match bytes.get(self.pos) {
            Some(&quote) if quote == b'"' || quote == b'\'' => {
                self.pos += 1;
                let start = self.pos;
                let end = memchr(quote, &bytes[start..])
                    .map(|rel| start + rel)
                    .unwrap_or(bytes.len());
                self.pos = (end + 1).min(bytes.len());
                decode_entities(&self.input[start..end])
            }
            _ => {
                let start = self.pos;
                while self.pos < bytes.len()
                    && !bytes[self.pos].is_ascii_whitespace()
                    && bytes[self.pos] != b'>'
                    && !(bytes[self.pos] == b'/' && bytes.get(self.pos + 1) == Some(&b'>'))
                {
                    self.pos += 1;
                }
                decode_entities(&self.input[start..self.pos])
            }
        }
    }

    fn rawtext(&mut self, name: String) {
        let close_tag = if name == "script" {
            SCRIPT_CLOSE_TAG
        } else {
            STYLE_CLOSE_TAG
        };
        let body_start = self.pos;
        match find_rawtext_close_tag(&self.input[body_start..], close_tag) {
            Some((rel_start, rel_end)) => {
                let body = &self.input[body_start..body_start + rel_start];
                if !body.is_empty() {
                    self.out.push(Token::Text(body.to_string()));
                }
                self.pos = body_start + rel_end;
            }
            None => {
                // Unterminated rawtext runs to the end of input.
                let body = &self.input[body_start..];
                if !body.is_empty() {
                    self.out.push(Token::Text(body.to_string()));
                }
                self.pos = self.input.len();
            }
        }
        self.out.push(Token::EndTag(name));
    }
}

pub fn tokenize(input: &str) -> Vec<Token> {
    Tokenizer::new(input).run()
}
