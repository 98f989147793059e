/// Decode a small, explicitly limited set of HTML character references.
///
/// Contract:
/// - Named references: the markup escapes (`&amp;`, `&lt;`, `&gt;`, `&quot;`,
///   `&apos;`, `&nbsp;`) plus the punctuation authors write by hand (`&lsquo;`,
///   `&rsquo;`, `&ldquo;`, `&rdquo;`, `&ndash;`, `&mdash;`, `&hellip;`,
///   `&thinsp;`, `&hairsp;`).
/// - Numeric references decode only when semicolon-terminated and naming a
///   valid Unicode scalar value: `&#39;`, `&#x2019;`.
/// - Anything else (unknown names, missing semicolons, overlong digit runs)
///   passes through unchanged.
pub(crate) fn decode_entities(s: &str) -> String {
    if !s.contains('&') {
        return s.to_string();
    }

    let mut out = String::with_capacity(s.len());
    let mut rest = s;

    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        rest = &rest[amp..];
        match decode_one(rest) {
            Some((ch, consumed)) => {
                out.push(ch);
                rest = &rest[consumed..];
            }
            None => {
                out.push('&');
                rest = &rest[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

const NAMED: &[(&str, char)] = &[
    ("amp", '&'),
    ("lt", '<'),
    ("gt", '>'),
    ("quot", '"'),
    ("apos", '\''),
    ("nbsp", '\u{00A0}'),
    ("lsquo", '\u{2018}'),
    ("rsquo", '\u{2019}'),
    ("ldquo", '\u{201C}'),
    ("rdquo", '\u{201D}'),
    ("ndash", '\u{2013}'),
    ("mdash", '\u{2014}'),
    ("hellip", '\u{2026}'),
    ("thinsp", '\u{2009}'),
    ("hairsp", '\u{200A}'),
];

const MAX_NAME_LEN: usize = 6;
const MAX_HEX_DIGITS: usize = 6; // 0x10FFFF
const MAX_DEC_DIGITS: usize = 7; // 1114111

/// `input` starts with `&`. Returns the decoded char and the byte length of
/// the reference including the terminating `;`.
fn decode_one(input: &str) -> Option<(char, usize)> {
    let body = &input[1..];
    let semi = body
        .bytes()
        .take(MAX_NAME_LEN.max(MAX_DEC_DIGITS + 1) + 1)
        .position(|b| b == b';')?;
    let reference = &body[..semi];
    let consumed = semi + 2;

    if let Some(numeric) = reference.strip_prefix('#') {
        let (digits, radix, limit) = match numeric.strip_prefix(['x', 'X']) {
            Some(hex) => (hex, 16, MAX_HEX_DIGITS),
            None => (numeric, 10, MAX_DEC_DIGITS),
        };
        if digits.is_empty()
            || digits.len() > limit
            || !digits.bytes().all(|b| (b as char).is_digit(radix))
        {
            return None;
        }
        let ch = u32::from_str_radix(digits, radix)
            .ok()
            .and_then(char::from_u32)?;
        return Some((ch, consumed));
    }

    NAMED
        .iter()
        .find(|(name, _)| *name == reference)
        .map(|(_, ch)| (*ch, consumed))
}

pub(crate) fn escape_text(text: &str, out: &mut String) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
}

pub(crate) fn escape_attr(value: &str, out: &mut String) {
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_markup_escapes() {
        assert_eq!(decode_entities("a &amp; b"), "a & b");
        assert_eq!(decode_entities("&lt;tag&gt;"), "<tag>");
        assert_eq!(decode_entities("&quot;hi&quot;"), "\"hi\"");
        assert_eq!(decode_entities("&apos;x&apos;"), "'x'");
        assert_eq!(decode_entities("a&nbsp;b"), "a\u{00A0}b");
    }

    #[test]
    fn decodes_typographic_names() {
        assert_eq!(decode_entities("&ldquo;x&rdquo;"), "\u{201C}x\u{201D}");
        assert_eq!(decode_entities("1&ndash;2"), "1\u{2013}2");
        assert_eq!(decode_entities("wait&hellip;"), "wait\u{2026}");
    }

    #[test]
    fn decodes_numeric_references() {
        assert_eq!(decode_entities("it&#39;s"), "it's");
        assert_eq!(decode_entities("it&#x2019;s"), "it\u{2019}s");
        assert_eq!(decode_entities("&#X27;"), "'");
        assert_eq!(decode_entities("&#1114111;"), "\u{10FFFF}");
    }

    #[test]
    fn leaves_malformed_references_alone() {
        let unchanged = [
            "&",
            "&&",
            "&;",
            "&#;",
            "&#x;",
            "&amp",
            "loose &amp space",
            "&unknown;",
            "&#xZZ;",
            "&#xD800;",
            "&#x110000;",
            "&#11141111;",
            "&#-1;",
        ];
        for s in unchanged {
            assert_eq!(decode_entities(s), s, "input {s:?}");
        }
    }

    #[test]
    fn malformed_reference_does_not_swallow_the_next_one() {
        assert_eq!(decode_entities("&#xZZ;&amp;"), "&#xZZ;&");
        assert_eq!(decode_entities("&&lt;"), "&<");
    }

    #[test]
    fn keeps_utf8_around_references() {
        assert_eq!(decode_entities("π &amp; σ"), "π & σ");
    }

    #[test]
    fn escapes_for_text_and_attributes() {
        let mut text = String::new();
        escape_text("a < b & \"c\"", &mut text);
        assert_eq!(text, "a &lt; b &amp; \"c\"");

        let mut attr = String::new();
        escape_attr("say \"hi\" & <go>", &mut attr);
        assert_eq!(attr, "say &quot;hi&quot; &amp; <go>");
    }
}
