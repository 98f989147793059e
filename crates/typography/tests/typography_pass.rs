use html::{Document, parse_document, serialize};
use typography::{Scheduled, TypographyConfig, Typographer};

const THIN: char = '\u{2009}';
const HAIR: char = '\u{200A}';
const ZWSP: char = '\u{200B}';

fn typeset(input: &str) -> String {
    let mut dom = parse_document(input);
    Typographer::default().run(&mut dom).expect("typography pass");
    serialize(&dom)
}

fn typeset_text(text: &str) -> String {
    let out = typeset(&format!("<p>{text}</p>"));
    out.strip_prefix("<p>")
        .and_then(|s| s.strip_suffix("</p>"))
        .map(str::to_string)
        .unwrap_or_else(|| panic!("unexpected serialization {out:?}"))
}

#[test]
fn opening_quote_rule_precedes_fallback() {
    assert_eq!(typeset_text("(\"hello\" world)"), "(\u{201C}hello\u{201D} world)");
}

#[test]
fn decade_before_generic_quotes() {
    assert_eq!(typeset_text("'80s rock"), "\u{2019}80s rock");
}

#[test]
fn dash_precedence() {
    assert_eq!(typeset_text("a---b"), format!("a{THIN}\u{2014}{THIN}b"));
    assert_eq!(typeset_text("a -- b"), format!("a{THIN}\u{2013}{THIN}b"));
    assert_eq!(typeset_text("a--b"), format!("a{HAIR}\u{2013}{HAIR}b"));
}

#[test]
fn ellipsis() {
    assert_eq!(typeset_text("wait..."), "wait\u{2026}");
}

#[test]
fn zero_width_guard_after_link() {
    assert_eq!(
        typeset("<p><a href=\"/u\">Ann</a>'s great</p>"),
        format!("<p><a href=\"/u\">Ann</a>{ZWSP}\u{2019}s great</p>")
    );
}

#[test]
fn whitespace_only_nodes_are_byte_identical() {
    let input = "<ul>\n\t<li>x</li>\r\n  </ul>";
    assert_eq!(typeset(input), input);
}

#[test]
fn every_pre_in_the_subtree_is_protected() {
    let input = concat!(
        "<article>",
        "<p>\"one\"</p>",
        "<pre>\"two\" -- ...</pre>",
        "<div><p>\"three\"</p><pre><span>'four'</span></pre></div>",
        "</article>",
    );
    assert_eq!(
        typeset(input),
        concat!(
            "<article>",
            "<p>\u{201C}one\u{201D}</p>",
            "<pre>\"two\" -- ...</pre>",
            "<div><p>\u{201C}three\u{201D}</p><pre><span>'four'</span></pre></div>",
            "</article>",
        )
    );
}

#[test]
fn style_strip_keeps_other_declarations_verbatim() {
    let out = typeset(
        "<body><p style=\"color:red;font-size:14px;font-family:Arial\">x</p></body>",
    );
    assert_eq!(out, "<body><p style=\"color:red\">x</p></body>");
}

#[test]
fn root_selector_limits_the_text_pass() {
    let mut dom = parse_document(
        "<body><nav>don't</nav><main class=\"post\">don't</main></body>",
    );
    let typographer = Typographer::new(TypographyConfig::default().with_root(".post"));
    typographer.run(&mut dom).expect("pass");
    assert_eq!(
        serialize(&dom),
        "<body><nav>don't</nav><main class=\"post\">don\u{2019}t</main></body>"
    );
}

#[test]
fn rerunning_is_not_idempotent() {
    let mut dom = parse_document(
        "<p><em>Ann</em>'s joke (pun intended) and (pun intended) again a--b</p>",
    );
    let typographer = Typographer::default();

    typographer.run(&mut dom).expect("first pass");
    let once = serialize(&dom);
    assert_eq!(
        once,
        format!(
            "<p><em>Ann</em>{ZWSP}\u{2019}s joke  and (pun intended) again a{HAIR}\u{2013}{HAIR}b</p>"
        )
    );

    typographer.run(&mut dom).expect("second pass");
    let twice = serialize(&dom);
    // The guard stacks another zero-width space, the next filler phrase goes,
    // and the already-spaced dash is left as it was.
    assert_eq!(
        twice,
        format!(
            "<p><em>Ann</em>{ZWSP}{ZWSP}\u{2019}s joke  and  again a{HAIR}\u{2013}{HAIR}b</p>"
        )
    );
}

#[test]
fn streamed_document_is_typeset_once_loaded() {
    let source = "<!DOCTYPE html><html><body><p>\"Caf\u{e9}\" -- it's open...</p></body></html>";
    let mut doc = Document::loading();

    let scheduled = Typographer::default().attach(&mut doc).expect("attach");
    assert!(matches!(scheduled, Scheduled::Deferred));

    for chunk in source.as_bytes().chunks(5) {
        doc.push_bytes(chunk);
    }
    doc.finish();

    assert_eq!(
        serialize(doc.dom()),
        format!(
            "<!DOCTYPE html><html><body><p>\u{201C}Caf\u{e9}\u{201D}{THIN}\u{2013}{THIN}it\u{2019}s open\u{2026}</p></body></html>"
        )
    );
}

#[test]
fn entity_encoded_quotes_are_typeset_and_reserialized() {
    assert_eq!(
        typeset("<p>&quot;5 &lt; 6&quot; &amp; it&#39;s true</p>"),
        "<p>\u{201C}5 &lt; 6\u{201D} &amp; it\u{2019}s true</p>"
    );
}

#[test]
fn unterminated_doctype_does_not_swallow_text() {
    assert_eq!(typeset("<p>it's<!DOCTYPE"), "<p>it\u{2019}s&lt;!DOCTYPE</p>");
}
