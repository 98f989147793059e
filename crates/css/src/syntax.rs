/// A simple selector: the subset the typographer accepts for its root.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Selector {
    Universal,
    Type(String),  // element/tag selector
    Id(String),    // #id selector
    Class(String), // .class selector
}

fn is_ident(s: &str) -> bool {
    !s.is_empty()
        && s.chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

impl Selector {
    // input: "#id", ".class", "div", "*"
    // output: Some(Selector::Id("id")), ...
    pub fn parse(s: &str) -> Option<Selector> {
        let s = s.trim();
        if s == "*" {
            return Some(Selector::Universal);
        }
        if let Some(id) = s.strip_prefix('#') {
            return is_ident(id).then(|| Selector::Id(id.to_string()));
        }
        if let Some(class) = s.strip_prefix('.') {
            return is_ident(class).then(|| Selector::Class(class.to_string()));
        }
        is_ident(s).then(|| Selector::Type(s.to_ascii_lowercase()))
    }
}

/// One `;`-separated piece of an inline `style` attribute, kept verbatim.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DeclarationPiece<'a> {
    pub raw: &'a str,
}

impl<'a> DeclarationPiece<'a> {
    /// Property name: text before the first `:`, trimmed. Pieces without a
    /// colon (including empty ones) have no property.
    pub fn property(&self) -> Option<&'a str> {
        let (name, _) = self.raw.split_once(':')?;
        let name = name.trim();
        (!name.is_empty()).then_some(name)
    }
}

// input: "color: red; font-size: 12px;"
// output: ["color: red", " font-size: 12px", ""]
pub fn split_declarations(input: &str) -> impl Iterator<Item = DeclarationPiece<'_>> {
    input.split(';').map(|raw| DeclarationPiece { raw })
}
