use crate::syntax::split_declarations;

/// Drop every declaration whose property is in `properties` (ASCII
/// case-insensitive) from an inline `style` value.
///
/// The value is split on `;` and the surviving pieces are re-joined with `;`
/// byte-for-byte, so spacing and order of the kept declarations are
/// untouched. Returns the new value and the number of pieces removed.
pub fn strip_properties(style: &str, properties: &[String]) -> (String, usize) {
    let mut removed = 0;
    let kept: Vec<&str> = split_declarations(style)
        .filter(|piece| {
            let drop = piece
                .property()
                .is_some_and(|name| properties.iter().any(|p| p.eq_ignore_ascii_case(name)));
            removed += usize::from(drop);
            !drop
        })
        .map(|piece| piece.raw)
        .collect();
    (kept.join(";"), removed)
}
