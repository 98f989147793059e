#![no_main]

use html::{Document, parse_document, serialize};
use libfuzzer_sys::fuzz_target;
use typography::Typographer;

fuzz_target!(|data: &[u8]| {
    let Some((&split, rest)) = data.split_first() else {
        return;
    };
    let chunk = usize::from(split).max(1);

    let mut doc = Document::loading();
    let _ = Typographer::default().attach(&mut doc);
    for part in rest.chunks(chunk) {
        doc.push_bytes(part);
    }
    doc.finish();

    // Chunking must not change the outcome.
    if let Ok(source) = std::str::from_utf8(rest) {
        let mut whole = parse_document(source);
        let _ = Typographer::default().run(&mut whole);
        assert_eq!(serialize(doc.dom()), serialize(&whole));
    }
});
