#![no_main]

use html::{parse_document, serialize};
use libfuzzer_sys::fuzz_target;
use typography::{Typographer, preview};

fuzz_target!(|data: &[u8]| {
    let Ok(source) = std::str::from_utf8(data) else {
        return;
    };
    let mut dom = parse_document(source);
    let report = Typographer::default()
        .run(&mut dom)
        .expect("default pass has no failing root");
    assert!(report.texts_rewritten <= report.texts_scanned);
    assert!(report.texts_guarded <= report.texts_scanned);

    // The serialized result must parse again without panicking.
    let out = serialize(&dom);
    let _ = parse_document(&out);

    let _ = preview(source, data.len() % 64);
});
