use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use html::{Document, parse_document};
use typography::{Typographer, typogrify};

const SMALL_BLOCKS: usize = 64;
const LARGE_BLOCKS: usize = 5_000;

fn make_article(blocks: usize) -> String {
    let mut out = String::with_capacity(blocks * 160 + 64);
    out.push_str("<html><body><article>");
    for i in 0..blocks {
        out.push_str("<p style=\"color:#333;font-size:14px\">\"Quoted\" text -- it's the '80s");
        out.push_str(" <a href=\"/x\">link</a>'s tail... and a---b ");
        if i % 8 == 0 {
            out.push_str("<pre>keep \"this\" -- as is</pre>");
        }
        out.push_str("</p>\n");
    }
    out.push_str("</article></body></html>");
    out
}

fn bench_rules_on_sentence(c: &mut Criterion) {
    let sentence = "\"Nice post\" -- I've read it twice... (pun intended) 1999\u{2013}2004";
    c.bench_function("bench_rules_on_sentence", |b| {
        b.iter(|| black_box(typogrify(black_box(sentence))));
    });
}

fn bench_pass_small(c: &mut Criterion) {
    let input = make_article(SMALL_BLOCKS);
    let typographer = Typographer::default();
    c.bench_function("bench_pass_small", |b| {
        b.iter_batched(
            || parse_document(&input),
            |mut dom| black_box(typographer.run(&mut dom).map(|r| r.texts_rewritten)),
            BatchSize::SmallInput,
        );
    });
}

fn bench_pass_large(c: &mut Criterion) {
    let input = make_article(LARGE_BLOCKS);
    let typographer = Typographer::default();
    c.bench_function("bench_pass_large", |b| {
        b.iter_batched(
            || parse_document(&input),
            |mut dom| black_box(typographer.run(&mut dom).map(|r| r.texts_rewritten)),
            BatchSize::LargeInput,
        );
    });
}

fn bench_streamed_document(c: &mut Criterion) {
    let input = make_article(LARGE_BLOCKS);
    let bytes = input.as_bytes();
    c.bench_function("bench_streamed_document", |b| {
        b.iter(|| {
            let mut doc = Document::loading();
            let _ = Typographer::default().attach(&mut doc);
            for chunk in bytes.chunks(4096) {
                doc.push_bytes(chunk);
            }
            doc.finish();
            black_box(doc.dom().children().len());
        });
    });
}

criterion_group!(
    benches,
    bench_rules_on_sentence,
    bench_pass_small,
    bench_pass_large,
    bench_streamed_document
);
criterion_main!(benches);
