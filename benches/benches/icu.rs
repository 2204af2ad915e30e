use criterion::{criterion_group, criterion_main, Criterion};
use icu_normalizer::ComposingNormalizer;
use icu_normalizer::DecomposingNormalizer;

mod group;

group!(group::TEXTS_DIR, nfc, "nfc", "icu", {
    let normalizer = ComposingNormalizer::new_nfc();
    move |text: &str| normalizer.normalize(text)
});

group!(group::TEXTS_DIR, nfkc, "nfkc", "icu", {
    let normalizer = ComposingNormalizer::new_nfkc();
    move |text: &str| normalizer.normalize(text)
});

group!(group::TEXTS_DIR, nfd, "nfd", "icu", {
    let normalizer = DecomposingNormalizer::new_nfd();
    move |text: &str| normalizer.normalize(text)
});

group!(group::TEXTS_DIR, nfkd, "nfkd", "icu", {
    let normalizer = DecomposingNormalizer::new_nfkd();
    move |text: &str| normalizer.normalize(text)
});

criterion_group!(benches, nfc, nfkc, nfd, nfkd);
criterion_main!(benches);
