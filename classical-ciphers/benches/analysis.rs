use criterion::{black_box, criterion_group, criterion_main, Criterion};

use classical_ciphers::analysis::{self, kasiski_examination, recover_key};
use classical_ciphers::sample::WILDE_PREFACE;
use classical_ciphers::{Ciphers, VigenereKey};

fn bench_analysis(c: &mut Criterion) {
    let key = VigenereKey::new("CRYPTOGRAPHY").expect("valid key");
    let ciphertext = Ciphers::vigenere_encrypt(WILDE_PREFACE, &key);

    c.bench_function("index_of_coincidence", |b| {
        b.iter(|| analysis::index_of_coincidence(black_box(&ciphertext)))
    });
    c.bench_function("kasiski_examination", |b| {
        b.iter(|| kasiski_examination(black_box(&ciphertext)))
    });
    c.bench_function("recover_key_12", |b| {
        b.iter(|| recover_key(black_box(&ciphertext), 12))
    });
    c.bench_function("select_key", |b| {
        b.iter(|| analysis::select_key(black_box(&ciphertext)))
    });
}

criterion_group!(benches, bench_analysis);
criterion_main!(benches);
