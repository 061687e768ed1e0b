use criterion::{Criterion, black_box, criterion_group, criterion_main};

use classic_crypto::rsa::RsaKeyPair;
use classic_crypto::{caesar, rsa, vigenere};

fn bench_happy_flow(c: &mut Criterion) {
    // 1) one-time setup
    let keys = RsaKeyPair::try_with(61, 53).expect("generate key pair");

    // the same message every iteration
    let message = "THE QUICK BROWN FOX JUMPS OVER THE LAZY DOG".to_string();

    c.bench_function("caesar_roundtrip", |b| {
        b.iter(|| {
            let cipher = caesar::transform(black_box(&message), 7, false);
            black_box(caesar::transform(&cipher, 7, true));
        })
    });

    c.bench_function("vigenere_roundtrip", |b| {
        b.iter(|| {
            let cipher = vigenere::transform(black_box(&message), "LEMON", false);
            black_box(vigenere::transform(&cipher, "LEMON", true));
        })
    });

    c.bench_function("rsa_roundtrip", |b| {
        b.iter(|| {
            // 2) encrypt
            let cipher = rsa::encrypt(black_box(&message), keys.public_key.e, keys.public_key.n);

            // 3) decrypt and black_box the result so the optimizer can't drop it
            black_box(rsa::decrypt(&cipher, keys.private_key.d, keys.private_key.n));
        })
    });

    c.bench_function("rsa_keygen", |b| {
        b.iter(|| black_box(RsaKeyPair::try_with(black_box(61), black_box(53))))
    });
}

criterion_group!(benches, bench_happy_flow);
criterion_main!(benches);
