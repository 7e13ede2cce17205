//! # SigKV Benchmarks
//!
//! | Path | What is measured |
//! |------|------------------|
//! | kv-01 | point decompression, ECDSA verification |
//! | kv-03 | full request authorization (parse + decode + verify) |
//! | kv-02 | namespace scan among many namespaces |

use std::sync::Arc;
use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use k256::ecdsa::SigningKey;
use k256::elliptic_curve::sec1::ToEncodedPoint;
use kv_01_signature_verification::{decompress, verify_ecdsa, CurvePoint, EcdsaSignature};
use kv_02_namespaced_storage::{InMemoryKVStore, NamespacedStore};
use kv_03_request_auth::test_utils::TestSigner;
use kv_03_request_auth::{OperationKind, RequestAuthenticator};
use sha2::{Digest, Sha256};

fn bench_signature_verification(c: &mut Criterion) {
    let mut group = c.benchmark_group("kv-01-signature-verification");
    group.measurement_time(Duration::from_secs(10));

    let signing_key = SigningKey::random(&mut rand::thread_rng());
    let encoded = signing_key.verifying_key().as_affine().to_encoded_point(true);
    let public_key = CurvePoint::try_from(signing_key.verifying_key().as_affine()).unwrap();

    let digest: [u8; 32] = Sha256::digest(b"benchmark message").into();
    let (signature, _) = signing_key.sign_prehash_recoverable(&digest).unwrap();
    let bytes: [u8; 64] = signature.to_bytes().as_slice().try_into().unwrap();
    let signature = EcdsaSignature::from_bytes(&bytes);

    group.bench_function("decompress", |b| {
        b.iter(|| decompress(black_box(encoded.as_bytes())))
    });

    group.bench_function("verify_ecdsa", |b| {
        b.iter(|| verify_ecdsa(black_box(&digest), black_box(&signature), black_box(&public_key)))
    });

    group.finish();
}

fn bench_request_authorization(c: &mut Criterion) {
    let mut group = c.benchmark_group("kv-03-request-auth");

    let authenticator = RequestAuthenticator::ecdsa();
    let signer = TestSigner::random();

    for value_len in [16usize, 1024, 65_535] {
        let request = signer.put_request(b"key", &vec![0xAB; value_len]);
        group.throughput(Throughput::Bytes(request.len() as u64));
        group.bench_with_input(BenchmarkId::new("authorize_put", value_len), &request, |b, req| {
            b.iter(|| authenticator.authorize(OperationKind::Put, black_box(req)))
        });
    }

    group.finish();
}

fn bench_namespace_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("kv-02-namespaced-storage");

    let store = NamespacedStore::new(Arc::new(InMemoryKVStore::new()));
    let signers: Vec<TestSigner> = (0..100).map(|_| TestSigner::random()).collect();
    for signer in &signers {
        let namespace = signer.namespace();
        for i in 0..100u32 {
            store.put(&namespace, &i.to_be_bytes(), b"value").unwrap();
        }
    }

    let target = signers[50].namespace();
    group.throughput(Throughput::Elements(100));
    group.bench_function("get_all_100_of_10000", |b| {
        b.iter(|| store.get_all(black_box(&target)))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_signature_verification,
    bench_request_authorization,
    bench_namespace_scan
);
criterion_main!(benches);
