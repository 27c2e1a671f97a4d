use bytes::Bytes;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use opalkv::{MemoryStore, Store};
use std::time::Duration;
use tokio_util::sync::CancellationToken;

fn bench_crud(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let store = MemoryStore::new();
    let cancel = CancellationToken::new();

    // Prepare the dataset once, outside the measurement loop
    rt.block_on(async {
        for i in 0..100_000u32 {
            store
                .create(
                    &cancel,
                    Bytes::from(format!("user:{i:06}")),
                    Bytes::from_static(b"x"),
                )
                .await
                .unwrap();
        }
    });

    let mut g = c.benchmark_group("crud");
    g.sample_size(60)
        .measurement_time(Duration::from_secs(10))
        .warm_up_time(Duration::from_secs(2));

    g.bench_function("read hit", |b| {
        b.to_async(&rt).iter(|| async {
            let value = store
                .read(&cancel, black_box(b"user:012345"))
                .await
                .unwrap();
            black_box(value.len());
        });
    });

    g.bench_function("read miss", |b| {
        b.to_async(&rt).iter(|| async {
            let result = store.read(&cancel, black_box(b"user:missing")).await;
            black_box(result.is_err());
        });
    });

    g.bench_function("update", |b| {
        b.to_async(&rt).iter(|| async {
            store
                .update(&cancel, black_box(b"user:012345"), Bytes::from_static(b"y"))
                .await
                .unwrap();
        });
    });

    g.finish();
}

criterion_group!(benches, bench_crud);
criterion_main!(benches);
