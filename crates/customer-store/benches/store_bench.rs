use criterion::{Criterion, criterion_group, criterion_main};
use customer_store::{
    CustomerFields, CustomerId, CustomerQuery, InMemoryCustomerStore, store::CustomerStore,
};

fn make_fields(n: usize) -> CustomerFields {
    CustomerFields::new(
        format!("First{n}"),
        format!("Last{n}"),
        format!("NID-{n}"),
        format!("+23350000{n:04}"),
        format!("ACC-{n}"),
    )
}

fn bench_insert_single(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();

    c.bench_function("customer_store/insert_single", |b| {
        b.iter(|| {
            rt.block_on(async {
                let store = InMemoryCustomerStore::new();
                store
                    .insert(CustomerId::new(), make_fields(1))
                    .await
                    .unwrap();
            });
        });
    });
}

fn bench_retrieve_single(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let store = InMemoryCustomerStore::new();
    let id = CustomerId::new();

    rt.block_on(async {
        store.insert(id, make_fields(1)).await.unwrap();
    });

    c.bench_function("customer_store/retrieve_single", |b| {
        b.iter(|| {
            rt.block_on(async {
                store.retrieve(id).await.unwrap();
            });
        });
    });
}

fn bench_update_single(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let store = InMemoryCustomerStore::new();
    let id = CustomerId::new();

    rt.block_on(async {
        store.insert(id, make_fields(1)).await.unwrap();
    });

    c.bench_function("customer_store/update_single", |b| {
        b.iter(|| {
            rt.block_on(async {
                store.update(id, make_fields(2)).await.unwrap();
            });
        });
    });
}

fn bench_retrieve_many_1000(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let store = InMemoryCustomerStore::new();

    // Pre-populate with 1000 records
    rt.block_on(async {
        for n in 0..1000 {
            store
                .insert(CustomerId::new(), make_fields(n))
                .await
                .unwrap();
        }
    });

    c.bench_function("customer_store/retrieve_many_1000", |b| {
        b.iter(|| {
            rt.block_on(async {
                let customers = store.retrieve_many(CustomerQuery::all()).await.unwrap();
                assert_eq!(customers.len(), 1000);
            });
        });
    });
}

criterion_group!(
    benches,
    bench_insert_single,
    bench_retrieve_single,
    bench_update_single,
    bench_retrieve_many_1000,
);
criterion_main!(benches);
