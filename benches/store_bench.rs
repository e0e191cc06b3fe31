use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use rand::Rng;
use std::hint::black_box;

use contact_manager::prelude::{Contact, ContactStore, MemStore, TxtStore};
use tempfile::tempdir;

const FIRST_NAMES: [&str; 8] = [
    "Ann", "Bob", "Cara", "Diane", "John", "Patricia", "Wayne", "Zoe",
];
const LAST_NAMES: [&str; 6] = ["Lee", "Stone", "Diaz", "Annan", "Okafor", "Smith"];

// Store prepopulated with `n` contacts in memory, names drawn at random.
fn make_store_with_n(n: usize) -> MemStore {
    let mut rng = rand::rng();

    let contacts = (0..n)
        .map(|i| {
            let first = FIRST_NAMES[rng.random_range(0..FIRST_NAMES.len())];
            let last = LAST_NAMES[rng.random_range(0..LAST_NAMES.len())];
            Contact::new(
                format!("{first}{i}"),
                last.to_string(),
                format!("user{i}@example.com"),
                format!("080{:08}", rng.random_range(0..100_000_000u32)),
            )
        })
        .collect::<Vec<Contact>>();

    MemStore::from(contacts)
}

fn bench_search(c: &mut Criterion) {
    c.bench_function("searching 5k contacts by name substring", |b| {
        let storage = make_store_with_n(5_000);
        b.iter(|| {
            let found = storage.search_by_name(black_box("Ann"));
            black_box(found);
        });
    });
}

fn bench_remove(c: &mut Criterion) {
    c.bench_function("removing from the front of 5k contacts", |b| {
        b.iter_batched(
            || make_store_with_n(5_000),
            |mut storage| {
                black_box(storage.delete_contact(0));
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_save_load(c: &mut Criterion) {
    let dir = tempdir().expect("temp dir");
    let file = TxtStore::new(dir.path().join("contacts.txt"));
    let storage = make_store_with_n(5_000);

    c.bench_function("saving 5k contacts to file", |b| {
        b.iter(|| file.save(storage.contact_list()).expect("save"));
    });

    file.save(storage.contact_list()).expect("save");
    c.bench_function("loading 5k contacts from file", |b| {
        b.iter(|| black_box(file.load().expect("load")));
    });
}

criterion_group!(benches, bench_search, bench_remove, bench_save_load);
criterion_main!(benches);
