//! # Vaccine Registry Benchmarks
//!
//! | Operation | Expected cost |
//! |-----------|---------------|
//! | Membership filter check | O(k), k ≤ 3 |
//! | Ordered index search | O(log n) expected |
//! | Category lookup | filter check, plus index search on a hit |

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use shared_types::{Record, VaccinationStatus};
use vr_01_membership_filter::MembershipFilter;
use vr_02_ordered_index::{CoinFlipLevels, OrderedIndex};
use vr_03_category_index::{CategoryRegistry, RegistryConfig, VaccinationRegistryApi};

const SIZES: [usize; 3] = [100, 1_000, 10_000];

fn citizen_ids(count: usize, seed: u64) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count).map(|_| format!("{:08}", rng.gen_range(0..100_000_000u32))).collect()
}

// ============================================================================
// VR-01: Membership Filter
// ============================================================================

fn bench_filter_check(c: &mut Criterion) {
    let mut group = c.benchmark_group("vr-01-membership-filter");

    for size in SIZES {
        let mut filter = MembershipFilter::new(size * 10, 3).unwrap();
        let inserted = citizen_ids(size, 1);
        for id in &inserted {
            filter.insert(id);
        }
        let probes = citizen_ids(1_000, 2);

        group.throughput(Throughput::Elements(probes.len() as u64));
        group.bench_with_input(BenchmarkId::new("check", size), &probes, |b, probes| {
            b.iter(|| probes.iter().filter(|id| filter.check(id)).count())
        });
    }

    group.bench_function("insert", |b| {
        let ids = citizen_ids(1_000, 3);
        b.iter(|| {
            let mut filter = MembershipFilter::new(10_000, 3).unwrap();
            for id in &ids {
                filter.insert(black_box(id));
            }
            filter
        })
    });

    group.finish();
}

// ============================================================================
// VR-02: Ordered Index
// ============================================================================

fn bench_index_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("vr-02-ordered-index");

    for size in SIZES {
        let mut index = OrderedIndex::with_generator(16, CoinFlipLevels::seeded(4)).unwrap();
        let ids = citizen_ids(size, 5);
        for id in &ids {
            // duplicates among random ids are expected and ignored
            let _ = index.insert(id.as_str(), ());
        }

        group.throughput(Throughput::Elements(ids.len() as u64));
        group.bench_with_input(BenchmarkId::new("search", size), &ids, |b, ids| {
            b.iter(|| ids.iter().filter(|id| index.search(id).is_some()).count())
        });
    }

    group.bench_function("insert_1000", |b| {
        let ids = citizen_ids(1_000, 6);
        b.iter(|| {
            let mut index = OrderedIndex::with_generator(5, CoinFlipLevels::seeded(7)).unwrap();
            for id in &ids {
                let _ = index.insert(black_box(id.as_str()), ());
            }
            index.len()
        })
    });

    group.finish();
}

// ============================================================================
// VR-03: Category Lookup
// ============================================================================

fn bench_category_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("vr-03-category-index");

    for size in SIZES {
        let mut registry = CategoryRegistry::new(RegistryConfig::default().with_seed(8)).unwrap();
        for id in citizen_ids(size, 9) {
            let record = Record::builder(id)
                .first_name("Bench")
                .last_name("Mark")
                .country("Nowhere")
                .age(30)
                .category("COVID-19")
                .status(VaccinationStatus::Vaccinated)
                .date("2023-01-01")
                .build()
                .unwrap();
            let _ = registry.process_record(record);
        }

        let mut probes = citizen_ids(size / 2, 9);
        probes.extend(citizen_ids(size / 2, 10));

        group.throughput(Throughput::Elements(probes.len() as u64));
        group.bench_with_input(BenchmarkId::new("check_status", size), &probes, |b, probes| {
            b.iter(|| {
                probes
                    .iter()
                    .filter_map(|id| registry.check_status(id, "COVID-19").ok())
                    .filter(|outcome| outcome.is_found())
                    .count()
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_filter_check, bench_index_search, bench_category_lookup);
criterion_main!(benches);
