use core::hash::BuildHasher;
use core::hash::Hash;
use core::hint::black_box;

use chain_hash::HashMap as ChainHashMap;
use criterion::AxisScale;
use criterion::BatchSize;
use criterion::BenchmarkGroup;
use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::PlotConfiguration;
use criterion::Throughput;
use criterion::criterion_group;
use criterion::criterion_main;
use criterion::measurement::WallTime;
use hashbrown::HashMap as HashbrownHashMap;
use rand::Rng;
use rand::SeedableRng;
use rand::TryRngCore;
use rand::rngs::OsRng;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand_distr::Zipf;
use siphasher::sip::SipHasher;

#[derive(Clone)]
struct SipState {
    k0: u64,
    k1: u64,
}

impl Default for SipState {
    fn default() -> Self {
        Self {
            k0: OsRng.try_next_u64().unwrap(),
            k1: OsRng.try_next_u64().unwrap(),
        }
    }
}

impl BuildHasher for SipState {
    type Hasher = SipHasher;

    fn build_hasher(&self) -> Self::Hasher {
        SipHasher::new_with_keys(self.k0, self.k1)
    }
}

trait TestKey: Clone + Hash + Eq {
    fn new(key: u64) -> Self;
}

#[derive(Clone, Hash, PartialEq, Eq)]
struct SmallKey(u64);

impl TestKey for SmallKey {
    fn new(key: u64) -> Self {
        black_box(Self(key))
    }
}

#[derive(Clone, Hash, PartialEq, Eq)]
struct StringKey(String);

impl TestKey for StringKey {
    fn new(key: u64) -> Self {
        black_box(Self(format!("key_{:016X}", key)))
    }
}

/// The operations every benchmarked map supports.
trait BenchMap<K>: Sized {
    const NAME: &'static str;

    fn new(state: SipState) -> Self;
    fn with_capacity(capacity: usize, state: SipState) -> Self;
    fn insert(&mut self, key: K, value: u64) -> Option<u64>;
    fn get(&self, key: &K) -> Option<&u64>;
    fn remove(&mut self, key: &K) -> Option<u64>;
    fn sum_values(&self) -> u64;
}

impl<K: Hash + Eq> BenchMap<K> for ChainHashMap<K, u64, SipState> {
    const NAME: &'static str = "chain_hash";

    fn new(state: SipState) -> Self {
        ChainHashMap::with_hasher(state)
    }

    fn with_capacity(capacity: usize, state: SipState) -> Self {
        ChainHashMap::with_capacity_and_hasher(capacity, state)
    }

    fn insert(&mut self, key: K, value: u64) -> Option<u64> {
        ChainHashMap::insert(self, key, value)
    }

    fn get(&self, key: &K) -> Option<&u64> {
        ChainHashMap::get(self, key)
    }

    fn remove(&mut self, key: &K) -> Option<u64> {
        ChainHashMap::remove(self, key)
    }

    fn sum_values(&self) -> u64 {
        self.values().fold(0, |acc, v| acc.wrapping_add(*v))
    }
}

impl<K: Hash + Eq> BenchMap<K> for HashbrownHashMap<K, u64, SipState> {
    const NAME: &'static str = "hashbrown";

    fn new(state: SipState) -> Self {
        HashbrownHashMap::with_hasher(state)
    }

    fn with_capacity(capacity: usize, state: SipState) -> Self {
        HashbrownHashMap::with_capacity_and_hasher(capacity, state)
    }

    fn insert(&mut self, key: K, value: u64) -> Option<u64> {
        HashbrownHashMap::insert(self, key, value)
    }

    fn get(&self, key: &K) -> Option<&u64> {
        HashbrownHashMap::get(self, key)
    }

    fn remove(&mut self, key: &K) -> Option<u64> {
        HashbrownHashMap::remove(self, key)
    }

    fn sum_values(&self) -> u64 {
        self.values().fold(0, |acc, v| acc.wrapping_add(*v))
    }
}

impl<K: Hash + Eq> BenchMap<K> for std::collections::HashMap<K, u64, SipState> {
    const NAME: &'static str = "std";

    fn new(state: SipState) -> Self {
        std::collections::HashMap::with_hasher(state)
    }

    fn with_capacity(capacity: usize, state: SipState) -> Self {
        std::collections::HashMap::with_capacity_and_hasher(capacity, state)
    }

    fn insert(&mut self, key: K, value: u64) -> Option<u64> {
        std::collections::HashMap::insert(self, key, value)
    }

    fn get(&self, key: &K) -> Option<&u64> {
        std::collections::HashMap::get(self, key)
    }

    fn remove(&mut self, key: &K) -> Option<u64> {
        std::collections::HashMap::remove(self, key)
    }

    fn sum_values(&self) -> u64 {
        self.values().fold(0, |acc, v| acc.wrapping_add(*v))
    }
}

const SIZES: &[usize] = &[
    (1 << 10),
    (1 << 11),
    (1 << 12),
    (1 << 13),
    (1 << 14),
    (1 << 15),
    (1 << 16),
];

#[derive(Clone, Copy)]
enum Operation {
    Insert,
    Find,
    Remove,
}

fn random_keys<K: TestKey>(count: usize) -> Vec<K> {
    let mut rng = OsRng;
    (0..count)
        .map(|_| K::new(rng.try_next_u64().unwrap()))
        .collect()
}

fn filled<K: TestKey, M: BenchMap<K>>(keys: &[K], state: &SipState) -> M {
    let mut map = M::new(state.clone());
    for (i, key) in keys.iter().enumerate() {
        map.insert(key.clone(), i as u64);
    }
    map
}

fn insert_random<K: TestKey, M: BenchMap<K>>(
    group: &mut BenchmarkGroup<'_, WallTime>,
    keys: &[K],
    preallocate: bool,
) {
    let state = SipState::default();
    group.bench_function(BenchmarkId::new(M::NAME, keys.len()), |b| {
        b.iter_batched(
            || {
                let mut keys = keys.to_vec();
                keys.shuffle(&mut SmallRng::from_os_rng());
                keys
            },
            |keys| {
                let mut map = if preallocate {
                    M::with_capacity(keys.len(), state.clone())
                } else {
                    M::new(state.clone())
                };
                for (i, key) in keys.into_iter().enumerate() {
                    black_box(map.insert(key, i as u64));
                }
                black_box(map)
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_insert_random<K: TestKey, const MAX_SIZE: usize>(c: &mut Criterion) {
    for preallocate in [false, true] {
        let mut group = c.benchmark_group(format!(
            "insert_random{}_{}",
            if preallocate { "_preallocated" } else { "" },
            core::any::type_name::<K>()
        ));
        group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

        for &size in SIZES[..=MAX_SIZE].iter() {
            let keys = random_keys::<K>(size);
            group.throughput(Throughput::Elements(size as u64));
            insert_random::<K, ChainHashMap<K, u64, SipState>>(&mut group, &keys, preallocate);
            insert_random::<K, HashbrownHashMap<K, u64, SipState>>(&mut group, &keys, preallocate);
            insert_random::<K, std::collections::HashMap<K, u64, SipState>>(
                &mut group,
                &keys,
                preallocate,
            );
        }
        group.finish();
    }
}

fn find_hit_miss<K: TestKey, M: BenchMap<K>>(
    group: &mut BenchmarkGroup<'_, WallTime>,
    present: &[K],
    lookups: &[K],
) {
    let map: M = filled(present, &SipState::default());
    group.bench_function(BenchmarkId::new(M::NAME, present.len()), |b| {
        b.iter(|| {
            let mut hits = 0usize;
            for key in lookups {
                if map.get(key).is_some() {
                    hits += 1;
                }
            }
            black_box(hits)
        })
    });
}

fn bench_find_hit_miss<K: TestKey, const MAX_SIZE: usize>(c: &mut Criterion) {
    let mut group = c.benchmark_group(format!(
        "find_hit_miss_{}",
        core::any::type_name::<K>()
    ));
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

    for &size in SIZES[..=MAX_SIZE].iter() {
        let present = random_keys::<K>(size);
        let mut lookups = random_keys::<K>(size);
        lookups.extend_from_slice(&present);
        lookups.shuffle(&mut SmallRng::from_os_rng());

        group.throughput(Throughput::Elements(lookups.len() as u64));
        find_hit_miss::<K, ChainHashMap<K, u64, SipState>>(&mut group, &present, &lookups);
        find_hit_miss::<K, HashbrownHashMap<K, u64, SipState>>(&mut group, &present, &lookups);
        find_hit_miss::<K, std::collections::HashMap<K, u64, SipState>>(
            &mut group, &present, &lookups,
        );
    }
    group.finish();
}

fn remove_all<K: TestKey, M: BenchMap<K> + Clone>(
    group: &mut BenchmarkGroup<'_, WallTime>,
    keys: &[K],
) {
    let map: M = filled(keys, &SipState::default());
    group.bench_function(BenchmarkId::new(M::NAME, keys.len()), |b| {
        b.iter_batched(
            || map.clone(),
            |mut map| {
                for key in keys {
                    black_box(map.remove(key));
                }
                black_box(map)
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_remove<K: TestKey, const MAX_SIZE: usize>(c: &mut Criterion) {
    let mut group = c.benchmark_group(format!("remove_{}", core::any::type_name::<K>()));
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

    for &size in SIZES[..=MAX_SIZE].iter() {
        let keys = random_keys::<K>(size);
        group.throughput(Throughput::Elements(size as u64));
        remove_all::<K, ChainHashMap<K, u64, SipState>>(&mut group, &keys);
        remove_all::<K, HashbrownHashMap<K, u64, SipState>>(&mut group, &keys);
        remove_all::<K, std::collections::HashMap<K, u64, SipState>>(&mut group, &keys);
    }
    group.finish();
}

fn iterate<K: TestKey, M: BenchMap<K>>(
    group: &mut BenchmarkGroup<'_, WallTime>,
    keys: &[K],
) {
    let map: M = filled(keys, &SipState::default());
    group.bench_function(BenchmarkId::new(M::NAME, keys.len()), |b| {
        b.iter(|| black_box(map.sum_values()))
    });
}

fn bench_iteration<K: TestKey, const MAX_SIZE: usize>(c: &mut Criterion) {
    let mut group = c.benchmark_group(format!("iteration_{}", core::any::type_name::<K>()));
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

    for &size in SIZES[..=MAX_SIZE].iter() {
        let keys = random_keys::<K>(size);
        group.throughput(Throughput::Elements(size as u64));
        iterate::<K, ChainHashMap<K, u64, SipState>>(&mut group, &keys);
        iterate::<K, HashbrownHashMap<K, u64, SipState>>(&mut group, &keys);
        iterate::<K, std::collections::HashMap<K, u64, SipState>>(&mut group, &keys);
    }
    group.finish();
}

fn bench_snapshots<K: TestKey, const MAX_SIZE: usize>(c: &mut Criterion) {
    let mut group = c.benchmark_group(format!("snapshots_{}", core::any::type_name::<K>()));
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

    for &size in SIZES[..=MAX_SIZE].iter() {
        let keys = random_keys::<K>(size);
        let map: ChainHashMap<K, u64, SipState> = filled(&keys, &SipState::default());

        group.throughput(Throughput::Elements(size as u64));
        group.bench_function(BenchmarkId::new("key_set", size), |b| {
            b.iter(|| black_box(map.key_set()))
        });
        group.bench_function(BenchmarkId::new("value_list", size), |b| {
            b.iter(|| black_box(map.value_list()))
        });
        group.bench_function(BenchmarkId::new("entry_set", size), |b| {
            b.iter(|| black_box(map.entry_set()))
        });
    }
    group.finish();
}

fn mixed_zipf<K: TestKey, M: BenchMap<K>>(
    group: &mut BenchmarkGroup<'_, WallTime>,
    operations: &[Operation],
    size: usize,
) {
    const KEY_SPACE_MULTIPLIER: f32 = 2.0;

    let state = SipState::default();
    let insert_distr = Zipf::new(size as f32 - 1.0, 1.0).unwrap();
    let find_remove_distr = Zipf::new(size as f32 * KEY_SPACE_MULTIPLIER - 1.0, 1.0).unwrap();
    let mut rng = SmallRng::from_os_rng();

    group.bench_function(BenchmarkId::new(M::NAME, size), |b| {
        b.iter_batched(
            || {
                let mut operations = operations.to_vec();
                operations.shuffle(&mut SmallRng::from_os_rng());
                operations
            },
            |operations| {
                let mut map = M::new(state.clone());
                for operation in operations {
                    match operation {
                        Operation::Insert => {
                            let key = rng.sample(insert_distr) as u64;
                            black_box(map.insert(K::new(key), key));
                        }
                        Operation::Remove => {
                            let key = rng.sample(find_remove_distr) as u64;
                            black_box(map.remove(&K::new(key)));
                        }
                        Operation::Find => {
                            let key = rng.sample(find_remove_distr) as u64;
                            black_box(map.get(&K::new(key)));
                        }
                    }
                }
                black_box(map)
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_mixed_probabilistic_zipf<K: TestKey, const MAX_SIZE: usize>(c: &mut Criterion) {
    for exponent in [1.0, 1.3] {
        let mut group = c.benchmark_group(format!(
            "mixed_probabilistic_zipf_{:.01}_{}",
            exponent,
            core::any::type_name::<K>()
        ));
        group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

        for &size in SIZES[..=MAX_SIZE].iter() {
            let mut rng = SmallRng::from_os_rng();
            let op_distr = Zipf::new(3.0, exponent).unwrap();
            let operations = (0..size * 3)
                .map(|_| {
                    let op_choice: f64 = rng.sample(op_distr);
                    if op_choice <= 1.0 {
                        Operation::Find
                    } else if op_choice <= 2.0 {
                        Operation::Insert
                    } else {
                        Operation::Remove
                    }
                })
                .collect::<Vec<Operation>>();

            group.throughput(Throughput::Elements(operations.len() as u64));
            mixed_zipf::<K, ChainHashMap<K, u64, SipState>>(&mut group, &operations, size);
            mixed_zipf::<K, HashbrownHashMap<K, u64, SipState>>(&mut group, &operations, size);
            mixed_zipf::<K, std::collections::HashMap<K, u64, SipState>>(
                &mut group,
                &operations,
                size,
            );
        }
        group.finish();
    }
}

criterion_group!(
    benches,
    bench_insert_random::<SmallKey, 6>,
    bench_insert_random::<StringKey, 6>,
    bench_find_hit_miss::<SmallKey, 6>,
    bench_find_hit_miss::<StringKey, 6>,
    bench_remove::<SmallKey, 6>,
    bench_remove::<StringKey, 6>,
    bench_iteration::<SmallKey, 6>,
    bench_iteration::<StringKey, 6>,
    bench_snapshots::<SmallKey, 4>,
    bench_snapshots::<StringKey, 4>,
    bench_mixed_probabilistic_zipf::<SmallKey, 6>,
    bench_mixed_probabilistic_zipf::<StringKey, 6>,
);

criterion_main!(benches);
