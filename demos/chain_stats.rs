use std::collections::hash_map::RandomState;

use chain_hash::Config;
use chain_hash::HashMap;
use clap::Parser;

#[derive(Parser, Debug)]
struct Args {
    /// Requested starting bucket count.
    #[arg(short = 'c', long = "target_capacity", default_value_t = 1000)]
    target_capacity: isize,

    /// Number of keys to insert.
    #[arg(short = 'n', long = "count", default_value_t = 10_000)]
    count: u64,

    /// Load factor at which the map grows.
    #[arg(short = 'l', long = "load_factor", default_value_t = 0.75)]
    load_factor: f32,
}

fn main() -> Result<(), chain_hash::Error> {
    env_logger::init();
    let args = Args::parse();

    let config = Config::new()
        .initial_capacity(args.target_capacity)
        .load_factor(args.load_factor);
    let mut map: HashMap<u64, u64, RandomState> = HashMap::with_config(&config)?;

    println!(
        "Requested capacity {} with load factor {:.2} (staged {} buckets)",
        args.target_capacity,
        map.load_factor(),
        map.threshold()
    );
    println!("Inserting {} keys...", args.count);

    let mut resizes = 0;
    let mut capacity = map.capacity();
    for i in 0..args.count {
        map.insert(i, i.wrapping_mul(31));
        if map.capacity() != capacity {
            resizes += 1;
            capacity = map.capacity();
        }
    }

    println!(
        "Inserted {} keys into {} buckets after {} resizes (threshold {})",
        map.len(),
        map.capacity(),
        resizes,
        map.threshold()
    );
    println!(
        "Final fill: {:.2}%",
        (map.len() as f64 / map.capacity().max(1) as f64) * 100.0
    );

    map.print_chain_histogram();
    map.debug_stats().print();
    Ok(())
}
