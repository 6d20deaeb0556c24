use bucket_map::BucketMap;
use bucket_map::OrdComparator;
use clap::Parser;

#[derive(Parser, Debug)]
struct Args {
    #[arg(short = 'c', long = "capacity", default_value_t = 1000)]
    capacity: usize,

    /// Remove every n-th key before shrinking.
    #[arg(short = 'n', long = "remove_every", default_value_t = 3)]
    remove_every: usize,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    println!("Creating BucketMap with capacity: {}", args.capacity);

    let keys: Vec<u64> = (0..args.capacity as u64).collect();
    let mut map = BucketMap::with_capacity(args.capacity, OrdComparator);

    println!("Filling map with u64 keys...");
    for key in &keys {
        if let Err(err) = map.insert(key, key) {
            panic!("failed to insert {}: {}", key, err);
        }
    }
    map.slot_stats().print();

    let mut removed = 0;
    for key in keys.iter().step_by(args.remove_every.max(1)) {
        if map.remove(key).is_ok() {
            removed += 1;
        }
    }
    println!("Removed {} keys", removed);
    map.slot_stats().print();

    if let Err(err) = map.shrink_to_fit() {
        println!("shrink_to_fit failed: {}", err);
        return;
    }
    println!("After shrink_to_fit:");
    map.slot_stats().print();
}
