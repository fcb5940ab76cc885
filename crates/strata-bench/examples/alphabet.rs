//! Alphabet walk-through.
//!
//! Allocates 26 five-byte blocks tagged `A`..`Z`, frees `K` and `P`, and
//! allocates two four-byte blocks into the holes. Set `RUST_LOG` to change
//! the log level (defaults to `strata_arena=trace`, one line per operation).

use std::error::Error;

use strata_arena::RegionAllocator;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error>> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("strata_arena=trace"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    let mut alloc = RegionAllocator::default();

    let mut blocks = Vec::with_capacity(26);
    for letter in b'A'..=b'Z' {
        let addr = alloc.allocate(5)?;
        alloc.block_mut(addr)?[0] = letter;
        blocks.push(addr);
    }

    for &addr in &blocks {
        println!("{addr} => {}", alloc.block(addr)?[0] as char);
    }

    alloc.free(blocks[10])?;
    alloc.free(blocks[15])?;

    blocks[10] = alloc.allocate(4)?;
    blocks[15] = alloc.allocate(4)?;

    println!();
    print!("{}", alloc.report());

    let stats = alloc.stats();
    println!(
        "\nused={} free={} gaps={} largest_gap={} fragmentation={:.4}",
        stats.used_bytes,
        stats.free_bytes,
        stats.gap_count,
        stats.largest_gap,
        stats.fragmentation(),
    );
    Ok(())
}
