//! walkthrough
//!
//! Replays a short `GrowableArray` session and reports size and capacity
//! after each step. Buffer reallocations appear as `TRACE` events.
//!
//! ```bash
//! cargo run -p walkthrough
//! cargo run -p walkthrough -- --capacity 2 --letters ABCDEFGH
//! RUST_LOG=growable_array=off cargo run -p walkthrough
//! ```

use anyhow::Context;
use clap::Parser;
use growable_array::sequence::GrowableArray;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(about = "Replay a scripted GrowableArray session")]
struct Arguments {
    /// Initial capacity of the array
    #[arg(long, default_value_t = 5)]
    capacity: usize,

    /// Letters appended before the insert and delete steps
    #[arg(long, default_value = "ABCDEF")]
    letters: String,

    /// Letter inserted at the front
    #[arg(long, default_value_t = 'X')]
    front: char,

    /// Letters deleted after the insert
    #[arg(long, default_value = "ABCD")]
    delete: String,
}

fn report(step: &str, array: &GrowableArray<char>) {
    tracing::info!(
        size = array.len(),
        capacity = array.capacity(),
        "{step}: {array}"
    );
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "walkthrough=info,growable_array=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let arguments = Arguments::parse();

    let mut array = GrowableArray::with_capacity(arguments.capacity)
        .with_context(|| format!("cannot start with capacity {}", arguments.capacity))?;
    report("created", &array);

    for letter in arguments.letters.chars() {
        array.try_append(letter)?;
        report(&format!("appended {letter}"), &array);
    }

    array.insert_at(0, arguments.front)?;
    report(&format!("inserted {} at 0", arguments.front), &array);

    for letter in arguments.delete.chars() {
        if !array.delete_by_value(&letter) {
            tracing::warn!("{letter} was not present");
        }
        report(&format!("deleted {letter}"), &array);
    }

    for letter in arguments.delete.chars() {
        match array.search(&letter) {
            Some(index) => tracing::info!("{letter} found at {index}"),
            None => tracing::info!("{letter} not found"),
        }
    }

    tracing::info!(empty = array.is_empty(), "final: {array}");
    Ok(())
}
