//! Gumball Machine
//!
//! Walks a small machine through a sale, a refund, a few refused events and
//! finally out of stock, then checkpoints and resumes it.
//!
//! Run with: RUST_LOG=gumball=debug cargo run --example gumball_demo

use gumball::{Checkpoint, GumballMachine, GumballMachineBuilder};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    println!("=== Gumball Machine ===\n");

    let mut machine = GumballMachineBuilder::new()
        .inventory(2)
        .build()
        .expect("inventory is set");
    println!("{machine}");

    println!("\n-- buy one --");
    machine.insert_quarter();
    machine.turn_crank();
    println!("{machine}");

    println!("\n-- change of heart --");
    machine.insert_quarter();
    machine.eject_quarter();
    machine.turn_crank();
    println!("{machine}");

    println!("\n-- checkpoint and resume --");
    let json = machine
        .checkpoint()
        .to_json()
        .expect("checkpoint serializes");
    let mut machine = Checkpoint::from_json(&json)
        .map_err(|e| e.to_string())
        .and_then(|checkpoint| GumballMachine::resume(checkpoint).map_err(|e| e.to_string()))
        .expect("checkpoint resumes");
    println!("{machine}");

    println!("\n-- buy the last one --");
    machine.insert_quarter();
    machine.turn_crank();
    machine.insert_quarter();
    println!("{machine}");

    let metadata = machine.metadata();
    println!(
        "\nquarters accepted: {}, returned: {}, gumballs dispensed: {}, rejected events: {}",
        metadata.quarters_accepted,
        metadata.quarters_returned,
        metadata.gumballs_dispensed,
        metadata.rejected_events
    );
    println!("path: {:?}", machine.history().get_path());
    if let Some(elapsed) = machine.history().duration() {
        println!("first to last recorded transition: {} ms", elapsed.as_millis());
    }

    println!("\n=== Example Complete ===");
}
