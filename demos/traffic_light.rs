//! Traffic Light
//!
//! This example cycles a plain `String` through a fixed loop of states.
//!
//! Key concepts:
//! - `String` implements `Stateful`, so no wrapper type is needed
//! - A single event with one edge per state forms a cycle
//! - No state is terminal
//!
//! Run with: cargo run --example traffic_light

use event_fsm::machine::StateMachine;
use event_fsm::transitions;

fn main() {
    println!("=== Traffic Light Example ===\n");

    let mut light = "red".to_string();
    let mut machine = StateMachine::<_, (), String>::new(&mut light);
    machine.when(
        "timer",
        transitions! {
            "red" => "green",
            "green" => "yellow",
            "yellow" => "red",
        },
    );

    for _ in 0..6 {
        let from = machine.current_state().to_string();
        match machine.trigger("timer", &()) {
            Ok(()) => println!("{from} -> {}", machine.current_state()),
            Err(err) => println!("{from}: {err}"),
        }
    }

    println!("\nTerminal: {}", machine.is_terminal());
    println!("\n=== Example Complete ===");
}
