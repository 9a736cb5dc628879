//! Expense Approval Workflow
//!
//! This example drives a host-owned expense report through review.
//!
//! Key concepts:
//! - Host type implements `Stateful`
//! - Callbacks veto transitions (spending limits) and perform side effects
//! - Per-state errors replace the generic invalid-transition error
//! - `tracing` output shows every commit and rejection
//!
//! Run with: RUST_LOG=event_fsm=trace cargo run --example approval_workflow

use event_fsm::{transition_table, StateMachineBuilder, Stateful};
use std::sync::{Arc, Mutex};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Error)]
enum ExpenseError {
    #[error("amount {amount} exceeds the approval limit of {limit}")]
    OverLimit { amount: u64, limit: u64 },

    #[error("paid expenses are closed")]
    Closed,
}

#[derive(Debug)]
struct Expense {
    id: u64,
    status: String,
}

impl Stateful for Expense {
    fn state(&self) -> &str {
        &self.status
    }

    fn set_state(&mut self, state: String) {
        self.status = state;
    }
}

struct Approval {
    approver: &'static str,
    amount: u64,
    limit: u64,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Expense Approval Example ===\n");

    let ledger = Arc::new(Mutex::new(Vec::new()));
    let ledger_writer = Arc::clone(&ledger);

    let mut expense = Expense {
        id: 4012,
        status: "submitted".to_string(),
    };

    let mut machine = StateMachineBuilder::<Approval, ExpenseError>::new()
        .table(transition_table! {
            "approve" => { "submitted" => "approved" },
            "reject" => { "submitted" => "rejected" },
            "pay" => { "approved" => "paid" },
            "resubmit" => { "rejected" => "submitted" },
        })
        .on("approved", |approval: &Approval| {
            if approval.amount > approval.limit {
                Err(ExpenseError::OverLimit {
                    amount: approval.amount,
                    limit: approval.limit,
                })
            } else {
                Ok(())
            }
        })
        .on("paid", move |approval: &Approval| {
            ledger_writer
                .lock()
                .unwrap()
                .push(format!("{} paid {}", approval.approver, approval.amount));
            Ok(())
        })
        .error_for("paid", ExpenseError::Closed)
        .build(&mut expense)
        .expect("workflow configuration is valid");

    let steps = [
        ("approve", "team-lead", 100),
        ("approve", "director", 5_000),
        ("pay", "finance", 1_200),
        ("approve", "director", 1_200),
    ];

    for (event, approver, limit) in steps {
        let approval = Approval {
            approver,
            amount: 1_200,
            limit,
        };
        println!("Available: {:?}", machine.available_events());
        match machine.trigger(event, &approval) {
            Ok(()) => println!("  {event} by {approver}: now {}", machine.current_state()),
            Err(err) => println!("  {event} by {approver} failed: {err}"),
        }
    }

    let expense = machine.into_entity();
    println!("\nExpense {} finished as '{}'", expense.id, expense.status);
    println!("Ledger: {:?}", ledger.lock().unwrap());

    println!("\n=== Example Complete ===");
}
