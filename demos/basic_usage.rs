// ============================================================================
// Basic Usage Example
// ============================================================================

use letter_ritual::prelude::*;
use std::sync::Arc;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Letter Ritual Example ===\n");

    // Every stage is logged through tracing
    let transformer = Transformer::new(Arc::new(LoggingObserver));

    let offerings = [
        ("2", "AB", "CD"),
        ("3", "Hello", "World"),
        ("-4", "rust", "crab"),
        ("0", "A", "B"),
        ("5", "123", "456"),
        ("seven", "A", "B"),
    ];

    for (divisor, left, right) in offerings {
        let result = transformer.transform_input(divisor, left, right);
        println!("({divisor}, {left:?}, {right:?}) -> {result}");
    }

    // Recording observer keeps the intermediate values
    println!("\nStage trace for (7, \"Letter\", \"Ritual\"):");
    let recorder = Arc::new(RecordingObserver::new());
    let traced = Transformer::new(recorder.clone());
    traced.transform(7, "Letter", "Ritual");

    for event in recorder.events() {
        println!("  {:?}", event);
    }

    // Higher precision only changes what the division computes, not the output cap
    let config = PipelineConfig::new().with_division_scale(50);
    match Transformer::from_config(config, Arc::new(NoOpObserver)) {
        Ok(precise) => println!("\nScale 50: {}", precise.transform(7, "Letter", "Ritual")),
        Err(e) => println!("\nInvalid configuration: {}", e),
    }
}
