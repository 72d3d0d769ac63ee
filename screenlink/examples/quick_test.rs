//! Fixed seven-step endpoint test
//!
//! Drives every payload shape once and prints the device's report after
//! each call.

use std::time::Duration;

use tokio::time::sleep;

use screenlink::{Direction, ScreenClient, TargetSelector};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let addr = std::env::var("SCREEN_ADDR").unwrap_or_else(|_| "10.64.220.72".to_string());

    println!("Tally screen endpoint test ({addr})");
    println!();

    let mut client = ScreenClient::new(addr).with_timeout(Duration::from_secs(2));

    let steps = [
        ("1. Left +1", TargetSelector::Left, Direction::Increment),
        ("2. Left +1", TargetSelector::Left, Direction::Increment),
        ("3. Right +1", TargetSelector::Right, Direction::Increment),
        ("4. Both +1", TargetSelector::Both, Direction::Increment),
        ("5. Left -1", TargetSelector::Left, Direction::Decrement),
        ("6. Right +1", TargetSelector::Right, Direction::Increment),
        ("7. Both -1", TargetSelector::Both, Direction::Decrement),
    ];

    for (label, target, direction) in steps {
        println!("{label}");
        match client.try_adjust(target, direction).await {
            Ok(snapshot) => println!("   ok: {snapshot}"),
            Err(e) => println!("   failed: {e}"),
        }
        sleep(Duration::from_secs(1)).await;
    }

    println!();
    println!("Test finished");
}
