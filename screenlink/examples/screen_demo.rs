//! Demo drivers for the tally screen
//!
//! Offers the three classic call patterns behind a numbered menu: a fixed
//! test sequence, a randomized detection simulation, and a manual command
//! prompt.

use std::io::{self, BufRead, Write};
use std::time::{Duration, Instant};

use rand::Rng;
use tokio::time::sleep;

use screenlink::ScreenClient;

#[tokio::main]
async fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let addr = std::env::var("SCREEN_ADDR").unwrap_or_else(|_| "10.64.220.72".to_string());

    println!("OLED tally screen demo ({addr})");
    println!("1. Fixed test sequence");
    println!("2. Detection simulation");
    println!("3. Manual control");
    println!();

    let Some(choice) = prompt("Choice (1-3): ")? else {
        return Ok(());
    };

    let mut client = ScreenClient::new(addr);

    match choice.as_str() {
        "1" => fixed_sequence(&mut client).await,
        "2" => detection_simulation(&mut client, Duration::from_secs(30)).await,
        "3" => manual_control(&mut client).await?,
        _ => println!("Invalid choice"),
    }

    Ok(())
}

/// Read one trimmed, lowercased line; `None` on EOF.
fn prompt(label: &str) -> io::Result<Option<String>> {
    print!("{label}");
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_lowercase()))
}

/// Known increments per column, with short pauses so the screen visibly
/// counts up.
async fn fixed_sequence(client: &mut ScreenClient) {
    println!("\n=== FIXED SEQUENCE ===");

    println!("Left +5");
    for _ in 0..5 {
        client.increment_left().await;
        sleep(Duration::from_millis(200)).await;
    }

    println!("Right +3");
    for _ in 0..3 {
        client.increment_right().await;
        sleep(Duration::from_millis(200)).await;
    }

    println!("Both +2");
    for _ in 0..2 {
        client.increment_both().await;
        sleep(Duration::from_millis(200)).await;
    }

    println!("\nResult: {}", client.snapshot());
}

/// Stand-in for a camera pipeline: each tick randomly "detects" a person
/// on the left, right, both sides, or nobody at all.
async fn detection_simulation(client: &mut ScreenClient, duration: Duration) {
    println!("\n=== DETECTION SIMULATION ({}s) ===", duration.as_secs());

    let started = Instant::now();

    while started.elapsed() < duration {
        match rand::thread_rng().gen_range(0..4) {
            0 => {
                println!("Person detected on the left");
                client.increment_left().await;
            }
            1 => {
                println!("Person detected on the right");
                client.increment_right().await;
            }
            2 => {
                println!("Both persons detected");
                client.increment_both().await;
            }
            _ => println!("Nobody in frame"),
        }

        sleep(Duration::from_secs(1)).await;
    }

    let counters = client.snapshot();
    println!("\nTotal detections:");
    println!("  left:  {}", counters.left);
    println!("  right: {}", counters.right);
    println!("  both:  {}", counters.both);
}

async fn manual_control(client: &mut ScreenClient) -> io::Result<()> {
    println!("\n=== MANUAL CONTROL ===");
    println!("Commands:");
    println!("  l+ : left +1    | l- : left -1");
    println!("  r+ : right +1   | r- : right -1");
    println!("  b+ : both +1    | b- : both -1");
    println!("  q  : quit");
    println!();

    loop {
        let Some(cmd) = prompt("Command: ")? else {
            break;
        };

        match cmd.as_str() {
            "q" => break,
            "l+" => {
                client.increment_left().await;
                println!("Left +1");
            }
            "l-" => {
                client.decrement_left().await;
                println!("Left -1");
            }
            "r+" => {
                client.increment_right().await;
                println!("Right +1");
            }
            "r-" => {
                client.decrement_right().await;
                println!("Right -1");
            }
            "b+" => {
                client.increment_both().await;
                println!("Both +1");
            }
            "b-" => {
                client.decrement_both().await;
                println!("Both -1");
            }
            _ => {
                println!("Invalid command");
                continue;
            }
        }

        println!("Status: {}\n", client.snapshot());
    }

    Ok(())
}
