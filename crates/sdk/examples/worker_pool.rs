//! Worker Pool Example
//!
//! A producer fills the `jobs` queue while several workers drain it with
//! blocking pops, stopping once the queue stays empty for a second.
//!
//! # Usage
//!
//! 1. Start the daemon:
//!    ```bash
//!    cargo run --package handoff-daemon
//!    ```
//!
//! 2. Run this example:
//!    ```bash
//!    cargo run --package handoff-sdk --example worker_pool
//!    ```

use handoff_sdk::HandoffClient;
use std::sync::Arc;
use std::time::Duration;

const URL: &str = "http://127.0.0.1:9527";
const WORKERS: usize = 4;
const JOBS: usize = 20;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Handoff SDK - Worker Pool Example");
    println!("=================================\n");

    let client = Arc::new(HandoffClient::connect(URL).await?);

    let mut workers = Vec::new();
    for id in 0..WORKERS {
        let client = Arc::clone(&client);
        workers.push(tokio::spawn(async move {
            let mut handled = 0usize;
            let mut retries = 0;
            loop {
                match client.pop_with_timeout("jobs", 1_000).await {
                    Ok(Some(job)) => {
                        println!("   worker {} took {}", id, job);
                        handled += 1;
                    }
                    Ok(None) => break,
                    Err(e) if e.is_transient() && retries < 3 => {
                        retries += 1;
                        eprintln!("   worker {} retrying: {}", id, e);
                        tokio::time::sleep(Duration::from_millis(200)).await;
                    }
                    Err(e) => {
                        eprintln!("   worker {} stopped: {}", id, e);
                        break;
                    }
                }
            }
            handled
        }));
    }

    for i in 0..JOBS {
        client.push("jobs", format!("job-{}", i)).await?;
    }
    println!("✓ Pushed {} jobs\n", JOBS);

    let mut total = 0;
    for worker in workers {
        total += worker.await?;
    }

    println!("\n✓ Workers handled {} jobs", total);
    Ok(())
}
