use std::fs::File;
use std::time::Duration;

use simplelog::{Config, LevelFilter, WriteLogger};
use toastline::{ToastEvent, ToastHost, ToastSpec, ToastTimings};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // Set up file logging
    let log_file = File::create("ticker.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let timings = ToastTimings::new()
        .default_duration(Duration::from_millis(1500))
        .max_visible(3);
    let (handle, mut events) = ToastHost::spawn(timings);

    handle.show(ToastSpec::info("Connecting..."));
    handle.show(ToastSpec::success("Connected"));
    handle.show(ToastSpec::warning("Certificate expires soon"));
    let sticky = handle.show(
        ToastSpec::error("Sync failed").with_duration(Duration::ZERO),
    );

    // Dismiss the persistent error after a while, from another task.
    let closer = handle.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_secs(3)).await;
        closer.dismiss(sticky);
    });

    drop(handle);
    while let Some(event) = events.recv().await {
        match event {
            ToastEvent::Added(record) => {
                println!("+ [{}] {}", record.kind(), record.message());
            }
            ToastEvent::PhaseChanged { id, phase } => {
                println!("  {id} -> {phase:?}");
            }
            ToastEvent::Removed(id) => {
                println!("- {id}");
            }
        }
    }

    Ok(())
}
