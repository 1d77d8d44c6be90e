use std::sync::Mutex as StdMutex;

use futures::FutureExt;
use tokio::time::sleep;

use super::*;

fn recording_debouncer(delay_ms: u64) -> (Debouncer<String>, Arc<StdMutex<Vec<String>>>) {
    let calls = Arc::new(StdMutex::new(Vec::new()));
    let recorder = Arc::clone(&calls);
    let debouncer = Debouncer::new(Duration::from_millis(delay_ms), move |arg: String| {
        let calls = Arc::clone(&recorder);
        async move {
            calls.lock().expect("calls lock").push(arg);
        }
        .boxed()
    });
    (debouncer, calls)
}

#[tokio::test(start_paused = true)]
async fn burst_fires_once_with_latest_arguments() {
    let (debouncer, calls) = recording_debouncer(1000);

    debouncer.trigger("bow".to_string());
    debouncer.trigger("wow".to_string());
    debouncer.trigger("now".to_string());
    assert!(calls.lock().expect("calls lock").is_empty());

    sleep(Duration::from_millis(1100)).await;
    assert_eq!(*calls.lock().expect("calls lock"), ["now"]);
}

#[tokio::test(start_paused = true)]
async fn nothing_fires_before_the_delay_elapses() {
    let (debouncer, calls) = recording_debouncer(1000);

    debouncer.trigger("bow".to_string());
    sleep(Duration::from_millis(500)).await;
    assert!(calls.lock().expect("calls lock").is_empty());

    sleep(Duration::from_millis(600)).await;
    assert_eq!(calls.lock().expect("calls lock").len(), 1);
}

#[tokio::test(start_paused = true)]
async fn retrigger_restarts_the_delay() {
    let (debouncer, calls) = recording_debouncer(1000);

    debouncer.trigger("first".to_string());
    sleep(Duration::from_millis(500)).await;
    debouncer.trigger("second".to_string());

    // 1200ms after the first trigger, but only 700ms after the second.
    sleep(Duration::from_millis(700)).await;
    assert!(calls.lock().expect("calls lock").is_empty());

    sleep(Duration::from_millis(400)).await;
    assert_eq!(*calls.lock().expect("calls lock"), ["second"]);
}

#[tokio::test(start_paused = true)]
async fn cancel_before_expiry_means_zero_firings() {
    let (debouncer, calls) = recording_debouncer(1000);

    debouncer.trigger("bow".to_string());
    sleep(Duration::from_millis(500)).await;
    debouncer.cancel();
    // Cancel is idempotent with nothing pending.
    debouncer.cancel();

    sleep(Duration::from_millis(2000)).await;
    assert!(calls.lock().expect("calls lock").is_empty());
}

#[tokio::test(start_paused = true)]
async fn triggering_again_after_a_firing_schedules_a_fresh_one() {
    let (debouncer, calls) = recording_debouncer(1000);

    debouncer.trigger("first".to_string());
    sleep(Duration::from_millis(1100)).await;
    debouncer.trigger("second".to_string());
    sleep(Duration::from_millis(1100)).await;

    assert_eq!(*calls.lock().expect("calls lock"), ["first", "second"]);
}

#[tokio::test(start_paused = true)]
async fn dropping_the_debouncer_discards_the_pending_invocation() {
    let (debouncer, calls) = recording_debouncer(1000);

    debouncer.trigger("bow".to_string());
    drop(debouncer);

    sleep(Duration::from_millis(2000)).await;
    assert!(calls.lock().expect("calls lock").is_empty());
}
