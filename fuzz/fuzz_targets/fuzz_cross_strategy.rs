#![no_main]

use libfuzzer_sys::fuzz_target;
use std::sync::Arc;

use primegen_core::generator::{Generator, PrimeGenerator};
use primegen_core::observers::NoOpObserver;
use primegen_core::primality::{TrialDivision, WheelDivision};
use primegen_core::progress::CancellationToken;

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }
    // Signed so negative counts are exercised too, capped for speed.
    let count = i64::from(i16::from_le_bytes([data[0], data[1]])) % 3_000;

    let trial: Arc<dyn Generator> = Arc::new(PrimeGenerator::new(Arc::new(TrialDivision::new())));
    let wheel: Arc<dyn Generator> = Arc::new(PrimeGenerator::new(Arc::new(WheelDivision::new())));

    let cancel = CancellationToken::new();
    let observer = NoOpObserver::new();

    let trial_result = trial.generate(&cancel, &observer, 0, count);
    let wheel_result = wheel.generate(&cancel, &observer, 1, count);

    match (trial_result, wheel_result) {
        (Ok(t), Ok(w)) => {
            assert!(count >= 0);
            assert_eq!(t.len() as i64, count);
            assert_eq!(t.sequence(), w.sequence(), "trial != wheel at count={count}");
            let values: Vec<i64> = t.values().collect();
            assert!(values.windows(2).all(|p| p[0] < p[1]));
        }
        (Err(_), Err(_)) => assert!(count < 0),
        _ => panic!("strategies disagree on success at count={count}"),
    }
});
