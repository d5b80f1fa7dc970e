#![no_main]

use libfuzzer_sys::fuzz_target;

use primegen_core::primality::{PrimalityTest, TrialDivision, WheelDivision};

fuzz_target!(|data: &[u8]| {
    if data.len() < 8 {
        return;
    }
    let bytes: [u8; 8] = data[..8].try_into().unwrap();
    // Keep the sqrt bound small enough for libFuzzer's per-input budget.
    let candidate = i64::from_le_bytes(bytes) % 1_000_000_000_000;

    let trial = TrialDivision::new().is_prime(candidate);
    let wheel = WheelDivision::new().is_prime(candidate);
    assert_eq!(trial, wheel, "strategies disagree on {candidate}");

    if candidate < 2 {
        assert!(!trial, "{candidate} reported prime");
    }
    if trial && candidate > 2 {
        assert!(candidate % 2 != 0, "{candidate} is even");
    }
});
