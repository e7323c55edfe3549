use std::sync::{Arc, Barrier};
use std::thread;

use uint512::os::{Endianness, is_little_endian, probe_little_endian};

#[test]
fn endianness_matches_target() {
    assert_eq!(is_little_endian(), cfg!(target_endian = "little"));
    assert_eq!(probe_little_endian(), cfg!(target_endian = "little"));
}

#[test]
fn endianness_is_stable_across_calls() {
    let first = is_little_endian();

    for _ in 0..1000 {
        assert_eq!(is_little_endian(), first);
    }
}

#[test]
fn endianness_agrees_across_threads() {
    const THREADS: usize = 16;

    let barrier = Arc::new(Barrier::new(THREADS));
    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                is_little_endian()
            })
        })
        .collect();

    let results: Vec<bool> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    assert!(results.iter().all(|&r| r == results[0]));
    assert_eq!(results[0], probe_little_endian());
}

#[test]
fn endianness_enum() {
    let native = Endianness::native();

    assert_eq!(native.is_little(), is_little_endian());
    assert_eq!(native.is_big(), !is_little_endian());
    assert_eq!(native.opposite().is_little(), native.is_big());
}
