// Host-side tests for the element ids the page contract relies on.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
fn element_ids_are_distinct() {
    let ids = [
        BACKGROUND_ID,
        CHARACTER_ID,
        ENABLE_BUTTON_ID,
        READOUT_ALPHA_ID,
        READOUT_BETA_ID,
        READOUT_GAMMA_ID,
    ];
    for (i, a) in ids.iter().enumerate() {
        assert!(!a.is_empty());
        for b in &ids[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn listens_for_orientation_events() {
    assert_eq!(ORIENTATION_EVENT, "deviceorientation");
}
