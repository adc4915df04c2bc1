// Host-side tests for the display state machine.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod error {
        include!("../src/core/error.rs");
    }
    pub mod validate {
        include!("../src/core/validate.rs");
    }
    pub mod state {
        include!("../src/core/state.rs");
    }
}

use crate::core::error::ValidationError;
use crate::core::state::{DisplayState, FormModel};

fn prompt_model() -> FormModel {
    let mut m = FormModel::new();
    m.submit("Anna Bell").unwrap();
    m
}

#[test]
fn starts_on_intro_with_live_controls() {
    let m = FormModel::new();
    assert_eq!(m.state(), DisplayState::Intro);
    assert!(!m.controls_disabled());
    assert_eq!(m.dodges(), 0);
    assert_eq!(m.celebrations(), 0);
}

#[test]
fn invalid_name_leaves_state_untouched() {
    let mut m = FormModel::new();
    assert_eq!(m.submit("Anna"), Err(ValidationError::TooShort { len: 4 }));
    assert_eq!(m.state(), DisplayState::Intro);
    // retry works
    let name = m.submit("Anna Bell").unwrap().unwrap();
    assert_eq!(name.as_str(), "Anna Bell");
    assert_eq!(m.state(), DisplayState::Prompt);
}

#[test]
fn second_valid_submit_is_ignored() {
    let mut m = prompt_model();
    assert_eq!(m.submit("Someone Else"), Ok(None));
    assert_eq!(m.state(), DisplayState::Prompt);
}

#[test]
fn decline_is_a_self_loop_on_prompt() {
    let mut m = FormModel::new();
    assert!(!m.decline());
    assert_eq!(m.dodges(), 0);

    let mut m = prompt_model();
    for _ in 0..5 {
        assert!(m.decline());
    }
    assert_eq!(m.dodges(), 5);
    assert_eq!(m.state(), DisplayState::Prompt);
    assert!(!m.controls_disabled());
}

#[test]
fn confirm_fires_exactly_once() {
    let mut m = FormModel::new();
    assert!(!m.confirm(), "no confirm before the prompt is shown");

    let mut m = prompt_model();
    assert!(m.confirm());
    assert_eq!(m.state(), DisplayState::Celebrating);
    assert!(m.controls_disabled());
    assert_eq!(m.celebrations(), 1);

    assert!(!m.confirm());
    assert_eq!(m.celebrations(), 1);
}

#[test]
fn replay_runs_again_without_reenabling_controls() {
    let mut m = prompt_model();
    assert!(!m.replay(), "nothing to replay yet");
    m.confirm();
    for _ in 0..3 {
        assert!(m.replay());
    }
    assert_eq!(m.celebrations(), 4);
    assert!(m.controls_disabled());
    assert_eq!(m.state(), DisplayState::Celebrating);
}

#[test]
fn evasive_control_stops_after_confirm() {
    let mut m = prompt_model();
    m.decline();
    m.confirm();
    assert!(!m.decline());
    assert_eq!(m.dodges(), 1);
}
