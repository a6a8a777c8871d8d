use super::*;

#[test]
fn freshly_armed_token_is_current() {
    let mut gate = DebounceGate::default();
    let token = gate.arm();
    assert!(gate.is_current(token));
}

#[test]
fn rearming_invalidates_older_tokens() {
    let mut gate = DebounceGate::default();
    let first = gate.arm();
    let second = gate.arm();
    assert!(!gate.is_current(first));
    assert!(gate.is_current(second));
}

#[test]
fn only_the_last_of_many_keystrokes_fires() {
    let mut gate = DebounceGate::default();
    let tokens: Vec<u64> = (0..10).map(|_| gate.arm()).collect();
    let current: Vec<&u64> = tokens.iter().filter(|t| gate.is_current(**t)).collect();
    assert_eq!(current, [tokens.last().expect("non-empty")]);
}

#[test]
fn default_gate_has_no_current_token() {
    let gate = DebounceGate::default();
    assert!(!gate.is_current(1));
}
