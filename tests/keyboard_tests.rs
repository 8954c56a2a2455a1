// Host-side tests for keyboard-to-intent mapping.

use showroom_core::{intent_for_key, Intent};

#[test]
fn advance_keys() {
    assert_eq!(intent_for_key("ArrowDown"), Some(Intent::Advance));
    assert_eq!(intent_for_key("PageDown"), Some(Intent::Advance));
    assert_eq!(intent_for_key(" "), Some(Intent::Advance));
}

#[test]
fn retreat_keys() {
    assert_eq!(intent_for_key("ArrowUp"), Some(Intent::Retreat));
    assert_eq!(intent_for_key("PageUp"), Some(Intent::Retreat));
}

#[test]
fn boundary_keys() {
    assert_eq!(intent_for_key("Home"), Some(Intent::Home));
    assert_eq!(intent_for_key("End"), Some(Intent::End));
}

#[test]
fn unrelated_keys_are_ignored() {
    for key in ["", "a", "ArrowLeft", "ArrowRight", "Enter", "Escape", "arrowdown", "Space"] {
        assert_eq!(intent_for_key(key), None, "key {key:?}");
    }
}

#[test]
fn boundary_intents_resolve_against_section_count() {
    assert_eq!(Intent::Home.resolve(2, 4), 0);
    assert_eq!(Intent::End.resolve(0, 4), 3);
    assert_eq!(Intent::Advance.resolve(3, 4), 4);
    assert_eq!(Intent::Retreat.resolve(0, 4), -1);
    assert_eq!(Intent::JumpTo(2).resolve(0, 4), 2);
}
