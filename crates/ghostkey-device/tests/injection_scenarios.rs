//! End-to-end typing scenarios.
//!
//! These drive `InjectionEngine` through the public API against the recording
//! mock, and once against the gadget backend writing into a byte buffer.

use ghostkey_core::{HidKeyCode, InjectionMode, PacingConfig, UnsupportedPolicy, SCAN_CODE_TABLE};
use ghostkey_device::application::hid_output::Delay;
use ghostkey_device::application::inject::InjectionEngine;
use ghostkey_device::infrastructure::hid_output::{
    HidEvent, HidGadgetOutput, MockDelay, MockHidOutput,
};

use HidKeyCode::*;

fn engine() -> (InjectionEngine<MockHidOutput, MockDelay>, MockHidOutput) {
    let log = MockHidOutput::new();
    let delay = log.delay();
    (InjectionEngine::new(log.clone(), delay), log)
}

/// Delay that returns immediately without recording.
struct NoDelay;

impl Delay for NoDelay {
    fn delay_ms(&mut self, _ms: u32) {}
}

// ── Scan-code scenarios ───────────────────────────────────────────────────────

#[test]
fn test_lowercase_word_is_three_unshifted_keystrokes() {
    let (mut engine, log) = engine();

    let report = engine.type_text("abc", InjectionMode::ScanCode, &PacingConfig::conservative(), false);

    assert_eq!(log.keystrokes(), vec![vec![KeyA], vec![KeyB], vec![KeyC]]);
    assert_eq!(report.emitted, 3);
    assert!(!report.enter_sent);
}

#[test]
fn test_mixed_case_digit_and_symbol_use_shift_only_where_needed() {
    let (mut engine, log) = engine();

    engine.type_text("A1!", InjectionMode::ScanCode, &PacingConfig::immediate(), false);

    assert_eq!(
        log.keystrokes(),
        vec![vec![ShiftLeft, KeyA], vec![Digit1], vec![ShiftLeft, Digit1]]
    );
}

#[test]
fn test_unsupported_character_is_skipped_and_rest_is_typed() {
    // Arrange
    let (mut engine, log) = engine();

    // Act
    let report = engine.type_text("hi©bye", InjectionMode::ScanCode, &PacingConfig::immediate(), false);

    // Assert
    assert_eq!(
        log.keystrokes(),
        vec![vec![KeyH], vec![KeyI], vec![KeyB], vec![KeyY], vec![KeyE]]
    );
    assert_eq!(report.emitted, 5);
    assert_eq!(report.skipped, 1);
}

#[test]
fn test_command_with_enter_ends_with_single_enter_keystroke() {
    let (mut engine, log) = engine();

    let report = engine.type_text("dir", InjectionMode::ScanCode, &PacingConfig::conservative(), true);

    let strokes = log.keystrokes();
    assert_eq!(strokes.len(), 4);
    assert_eq!(strokes.last(), Some(&vec![Enter]));
    assert_eq!(strokes.iter().filter(|s| s.contains(&Enter)).count(), 1);
    assert!(report.enter_sent);
    assert_eq!(log.events().last(), Some(&HidEvent::Delay(100)));
}

#[test]
fn test_shift_is_pressed_before_key_with_lead_in_between() {
    // Arrange
    let (mut engine, log) = engine();
    let pacing = PacingConfig::conservative();

    // Act
    engine.type_text("Q", InjectionMode::ScanCode, &pacing, false);

    // Assert
    assert_eq!(
        log.events(),
        vec![
            HidEvent::Press(ShiftLeft),
            HidEvent::Delay(pacing.shift_lead_ms),
            HidEvent::Press(KeyQ),
            HidEvent::Delay(pacing.key_dwell_ms),
            HidEvent::ReleaseAll,
            HidEvent::Delay(pacing.post_release_ms),
            HidEvent::Delay(pacing.inter_char_delay_ms),
        ]
    );
}

#[test]
fn test_keystroke_count_is_payload_minus_unsupported() {
    let payload = "Grüße, Welt! ~ 100% ✓\tok";
    let (mut engine, log) = engine();

    let report = engine.type_text(payload, InjectionMode::ScanCode, &PacingConfig::immediate(), false);

    let unsupported = SCAN_CODE_TABLE.unsupported_chars(payload).count();
    assert_eq!(log.keystrokes().len(), payload.chars().count() - unsupported);
    assert_eq!(report.skipped, unsupported);
}

#[test]
fn test_every_keystroke_is_fully_released() {
    let (mut engine, log) = engine();

    engine.type_text("Hello, World!", InjectionMode::ScanCode, &PacingConfig::immediate(), true);

    let presses = log
        .events()
        .iter()
        .filter(|e| matches!(e, HidEvent::Press(_)))
        .count();
    let held: usize = log.keystrokes().iter().map(Vec::len).sum();
    assert_eq!(presses, held, "no press may be left unreleased");
    let last_key_event = log
        .events()
        .into_iter()
        .rev()
        .find(|e| !matches!(e, HidEvent::Delay(_)));
    assert_eq!(last_key_event, Some(HidEvent::ReleaseAll));
}

#[test]
fn test_divert_policy_hands_unsupported_to_direct_ascii() {
    let log = MockHidOutput::new();
    let mut engine = InjectionEngine::new(log.clone(), log.delay())
        .with_unsupported_policy(UnsupportedPolicy::DivertToDirectAscii);

    let report = engine.type_text("a\tb", InjectionMode::ScanCode, &PacingConfig::immediate(), false);

    assert_eq!(log.keystrokes(), vec![vec![KeyA], vec![KeyB]]);
    assert_eq!(log.written(), "\t");
    assert_eq!(report.diverted, 1);
    assert_eq!(report.skipped, 0);
}

// ── Other modes ───────────────────────────────────────────────────────────────

#[test]
fn test_host_localized_with_enter_is_one_line_write() {
    let (mut engine, log) = engine();

    engine.type_text("ipconfig /all", InjectionMode::HostLocalized, &PacingConfig::fast(), true);

    assert_eq!(log.events()[0], HidEvent::WriteLine("ipconfig /all".into()));
    assert!(log.keystrokes().is_empty());
}

#[test]
fn test_direct_ascii_enter_is_newline_char() {
    let (mut engine, log) = engine();

    engine.type_text("é", InjectionMode::DirectAscii, &PacingConfig::immediate(), true);

    assert_eq!(log.written(), "é\n");
}

// ── Through the gadget backend ────────────────────────────────────────────────

#[test]
fn test_scan_code_payload_produces_boot_reports() {
    // Arrange
    let gadget = HidGadgetOutput::new(Vec::new());
    let mut engine = InjectionEngine::new(gadget, NoDelay);

    // Act
    engine.type_text("a!", InjectionMode::ScanCode, &PacingConfig::immediate(), true);

    // Assert
    let (gadget, _) = engine.into_parts();
    assert_eq!(gadget.dropped_reports(), 0);
    let bytes = gadget.into_inner();
    let expected: Vec<[u8; 8]> = vec![
        [0x00, 0, 0x04, 0, 0, 0, 0, 0], // a
        [0; 8],
        [0x02, 0, 0, 0, 0, 0, 0, 0], // Shift
        [0x02, 0, 0x1E, 0, 0, 0, 0, 0], // Shift+1
        [0; 8],
        [0x00, 0, 0x28, 0, 0, 0, 0, 0], // Enter
        [0; 8],
    ];
    assert_eq!(bytes, expected.concat());
}

#[test]
fn test_diverted_tab_reaches_the_wire_as_tab_key() {
    // Arrange
    let gadget = HidGadgetOutput::new(Vec::new());
    let mut engine = InjectionEngine::new(gadget, NoDelay)
        .with_unsupported_policy(UnsupportedPolicy::DivertToDirectAscii);

    // Act
    let report = engine.type_text("a\tb", InjectionMode::ScanCode, &PacingConfig::immediate(), false);

    // Assert
    assert_eq!(report.diverted, 1);
    let (gadget, _) = engine.into_parts();
    let expected: Vec<[u8; 8]> = vec![
        [0x00, 0, 0x04, 0, 0, 0, 0, 0], // a
        [0; 8],
        [0x00, 0, 0x2B, 0, 0, 0, 0, 0], // Tab
        [0; 8],
        [0x00, 0, 0x05, 0, 0, 0, 0, 0], // b
        [0; 8],
    ];
    assert_eq!(gadget.into_inner(), expected.concat());
}
