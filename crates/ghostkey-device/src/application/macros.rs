//! Command macros: host idioms composed from engine calls.
//!
//! These target a Windows host (run dialog, `cmd`, `notepad`).  Nothing here
//! has its own timing protocol: chords go through the raw key emitter and
//! every typed string through [`InjectionEngine::type_command`] or
//! [`InjectionEngine::type_text`].  The fixed waits after each step give the
//! host time to open the window that the next keystrokes are aimed at.
//!
//! All timing comes from the macro layer's [`TypingProfile`] preset; the
//! `[pacing]` config section only applies to payloads typed through
//! [`InjectionEngine::type_text`] directly.

use ghostkey_core::{HidKeyCode, PacingConfig, TypingProfile};

use crate::application::{
    hid_output::{Delay, HidOutput},
    inject::{InjectionEngine, TypeReport},
};

/// Wait after the run dialog shortcut.
pub const RUN_DIALOG_SETTLE_MS: u32 = 1000;
/// Wait after launching an application from the run dialog.
pub const APP_LAUNCH_SETTLE_MS: u32 = 1000;
/// Wait for a save dialog to take focus.
pub const SAVE_DIALOG_SETTLE_MS: u32 = 500;
/// Wait after the save dialog has been submitted.
pub const SAVE_COMPLETE_SETTLE_MS: u32 = 1000;
/// Wait after closing the focused window.
pub const CLOSE_WINDOW_SETTLE_MS: u32 = 1000;
/// Wait after a window arrangement shortcut.
pub const WINDOW_ARRANGE_SETTLE_MS: u32 = 500;

/// Host idioms over a borrowed engine.
pub struct CommandMacros<'e, H, D> {
    engine: &'e mut InjectionEngine<H, D>,
    profile: TypingProfile,
}

impl<'e, H: HidOutput, D: Delay> CommandMacros<'e, H, D> {
    /// Typed commands use `profile`; chords use its pacing.
    pub fn new(engine: &'e mut InjectionEngine<H, D>, profile: TypingProfile) -> Self {
        Self { engine, profile }
    }

    fn pacing(&self) -> PacingConfig {
        self.profile.pacing()
    }

    /// Presses `keys` together and releases them in one batch.
    pub fn press_chord(&mut self, keys: &[HidKeyCode]) {
        let pacing = self.pacing();
        self.engine.press_chord(keys, &pacing);
    }

    /// Meta+R.
    pub fn open_run_dialog(&mut self) {
        self.press_chord(&[HidKeyCode::MetaLeft, HidKeyCode::KeyR]);
        self.engine.wait(RUN_DIALOG_SETTLE_MS);
    }

    /// Launches `program` from the run dialog.
    pub fn launch(&mut self, program: &str) -> TypeReport {
        self.open_run_dialog();
        let report = self.engine.type_command(program, self.profile);
        self.engine.wait(APP_LAUNCH_SETTLE_MS);
        report
    }

    pub fn open_notepad(&mut self) {
        self.launch("notepad");
    }

    pub fn open_cmd(&mut self) {
        self.launch("cmd");
    }

    pub fn open_powershell(&mut self) {
        self.launch("powershell");
    }

    /// Opens a command prompt and runs `command` in it.
    pub fn exec_cmd(&mut self, command: &str) -> TypeReport {
        self.open_cmd();
        self.engine.type_command(command, self.profile)
    }

    /// Ctrl+S in the focused editor, then types `filename` and confirms.
    pub fn save_notepad(&mut self, filename: &str) -> TypeReport {
        self.press_chord(&[HidKeyCode::ControlLeft, HidKeyCode::KeyS]);
        self.engine.wait(SAVE_DIALOG_SETTLE_MS);
        let report = self.engine.type_command(filename, self.profile);
        self.engine.wait(SAVE_COMPLETE_SETTLE_MS);
        report
    }

    /// Alt+F4.
    pub fn close_window(&mut self) {
        self.press_chord(&[HidKeyCode::AltLeft, HidKeyCode::F4]);
        self.engine.wait(CLOSE_WINDOW_SETTLE_MS);
    }

    /// Meta+Shift+M.
    pub fn minimize_window(&mut self) {
        self.press_chord(&[HidKeyCode::MetaLeft, HidKeyCode::ShiftLeft, HidKeyCode::KeyM]);
        self.engine.wait(WINDOW_ARRANGE_SETTLE_MS);
    }

    /// Meta+D.
    pub fn show_desktop(&mut self) {
        self.press_chord(&[HidKeyCode::MetaLeft, HidKeyCode::KeyD]);
        self.engine.wait(WINDOW_ARRANGE_SETTLE_MS);
    }
}
