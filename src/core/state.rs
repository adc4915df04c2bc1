use super::error::ValidationError;
use super::validate::{validate_name, Name};

/// Which card the page is showing. Transitions only move forward.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DisplayState {
    #[default]
    Intro,
    Prompt,
    Celebrating,
}

/// Interaction state shared by every handler on the page.
#[derive(Clone, Debug, Default)]
pub struct FormModel {
    state: DisplayState,
    controls_disabled: bool,
    dodges: u32,
    celebrations: u32,
}

impl FormModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DisplayState {
        self.state
    }

    pub fn controls_disabled(&self) -> bool {
        self.controls_disabled
    }

    pub fn dodges(&self) -> u32 {
        self.dodges
    }

    /// Number of particle/chime runs so far (the first confirm plus replays).
    pub fn celebrations(&self) -> u32 {
        self.celebrations
    }

    /// Validate a raw submission and move Intro -> Prompt.
    ///
    /// Returns `Ok(None)` for a valid name submitted after the prompt is
    /// already up; invalid input never changes state.
    pub fn submit(&mut self, raw: &str) -> Result<Option<Name>, ValidationError> {
        let name = validate_name(raw)?;
        if self.state != DisplayState::Intro {
            return Ok(None);
        }
        self.state = DisplayState::Prompt;
        Ok(Some(name))
    }

    /// Record a proximity signal on the evasive control. Self-loop on Prompt.
    pub fn decline(&mut self) -> bool {
        if self.state != DisplayState::Prompt || self.controls_disabled {
            return false;
        }
        self.dodges = self.dodges.saturating_add(1);
        true
    }

    /// Move Prompt -> Celebrating. True exactly once per page.
    pub fn confirm(&mut self) -> bool {
        if self.state != DisplayState::Prompt {
            return false;
        }
        self.state = DisplayState::Celebrating;
        self.controls_disabled = true;
        self.celebrations += 1;
        true
    }

    /// Re-run the celebration effects without touching the controls.
    pub fn replay(&mut self) -> bool {
        if self.state != DisplayState::Celebrating {
            return false;
        }
        self.celebrations += 1;
        true
    }
}
