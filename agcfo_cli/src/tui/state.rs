//! Worksheet session state (Elm Model + Update).

use agcfo_core::calculations::FieldSpec;
use agcfo_core::{CalculatorKind, Worksheet};

use super::keymap::KeyAction;

/// One worksheet per calculator plus which one is on screen.
pub struct TuiApp {
    /// Whether the app should quit.
    pub should_quit: bool,
    sheets: Vec<Worksheet>,
    /// Focused field per worksheet.
    focus: Vec<usize>,
    active: usize,
}

impl TuiApp {
    /// New session; `examples` pre-fills every worksheet.
    pub fn new(examples: bool) -> Self {
        let sheets: Vec<Worksheet> = CalculatorKind::ALL
            .into_iter()
            .map(|kind| {
                if examples {
                    Worksheet::with_placeholders(kind)
                } else {
                    Worksheet::new(kind)
                }
            })
            .collect();
        TuiApp {
            should_quit: false,
            focus: vec![0; sheets.len()],
            sheets,
            active: 0,
        }
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active_sheet(&self) -> &Worksheet {
        &self.sheets[self.active]
    }

    pub fn focused_field(&self) -> usize {
        self.focus[self.active]
    }

    pub fn focused_spec(&self) -> &'static FieldSpec {
        &self.active_sheet().fields()[self.focused_field()]
    }

    fn field_count(&self) -> usize {
        self.active_sheet().fields().len()
    }

    /// Apply a keyboard action.
    pub fn handle_key_action(&mut self, action: KeyAction) {
        let focused = self.focused_field();
        match action {
            KeyAction::Quit => {
                self.should_quit = true;
            }
            KeyAction::NextCalculator => {
                self.active = (self.active + 1) % self.sheets.len();
            }
            KeyAction::PrevCalculator => {
                self.active = (self.active + self.sheets.len() - 1) % self.sheets.len();
            }
            KeyAction::NextField => {
                let count = self.field_count();
                self.focus[self.active] = (focused + 1) % count;
            }
            KeyAction::PrevField => {
                let count = self.field_count();
                self.focus[self.active] = (focused + count - 1) % count;
            }
            KeyAction::Input(c) => {
                self.sheets[self.active].push_char(focused, c);
            }
            KeyAction::Backspace => {
                self.sheets[self.active].pop_char(focused);
            }
            KeyAction::ClearField => {
                self.sheets[self.active].clear_field(focused);
            }
            KeyAction::ClearAll => {
                self.sheets[self.active].clear();
                self.focus[self.active] = 0;
            }
            KeyAction::LoadExamples => {
                let kind = self.active_sheet().kind();
                self.sheets[self.active] = Worksheet::with_placeholders(kind);
            }
            KeyAction::None => {}
        }
    }
}
