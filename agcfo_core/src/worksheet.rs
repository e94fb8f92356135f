//! # Worksheet
//!
//! A worksheet is one calculator's live form: the raw text of every field
//! plus the result derived from it. Every edit re-parses all fields and
//! reruns the pure calculator, so the result always reflects exactly the
//! current text and is `None` whenever a required field is blank.
//!
//! ## Example
//!
//! ```rust
//! use agcfo_core::calculations::CalculatorKind;
//! use agcfo_core::worksheet::Worksheet;
//!
//! let mut sheet = Worksheet::new(CalculatorKind::Pasture);
//! sheet.set_field("acres", "500").unwrap();
//! sheet.set_field("cost_per_acre", "50").unwrap();
//! sheet.set_field("carrying_capacity", "0.5").unwrap();
//! assert!(sheet.result().is_none());
//!
//! sheet.set_field("months", "6").unwrap();
//! assert!(sheet.result().is_some());
//! ```

use crate::calculations::{CalculationItem, CalculationOutput, CalculatorKind, FieldSpec};
use crate::errors::{CalcError, CalcResult};
use crate::input::parse_field;

/// One calculator's field text and current result.
#[derive(Debug, Clone, PartialEq)]
pub struct Worksheet {
    kind: CalculatorKind,
    /// Raw text, parallel to `kind.fields()`
    entries: Vec<String>,
    result: Option<CalculationOutput>,
}

impl Worksheet {
    /// Empty worksheet; no result until the required fields are filled.
    pub fn new(kind: CalculatorKind) -> Self {
        Worksheet {
            kind,
            entries: vec![String::new(); kind.fields().len()],
            result: None,
        }
    }

    /// Worksheet pre-filled with every field's example value.
    pub fn with_placeholders(kind: CalculatorKind) -> Self {
        let mut sheet = Worksheet {
            kind,
            entries: kind.fields().iter().map(|f| f.placeholder.to_string()).collect(),
            result: None,
        };
        sheet.recompute();
        sheet
    }

    pub fn kind(&self) -> CalculatorKind {
        self.kind
    }

    pub fn fields(&self) -> &'static [FieldSpec] {
        self.kind.fields()
    }

    /// Raw text of the field at `index`
    pub fn text(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }

    /// Raw text of the field named `key`
    pub fn text_of(&self, key: &str) -> Option<&str> {
        self.index_of(key).and_then(|i| self.text(i))
    }

    /// Current result, `None` while inputs are incomplete
    pub fn result(&self) -> Option<&CalculationOutput> {
        self.result.as_ref()
    }

    /// Input snapshot parsed from the current text
    pub fn input(&self) -> CalculationItem {
        self.kind
            .build_input(|key| self.text_of(key).and_then(parse_field))
    }

    /// Replace a field's text by key.
    pub fn set_field(&mut self, key: &str, text: impl Into<String>) -> CalcResult<()> {
        let index = self
            .index_of(key)
            .ok_or_else(|| CalcError::unknown_field(self.kind.calc_type(), key))?;
        self.set_index(index, text);
        Ok(())
    }

    /// Replace a field's text by position. Out-of-range indexes are ignored.
    pub fn set_index(&mut self, index: usize, text: impl Into<String>) {
        if let Some(entry) = self.entries.get_mut(index) {
            *entry = text.into();
            self.recompute();
        }
    }

    /// Append one typed character to a field
    pub fn push_char(&mut self, index: usize, c: char) {
        if let Some(entry) = self.entries.get_mut(index) {
            entry.push(c);
            self.recompute();
        }
    }

    /// Delete the last character of a field
    pub fn pop_char(&mut self, index: usize) {
        if let Some(entry) = self.entries.get_mut(index) {
            if entry.pop().is_some() {
                self.recompute();
            }
        }
    }

    pub fn clear_field(&mut self, index: usize) {
        self.set_index(index, String::new());
    }

    /// Blank every field
    pub fn clear(&mut self) {
        self.entries.iter_mut().for_each(String::clear);
        self.recompute();
    }

    fn index_of(&self, key: &str) -> Option<usize> {
        self.fields().iter().position(|f| f.key == key)
    }

    fn recompute(&mut self) {
        self.result = self.input().calculate().ok();
        tracing::trace!(
            calculator = self.kind.calc_type(),
            computed = self.result.is_some(),
            "worksheet recomputed"
        );
    }
}
