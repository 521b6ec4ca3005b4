//! Per-cell state for the 4-digit security PIN.
//!
//! The PIN is a fixed sequence of four slots, each holding at most one
//! decimal digit. Focus-chaining decisions are computed here so the
//! component layer only has to act on them.

pub const PIN_LEN: usize = 4;

/// What applying a keystroke to a PIN slot did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DigitEntry {
    /// The slot was updated; `advance_to` names the cell that should take
    /// focus next, when there is one.
    Stored { advance_to: Option<usize> },
    /// Input was not a decimal digit; the slot is unchanged.
    Rejected,
}

/// Whether typed text may land in a PIN cell at all. Non-digit keys are
/// suppressed before the browser inserts them, so a rejected character
/// never lingers in the one-character input.
pub fn is_digit_keystroke(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|c| c.is_ascii_digit())
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PinDigits {
    slots: [Option<char>; PIN_LEN],
}

impl PinDigits {
    /// Applies raw input to slot `index`. Only the last character of the
    /// raw value counts, so typing into an already-filled cell overwrites
    /// it. An empty raw value clears the slot.
    pub fn enter(&mut self, index: usize, raw: &str) -> DigitEntry {
        match raw.chars().last() {
            None => {
                self.slots[index] = None;
                DigitEntry::Stored { advance_to: None }
            }
            Some(digit) if digit.is_ascii_digit() => {
                self.slots[index] = Some(digit);
                DigitEntry::Stored {
                    advance_to: (index + 1 < PIN_LEN).then_some(index + 1),
                }
            }
            Some(_) => DigitEntry::Rejected,
        }
    }

    /// Cell that should take focus when backspace is pressed while slot
    /// `index` is empty, letting the keystroke walk backwards through the
    /// cells. `None` means default deletion handling should proceed.
    pub fn backspace_target(&self, index: usize) -> Option<usize> {
        if self.slots[index].is_none() && index > 0 {
            Some(index - 1)
        } else {
            None
        }
    }

    /// Display value of one cell: a single digit or the empty string.
    pub fn cell(&self, index: usize) -> String {
        self.slots[index].map(String::from).unwrap_or_default()
    }

    /// Concatenation of the filled slots, in order.
    pub fn joined(&self) -> String {
        self.slots.iter().flatten().collect()
    }

    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }
}
