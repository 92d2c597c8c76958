// Count-up animation state machine for headline statistics
use super::error::RevealError;

/// Number of ticks a count-up is spread over.
pub const REVEAL_FRAMES: u64 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealPhase {
    Idle,
    Animating,
    Settled,
    Cancelled,
}

#[derive(Debug, Clone)]
pub struct RevealCounter {
    target: u64,
    suffix: String,
    step: u64,
    current: u64,
    display_value: u64,
    phase: RevealPhase,
}

impl RevealCounter {
    /// Parse a display string such as `"25+"`. Every non-digit character is
    /// dropped to form the target; the non-digit remainder is kept as the
    /// suffix shown next to the number.
    pub fn new(display: &str) -> Result<Self, RevealError> {
        let digits: String = display.chars().filter(char::is_ascii_digit).collect();
        if digits.is_empty() {
            return Err(RevealError::MalformedInput {
                input: display.to_string(),
                reason: "no digits",
            });
        }

        let target: u64 = digits.parse().map_err(|_| RevealError::MalformedInput {
            input: display.to_string(),
            reason: "value does not fit in 64 bits",
        })?;
        let suffix = display.chars().filter(|c| !c.is_ascii_digit()).collect();

        Ok(Self {
            target,
            suffix,
            step: target.div_ceil(REVEAL_FRAMES),
            current: 0,
            display_value: 0,
            phase: RevealPhase::Idle,
        })
    }

    pub fn target(&self) -> u64 {
        self.target
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    pub fn step(&self) -> u64 {
        self.step
    }

    pub fn display_value(&self) -> u64 {
        self.display_value
    }

    pub fn phase(&self) -> RevealPhase {
        self.phase
    }

    pub fn is_settled(&self) -> bool {
        self.phase == RevealPhase::Settled
    }

    pub fn rendered(&self) -> String {
        format!("{}{}", self.display_value, self.suffix)
    }

    /// Viewport observer entry: only an intersection covering at least
    /// `threshold` of the element counts as visible.
    pub fn observe_intersection(&mut self, ratio: f64, threshold: f64) -> Result<bool, RevealError> {
        if ratio >= threshold {
            self.on_visible()
        } else if self.phase == RevealPhase::Cancelled {
            Err(RevealError::PostTeardownUpdate)
        } else {
            Ok(false)
        }
    }

    /// Latch the counter into the animating phase. Returns `true` only for the
    /// call that performed the transition.
    pub fn on_visible(&mut self) -> Result<bool, RevealError> {
        match self.phase {
            RevealPhase::Idle => {
                self.phase = RevealPhase::Animating;
                Ok(true)
            }
            RevealPhase::Animating | RevealPhase::Settled => Ok(false),
            RevealPhase::Cancelled => Err(RevealError::PostTeardownUpdate),
        }
    }

    /// Advance one period. Returns the newly exposed value while animating.
    pub fn tick(&mut self) -> Result<Option<u64>, RevealError> {
        match self.phase {
            RevealPhase::Animating => {}
            RevealPhase::Idle | RevealPhase::Settled => return Ok(None),
            RevealPhase::Cancelled => return Err(RevealError::PostTeardownUpdate),
        }

        self.current = self.current.saturating_add(self.step);
        if self.current >= self.target {
            self.display_value = self.target;
            self.phase = RevealPhase::Settled;
        } else {
            self.display_value = self.current;
        }

        Ok(Some(self.display_value))
    }

    pub fn cancel(&mut self) {
        self.phase = RevealPhase::Cancelled;
    }
}
