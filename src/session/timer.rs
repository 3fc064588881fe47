use std::time::Duration;

/// Identifies one visit of one question. The serial grows on every question
/// change, so a quiz that wraps back onto the same index still gets a new tag.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct QuestionTag {
    pub index: usize,
    pub serial: u64,
}

impl QuestionTag {
    pub fn first() -> Self {
        QuestionTag {
            index: 0,
            serial: 0,
        }
    }

    pub fn next(self, question_count: usize) -> Self {
        QuestionTag {
            index: (self.index + 1) % question_count.max(1),
            serial: self.serial + 1,
        }
    }
}

/// One-shot timer owned by the session: reveal the answer once `delay` has
/// passed, unless the question it was created for is gone by then.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScheduledReveal {
    pub tag: QuestionTag,
    pub delay: Duration,
}
