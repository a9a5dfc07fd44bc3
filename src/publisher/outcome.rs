#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Accepted(u16),

    /// The endpoint answered with a non-success status. Not an error for the loop.
    Rejected(u16),
}

impl Outcome {
    pub fn classify(status: u16) -> Self {
        if (200..300).contains(&status) {
            Outcome::Accepted(status)
        } else {
            Outcome::Rejected(status)
        }
    }

    pub fn status(&self) -> u16 {
        match self {
            Outcome::Accepted(s) | Outcome::Rejected(s) => *s,
        }
    }
}
