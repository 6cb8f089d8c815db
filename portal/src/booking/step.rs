use std::fmt;

/// A stage of the booking wizard, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum WizardStep {
    SelectPool,
    SelectDate,
    SelectTime,
    ReviewNotes,
    Confirmed,
}

impl WizardStep {
    pub const ALL: [Self; 5] = [
        Self::SelectPool,
        Self::SelectDate,
        Self::SelectTime,
        Self::ReviewNotes,
        Self::Confirmed,
    ];

    /// One-based position shown in the progress indicator.
    pub const fn number(self) -> u8 {
        match self {
            Self::SelectPool => 1,
            Self::SelectDate => 2,
            Self::SelectTime => 3,
            Self::ReviewNotes => 4,
            Self::Confirmed => 5,
        }
    }

    /// Heading shown above the step.
    pub const fn title(self) -> &'static str {
        match self {
            Self::SelectPool => "Select Your Pool",
            Self::SelectDate => "Choose Date",
            Self::SelectTime => "Pick Time",
            Self::ReviewNotes => "Review & Notes",
            Self::Confirmed => "Booking Confirmed!",
        }
    }

    /// The following step; `None` once confirmed.
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::SelectPool => Some(Self::SelectDate),
            Self::SelectDate => Some(Self::SelectTime),
            Self::SelectTime => Some(Self::ReviewNotes),
            Self::ReviewNotes => Some(Self::Confirmed),
            Self::Confirmed => None,
        }
    }

    /// The step `back` returns to; `None` on the first step.
    pub const fn previous(self) -> Option<Self> {
        match self {
            Self::SelectPool => None,
            Self::SelectDate => Some(Self::SelectPool),
            Self::SelectTime => Some(Self::SelectDate),
            Self::ReviewNotes => Some(Self::SelectTime),
            Self::Confirmed => Some(Self::ReviewNotes),
        }
    }

    /// Whether this is the confirmation step, which only resets.
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Confirmed)
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "step {} ({})", self.number(), self.title())
    }
}
