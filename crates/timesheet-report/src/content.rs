//! Placeholder work content used to fill unsent past weeks.

pub const BEGIN_AT: &str = "18:00";
pub const END_AT: &str = "23:00";
pub const TOTAL_TIME: &str = "5h/day = 25h/week";
pub const TOTAL_TIME_CALCULATED: &str = "25h";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placeholder {
    pub task_description: &'static str,
    pub note: &'static str,
}

pub const PLACEHOLDERS: [Placeholder; 4] = [
    Placeholder {
        task_description: "Framework/Tool development, building first URI/API mapping feature, Reverse Proxy Interfaces and implementations.",
        note: "Core technology for all upcoming applications",
    },
    Placeholder {
        task_description: "More core features development for incoming framework/tool. Designing, implementing and deploying initial landing page and other sections.",
        note: "User interfaces",
    },
    Placeholder {
        task_description: "Tech stacks researching for feature developments and implementations.",
        note: "Research & ad hoc",
    },
    Placeholder {
        task_description: "Designing and setting up infrastructure. Considering minimal amount of budget spent on resources",
        note: "Research & ad hoc",
    },
];

/// Chooses which placeholder a week receives.
pub trait ContentPicker {
    /// Return an index below `choices` (`choices` is never zero).
    fn pick(&mut self, choices: usize) -> usize;
}

/// Picks from OS randomness.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomPicker;

impl ContentPicker for RandomPicker {
    fn pick(&mut self, choices: usize) -> usize {
        match getrandom::u32() {
            Ok(value) => usize::try_from(value).unwrap_or(0) % choices.max(1),
            Err(error) => {
                tracing::warn!(%error, "random source unavailable; using first placeholder");
                0
            }
        }
    }
}

/// Always picks the same placeholder.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedPicker(pub usize);

impl ContentPicker for FixedPicker {
    fn pick(&mut self, choices: usize) -> usize {
        self.0 % choices.max(1)
    }
}

/// Look up the placeholder at a picker's choice.
pub fn choose(picker: &mut impl ContentPicker) -> Placeholder {
    PLACEHOLDERS[picker.pick(PLACEHOLDERS.len()) % PLACEHOLDERS.len()]
}
