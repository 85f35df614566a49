use super::card::Card;

/// Outcome for a field scored by its position in a reference list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryOutcome {
    Exact,
    Distance(u32),
    /// One of the labels is missing from the reference list.
    Unknown,
}

impl CategoryOutcome {
    pub fn is_exact(&self) -> bool {
        matches!(self, CategoryOutcome::Exact)
    }

    pub fn distance(&self) -> Option<u32> {
        match self {
            CategoryOutcome::Distance(n) => Some(*n),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericOutcome {
    Exact,
    Distance(u32),
}

impl NumericOutcome {
    pub fn is_exact(&self) -> bool {
        matches!(self, NumericOutcome::Exact)
    }

    pub fn distance(&self) -> Option<u32> {
        match self {
            NumericOutcome::Exact => None,
            NumericOutcome::Distance(n) => Some(*n),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonResult {
    pub guess: Card,
    pub name: bool,
    pub attribute: CategoryOutcome,
    pub race: CategoryOutcome,
    pub level: NumericOutcome,
    pub atk: NumericOutcome,
    pub def: NumericOutcome,
}

impl ComparisonResult {
    pub fn is_exact(&self) -> bool {
        self.name
            && self.attribute.is_exact()
            && self.race.is_exact()
            && self.level.is_exact()
            && self.atk.is_exact()
            && self.def.is_exact()
    }
}
