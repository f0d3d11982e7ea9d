pub type BonusId = u8;

/// Bonus courses are numbered 1..=10; index 0 is reserved.
pub const MAX_BONUS_COURSES: usize = 10;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum CourseId {
    Main,
    Bonus(BonusId),
}

impl CourseId {
    /// The bonus number for a bonus course, None for the main course.
    pub fn bonus(self) -> Option<BonusId> {
        match self {
            CourseId::Main => None,
            CourseId::Bonus(bonus) => Some(bonus),
        }
    }
}
