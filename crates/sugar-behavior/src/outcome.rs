use sugar_core::Coord;

/// Result of one agent's foraging turn.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Forage {
    /// Cell the agent started on.
    pub from: Coord,

    /// Cell moved to, or `None` if the agent stayed.
    pub moved_to: Option<Coord>,

    /// Resource taken from the cell the agent ended on.
    pub harvested: u32,
}

impl Forage {
    /// Cell the agent ended the turn on.
    pub fn position(&self) -> Coord {
        self.moved_to.unwrap_or(self.from)
    }
}
