#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub struct Scoreboard {
    pub mine: i32,
    pub foe: i32,
}

impl Scoreboard {
    pub fn lead(&self) -> i32 {
        self.mine.saturating_sub(self.foe)
    }
}
