use serde::{Deserialize, Serialize};

pub const HOLES_PER_NINE: usize = 9;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Hole {
    pub number: u8,
    pub par: u8,
    /// Difficulty rank, 1 = hardest. A permutation of 1..=18 within a course.
    #[serde(rename = "handicap")]
    pub handicap_rank: u8,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Course {
    pub id: String,
    pub name: String,
    pub holes: Vec<Hole>,
}

impl Course {
    #[must_use]
    pub fn front_nine(&self) -> &[Hole] {
        &self.holes[..self.holes.len().min(HOLES_PER_NINE)]
    }

    #[must_use]
    pub fn back_nine(&self) -> &[Hole] {
        if self.holes.len() > HOLES_PER_NINE {
            &self.holes[HOLES_PER_NINE..]
        } else {
            &[]
        }
    }

    #[must_use]
    pub fn total_par(&self) -> u32 {
        self.holes.iter().map(|h| u32::from(h.par)).sum()
    }
}
