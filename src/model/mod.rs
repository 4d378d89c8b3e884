pub mod course;
pub mod matches;
pub mod player;
pub mod team;

pub use course::*;
pub use matches::*;
pub use player::*;
pub use team::*;
