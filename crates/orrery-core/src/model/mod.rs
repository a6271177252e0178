pub mod mission;
pub mod planet;
pub mod scientist;

pub use mission::{Mission, NewMission};
pub use planet::{NewPlanet, Planet};
pub use scientist::{NewScientist, Scientist, ScientistDetail, ScientistPatch};
