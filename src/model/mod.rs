pub mod analysis;
pub mod games;
pub mod ids;
pub mod mastery;
pub mod ranked;
pub mod region;
pub mod summoner;
