pub mod achievements;
pub mod pet;
pub mod progress;
pub mod track;
