pub mod gate;
pub mod media;
