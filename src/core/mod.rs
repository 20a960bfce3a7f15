pub mod backup;
pub mod points;
pub mod rotation;
pub mod seed;
