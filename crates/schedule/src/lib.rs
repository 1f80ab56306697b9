pub mod grid;
pub mod plan;
pub mod week;
