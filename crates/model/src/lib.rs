pub mod amount;
pub mod contract;
pub mod errors;
pub mod ids;
pub mod range;
pub mod session;
pub mod slot;
