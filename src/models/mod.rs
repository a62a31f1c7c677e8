pub mod category;
pub mod coerce;
pub mod inventory;
pub mod supplier;

pub use category::*;
pub use inventory::*;
pub use supplier::*;
