pub mod errors;
pub mod features;
pub mod part;

pub use errors::*;
pub use features::*;
pub use part::*;
