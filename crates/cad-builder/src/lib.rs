pub mod errors;
pub mod mock;
pub mod step;
pub mod traits;

pub use errors::BuildError;
pub use mock::MockBuilder;
pub use step::StepBuilder;
pub use traits::PartBuilder;
