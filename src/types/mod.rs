pub mod plan;
pub mod request;
pub mod trip;

pub use plan::PlanResult;
pub use request::{PassengerCount, TripRequest};
pub use trip::{BudgetTier, TripSpec};
