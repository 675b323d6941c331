pub mod narrative;
pub mod places;
pub mod search;

pub use narrative::{NarrativeClient, MODEL_ID};
pub use places::PlacesClient;
pub use search::SearchClient;
