pub mod itinerary;
pub mod plan;
pub mod preference;
