/// Easing curves for flower entrances.
pub mod ease;
