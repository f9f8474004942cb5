// Aggregation: composite score, reframing, and report assembly.

pub mod clock;
pub mod composite;
pub mod reframing;
pub mod report;
