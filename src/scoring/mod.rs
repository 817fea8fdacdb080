pub mod buckets;
pub mod rag;
pub mod team;
pub mod ticket_health;
pub mod variance;
