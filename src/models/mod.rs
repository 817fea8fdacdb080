pub mod bug;
pub mod employee;
pub mod planning;
pub mod report;
pub mod ticket;
