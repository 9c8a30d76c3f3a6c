pub mod agenda;
pub mod counts;
pub mod day;
pub mod month;
