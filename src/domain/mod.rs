pub mod board;
pub mod options;
pub mod ticket;
