pub mod board_display;
pub mod ticket_source;

pub use board_display::BoardDisplay;
pub use ticket_source::TicketSource;
