pub mod customer;
pub mod seat;
pub mod showtime;
pub mod ticket;

pub use customer::{Customer, NewCustomer};
pub use seat::Seat;
pub use showtime::{FilmShowing, Showtime, ShowtimeOption, ShowtimeRow, ShowtimeSchedule};
pub use ticket::{NewTicket, Ticket, TicketPrice, TicketRow};
