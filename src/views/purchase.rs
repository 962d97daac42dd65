use maud::{html, Markup};

use super::layout;
use crate::models::{Customer, Seat, ShowtimeOption};

pub struct BuyTicketPage<'a> {
    pub customers: &'a [Customer],
    pub showtimes: &'a [ShowtimeOption],
    pub selected_showtime: Option<i64>,
    pub available_seats: &'a [Seat],
}

pub fn buy_ticket(page: &BuyTicketPage<'_>) -> Markup {
    layout(
        "Buy ticket",
        html! {
            // Picking a showtime reloads the page with its free seats.
            form method="get" action="/buy_ticket" {
                label {
                    "Showtime "
                    select name="showtime_id" onchange="this.form.submit()" {
                        option value="" { "-- choose --" }
                        @for s in page.showtimes {
                            option value=(s.showtime_id) selected[page.selected_showtime == Some(s.showtime_id)] {
                                (s.show_date.format("%Y-%m-%d")) " " (s.start_time)
                                " - " (s.film_name) " (" (s.hall_name) ")"
                            }
                        }
                    }
                }
                noscript { button type="submit" { "Show seats" } }
            }

            @if let Some(showtime_id) = page.selected_showtime {
                form method="post" action="/buy_ticket" {
                    input type="hidden" name="showtime_id" value=(showtime_id);
                    label {
                        "Customer "
                        select name="customer_id" {
                            option value="" { "-- choose --" }
                            @for c in page.customers {
                                option value=(c.customer_id) { (c.customer_id) " - " (c.name) " " (c.surname) }
                            }
                        }
                    }
                    @if page.available_seats.is_empty() {
                        p.sold-out { "No seats available for this showtime." }
                    } @else {
                        label {
                            "Seat "
                            select name="seat_id" {
                                @for seat in page.available_seats {
                                    option value=(seat.seat_id) { (seat.seat_no) }
                                }
                            }
                        }
                    }
                    label {
                        "Price "
                        input name="price" type="text" placeholder="120.00";
                    }
                    button type="submit" disabled[page.available_seats.is_empty()] { "Buy" }
                }
            }
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn showtime(id: i64) -> ShowtimeOption {
        ShowtimeOption {
            showtime_id: id,
            show_date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
            start_time: "19:00".into(),
            film_name: "Solaris".into(),
            hall_name: "Hall B".into(),
        }
    }

    #[test]
    fn seat_form_only_after_selecting_a_showtime() {
        let showtimes = [showtime(10)];
        let page = buy_ticket(&BuyTicketPage {
            customers: &[],
            showtimes: &showtimes,
            selected_showtime: None,
            available_seats: &[],
        })
        .into_string();
        assert!(page.contains("Solaris"));
        assert!(!page.contains(r#"name="seat_id""#));
    }

    #[test]
    fn lists_free_seats_for_selected_showtime() {
        let showtimes = [showtime(10), showtime(11)];
        let seats = [
            Seat { seat_id: 1, seat_no: "A1".into() },
            Seat { seat_id: 2, seat_no: "A2".into() },
        ];
        let page = buy_ticket(&BuyTicketPage {
            customers: &[],
            showtimes: &showtimes,
            selected_showtime: Some(10),
            available_seats: &seats,
        })
        .into_string();
        assert!(page.contains(r#"<option value="10" selected>"#));
        assert!(page.contains(">A1<"));
        assert!(page.contains(">A2<"));
    }

    #[test]
    fn sold_out_showtime_disables_purchase() {
        let showtimes = [showtime(10)];
        let page = buy_ticket(&BuyTicketPage {
            customers: &[],
            showtimes: &showtimes,
            selected_showtime: Some(10),
            available_seats: &[],
        })
        .into_string();
        assert!(page.contains("No seats available for this showtime."));
        assert!(page.contains("disabled"));
    }
}
