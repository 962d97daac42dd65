//! HTML pages rendered with `maud`.

mod admin;
mod customers;
mod purchase;

pub use admin::{edit_showtime, edit_ticket, showtimes, tickets};
pub use customers::{add_customer, remove_customer};
pub use purchase::{buy_ticket, BuyTicketPage};

use maud::{html, Markup, DOCTYPE};

use crate::models::FilmShowing;

pub fn layout(title: &str, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { (title) " - Cinema" }
            }
            body {
                nav {
                    a href="/" { "Home" } " | "
                    a href="/films" { "Films" } " | "
                    a href="/buy_ticket" { "Buy ticket" } " | "
                    a href="/admin" { "Admin" }
                }
                h1 { (title) }
                main { (body) }
            }
        }
    }
}

pub fn index() -> Markup {
    layout(
        "Film-Ticket Reservation System",
        html! {
            ul {
                li { a href="/films" { "Films & showtimes" } }
                li { a href="/buy_ticket" { "Buy a ticket" } }
                li { a href="/add_customer" { "Add customer" } }
                li { a href="/remove_customer" { "Remove customer" } }
                li { a href="/admin" { "Admin panel" } }
            }
        },
    )
}

pub fn admin() -> Markup {
    layout(
        "Admin panel",
        html! {
            ul {
                li { a href="/admin/showtimes" { "Manage showtimes" } }
                li { a href="/admin/tickets" { "Manage tickets" } }
                li { a href="/add_customer" { "Add customer" } }
                li { a href="/remove_customer" { "Remove customer" } }
            }
        },
    )
}

pub fn films(rows: &[FilmShowing]) -> Markup {
    layout(
        "Films & showtimes",
        html! {
            @if rows.is_empty() {
                p { "No showtimes scheduled." }
            } @else {
                table {
                    thead {
                        tr {
                            th { "Date" } th { "Time" } th { "Hall" } th { "Film" }
                            th { "Type" } th { "Duration" } th { "About" } th {}
                        }
                    }
                    tbody {
                        @for row in rows {
                            tr {
                                td { (row.show_date.format("%Y-%m-%d")) }
                                td { (row.start_time) }
                                td { (row.hall_name) }
                                td { (row.film_name) }
                                td { (row.film_type.as_deref().unwrap_or("")) }
                                td {
                                    @if let Some(minutes) = row.duration { (minutes) " min" }
                                }
                                td { (row.explanation.as_deref().unwrap_or("")) }
                                td {
                                    a href={ "/buy_ticket?showtime_id=" (row.showtime_id) } { "Buy" }
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}

/// Outcome page for errors: title, message and a link back.
pub fn message(title: &str, message: &str, back_url: &str) -> Markup {
    layout(
        title,
        html! {
            p.message { (message) }
            a href=(back_url) { "Back" }
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn message_page_escapes_text() {
        let page = message("Database Error", "value <script> too long", "/add_customer").into_string();
        assert!(page.contains("Database Error"));
        assert!(page.contains("value &lt;script&gt; too long"));
        assert!(page.contains(r#"href="/add_customer""#));
    }

    #[test]
    fn films_list_links_to_purchase() {
        let rows = vec![FilmShowing {
            showtime_id: 10,
            show_date: NaiveDate::from_ymd_opt(2025, 12, 1).unwrap(),
            start_time: "20:30".into(),
            hall_name: "Hall A".into(),
            film_name: "Metropolis".into(),
            film_type: Some("Drama".into()),
            duration: Some(153),
            explanation: None,
        }];
        let page = films(&rows).into_string();
        assert!(page.contains("2025-12-01"));
        assert!(page.contains("153 min"));
        assert!(page.contains("/buy_ticket?showtime_id=10"));
    }

    #[test]
    fn empty_film_list() {
        assert!(films(&[]).into_string().contains("No showtimes scheduled."));
    }
}
