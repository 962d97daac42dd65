use maud::{html, Markup};

use super::layout;
use crate::models::{ShowtimeRow, ShowtimeSchedule, TicketPrice, TicketRow};

pub fn showtimes(rows: &[ShowtimeRow]) -> Markup {
    layout(
        "Showtimes",
        html! {
            table {
                thead {
                    tr { th { "ID" } th { "Date" } th { "Time" } th { "Film" } th { "Hall" } th {} }
                }
                tbody {
                    @for row in rows {
                        tr {
                            td { (row.showtime_id) }
                            td { (row.show_date.format("%Y-%m-%d")) }
                            td { (row.start_time) }
                            td { (row.film_name) }
                            td { (row.hall_name) }
                            td { a href={ "/admin/edit_showtime/" (row.showtime_id) } { "Edit" } }
                        }
                    }
                }
            }
        },
    )
}

pub fn edit_showtime(row: &ShowtimeSchedule) -> Markup {
    layout(
        "Edit showtime",
        html! {
            form method="post" action={ "/admin/edit_showtime/" (row.showtime_id) } {
                p { "Showtime #" (row.showtime_id) }
                label {
                    "Date (YYYY-MM-DD) "
                    input name="showdate" type="text" value=(row.show_date.format("%Y-%m-%d"));
                }
                label {
                    "Start time (HH:MM) "
                    input name="starttime" type="text" value=(row.start_time);
                }
                button type="submit" { "Save" }
            }
            a href="/admin/showtimes" { "Back" }
        },
    )
}

pub fn tickets(rows: &[TicketRow]) -> Markup {
    layout(
        "Tickets",
        html! {
            @if rows.is_empty() {
                p { "No tickets sold yet." }
            } @else {
                table {
                    thead {
                        tr {
                            th { "Ticket" } th { "Film" } th { "Date" } th { "Time" }
                            th { "Hall" } th { "Seat" } th { "Price" } th {}
                        }
                    }
                    tbody {
                        @for row in rows {
                            tr {
                                td { (row.ticket_id) }
                                td { (row.film_name) }
                                td { (row.show_date.format("%Y-%m-%d")) }
                                td { (row.start_time) }
                                td { (row.hall_name) }
                                td { (row.seat_no) }
                                td { (row.price) }
                                td {
                                    a href={ "/admin/edit_ticket/" (row.ticket_id) } { "Edit price" }
                                    form method="post" action={ "/admin/delete_ticket/" (row.ticket_id) } {
                                        button type="submit" { "Delete" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}

pub fn edit_ticket(row: &TicketPrice) -> Markup {
    layout(
        "Edit ticket",
        html! {
            form method="post" action={ "/admin/edit_ticket/" (row.ticket_id) } {
                p { "Ticket #" (row.ticket_id) }
                label {
                    "Price "
                    input name="price" type="text" value=(row.price);
                }
                button type="submit" { "Save" }
            }
            a href="/admin/tickets" { "Back" }
        },
    )
}
