use maud::{html, Markup};

use super::layout;
use crate::models::Customer;

fn customer_table(customers: &[Customer]) -> Markup {
    html! {
        table {
            thead {
                tr { th { "ID" } th { "Name" } th { "Surname" } th { "Email" } th { "Phone" } }
            }
            tbody {
                @for c in customers {
                    tr {
                        td { (c.customer_id) }
                        td { (c.name) }
                        td { (c.surname) }
                        td { (c.email.as_deref().unwrap_or("")) }
                        td { @if let Some(phone) = c.phone_no { (phone) } }
                    }
                }
            }
        }
    }
}

pub fn add_customer(customers: &[Customer]) -> Markup {
    layout(
        "Add customer",
        html! {
            form method="post" action="/add_customer" {
                label { "Name " input name="name" type="text" required; }
                label { "Surname " input name="surname" type="text" required; }
                label { "Email " input name="email" type="email"; }
                label { "Phone " input name="phone" type="text" placeholder="5051234567"; }
                button type="submit" { "Add" }
            }
            (customer_table(customers))
        },
    )
}

pub fn remove_customer(customers: &[Customer]) -> Markup {
    layout(
        "Remove customer",
        html! {
            form method="post" action="/remove_customer" {
                label {
                    "Customer "
                    select name="customerid" {
                        @for c in customers {
                            option value=(c.customer_id) { (c.customer_id) " - " (c.name) " " (c.surname) }
                        }
                    }
                }
                button type="submit" { "Remove" }
            }
            (customer_table(customers))
        },
    )
}
