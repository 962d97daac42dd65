use axum::{
    extract::State,
    response::{IntoResponse, Redirect, Response},
    routing::get,
    Form, Router,
};
use serde::Deserialize;
use std::sync::Arc;

use super::render;
use crate::error::{BackTo, PageError};
use crate::models::{Customer, NewCustomer};
use crate::{validation, views, AppState};

const ADD_PAGE: &str = "/add_customer";
const REMOVE_PAGE: &str = "/remove_customer";

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/add_customer", get(add_customer_page).post(add_customer))
        .route("/remove_customer", get(remove_customer_page).post(remove_customer))
}

// GET /add_customer
async fn add_customer_page(State(state): State<Arc<AppState>>) -> Result<Response, PageError> {
    let customers = Customer::list(&state.db.pool).await.back_to("/")?;
    Ok(render(views::add_customer(&customers)))
}

#[derive(Debug, Deserialize)]
struct AddCustomerForm {
    #[serde(default)]
    name: String,
    #[serde(default)]
    surname: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    phone: String,
}

// POST /add_customer
async fn add_customer(
    State(state): State<Arc<AppState>>,
    Form(form): Form<AddCustomerForm>,
) -> Result<Response, PageError> {
    let phone_no = validation::parse_phone(&form.phone).back_to(ADD_PAGE)?;

    let customer = NewCustomer {
        name: form.name.trim().to_string(),
        surname: form.surname.trim().to_string(),
        email: Some(form.email.trim().to_string()).filter(|e| !e.is_empty()),
        phone_no,
    };
    Customer::create(&state.db.pool, &customer)
        .await
        .back_to(ADD_PAGE)?;

    Ok(Redirect::to(ADD_PAGE).into_response())
}

// GET /remove_customer
async fn remove_customer_page(State(state): State<Arc<AppState>>) -> Result<Response, PageError> {
    let customers = Customer::list(&state.db.pool).await.back_to("/")?;
    Ok(render(views::remove_customer(&customers)))
}

#[derive(Debug, Deserialize)]
struct RemoveCustomerForm {
    #[serde(default)]
    customerid: String,
}

// POST /remove_customer
async fn remove_customer(
    State(state): State<Arc<AppState>>,
    Form(form): Form<RemoveCustomerForm>,
) -> Result<Response, PageError> {
    let customer_id = validation::parse_id(&form.customerid, "Customer ID must be numeric.")
        .back_to(REMOVE_PAGE)?;

    Customer::delete(&state.db.pool, customer_id)
        .await
        .back_to(REMOVE_PAGE)?;

    Ok(Redirect::to(REMOVE_PAGE).into_response())
}
