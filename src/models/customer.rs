use serde::Serialize;
use sqlx::{FromRow, PgConnection, PgPool};

use crate::error::AppError;

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Customer {
    pub customer_id: i64,
    pub name: String,
    pub surname: String,
    pub email: Option<String>,
    pub phone_no: Option<i64>,
}

#[derive(Debug, Clone)]
pub struct NewCustomer {
    pub name: String,
    pub surname: String,
    pub email: Option<String>,
    pub phone_no: i64,
}

impl Customer {
    pub async fn list(pool: &PgPool) -> Result<Vec<Customer>, sqlx::Error> {
        sqlx::query_as::<_, Customer>(
            "SELECT CustomerID AS customer_id, Name AS name, Surname AS surname,
                    Email AS email, PhoneNo AS phone_no
             FROM Customer
             ORDER BY CustomerID",
        )
        .fetch_all(pool)
        .await
    }

    /// Inserts with the next free identifier and returns it.
    pub async fn create(pool: &PgPool, customer: &NewCustomer) -> Result<i64, AppError> {
        let mut tx = pool.begin().await?;

        match Self::insert_next(&mut *tx, customer).await {
            Ok(customer_id) => {
                tx.commit().await?;
                tracing::info!(customer_id, "customer created");
                Ok(customer_id)
            }
            Err(e) => {
                tracing::error!("failed to create customer: {:?}", e);
                let _ = tx.rollback().await;
                Err(e.into())
            }
        }
    }

    async fn insert_next(conn: &mut PgConnection, customer: &NewCustomer) -> Result<i64, sqlx::Error> {
        let customer_id =
            sqlx::query_scalar::<_, i64>("SELECT COALESCE(MAX(CustomerID), 0) + 1 FROM Customer")
                .fetch_one(&mut *conn)
                .await?;

        sqlx::query(
            "INSERT INTO Customer (CustomerID, Name, Surname, Email, PhoneNo)
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(customer_id)
        .bind(&customer.name)
        .bind(&customer.surname)
        .bind(&customer.email)
        .bind(customer.phone_no)
        .execute(&mut *conn)
        .await?;

        Ok(customer_id)
    }

    /// Fails with [`AppError::DeletionBlocked`] while purchases still reference the customer.
    pub async fn delete(pool: &PgPool, customer_id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM Customer WHERE CustomerID = $1")
            .bind(customer_id)
            .execute(pool)
            .await;

        match result {
            Ok(done) if done.rows_affected() > 0 => {
                tracing::info!(customer_id, "customer deleted");
                Ok(())
            }
            Ok(_) => Err(AppError::NotFound("Customer")),
            Err(sqlx::Error::Database(db_err)) if db_err.is_foreign_key_violation() => {
                tracing::warn!(customer_id, "customer deletion blocked by dependent purchases");
                Err(AppError::DeletionBlocked)
            }
            Err(e) => {
                tracing::error!("failed to delete customer {}: {:?}", customer_id, e);
                Err(e.into())
            }
        }
    }
}
