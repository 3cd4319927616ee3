#[cfg(test)]
pub mod memory;
pub mod postgres;

use log::info;
use sqlx::postgres::PgPoolOptions;

use crate::dto::{NewBooking, NewUser};
use crate::errors::AppError;
use crate::models::{Event, User};
use crate::PGPool;

/// Persistence seam for events, bookings and users. The application issues one
/// read or one write per request through this trait and relies on the store's
/// own transaction guarantees.
#[async_trait::async_trait]
pub trait Store: Send + Sync {
    async fn all_events(&self) -> Result<Vec<Event>, AppError>;
    async fn event_by_id(&self, id: i64) -> Result<Option<Event>, AppError>;
    async fn create_booking(&self, booking: NewBooking) -> Result<i64, AppError>;
    async fn create_user(&self, user: NewUser) -> Result<i64, AppError>;
    async fn user_by_username(&self, username: &str) -> Result<Option<User>, AppError>;
}

pub async fn init_db_pool(db_url: &str) -> PGPool {
    let pool: PGPool = PgPoolOptions::new()
        .max_connections(5)
        .connect(db_url)
        .await
        .unwrap_or_else(|err| panic!("failed to connect to database: {err}"));
    info!("connected to postgresql");
    pool
}
