use chrono::Utc;

use crate::dto::{NewBooking, NewUser};
use crate::errors::AppError;
use crate::models::{Event, User};
use crate::PGPool;

use super::Store;

/// PostgreSQL-backed store. Queries are built at runtime so the crate compiles
/// without a reachable database.
pub struct PgStore {
    pool: PGPool,
}

impl PgStore {
    pub fn new(pool: PGPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl Store for PgStore {
    async fn all_events(&self) -> Result<Vec<Event>, AppError> {
        let events = sqlx::query_as::<_, Event>(
            "SELECT id, title, description, location, date, time FROM events ORDER BY date, time",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(events)
    }

    async fn event_by_id(&self, id: i64) -> Result<Option<Event>, AppError> {
        let event = sqlx::query_as::<_, Event>(
            "SELECT id, title, description, location, date, time FROM events WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(event)
    }

    async fn create_booking(&self, booking: NewBooking) -> Result<i64, AppError> {
        let id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO bookings (event_id, name, email, phone, guests, message, created_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING id",
        )
        .bind(booking.event_id)
        .bind(booking.name.as_str())
        .bind(booking.email.as_str())
        .bind(booking.phone.as_deref())
        .bind(booking.guests)
        .bind(booking.message.as_deref())
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;
        Ok(id)
    }

    async fn create_user(&self, user: NewUser) -> Result<i64, AppError> {
        let id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO users (username, email, pwd_hash) VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(user.username.as_str())
        .bind(user.email.as_deref())
        .bind(user.pwd_hash.as_str())
        .fetch_one(&self.pool)
        .await?;
        Ok(id)
    }

    async fn user_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, username, email, pwd_hash FROM users WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }
}
