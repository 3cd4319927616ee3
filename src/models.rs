use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use sqlx::prelude::FromRow;

#[derive(Debug, Clone, FromRow, serde::Serialize, serde::Deserialize)]
pub struct Event {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub location: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
}

#[derive(Debug, Clone, FromRow, serde::Serialize, serde::Deserialize)]
pub struct Booking {
    pub id: i64,
    pub event_id: i64,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub guests: i32,
    pub message: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow, serde::Serialize, serde::Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: Option<String>,
    pub pwd_hash: String,
}
