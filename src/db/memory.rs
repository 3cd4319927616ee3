//! In-memory store used by the handler and service tests.

use std::sync::Mutex;

use chrono::Utc;

use crate::dto::{NewBooking, NewUser};
use crate::errors::AppError;
use crate::models::{Booking, Event, User};

use super::Store;

#[derive(Default)]
pub struct MemStore {
    events: Mutex<Vec<Event>>,
    bookings: Mutex<Vec<Booking>>,
    users: Mutex<Vec<User>>,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_events(events: Vec<Event>) -> Self {
        Self {
            events: Mutex::new(events),
            ..Self::default()
        }
    }

    pub fn seed_user(&self, user: User) {
        self.users.lock().unwrap().push(user);
    }

    pub fn bookings(&self) -> Vec<Booking> {
        self.bookings.lock().unwrap().clone()
    }

    pub fn users(&self) -> Vec<User> {
        self.users.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl Store for MemStore {
    async fn all_events(&self) -> Result<Vec<Event>, AppError> {
        Ok(self.events.lock().unwrap().clone())
    }

    async fn event_by_id(&self, id: i64) -> Result<Option<Event>, AppError> {
        Ok(self
            .events
            .lock()
            .unwrap()
            .iter()
            .find(|e| e.id == id)
            .cloned())
    }

    async fn create_booking(&self, booking: NewBooking) -> Result<i64, AppError> {
        let mut bookings = self.bookings.lock().unwrap();
        let id = bookings.len() as i64 + 1;
        bookings.push(Booking {
            id,
            event_id: booking.event_id,
            name: booking.name,
            email: booking.email,
            phone: booking.phone,
            guests: booking.guests,
            message: booking.message,
            created_at: Utc::now(),
        });
        Ok(id)
    }

    async fn create_user(&self, user: NewUser) -> Result<i64, AppError> {
        let mut users = self.users.lock().unwrap();
        let id = users.len() as i64 + 1;
        users.push(User {
            id,
            username: user.username,
            email: user.email,
            pwd_hash: user.pwd_hash,
        });
        Ok(id)
    }

    async fn user_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.username == username)
            .cloned())
    }
}
