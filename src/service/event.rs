use crate::db::Store;
use crate::errors::AppError;
use crate::models::Event;

pub async fn get_all(store: &dyn Store) -> Result<Vec<Event>, AppError> {
    store.all_events().await
}

/// An unknown id fails closed with `NotFound`, never partial data.
pub async fn get_by_id(store: &dyn Store, id: i64) -> Result<Event, AppError> {
    store.event_by_id(id).await?.ok_or(AppError::NotFound)
}
