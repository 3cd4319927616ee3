use log::info;

use crate::db::Store;
use crate::dto::BookingFormData;
use crate::errors::AppError;
use crate::forms::{self, ValidationErrors};

pub enum Outcome {
    /// Exactly one booking row was written.
    Created(i64),
    /// Nothing was persisted; the map tells the form what to annotate.
    Invalid(ValidationErrors),
}

pub async fn submit(store: &dyn Store, raw: &BookingFormData) -> Result<Outcome, AppError> {
    let booking = match forms::validate(raw) {
        Ok(booking) => booking,
        Err(errors) => {
            log::debug!(
                "rejected booking submission: {}",
                serde_json::to_string(&errors).unwrap_or_default()
            );
            return Ok(Outcome::Invalid(errors));
        }
    };

    // The form's event reference must name a stored event.
    if store.event_by_id(booking.event_id).await?.is_none() {
        let mut errors = ValidationErrors::default();
        errors.add("event_id", "Unknown event.");
        return Ok(Outcome::Invalid(errors));
    }

    let id = store.create_booking(booking).await?;
    info!("booking {} created", id);
    Ok(Outcome::Created(id))
}
