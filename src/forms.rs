//! Declared schema for the booking form.
//!
//! Every submitted field is checked against `BOOKING_FIELDS`; validation either
//! yields a typed [`NewBooking`] or a field-to-messages map, with the submitted
//! values kept around so the form can be re-rendered as the user left it.

use std::collections::BTreeMap;

use crate::dto::{BookingFormData, NewBooking};

pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub required: bool,
    pub check: fn(&str) -> Result<(), String>,
}

pub const BOOKING_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "event_id",
        label: "Event",
        required: true,
        check: check_event_id,
    },
    FieldSpec {
        name: "name",
        label: "Name",
        required: true,
        check: check_name,
    },
    FieldSpec {
        name: "email",
        label: "Email",
        required: true,
        check: check_email,
    },
    FieldSpec {
        name: "phone",
        label: "Phone",
        required: false,
        check: check_phone,
    },
    FieldSpec {
        name: "guests",
        label: "Guests",
        required: true,
        check: check_guests,
    },
    FieldSpec {
        name: "message",
        label: "Message",
        required: false,
        check: check_free_text,
    },
];

pub const REQUIRED_MESSAGE: &str = "This field is required.";

#[derive(Debug, Default, Clone, serde::Serialize)]
pub struct ValidationErrors(BTreeMap<&'static str, Vec<String>>);

impl ValidationErrors {
    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.entry(field).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn field(&self, name: &str) -> &[String] {
        self.0.get(name).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Walks the declared schema over a raw submission.
pub fn validate(raw: &BookingFormData) -> Result<NewBooking, ValidationErrors> {
    let mut errors = ValidationErrors::default();
    for spec in BOOKING_FIELDS {
        let value = raw.value(spec.name).trim();
        if value.is_empty() {
            if spec.required {
                errors.add(spec.name, REQUIRED_MESSAGE);
            }
            continue;
        }
        if let Err(message) = (spec.check)(value) {
            errors.add(spec.name, message);
        }
    }
    if !errors.is_empty() {
        return Err(errors);
    }

    // Both parses were vetted by the field checks above.
    let event_id = raw.value("event_id").trim().parse::<i64>();
    let guests = raw.value("guests").trim().parse::<i32>();
    match (event_id, guests) {
        (Ok(event_id), Ok(guests)) => Ok(NewBooking {
            event_id,
            name: raw.value("name").trim().to_string(),
            email: raw.value("email").trim().to_string(),
            phone: optional(raw.value("phone")),
            guests,
            message: optional(raw.value("message")),
        }),
        _ => {
            errors.add("event_id", "Enter a valid event reference.");
            Err(errors)
        }
    }
}

fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn check_event_id(value: &str) -> Result<(), String> {
    match value.parse::<i64>() {
        Ok(id) if id > 0 => Ok(()),
        _ => Err("Enter a valid event reference.".to_string()),
    }
}

fn check_name(value: &str) -> Result<(), String> {
    if value.chars().count() > 100 {
        Err("Keep the name under 100 characters.".to_string())
    } else {
        Ok(())
    }
}

fn check_email(value: &str) -> Result<(), String> {
    let invalid = || "Enter a valid email address.".to_string();
    let (local, domain) = value.split_once('@').ok_or_else(invalid)?;
    if local.is_empty() || domain.is_empty() || !domain.contains('.') || domain.ends_with('.') {
        return Err(invalid());
    }
    Ok(())
}

fn check_phone(value: &str) -> Result<(), String> {
    let digits = value.chars().filter(char::is_ascii_digit).count();
    let allowed = value
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | ' ' | '(' | ')'));
    if allowed && digits >= 7 {
        Ok(())
    } else {
        Err("Enter a valid phone number.".to_string())
    }
}

fn check_guests(value: &str) -> Result<(), String> {
    match value.parse::<i32>() {
        Ok(n) if (1..=20).contains(&n) => Ok(()),
        _ => Err("Enter a number of guests between 1 and 20.".to_string()),
    }
}

fn check_free_text(_value: &str) -> Result<(), String> {
    Ok(())
}
