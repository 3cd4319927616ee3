//! Server-built HTML pages.
//!
//! The pages are deliberately plain: a shared layout, escaped interpolation,
//! and form re-rendering with inline field errors. Templates stay out of the
//! dependency tree.

use actix_web::http::StatusCode;

use crate::dto::{BookingFormData, LoginFormData, SignupFormData};
use crate::forms::{self, ValidationErrors};
use crate::models::Event;
use crate::service::auth::UserAuthData;

pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            other => out.push(other),
        }
    }
    out
}

fn layout(title: &str, user: Option<&UserAuthData>, body: &str) -> String {
    let session = match user {
        Some(user) => format!(
            "<span>Signed in as {}</span>\
             <form method=\"post\" action=\"/accounts/logout/\"><button>Log out</button></form>",
            escape(&user.username)
        ),
        None => format!("<a href=\"{}\">Log in</a>", crate::LOGIN_PATH),
    };
    format!(
        "<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\"><title>{title}</title></head>\n\
         <body>\n<nav><a href=\"/\">Home</a> <a href=\"/events/\">Events</a> \
         <a href=\"/booking/\">Booking</a> <a href=\"/about/\">About</a> \
         <a href=\"/contact/\">Contact</a> {session}</nav>\n\
         <main>\n{body}\n</main>\n</body>\n</html>\n",
        title = escape(title),
        session = session,
        body = body,
    )
}

pub fn index_page() -> String {
    layout(
        "Welcome",
        None,
        "<h1>Event booking</h1>\
         <p>Browse upcoming events and book your place.</p>\
         <p><a href=\"/register/signup/\">Create an account</a></p>",
    )
}

pub fn about_page(user: &UserAuthData) -> String {
    layout(
        "About us",
        Some(user),
        "<h1>About us</h1>\
         <p>We organize and host events of every size, from readings to festivals.</p>",
    )
}

pub fn contact_page(user: &UserAuthData) -> String {
    layout(
        "Contact",
        Some(user),
        "<h1>Contact</h1>\
         <p>Write to <a href=\"mailto:office@example.com\">office@example.com</a> \
         or call us during office hours.</p>",
    )
}

pub fn events_page(user: &UserAuthData, events: &[Event]) -> String {
    let listing = if events.is_empty() {
        "<p>No events scheduled yet.</p>".to_string()
    } else {
        let items: String = events
            .iter()
            .map(|event| {
                format!(
                    "<li><a href=\"/events/{id}/\">{title}</a> \
                     &mdash; {date} {time}, {location}</li>",
                    id = event.id,
                    title = escape(&event.title),
                    date = event.date,
                    time = event.time,
                    location = escape(&event.location),
                )
            })
            .collect();
        format!("<ul>{items}</ul>")
    };
    layout("Events", Some(user), &format!("<h1>Events</h1>{listing}"))
}

pub fn event_detail_page(user: &UserAuthData, event: &Event) -> String {
    let body = format!(
        "<h1>{title}</h1>\
         <p>{description}</p>\
         <dl><dt>When</dt><dd>{date} {time}</dd>\
         <dt>Where</dt><dd>{location}</dd></dl>\
         <p><a href=\"/booking/\">Book a place</a></p>",
        title = escape(&event.title),
        description = escape(&event.description),
        date = event.date,
        time = event.time,
        location = escape(&event.location),
    );
    layout(&event.title, Some(user), &body)
}

pub fn booking_page(
    user: &UserAuthData,
    raw: &BookingFormData,
    errors: &ValidationErrors,
    notice: Option<&str>,
) -> String {
    let notice = match notice {
        Some(text) => format!("<p class=\"notice\">{}</p>", escape(text)),
        None => String::new(),
    };
    let fields: String = forms::BOOKING_FIELDS
        .iter()
        .map(|spec| {
            let messages: String = errors
                .field(spec.name)
                .iter()
                .map(|m| format!("<li class=\"error\">{}</li>", escape(m)))
                .collect();
            let errors = if messages.is_empty() {
                String::new()
            } else {
                format!("<ul>{messages}</ul>")
            };
            format!(
                "<p><label for=\"{name}\">{label}</label>\
                 <input id=\"{name}\" name=\"{name}\" value=\"{value}\">{errors}</p>",
                name = spec.name,
                label = escape(spec.label),
                value = escape(raw.value(spec.name)),
                errors = errors,
            )
        })
        .collect();
    let body = format!(
        "<h1>Booking</h1>{notice}\
         <form method=\"post\" action=\"/booking/\">{fields}\
         <button>Submit booking</button></form>",
    );
    layout("Booking", Some(user), &body)
}

pub fn login_page(form: &LoginFormData, error: Option<&str>) -> String {
    let error = match error {
        Some(text) => format!("<p class=\"error\">{}</p>", escape(text)),
        None => String::new(),
    };
    let next = match form.next.as_deref() {
        Some(next) => format!(
            "<input type=\"hidden\" name=\"next\" value=\"{}\">",
            escape(next)
        ),
        None => String::new(),
    };
    let body = format!(
        "<h1>Log in</h1>{error}\
         <form method=\"post\" action=\"{login}\">{next}\
         <p><label for=\"username\">Username</label>\
         <input id=\"username\" name=\"username\" value=\"{username}\"></p>\
         <p><label for=\"pwd\">Password</label>\
         <input id=\"pwd\" name=\"pwd\" type=\"password\"></p>\
         <button>Log in</button></form>\
         <p><a href=\"/register/signup/\">Create an account</a></p>",
        login = crate::LOGIN_PATH,
        username = escape(&form.username),
    );
    layout("Log in", None, &body)
}

pub fn signup_page(form: &SignupFormData, errors: &ValidationErrors) -> String {
    let list = |name: &str| -> String {
        let messages: String = errors
            .field(name)
            .iter()
            .map(|m| format!("<li class=\"error\">{}</li>", escape(m)))
            .collect();
        if messages.is_empty() {
            String::new()
        } else {
            format!("<ul>{messages}</ul>")
        }
    };
    let body = format!(
        "<h1>Sign up</h1>\
         <form method=\"post\" action=\"/register/signup/\">\
         <p><label for=\"username\">Username</label>\
         <input id=\"username\" name=\"username\" value=\"{username}\">{username_errors}</p>\
         <p><label for=\"email\">Email</label>\
         <input id=\"email\" name=\"email\" value=\"{email}\">{email_errors}</p>\
         <p><label for=\"pwd\">Password</label>\
         <input id=\"pwd\" name=\"pwd\" type=\"password\">{pwd_errors}</p>\
         <p><label for=\"pwd_confirm\">Confirm password</label>\
         <input id=\"pwd_confirm\" name=\"pwd_confirm\" type=\"password\">{pwd_confirm_errors}</p>\
         <button>Sign up</button></form>",
        username = escape(&form.username),
        email = escape(form.email.as_deref().unwrap_or("")),
        username_errors = list("username"),
        email_errors = list("email"),
        pwd_errors = list("pwd"),
        pwd_confirm_errors = list("pwd_confirm"),
    );
    layout("Sign up", None, &body)
}

pub fn error_page(status: StatusCode) -> String {
    let text = match status {
        StatusCode::NOT_FOUND => "The page you asked for does not exist.",
        _ => "Something went wrong on our side.",
    };
    layout(
        status.canonical_reason().unwrap_or("Error"),
        None,
        &format!("<h1>{}</h1><p>{}</p>", status.as_u16(), text),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};

    fn user() -> UserAuthData {
        UserAuthData {
            user_id: 1,
            username: "alice".to_string(),
        }
    }

    fn event(id: i64, title: &str) -> Event {
        Event {
            id,
            title: title.to_string(),
            description: "a very nice evening".to_string(),
            location: "Town Hall".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 9, 12).unwrap(),
            time: NaiveTime::from_hms_opt(19, 30, 0).unwrap(),
        }
    }

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(
            escape(r#"<b>"fish" & 'chips'</b>"#),
            "&lt;b&gt;&quot;fish&quot; &amp; &#x27;chips&#x27;&lt;/b&gt;"
        );
    }

    #[test]
    fn events_page_lists_every_event() {
        let events = vec![event(1, "Summer Gala"), event(2, "Book Fair")];
        let html = events_page(&user(), &events);
        assert!(html.contains("Summer Gala"));
        assert!(html.contains("Book Fair"));
        assert!(html.contains("/events/2/"));
    }

    #[test]
    fn empty_event_store_renders_empty_listing() {
        let html = events_page(&user(), &[]);
        assert!(html.contains("No events scheduled yet."));
    }

    #[test]
    fn event_titles_are_escaped() {
        let html = events_page(&user(), &[event(1, "<script>alert(1)</script>")]);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn booking_page_keeps_submitted_values_and_errors() {
        let raw = BookingFormData {
            name: Some("Bob".to_string()),
            ..Default::default()
        };
        let mut errors = ValidationErrors::default();
        errors.add("email", "Enter a valid email address.");
        let html = booking_page(&user(), &raw, &errors, None);
        assert!(html.contains("value=\"Bob\""));
        assert!(html.contains("Enter a valid email address."));
    }

    #[test]
    fn booking_page_shows_notice() {
        let html = booking_page(
            &user(),
            &BookingFormData::default(),
            &ValidationErrors::default(),
            Some("Your booking was successful!"),
        );
        assert!(html.contains("Your booking was successful!"));
    }
}
