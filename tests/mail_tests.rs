//! Mail draft tests
//!
//! Tests for building the draft from a session and the Gmail compose link.

use chrono::NaiveDate;
use standup::mail::{MailDraft, MailSettings, COMPOSE_BASE_URL};
use standup::session::{EntryField, FormError, Session};

fn saved_session() -> Session {
    let date = NaiveDate::from_ymd_opt(2024, 1, 15).expect("valid date");
    let mut session = Session::new(date, vec!["Kiran".to_string(), "Gokul".to_string()]);
    let id = session.entries()[0].id;
    session
        .update_entry_field(id, EntryField::Name, "Kiran")
        .expect("set name");
    session
        .update_entry_field(id, EntryField::Task, "Fixed bug X & shipped")
        .expect("set task");
    session.save_entry(id).expect("save");
    session
}

fn settings() -> MailSettings {
    MailSettings {
        recipients: vec!["a@example.com".to_string(), "b@example.com".to_string()],
        cc: None,
        signature: "MoM Team".to_string(),
    }
}

#[test]
fn test_draft_requires_saved_entry() {
    let date = NaiveDate::from_ymd_opt(2024, 1, 15).expect("valid date");
    let session = Session::new(date, vec!["Kiran".to_string()]);
    assert_eq!(
        MailDraft::from_session(&session, &settings()),
        Err(FormError::NothingToSend)
    );
}

#[test]
fn test_cc_defaults_to_recipients() {
    let draft = MailDraft::from_session(&saved_session(), &settings()).expect("draft");
    assert_eq!(draft.to, draft.cc);
    assert_eq!(draft.subject, "Daily Tasks Assignment - January 15, 2024");
}

#[test]
fn test_explicit_cc_is_used() {
    let settings = MailSettings {
        cc: Some(vec!["lead@example.com".to_string()]),
        ..settings()
    };
    let draft = MailDraft::from_session(&saved_session(), &settings).expect("draft");
    assert_eq!(draft.cc, vec!["lead@example.com".to_string()]);
}

#[test]
fn test_compose_url_is_fully_encoded() {
    let draft = MailDraft::from_session(&saved_session(), &settings()).expect("draft");
    let url = draft.compose_url();

    assert!(url.starts_with(COMPOSE_BASE_URL));
    assert!(url.contains("&to=a@example.com,b@example.com&cc=a@example.com,b@example.com&"));
    assert!(url.contains("&su=Daily%20Tasks%20Assignment%20-%20January%2015%2C%202024&"));
    assert!(url.contains("Fixed%20bug%20X%20%26%20shipped"));

    let body = url.split("&body=").nth(1).expect("body param");
    assert!(!body.contains(' '));
    assert!(!body.contains('\n'));
    assert!(!body.contains('&'));
}
