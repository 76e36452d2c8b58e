use conference_ticket::controller::{FormController, Phase};
use conference_ticket::field::Field;
use conference_ticket::form_data::FormData;
use conference_ticket::storage::{FileStore, KeyValueStore, Persistence};
use conference_ticket::validation::AVATAR_URL_INVALID;
use std::path::Path;

fn open(path: &Path) -> FormController {
    let mut controller = FormController::new(Persistence::new(FileStore::new(path)));
    controller.load_initial();
    controller
}

#[test]
fn form_survives_reload_but_ticket_does_not() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("ticket-form.json");

    let mut first = open(&path);
    first.set_field(Field::FullName, "Ada Lovelace");
    first.set_field(Field::Email, "ada@example.com");
    first.set_field(Field::AvatarUrl, "https://x.com/ada.JPEG");
    first.submit().expect("valid form");
    assert_eq!(first.phase(), Phase::TicketDisplayed);
    drop(first);

    let second = open(&path);
    assert_eq!(
        second.form(),
        &FormData::new("Ada Lovelace", "ada@example.com", "https://x.com/ada.JPEG")
    );
    assert_eq!(second.phase(), Phase::Editing);
    assert!(second.ticket().is_none());
}

#[test]
fn rejected_submit_then_fix() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut controller = open(&dir.path().join("slots.json"));

    controller.set_field(Field::FullName, "Ada");
    controller.set_field(Field::Email, "ada@example.com");
    controller.set_field(Field::AvatarUrl, "https://x.com/a.pdf");

    let errors = controller.submit().expect_err("pdf is not an image").clone();
    assert_eq!(errors.get(Field::AvatarUrl), Some(AVATAR_URL_INVALID));
    assert_eq!(errors.len(), 1);

    controller.set_field(Field::AvatarUrl, "https://x.com/a.gif");
    let ticket = controller.submit().expect("fixed");
    assert_eq!(ticket.avatar_url(), "https://x.com/a.gif");
}

#[test]
fn corrupt_slot_starts_empty_and_is_overwritten() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("slots.json");
    let mut store = FileStore::new(&path);
    store.set("ticketFormData", "{\"fullName\":").expect("seed");

    let mut controller = open(&path);
    assert_eq!(controller.form(), &FormData::default());

    controller.set_field(Field::Email, "ada@example.com");
    let reopened = open(&path);
    assert_eq!(reopened.form().email, "ada@example.com");
}

#[test]
fn garbage_store_file_does_not_block_later_edits() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("slots.json");
    std::fs::write(&path, "garbage").expect("seed");

    let mut controller = open(&path);
    assert_eq!(controller.form(), &FormData::default());
    controller.set_field(Field::FullName, "Ada");

    let reopened = open(&path);
    assert_eq!(reopened.form(), &FormData::new("Ada", "", ""));
}
