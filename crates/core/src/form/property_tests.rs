use formdesk_types::{ContactMethod, NewCustomer};
use proptest::{prelude::*, test_runner::TestCaseError};

use crate::{
    db::RecordStore,
    form::{Field, FormController, RawCustomerForm, SubmitOutcome, ValidationError},
};

/// Trimmed, placeholder-free value the store is expected to hold for `raw`
fn expected_value(raw: Option<&str>, field: Field) -> String {
    match raw.map(str::trim) {
        Some(v) if v != field.placeholder() => v.to_string(),
        _ => String::new(),
    }
}

fn arb_padding() -> impl Strategy<Value = String> {
    "[ \t]{0,2}"
}

fn arb_name() -> impl Strategy<Value = String> {
    (arb_padding(), "[A-Za-z][A-Za-z0-9 .'-]{0,20}", arb_padding())
        .prop_map(|(lead, name, trail)| format!("{lead}{name}{trail}"))
}

fn arb_free_text(field: Field) -> impl Strategy<Value = Option<String>> {
    prop::option::of(prop_oneof![
        4 => "[ ]{0,2}[A-Za-z0-9 ,./#-]{0,24}",
        1 => Just(field.placeholder().to_string()),
    ])
}

fn arb_valid_email() -> impl Strategy<Value = Option<String>> {
    prop::option::of(prop_oneof![
        "[a-z0-9._%+-]{1,8}@[a-z0-9-]{1,8}\\.[a-z]{2,4}",
        "[A-Z][a-z]{0,6}\\.[a-z]{1,6}@[a-z]{1,6}\\.[a-z]{1,6}\\.[A-Za-z]{2,3}",
        Just(Field::Email.placeholder().to_string()),
        Just("   ".to_string()),
    ])
}

fn arb_invalid_email() -> impl Strategy<Value = String> {
    prop_oneof![
        // no @ at all
        "[a-z0-9._-]{1,12}",
        // single-letter top-level segment
        "[a-z]{1,6}@[a-z]{1,6}\\.[a-z]",
        // domain without a dot
        "[a-z]{1,6}@[a-z]{1,8}",
        // doubled @
        "[a-z]{1,6}@@[a-z]{1,6}\\.[a-z]{2,4}",
        // empty local part
        "@[a-z]{1,6}\\.[a-z]{2,4}",
        // whitespace inside the address
        "[a-z]{1,4} [a-z]{1,4}@[a-z]{1,6}\\.[a-z]{2,4}",
    ]
}

fn arb_contact_method() -> impl Strategy<Value = ContactMethod> {
    prop_oneof![
        Just(ContactMethod::Email),
        Just(ContactMethod::Phone),
        Just(ContactMethod::Mail),
    ]
}

fn arb_blank_name() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        "[ \t]{0,4}".prop_map(Some),
        (arb_padding(), arb_padding()).prop_map(|(lead, trail)| {
            Some(format!("{lead}{}{trail}", Field::Name.placeholder()))
        }),
    ]
}

/// A submittable form together with the customer it should produce
fn arb_valid_form() -> impl Strategy<Value = (RawCustomerForm, NewCustomer)> {
    (
        arb_name(),
        arb_free_text(Field::Birthday),
        arb_valid_email(),
        arb_free_text(Field::Phone),
        arb_free_text(Field::Address),
        arb_contact_method(),
    )
        .prop_map(|(name, birthday, email, phone, address, contact_method)| {
            let mut raw = RawCustomerForm::default().with_contact_method(contact_method.as_str());
            raw.set(Field::Name, Some(name));
            raw.set(Field::Birthday, birthday);
            raw.set(Field::Email, email);
            raw.set(Field::Phone, phone);
            raw.set(Field::Address, address);

            let expected = NewCustomer {
                name: expected_value(raw.get(Field::Name), Field::Name),
                birthday: expected_value(raw.get(Field::Birthday), Field::Birthday),
                email: expected_value(raw.get(Field::Email), Field::Email),
                phone: expected_value(raw.get(Field::Phone), Field::Phone),
                address: expected_value(raw.get(Field::Address), Field::Address),
                contact_method,
            };
            (raw, expected)
        })
}

fn seeded_store() -> RecordStore {
    let mut store = RecordStore::in_memory().unwrap();
    let mut controller = FormController::new(&mut store);
    let seed = RawCustomerForm::default().with(Field::Name, "Seed Customer");
    assert!(controller.submit(&seed).is_success());
    store
}

proptest! {
    #[test]
    fn valid_forms_are_stored_with_increasing_ids(
        forms in prop::collection::vec(arb_valid_form(), 1..6)
    ) {
        let mut store = RecordStore::in_memory().unwrap();
        let mut controller = FormController::new(&mut store);

        let mut last_id = 0;
        for (raw, _) in &forms {
            let record = match controller.submit(raw) {
                SubmitOutcome::Success(record) => record,
                other => {
                    return Err(TestCaseError::fail(format!(
                        "expected success for {:?}, got {:?}",
                        raw, other
                    )));
                }
            };
            prop_assert!(record.id > last_id);
            last_id = record.id;
        }

        let stored: Vec<NewCustomer> = store
            .list()
            .unwrap()
            .iter()
            .map(|record| record.without_id())
            .collect();
        let expected: Vec<NewCustomer> = forms.into_iter().map(|(_, customer)| customer).collect();
        prop_assert_eq!(stored, expected);
    }

    #[test]
    fn blank_or_placeholder_names_store_nothing(
        name in arb_blank_name(),
        form in arb_valid_form()
    ) {
        let mut store = seeded_store();
        let (mut raw, _) = form;
        raw.set(Field::Name, name);

        let outcome = FormController::new(&mut store).submit(&raw);

        prop_assert_eq!(
            outcome,
            SubmitOutcome::ValidationError(ValidationError::MissingRequiredField(Field::Name))
        );
        prop_assert_eq!(store.count().unwrap(), 1);
    }

    #[test]
    fn malformed_emails_store_nothing(
        email in arb_invalid_email(),
        form in arb_valid_form()
    ) {
        let mut store = seeded_store();
        let raw = form.0.with(Field::Email, email.clone());

        let outcome = FormController::new(&mut store).submit(&raw);

        prop_assert_eq!(
            outcome,
            SubmitOutcome::ValidationError(ValidationError::InvalidEmail(email))
        );
        prop_assert_eq!(store.count().unwrap(), 1);
    }
}
