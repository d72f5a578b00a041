use console::style;
use dialoguer::{Confirm, Input, Select, theme::ColorfulTheme};
use formdesk_core::{CustomerForm, Field, FormController, RecordStore, SubmitOutcome};
use formdesk_types::ContactMethod;

use crate::render::print_outcome;

#[derive(Debug, Clone, PartialEq, clap::Args)]
pub struct RegisterCommand {}

impl RegisterCommand {
    pub fn execute(&self, store: &mut RecordStore) -> Result<(), String> {
        println!();
        println!("{}", style("Customer Registration Form").bold());
        println!("{}", style("Press Enter to leave an optional field blank").dim());
        println!();

        let theme = ColorfulTheme::default();
        let db_path = store.path().to_string();
        let mut controller = FormController::new(store);
        let mut form = CustomerForm::new();

        loop {
            fill_form(&mut form, &theme)?;

            let outcome = controller.submit(form.values());
            print_outcome(&outcome, &db_path);
            form.apply(&outcome);

            let prompt = match outcome {
                SubmitOutcome::Success(_) => "Register another customer?",
                _ => "Edit and submit again?",
            };
            let again = Confirm::with_theme(&theme)
                .with_prompt(prompt)
                .default(true)
                .interact()
                .map_err(|e| format!("Failed to read confirmation: {}", e))?;
            if !again {
                break;
            }
            println!();
        }

        Ok(())
    }
}

/// Prompt for every field, offering whatever the form still holds as the
/// starting text
fn fill_form(form: &mut CustomerForm, theme: &ColorfulTheme) -> Result<(), String> {
    for field in Field::ALL {
        let mut input = Input::<String>::with_theme(theme)
            .with_prompt(field.placeholder())
            .allow_empty(true);
        if let Some(current) = form.get(field) {
            input = input.with_initial_text(current);
        }
        let value = input
            .interact_text()
            .map_err(|e| format!("Failed to read {}: {}", field.label(), e))?;
        form.set(field, &value);
    }

    let labels: Vec<&str> = ContactMethod::ALL.iter().map(|m| m.as_str()).collect();
    let current = ContactMethod::ALL
        .iter()
        .position(|m| m.as_str() == form.contact_method())
        .unwrap_or(0);
    let selection = Select::with_theme(theme)
        .with_prompt("Preferred Contact")
        .items(&labels)
        .default(current)
        .interact()
        .map_err(|e| format!("Failed to get contact method selection: {}", e))?;
    form.set_contact_method(labels[selection]);

    Ok(())
}
