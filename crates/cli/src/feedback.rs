use console::style;
use dialoguer::{Input, theme::ColorfulTheme};
use formdesk_core::{Feedback, RawFeedback};

#[derive(Debug, Clone, PartialEq, clap::Args)]
pub struct FeedbackCommand {}

impl FeedbackCommand {
    pub fn execute(&self) -> Result<(), String> {
        println!();
        println!("{}", style("Customer Experience Feedback").bold());
        println!();

        let theme = ColorfulTheme::default();
        let mut raw = RawFeedback::default();

        loop {
            raw.name = prompt(&theme, "Your Name", &raw.name)?;
            raw.email = prompt(&theme, "Your Email", &raw.email)?;
            raw.message = prompt(&theme, "Your Feedback", &raw.message)?;

            match Feedback::from_raw(&raw) {
                Ok(feedback) => {
                    println!("{}", feedback.render());
                    println!(
                        "{} {}",
                        style("✔").green(),
                        "Thank you for your feedback! Your submission has been processed."
                    );
                    return Ok(());
                }
                Err(e) => eprintln!("{} {}", style("✗ Error").red(), e),
            }
        }
    }
}

fn prompt(theme: &ColorfulTheme, label: &str, current: &str) -> Result<String, String> {
    Input::<String>::with_theme(theme)
        .with_prompt(label)
        .with_initial_text(current)
        .allow_empty(true)
        .interact_text()
        .map_err(|e| format!("Failed to read {}: {}", label, e))
}
