use formdesk_core::RecordStore;

use crate::render::print_customers;

#[derive(Debug, Clone, PartialEq, clap::Args)]
pub struct ListCommand {
    /// Print records as JSON instead of a listing
    #[arg(long)]
    pub json: bool,
}

impl ListCommand {
    pub fn execute(&self, store: &mut RecordStore) -> Result<(), String> {
        let records = store.list().map_err(|e| e.to_string())?;
        if self.json {
            let json = serde_json::to_string_pretty(&records)
                .map_err(|e| format!("Failed to serialize customers: {}", e))?;
            println!("{}", json);
        } else {
            print_customers(&records);
        }
        Ok(())
    }
}
