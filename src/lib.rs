use crate::error::PagegrabError;

pub mod error;
mod event;
pub mod export;
pub mod fetch;
mod ui;

pub fn run_main() -> Result<(), PagegrabError> {
    tracing::info!("starting pagegrab");
    let mut model = ui::Model::new();
    model.run()
}
