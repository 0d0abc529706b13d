use crate::args::OutputFormat;
use crate::presentation::formatters::DirectoryListView;
use crate::presentation::view_models::DirectoryListViewModel;
use anyhow::Result;

/// Console output driver: plain text through the `Display` views, or the
/// full view model as JSON (the JSON shape is the stable scripting API).
pub struct ConsoleRenderer {
    format: OutputFormat,
}

impl ConsoleRenderer {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn render_directory(&self, view_model: &DirectoryListViewModel) -> Result<()> {
        match self.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(view_model)?);
            }
            OutputFormat::Plain => {
                print!("{}", DirectoryListView::new(view_model));
            }
        }
        Ok(())
    }
}
