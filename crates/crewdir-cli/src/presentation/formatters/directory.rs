use crate::presentation::formatters::text;
use crate::presentation::view_models::DirectoryListViewModel;
use crewdir_engine::AccentColor;
use owo_colors::{AnsiColors, OwoColorize};
use std::fmt;

/// Console rendering of the directory as one card line per employee.
pub struct DirectoryListView<'a> {
    view: &'a DirectoryListViewModel,
}

impl<'a> DirectoryListView<'a> {
    pub fn new(view: &'a DirectoryListViewModel) -> Self {
        Self { view }
    }
}

fn accent_color(accent: AccentColor) -> AnsiColors {
    match accent {
        AccentColor::Indigo => AnsiColors::Blue,
        AccentColor::Magenta => AnsiColors::Magenta,
        AccentColor::Cyan => AnsiColors::Cyan,
        AccentColor::Green => AnsiColors::Green,
        AccentColor::Rose => AnsiColors::Red,
        AccentColor::Teal => AnsiColors::BrightCyan,
    }
}

impl fmt::Display for DirectoryListView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let directory = &self.view.directory;

        let mut filters = Vec::new();
        if let Some(search) = &self.view.search {
            filters.push(format!("search '{}'", search));
        }
        if let Some(department) = &self.view.department {
            filters.push(format!("department '{}'", department));
        }

        if filters.is_empty() {
            writeln!(
                f,
                "{} employees ({})",
                directory.total_count,
                self.view.endpoint.bright_black()
            )?;
        } else {
            writeln!(
                f,
                "{} employees, showing {} ({})",
                directory.total_count,
                directory.shown_count,
                filters.join(", ").bright_black()
            )?;
        }

        if directory.is_empty {
            writeln!(f, "{}", "No employees found".bright_black())?;
            return Ok(());
        }

        for card in &directory.cards {
            let accent = accent_color(card.accent);
            writeln!(
                f,
                "{:>2} {} {} {} {}",
                card.initials.color(accent).bold(),
                card.name.bold(),
                text::truncate(&card.role, 40),
                card.email.bright_black(),
                card.department.color(accent)
            )?;
        }

        Ok(())
    }
}
