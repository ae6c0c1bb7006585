/// Selection state owned by the gallery window
///
/// Holds the selected date and category, and hands out render tickets so a
/// wallpaper listing that arrives after a newer request has been issued can
/// be recognized and dropped.
use super::data::{Category, DateEntry};

/// Identifies one wallpaper render request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderTicket {
    pub sequence: u64,
    pub date: String,
    pub category: Category,
}

#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    selected_date: String,
    selected_category: Category,
    /// Sequence number of the last issued ticket
    sequence: u64,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_date(&self) -> &str {
        &self.selected_date
    }

    pub fn selected_category(&self) -> Category {
        self.selected_category
    }

    /// Reset the date to the newest entry of a freshly loaded catalog.
    /// The catalog is expected newest first; an empty catalog clears the date.
    pub fn apply_catalog(&mut self, catalog: &[DateEntry]) {
        self.selected_date = catalog
            .first()
            .map(|entry| entry.name.clone())
            .unwrap_or_default();
    }

    /// Select a date. Names outside the catalog are rejected.
    pub fn select_date(&mut self, name: &str, catalog: &[DateEntry]) -> bool {
        if !catalog.iter().any(|entry| entry.name == name) {
            return false;
        }
        self.selected_date = name.to_string();
        true
    }

    pub fn select_category(&mut self, category: Category) {
        self.selected_category = category;
    }

    /// Issue a ticket for rendering the current selection.
    /// Returns None while no date is selected; no request should be made then.
    pub fn begin_render(&mut self) -> Option<RenderTicket> {
        if self.selected_date.is_empty() {
            return None;
        }

        self.sequence += 1;
        Some(RenderTicket {
            sequence: self.sequence,
            date: self.selected_date.clone(),
            category: self.selected_category,
        })
    }

    /// A ticket is current if no newer one was issued and the selection still matches it
    pub fn is_current(&self, ticket: &RenderTicket) -> bool {
        ticket.sequence == self.sequence
            && ticket.date == self.selected_date
            && ticket.category == self.selected_category
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<DateEntry> {
        ["2025-11-21", "2025-11-20"]
            .iter()
            .map(|name| DateEntry {
                name: name.to_string(),
                display_label: name.to_string(),
            })
            .collect()
    }

    #[test]
    fn test_no_render_without_date() {
        let mut selection = SelectionState::new();
        assert!(selection.begin_render().is_none());

        selection.apply_catalog(&[]);
        assert!(selection.begin_render().is_none());
        assert_eq!(selection.selected_date(), "");
    }

    #[test]
    fn test_apply_catalog_selects_newest() {
        let mut selection = SelectionState::new();
        selection.apply_catalog(&catalog());

        assert_eq!(selection.selected_date(), "2025-11-21");
        assert_eq!(selection.selected_category(), Category::Desktop);
    }

    #[test]
    fn test_select_date_outside_catalog_is_rejected() {
        let mut selection = SelectionState::new();
        let catalog = catalog();
        selection.apply_catalog(&catalog);

        assert!(!selection.select_date("2024-01-01", &catalog));
        assert_eq!(selection.selected_date(), "2025-11-21");

        assert!(selection.select_date("2025-11-20", &catalog));
        assert_eq!(selection.selected_date(), "2025-11-20");
    }

    #[test]
    fn test_only_latest_ticket_is_current() {
        let mut selection = SelectionState::new();
        let catalog = catalog();
        selection.apply_catalog(&catalog);

        selection.select_date("2025-11-20", &catalog);
        let first = selection.begin_render().unwrap();

        selection.select_date("2025-11-21", &catalog);
        selection.select_category(Category::Mobile);
        let second = selection.begin_render().unwrap();

        // Either arrival order: only the second is accepted
        assert!(selection.is_current(&second));
        assert!(!selection.is_current(&first));
        assert_eq!(second.date, "2025-11-21");
        assert_eq!(second.category, Category::Mobile);
    }

    #[test]
    fn test_same_selection_reissued_supersedes_older_ticket() {
        let mut selection = SelectionState::new();
        selection.apply_catalog(&catalog());

        let first = selection.begin_render().unwrap();
        let second = selection.begin_render().unwrap();

        assert!(second.sequence > first.sequence);
        assert!(!selection.is_current(&first));
        assert!(selection.is_current(&second));
    }
}
