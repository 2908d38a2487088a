//! Table output formatting

use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Style, object::Rows},
};

/// Format rows as a rounded table with centred headers
pub fn format_table<T: Tabled>(data: &[T]) -> String {
    if data.is_empty() {
        return "No results found.".to_string();
    }

    let mut table = Table::new(data);
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));

    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::fixtures::{self, PostBuilder};
    use crate::models::{CategoryDisplay, PostDisplay};

    #[test]
    fn test_empty() {
        let rows: Vec<CategoryDisplay> = Vec::new();
        assert_eq!(format_table(&rows), "No results found.");
    }

    #[test]
    fn test_listing_rows() {
        let rows: Vec<PostDisplay> = vec![
            PostDisplay::from(PostBuilder::new(1).title("Desk").build()),
            PostDisplay::from(PostBuilder::new(2).title("Lamp").build()),
        ];

        let out = format_table(&rows);
        assert!(out.contains("TITLE"));
        assert!(out.contains("Desk"));
        assert!(out.contains("Lamp"));
        assert!(out.contains("╭"));
    }

    #[test]
    fn test_categories() {
        let rows = vec![CategoryDisplay::from(fixtures::category(4, "Electronics"))];
        let out = format_table(&rows);
        assert!(out.contains("Electronics"));
        assert!(out.contains("ID"));
    }
}
