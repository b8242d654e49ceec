//! Row selection. A disabled table, or a disabled row, ignores every
//! interaction.

use tracing::debug;

use super::DataTable;

impl DataTable {
    pub fn selected_row(&self) -> Option<usize> {
        self.selected_row
    }

    /// Checked rows in the order they were checked.
    pub fn checked_rows(&self) -> &[usize] {
        &self.checked_rows
    }

    /// Whether the header checkbox shows as checked.
    pub fn all_checked(&self) -> bool {
        !self.rows.is_empty() && self.checked_rows.len() == self.rows.len()
    }

    fn accepts_input(&self, row: usize) -> bool {
        !self.disabled && self.rows.get(row).is_some_and(|r| !r.disabled)
    }

    /// Click on a row cell. Selects the row and returns the clicked column
    /// key, or `None` when the click is ignored.
    pub fn click_row(&mut self, row: usize, col: usize) -> Option<&str> {
        if !self.accepts_input(row) {
            return None;
        }
        let key = self.columns.get(col)?.key.as_str();
        self.selected_row = Some(row);
        debug!(row, col, "row clicked");
        Some(key)
    }

    /// Check or uncheck a row's checkbox. Returns `false` when ignored.
    pub fn set_row_checked(&mut self, row: usize, checked: bool) -> bool {
        if !self.multi_select || !self.accepts_input(row) {
            return false;
        }
        let present = self.checked_rows.contains(&row);
        match (checked, present) {
            (true, false) => self.checked_rows.push(row),
            (false, true) => self.checked_rows.retain(|r| *r != row),
            _ => {}
        }
        true
    }

    /// Flip a row's checkbox.
    pub fn toggle_row_checked(&mut self, row: usize) -> bool {
        let checked = self.checked_rows.contains(&row);
        self.set_row_checked(row, !checked)
    }

    /// Header checkbox: check every row or clear the selection.
    pub fn select_all(&mut self, checked: bool) -> bool {
        if !self.multi_select || self.disabled {
            return false;
        }
        self.checked_rows = if checked {
            (0..self.rows.len()).collect()
        } else {
            Vec::new()
        };
        true
    }
}
