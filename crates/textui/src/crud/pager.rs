//! Pagination and row selection over a record list.
//!
//! Pages are never stored: page `n` is the `n`-th chunk of the dataset at
//! the current page size, so replacing the data or resizing the terminal
//! cannot leave stale pages behind. Page numbers and selected rows are
//! 1-based, and the selected row is relative to the current page.

use textui_render::Record;

/// Rows of the screen used by everything except table rows: title block,
/// status line, table header and rules, navigation, command bar and prompt.
pub const RESERVED_ROWS: usize = 12;

/// Page size for a terminal `lines` tall.
pub fn page_size_for(lines: usize) -> usize {
    lines.saturating_sub(RESERVED_ROWS).max(1)
}

/// Outcome of toggling a row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Toggle {
    Selected(usize),
    Deselected(usize),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Pager {
    data: Vec<Record>,
    page_size: usize,
    current: usize,
    selected: Option<usize>,
}

impl Pager {
    pub fn new(page_size: usize) -> Self {
        Self {
            data: Vec::new(),
            page_size: page_size.max(1),
            current: 1,
            selected: None,
        }
    }

    pub fn data(&self) -> &[Record] {
        &self.data
    }

    /// Replace the dataset.
    ///
    /// The current page is kept but clamped to the new page range. The
    /// selection survives only if the page did not move and the row still
    /// exists.
    pub fn set_data(&mut self, data: Vec<Record>) {
        self.data = data;
        self.revalidate();
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Change the page size. Any selection is dropped since rows move between pages.
    pub fn set_page_size(&mut self, page_size: usize) {
        let page_size = page_size.max(1);
        if page_size == self.page_size {
            return;
        }
        self.page_size = page_size;
        self.selected = None;
        self.revalidate();
    }

    /// Number of pages; zero for an empty dataset.
    pub fn page_count(&self) -> usize {
        self.data.len().div_ceil(self.page_size)
    }

    pub fn current_page(&self) -> usize {
        self.current
    }

    /// Records of page `page`, empty when it does not exist.
    pub fn page(&self, page: usize) -> &[Record] {
        if page == 0 {
            return &[];
        }
        self.data
            .chunks(self.page_size)
            .nth(page - 1)
            .unwrap_or(&[])
    }

    pub fn rows(&self) -> &[Record] {
        self.page(self.current)
    }

    /// Move to `page`. Returns `false`, changing nothing, if it does not exist.
    pub fn go_to(&mut self, page: usize) -> bool {
        if page < 1 || page > self.page_count() {
            return false;
        }
        if page != self.current {
            self.current = page;
            self.selected = None;
        }
        true
    }

    /// Move forward `count` pages, stopping at the last one.
    pub fn next(&mut self, count: usize) {
        let target = self.current.saturating_add(count).min(self.page_count());
        self.go_to(target);
    }

    /// Move back `count` pages, stopping at the first one.
    pub fn previous(&mut self, count: usize) {
        let target = self.current.saturating_sub(count).max(1);
        self.go_to(target);
    }

    /// Select `row` on the current page, or deselect it if it already is.
    ///
    /// Returns `None` if the page has no such row.
    pub fn toggle(&mut self, row: usize) -> Option<Toggle> {
        if row < 1 || row > self.rows().len() {
            return None;
        }
        if self.selected == Some(row) {
            self.selected = None;
            Some(Toggle::Deselected(row))
        } else {
            self.selected = Some(row);
            Some(Toggle::Selected(row))
        }
    }

    /// Selected row on the current page (1-based).
    pub fn selected_row(&self) -> Option<usize> {
        self.selected
    }

    /// Dataset index of the selected record.
    pub fn selected_index(&self) -> Option<usize> {
        let row = self.selected?;
        Some((self.current - 1) * self.page_size + row - 1)
    }

    pub fn selected_record(&self) -> Option<&Record> {
        self.data.get(self.selected_index()?)
    }

    pub fn clear_selected(&mut self) {
        self.selected = None;
    }

    fn revalidate(&mut self) {
        let page = self.current.min(self.page_count()).max(1);
        if page != self.current {
            self.current = page;
            self.selected = None;
        }
        if let Some(row) = self.selected {
            if row > self.rows().len() {
                self.selected = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn records(n: usize) -> Vec<Record> {
        (1..=n).map(|i| Record::new().with("id", i as i64)).collect()
    }

    fn ids(rows: &[Record]) -> Vec<String> {
        rows.iter()
            .map(|r| r.get("id").map(ToString::to_string).unwrap_or_default())
            .collect()
    }

    fn pager(n: usize, size: usize) -> Pager {
        let mut p = Pager::new(size);
        p.set_data(records(n));
        p
    }

    #[test]
    fn page_size_from_terminal_height() {
        assert_eq!(page_size_for(24), 12);
        assert_eq!(page_size_for(13), 1);
        assert_eq!(page_size_for(5), 1);
    }

    #[test]
    fn five_records_in_pages_of_three() {
        let p = pager(5, 3);
        assert_eq!(p.page_count(), 2);
        assert_eq!(ids(p.page(1)), vec!["1", "2", "3"]);
        assert_eq!(ids(p.page(2)), vec!["4", "5"]);
        assert!(p.page(3).is_empty());
        assert!(p.page(0).is_empty());
    }

    #[test]
    fn empty_dataset_stays_on_page_one() {
        let p = pager(0, 3);
        assert_eq!(p.page_count(), 0);
        assert_eq!(p.current_page(), 1);
        assert!(p.rows().is_empty());
    }

    #[test]
    fn go_to_rejects_missing_pages() {
        let mut p = pager(5, 3);
        assert!(!p.go_to(0));
        assert!(!p.go_to(3));
        assert_eq!(p.current_page(), 1);
        assert!(p.go_to(2));
        assert_eq!(p.current_page(), 2);
    }

    #[test]
    fn relative_moves_clamp() {
        let mut p = pager(10, 3);
        p.next(10);
        assert_eq!(p.current_page(), 4);
        p.previous(2);
        assert_eq!(p.current_page(), 2);
        p.previous(99);
        assert_eq!(p.current_page(), 1);
    }

    #[test]
    fn toggle_selects_and_deselects() {
        let mut p = pager(5, 3);
        assert_eq!(p.toggle(3), Some(Toggle::Selected(3)));
        assert_eq!(p.selected_index(), Some(2));
        assert_eq!(p.toggle(3), Some(Toggle::Deselected(3)));
        assert_eq!(p.selected_row(), None);
        assert_eq!(p.toggle(4), None);
        assert_eq!(p.toggle(0), None);
    }

    #[test]
    fn selection_is_page_relative() {
        let mut p = pager(5, 3);
        p.next(1);
        p.toggle(2);
        assert_eq!(p.selected_index(), Some(4));
        assert_eq!(ids(std::slice::from_ref(p.selected_record().unwrap())), vec!["5"]);
    }

    #[test]
    fn changing_page_clears_selection() {
        let mut p = pager(5, 3);
        p.toggle(1);
        p.next(1);
        assert_eq!(p.selected_row(), None);

        p.toggle(1);
        p.next(1); // already on the last page
        assert_eq!(p.selected_row(), Some(1));
    }

    #[test]
    fn shrinking_data_clamps_page() {
        let mut p = pager(10, 3);
        p.go_to(4);
        p.toggle(1);
        p.set_data(records(4));
        assert_eq!(p.current_page(), 2);
        assert_eq!(p.selected_row(), None);
    }

    #[test]
    fn selection_survives_when_row_remains() {
        let mut p = pager(3, 3);
        p.toggle(2);
        p.set_data(records(2));
        assert_eq!(p.selected_row(), Some(2));

        p.set_data(records(1));
        assert_eq!(p.selected_row(), None);
    }

    #[test]
    fn resizing_pages_drops_selection() {
        let mut p = pager(10, 3);
        p.go_to(4);
        p.toggle(1);
        p.set_page_size(5);
        assert_eq!(p.current_page(), 2);
        assert_eq!(p.selected_row(), None);
    }

    proptest! {
        #[test]
        fn pages_reassemble_dataset(n in 0usize..60, size in 1usize..12) {
            let p = pager(n, size);
            prop_assert_eq!(p.page_count(), n.div_ceil(size));
            let joined: Vec<Record> = (1..=p.page_count())
                .flat_map(|i| p.page(i).to_vec())
                .collect();
            prop_assert_eq!(joined, records(n));
        }

        #[test]
        fn current_page_always_valid(
            n in 0usize..40,
            size in 1usize..8,
            moves in proptest::collection::vec((0u8..3, 0usize..10), 0..20),
        ) {
            let mut p = pager(n, size);
            for (kind, count) in moves {
                match kind {
                    0 => p.next(count),
                    1 => p.previous(count),
                    _ => { p.go_to(count); }
                }
                prop_assert!(p.current_page() >= 1);
                prop_assert!(p.current_page() <= p.page_count().max(1));
            }
        }
    }
}
