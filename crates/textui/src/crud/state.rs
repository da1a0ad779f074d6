//! The mutable state action handlers work on.

use textui_render::Record;

use super::pager::Pager;

/// Dataset, pagination, selection and the status message of a CRUD screen.
///
/// Handlers receive `&mut CrudState`: they read the selection, replace the
/// data and leave a message for the next redraw. Insert, update and delete
/// semantics are entirely theirs.
#[derive(Clone, Debug, PartialEq)]
pub struct CrudState {
    pager: Pager,
    message: Option<String>,
}

impl CrudState {
    pub(crate) fn new(data: Vec<Record>, page_size: usize) -> Self {
        let mut pager = Pager::new(page_size);
        pager.set_data(data);
        Self {
            pager,
            message: None,
        }
    }

    pub fn data(&self) -> &[Record] {
        self.pager.data()
    }

    /// Replace the dataset; see [`Pager::set_data`] for what happens to the
    /// current page and selection.
    pub fn set_data(&mut self, data: Vec<Record>) {
        self.pager.set_data(data);
    }

    /// Show `message` on the status line of the next redraw.
    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = Some(message.into());
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub(crate) fn take_message(&mut self) -> Option<String> {
        self.message.take()
    }

    pub fn selected_record(&self) -> Option<&Record> {
        self.pager.selected_record()
    }

    /// Dataset index of the selected record.
    pub fn selected_index(&self) -> Option<usize> {
        self.pager.selected_index()
    }

    pub fn clear_selected(&mut self) {
        self.pager.clear_selected();
    }

    /// Dataset index of the first record equal to `record`.
    pub fn record_index(&self, record: &Record) -> Option<usize> {
        self.data().iter().position(|r| r == record)
    }

    pub fn current_page(&self) -> usize {
        self.pager.current_page()
    }

    pub fn page_count(&self) -> usize {
        self.pager.page_count()
    }

    pub fn pager(&self) -> &Pager {
        &self.pager
    }

    pub(crate) fn pager_mut(&mut self) -> &mut Pager {
        &mut self.pager
    }
}
