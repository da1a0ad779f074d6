//! Paginated CRUD screen.
//!
//! A [`Crud`] shows one page of records as a table with a numbered row per
//! record, reads one command per [`run`](Crud::run) and dispatches it:
//!
//! | Input            | Effect                                          |
//! |------------------|-------------------------------------------------|
//! | `3`              | select row 3 of the page, or deselect it        |
//! | `p2`             | go to page 2                                    |
//! | `+`, `+2`        | forward one or two pages, stopping at the last  |
//! | `-`, `-2`        | back one or two pages, stopping at the first    |
//! | action key       | run the action's handler                        |
//!
//! Mistakes at the prompt never fail: they leave a message on the status
//! line of the next redraw. Insert, update, delete and view semantics belong
//! to the handlers, which receive the [`CrudState`] and the terminal.
//!
//! ```rust
//! use textui::{Binding, Crud, Flow};
//! use textui::{MockTerminal, Record};
//!
//! let data = vec![Record::new().with("name", "Ann"), Record::new().with("name", "Bob")];
//! let mut crud = Crud::builder("People")
//!     .data(data)
//!     .insert(Binding::new('N', "New").on(|state, _term| {
//!         let mut data = state.data().to_vec();
//!         data.push(Record::new().with("name", "Cid"));
//!         state.set_data(data);
//!         state.set_message("Record added.");
//!         Ok(Flow::Continue)
//!     }))
//!     .build()
//!     .unwrap();
//!
//! let mut term = MockTerminal::new(100, 24).with_responses(["n", "q"]);
//! crud.run_loop(&mut term).unwrap();
//! assert_eq!(crud.state().data().len(), 3);
//! ```

mod bindings;
mod command;
mod pager;
mod screen;
mod state;
mod text;

pub use bindings::{Action, ActionHandler, Binding, Bindings, ExitHandler, Flow, Navigation};
pub use command::{Command, CommandParser};
pub use pager::{page_size_for, Pager, Toggle, RESERVED_ROWS};
pub use screen::ColumnSpec;
pub use state::CrudState;
pub use text::CrudText;

use textui_render::{AnsiCommand, Record, Terminal};

use crate::CrudError;
use screen::{Layout, Screen};

/// Terminal width below which the screen refuses to draw, unless changed.
pub const DEFAULT_MIN_COLUMNS: usize = 100;

/// A paginated record table driven by one-line commands.
#[derive(Debug)]
pub struct Crud {
    title: String,
    bindings: Bindings,
    navigation: Navigation,
    text: CrudText,
    layout: Layout,
    min_columns: usize,
    parser: CommandParser,
    state: CrudState,
}

impl Crud {
    pub fn builder(title: impl Into<String>) -> CrudBuilder {
        CrudBuilder::new(title)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn state(&self) -> &CrudState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut CrudState {
        &mut self.state
    }

    pub fn set_data(&mut self, data: Vec<Record>) {
        self.state.set_data(data);
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.state.set_message(message);
    }

    /// Draw the screen, read one command and dispatch it.
    ///
    /// The page size follows the terminal height on every call. Returns
    /// [`Flow::Terminate`] when a handler asks to stop, which the default
    /// exit handler does.
    ///
    /// # Errors
    ///
    /// Fails when the terminal is narrower than the minimum (after printing
    /// the warning), when its size cannot be detected, when input ends and
    /// when a handler fails.
    pub fn run(&mut self, term: &mut dyn Terminal) -> Result<Flow, CrudError> {
        term.send(AnsiCommand::ClearScreen)?;

        let columns = term.columns()?;
        if self.min_columns > 0 && columns < self.min_columns {
            term.write_line(&self.text.min_columns_message(self.min_columns))?;
            return Err(CrudError::TerminalTooNarrow {
                required: self.min_columns,
                actual: columns,
            });
        }
        let page_size = page_size_for(term.lines()?);
        self.state.pager_mut().set_page_size(page_size);

        let message = self.state.take_message();
        let screen = Screen {
            title: &self.title,
            layout: &self.layout,
            bindings: &self.bindings,
            navigation: &self.navigation,
            text: &self.text,
        };
        term.write(&screen.render(message.as_deref(), &self.state, columns)?)?;

        let Some(line) = term.read_trimmed()? else {
            return Err(CrudError::InputClosed);
        };
        self.dispatch(&line, term)
    }

    /// Call [`run`](Self::run) until it returns [`Flow::Terminate`].
    pub fn run_loop(&mut self, term: &mut dyn Terminal) -> Result<(), CrudError> {
        while self.run(term)? == Flow::Continue {}
        Ok(())
    }

    /// Apply one command line without drawing anything.
    pub fn dispatch(&mut self, line: &str, term: &mut dyn Terminal) -> Result<Flow, CrudError> {
        let command = self.parser.parse(line);
        tracing::debug!(input = %line, ?command, "crud command");

        match command {
            Command::Row(row) => match self.state.pager_mut().toggle(row) {
                Some(toggle) => tracing::debug!(?toggle, "row selection changed"),
                None => self.notice(self.text.row_not_found.clone()),
            },
            Command::Page(page) => {
                if self.state.pager_mut().go_to(page) {
                    tracing::debug!(page, "page changed");
                } else {
                    self.notice(self.text.page_not_found.clone());
                }
            }
            Command::Previous(count) => {
                self.state.pager_mut().previous(count);
                tracing::debug!(page = self.state.current_page(), "page changed");
            }
            Command::Next(count) => {
                self.state.pager_mut().next(count);
                tracing::debug!(page = self.state.current_page(), "page changed");
            }
            Command::Action(action) => return self.invoke(action, term),
            Command::Unknown => self.notice(self.text.unknown_command.clone()),
        }
        Ok(Flow::Continue)
    }

    fn invoke(&mut self, action: Action, term: &mut dyn Terminal) -> Result<Flow, CrudError> {
        let bound = self.bindings.get(action).is_some_and(Binding::is_bound);
        if !bound {
            self.notice(self.text.unknown_command.clone());
            return Ok(Flow::Continue);
        }
        if action.needs_selection() && self.state.selected_record().is_none() {
            self.notice(self.text.no_record_selected.clone());
            return Ok(Flow::Continue);
        }

        let Some(handler) = self.bindings.get_mut(action).and_then(|b| b.handler_mut()) else {
            return Ok(Flow::Continue);
        };
        let flow = handler
            .invoke(&mut self.state, term)
            .map_err(CrudError::Handler)?;
        tracing::debug!(?action, ?flow, "action handled");
        Ok(flow)
    }

    fn notice(&mut self, message: String) {
        tracing::warn!(message = %message, "status message");
        self.state.set_message(message);
    }
}

/// Configuration of a [`Crud`], validated by [`build`](Self::build).
#[derive(Debug)]
pub struct CrudBuilder {
    title: String,
    bindings: Bindings,
    navigation: Navigation,
    text: CrudText,
    columns: Vec<ColumnSpec>,
    min_columns: usize,
    data: Vec<Record>,
}

impl CrudBuilder {
    fn new(title: impl Into<String>) -> Self {
        CrudBuilder {
            title: title.into(),
            bindings: Bindings::default(),
            navigation: Navigation::default(),
            text: CrudText::default(),
            columns: Vec::new(),
            min_columns: DEFAULT_MIN_COLUMNS,
            data: Vec::new(),
        }
    }

    /// Replace every action binding at once.
    pub fn bindings(mut self, bindings: Bindings) -> Self {
        self.bindings = bindings;
        self
    }

    /// Set the binding of one action.
    pub fn bind(mut self, action: Action, binding: Binding) -> Self {
        match action {
            Action::Insert => self.bindings.insert = binding,
            Action::Update => self.bindings.update = binding,
            Action::Delete => self.bindings.delete = binding,
            Action::View => self.bindings.view = binding,
            Action::Exit => self.bindings.exit = binding,
            Action::Extra => self.bindings.extra = Some(binding),
        }
        self
    }

    pub fn insert(self, binding: Binding) -> Self {
        self.bind(Action::Insert, binding)
    }

    pub fn update(self, binding: Binding) -> Self {
        self.bind(Action::Update, binding)
    }

    pub fn delete(self, binding: Binding) -> Self {
        self.bind(Action::Delete, binding)
    }

    pub fn view(self, binding: Binding) -> Self {
        self.bind(Action::View, binding)
    }

    pub fn exit(self, binding: Binding) -> Self {
        self.bind(Action::Exit, binding)
    }

    pub fn extra(self, binding: Binding) -> Self {
        self.bind(Action::Extra, binding)
    }

    pub fn navigation(mut self, navigation: Navigation) -> Self {
        self.navigation = navigation;
        self
    }

    pub fn text(mut self, text: CrudText) -> Self {
        self.text = text;
        self
    }

    /// Add a displayed column. Once any column is added, only configured
    /// columns are shown, in the order they were added.
    pub fn column(mut self, column: ColumnSpec) -> Self {
        self.columns.push(column);
        self
    }

    pub fn columns(mut self, columns: impl IntoIterator<Item = ColumnSpec>) -> Self {
        self.columns.extend(columns);
        self
    }

    /// Minimum terminal width; `0` disables the check.
    pub fn min_columns(mut self, min_columns: usize) -> Self {
        self.min_columns = min_columns;
        self
    }

    pub fn data(mut self, data: Vec<Record>) -> Self {
        self.data = data;
        self
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// [`CrudError::DuplicateKey`] and [`CrudError::ReservedKey`] for bad
    /// keys, [`CrudError::InvalidWeight`] for bad column weights.
    pub fn build(self) -> Result<Crud, CrudError> {
        self.bindings.validate(&self.navigation)?;
        let layout = Layout::new(self.columns)?;
        let parser = CommandParser::new(&self.bindings, &self.navigation)?;
        // The real page size is only known once a terminal is available.
        let state = CrudState::new(self.data, page_size_for(0));

        Ok(Crud {
            title: self.title,
            bindings: self.bindings,
            navigation: self.navigation,
            text: self.text,
            layout,
            min_columns: self.min_columns,
            parser,
            state,
        })
    }
}
