//! # TextUI - Terminal Forms and CRUD Screens
//!
//! TextUI builds line-oriented terminal applications out of three layers:
//!
//! - Output widgets from `textui-render`: bordered tables laid out to the
//!   terminal width, boxes, rules, a loader and a progress meter.
//! - Entry widgets from `textui-input`: text, password, number, date,
//!   selectors and multi-line text, each reading whole lines.
//! - This crate's screens: a paginated [`Crud`] table driven by one-line
//!   commands, and a [`Form`] that asks entries in order and reviews them.
//!
//! ## Core Concepts
//!
//! - [`Terminal`]: every screen draws to and reads from `&mut dyn Terminal`.
//!   Use [`StdTerminal`] in applications and [`MockTerminal`] in tests.
//! - [`Record`]: an ordered row of [`Value`]s. CRUD data and form answers
//!   are both records.
//! - [`Flow`]: handlers and [`Crud::run`] return `Continue` or `Terminate`;
//!   the application's main loop decides what terminating means.
//! - [`CrudText`] and [`FormText`]: every user-visible string, loadable from
//!   YAML for translations.
//!
//! ## Quick Start
//!
//! ```rust
//! use textui::{Binding, ColumnSpec, Crud, Flow, Form, FormOutcome, MockTerminal, Record};
//! use textui::input::TextEntry;
//!
//! let mut crud = Crud::builder("Contacts")
//!     .column(ColumnSpec::new("name", "Name"))
//!     .insert(Binding::new('N', "New").on(|state, term| {
//!         let mut form = Form::new("New contact").entry("name", TextEntry::new("Name: "));
//!         if form.ask(term)? == FormOutcome::Saved {
//!             let mut data = state.data().to_vec();
//!             data.push(form.into_answers());
//!             state.set_data(data);
//!         }
//!         Ok(Flow::Continue)
//!     }))
//!     .build()
//!     .unwrap();
//!
//! let mut term = MockTerminal::new(120, 30).with_responses(["n", "Ann", "s", "q"]);
//! crud.run_loop(&mut term).unwrap();
//! assert_eq!(crud.state().data()[0].get("name").unwrap().to_string(), "Ann");
//! ```
//!
//! ## Logging
//!
//! Commands, page changes, selection changes and form transitions are
//! reported as `tracing` events. Install a subscriber to see them.

mod crud;
mod error;
mod form;

pub use crud::{
    page_size_for, Action, ActionHandler, Binding, Bindings, ColumnSpec, Command, CommandParser,
    Crud, CrudBuilder, CrudState, CrudText, ExitHandler, Flow, Navigation, Pager, Toggle,
    DEFAULT_MIN_COLUMNS, RESERVED_ROWS,
};
pub use error::{CrudError, FormError};
pub use form::{ButtonText, Form, FormOutcome, FormText};

// Entry widgets
pub use textui_input as input;
pub use textui_input::{Entry, InputError};

// Output layer
pub use textui_render::{meter, tabular, widgets};
pub use textui_render::{
    AnsiCommand, MockTerminal, Record, RenderError, StdTerminal, Terminal, Value,
};
