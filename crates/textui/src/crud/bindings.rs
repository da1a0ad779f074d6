//! Action keys, labels and handlers.

use std::collections::HashSet;
use std::fmt;

use textui_render::Terminal;

use super::state::CrudState;
use crate::CrudError;

/// What the screen loop should do after a command.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Flow {
    #[default]
    Continue,
    Terminate,
}

/// The actions a key can be bound to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    Insert,
    Update,
    Delete,
    View,
    Exit,
    Extra,
}

impl Action {
    /// Whether the action only makes sense with a selected row.
    pub fn needs_selection(self) -> bool {
        matches!(self, Action::Update | Action::Delete | Action::View)
    }
}

/// Code run when an action's key is typed.
///
/// Closures with the matching signature implement this trait; use
/// [`Binding::on`] to attach one.
pub trait ActionHandler {
    fn invoke(&mut self, state: &mut CrudState, term: &mut dyn Terminal) -> anyhow::Result<Flow>;
}

impl<F> ActionHandler for F
where
    F: FnMut(&mut CrudState, &mut dyn Terminal) -> anyhow::Result<Flow>,
{
    fn invoke(&mut self, state: &mut CrudState, term: &mut dyn Terminal) -> anyhow::Result<Flow> {
        self(state, term)
    }
}

/// Ends the screen loop.
#[derive(Clone, Copy, Debug, Default)]
pub struct ExitHandler;

impl ActionHandler for ExitHandler {
    fn invoke(&mut self, _state: &mut CrudState, _term: &mut dyn Terminal) -> anyhow::Result<Flow> {
        Ok(Flow::Terminate)
    }
}

/// One action: its key, its command bar label and, once bound, its handler.
pub struct Binding {
    pub key: char,
    pub label: String,
    handler: Option<Box<dyn ActionHandler>>,
}

impl fmt::Debug for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Binding")
            .field("key", &self.key)
            .field("label", &self.label)
            .field("bound", &self.is_bound())
            .finish()
    }
}

impl Binding {
    pub fn new(key: char, label: impl Into<String>) -> Self {
        Self {
            key,
            label: label.into(),
            handler: None,
        }
    }

    /// Attach a closure as handler.
    pub fn on<F>(self, handler: F) -> Self
    where
        F: FnMut(&mut CrudState, &mut dyn Terminal) -> anyhow::Result<Flow> + 'static,
    {
        self.handler(handler)
    }

    pub fn handler(mut self, handler: impl ActionHandler + 'static) -> Self {
        self.handler = Some(Box::new(handler));
        self
    }

    /// Remove the handler; the action disappears from the command bar.
    pub fn unbound(mut self) -> Self {
        self.handler = None;
        self
    }

    pub fn is_bound(&self) -> bool {
        self.handler.is_some()
    }

    pub(crate) fn handler_mut(&mut self) -> Option<&mut (dyn ActionHandler + 'static)> {
        self.handler.as_deref_mut()
    }
}

/// Keys of the navigation commands. Page commands accept trailing digits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Navigation {
    pub select_page: char,
    pub next_page: char,
    pub previous_page: char,
}

impl Default for Navigation {
    fn default() -> Self {
        Navigation {
            select_page: 'p',
            next_page: '+',
            previous_page: '-',
        }
    }
}

/// Every action binding of a screen, validated as a whole.
///
/// Defaults: `N` New, `E` Edit, `D` Delete, `V` View and `Q` Quit, with only
/// Quit bound (it ends the loop). There is no extra action unless one is set.
#[derive(Debug)]
pub struct Bindings {
    pub insert: Binding,
    pub update: Binding,
    pub delete: Binding,
    pub view: Binding,
    pub exit: Binding,
    pub extra: Option<Binding>,
}

impl Default for Bindings {
    fn default() -> Self {
        Bindings {
            insert: Binding::new('N', "New"),
            update: Binding::new('E', "Edit"),
            delete: Binding::new('D', "Delete"),
            view: Binding::new('V', "View"),
            exit: Binding::new('Q', "Quit").handler(ExitHandler),
            extra: None,
        }
    }
}

impl Bindings {
    pub fn get(&self, action: Action) -> Option<&Binding> {
        match action {
            Action::Insert => Some(&self.insert),
            Action::Update => Some(&self.update),
            Action::Delete => Some(&self.delete),
            Action::View => Some(&self.view),
            Action::Exit => Some(&self.exit),
            Action::Extra => self.extra.as_ref(),
        }
    }

    pub fn get_mut(&mut self, action: Action) -> Option<&mut Binding> {
        match action {
            Action::Insert => Some(&mut self.insert),
            Action::Update => Some(&mut self.update),
            Action::Delete => Some(&mut self.delete),
            Action::View => Some(&mut self.view),
            Action::Exit => Some(&mut self.exit),
            Action::Extra => self.extra.as_mut(),
        }
    }

    /// All configured actions with their keys.
    pub fn keys(&self) -> impl Iterator<Item = (Action, char)> + '_ {
        [
            Action::Insert,
            Action::Update,
            Action::Delete,
            Action::View,
            Action::Exit,
            Action::Extra,
        ]
        .into_iter()
        .filter_map(|action| self.get(action).map(|b| (action, b.key)))
    }

    /// Reject keys that are digits or whitespace, and keys used twice
    /// (ignoring case), navigation keys included.
    pub fn validate(&self, navigation: &Navigation) -> Result<(), CrudError> {
        let nav = [
            navigation.select_page,
            navigation.next_page,
            navigation.previous_page,
        ];
        let mut seen = HashSet::new();
        for key in self.keys().map(|(_, key)| key).chain(nav) {
            if key.is_ascii_digit() || key.is_whitespace() {
                return Err(CrudError::ReservedKey(key));
            }
            if !seen.insert(key.to_lowercase().collect::<String>()) {
                return Err(CrudError::DuplicateKey(key));
            }
        }
        Ok(())
    }
}
