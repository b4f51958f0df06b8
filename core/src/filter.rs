//! Client-side completion filter.

use std::fmt;

use crate::types::Todo;

/// Tri-state completion filter applied to a fetched collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Filter {
    #[default]
    All,
    Open,
    Completed,
}

impl Filter {
    /// Every filter control, in display order.
    pub const ALL: [Filter; 3] = [Filter::All, Filter::Open, Filter::Completed];

    /// Stable identifier of the control that selects this filter.
    pub fn control_id(&self) -> &'static str {
        match self {
            Filter::All => "filter-all",
            Filter::Open => "filter-open",
            Filter::Completed => "filter-completed",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Open => "Open",
            Filter::Completed => "Completed",
        }
    }

    /// Look a filter up by its control identifier.
    pub fn from_control_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.control_id() == id)
    }

    pub fn accepts(&self, todo: &Todo) -> bool {
        match self {
            Filter::All => true,
            Filter::Open => !todo.completed,
            Filter::Completed => todo.completed,
        }
    }

    /// Derive the filtered collection. `All` returns `raw` untouched rather
    /// than running a predicate over it.
    pub fn apply(&self, raw: &[Todo]) -> Vec<Todo> {
        match self {
            Filter::All => raw.to_vec(),
            Filter::Open | Filter::Completed => {
                raw.iter().filter(|t| self.accepts(t)).cloned().collect()
            }
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Filter::All => "all",
            Filter::Open => "open",
            Filter::Completed => "completed",
        };
        f.write_str(name)
    }
}
