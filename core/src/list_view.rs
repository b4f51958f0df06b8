//! State machine behind the todo list.
//!
//! # Design
//! `ListView` moves through `Idle → Loading → (Loaded | Failed)`. Fetching
//! happens outside: `mount` hands out a `FetchTicket`, the host runs
//! `fetch_collection`, and `apply` feeds the outcome back. Filter changes
//! re-derive the filtered collection from `raw` and never fetch.
//!
//! The active filter is recorded in every phase so the three controls stay
//! operable while a fetch is in flight. A fresh load resets it to `All`.

use tracing::{debug, warn};

use crate::client::TodoClient;
use crate::fetch::{fetch_collection, ApplyOutcome, FetchOutcome, FetchTicket, Transport};
use crate::filter::Filter;
use crate::types::{Todo, TodoId};

/// Lifecycle phase of a `ListView`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListPhase {
    Idle,
    Loading,
    Loaded { raw: Vec<Todo>, filtered: Vec<Todo> },
    Failed { message: String },
}

/// What the list area should show right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListRender<'a> {
    /// Loading indicator; the list is suppressed.
    Loading,
    /// Error indicator; the list is suppressed.
    Failed { message: &'a str },
    /// One selectable row per item in the filtered collection.
    Rows(&'a [Todo]),
}

/// One of the three filter controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterControl {
    pub filter: Filter,
    pub id: &'static str,
    pub label: &'static str,
    pub active: bool,
}

#[derive(Debug, Clone)]
pub struct ListView {
    phase: ListPhase,
    filter: Filter,
    generation: u64,
}

impl Default for ListView {
    fn default() -> Self {
        Self::new()
    }
}

impl ListView {
    pub const LOADING_INDICATOR: &'static str = "Loading todos";
    pub const ERROR_INDICATOR: &'static str = "error loading todos";

    pub fn new() -> Self {
        Self {
            phase: ListPhase::Idle,
            filter: Filter::All,
            generation: 0,
        }
    }

    /// Enter `Loading` and issue the ticket for the collection fetch.
    pub fn mount(&mut self) -> FetchTicket {
        self.generation += 1;
        self.phase = ListPhase::Loading;
        debug!(generation = self.generation, "list view loading");
        FetchTicket::from_generation(self.generation)
    }

    /// Apply the outcome of the fetch identified by `ticket`.
    ///
    /// Outcomes for superseded tickets, or arriving when the view is no
    /// longer loading, are dropped.
    pub fn apply(&mut self, ticket: FetchTicket, outcome: FetchOutcome<Vec<Todo>>) -> ApplyOutcome {
        if ticket.generation() != self.generation || self.phase != ListPhase::Loading {
            warn!(
                ticket = ticket.generation(),
                current = self.generation,
                "dropping stale collection outcome"
            );
            return ApplyOutcome::Stale;
        }
        self.phase = match outcome {
            FetchOutcome::Loaded(raw) => {
                debug!(count = raw.len(), "list view loaded");
                self.filter = Filter::All;
                let filtered = raw.clone();
                ListPhase::Loaded { raw, filtered }
            }
            FetchOutcome::Failed(message) => {
                debug!(%message, "list view failed");
                ListPhase::Failed { message }
            }
        };
        ApplyOutcome::Applied
    }

    /// Mount, fetch and apply in one step.
    pub async fn load<T>(&mut self, client: &TodoClient, transport: &T) -> ApplyOutcome
    where
        T: Transport,
    {
        let ticket = self.mount();
        let outcome = fetch_collection(client, transport).await;
        self.apply(ticket, outcome)
    }

    /// Select the active filter. Re-derives the filtered collection when
    /// loaded; otherwise only records the choice.
    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
        if let ListPhase::Loaded { raw, filtered } = &mut self.phase {
            *filtered = filter.apply(raw);
            debug!(%filter, shown = filtered.len(), "list view filtered");
        }
    }

    /// Select the filter whose control carries `control_id`. Returns false
    /// for unknown identifiers.
    pub fn press_control(&mut self, control_id: &str) -> bool {
        match Filter::from_control_id(control_id) {
            Some(filter) => {
                self.set_filter(filter);
                true
            }
            None => false,
        }
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    pub fn phase(&self) -> &ListPhase {
        &self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == ListPhase::Loading
    }

    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            ListPhase::Failed { message } => Some(message.as_str()),
            _ => None,
        }
    }

    /// Collection exactly as the server returned it; empty until loaded.
    pub fn raw(&self) -> &[Todo] {
        match &self.phase {
            ListPhase::Loaded { raw, .. } => raw,
            _ => &[],
        }
    }

    pub fn filtered(&self) -> &[Todo] {
        match &self.phase {
            ListPhase::Loaded { filtered, .. } => filtered,
            _ => &[],
        }
    }

    pub fn render(&self) -> ListRender<'_> {
        match &self.phase {
            ListPhase::Loading => ListRender::Loading,
            ListPhase::Failed { message } => ListRender::Failed { message },
            ListPhase::Idle => ListRender::Rows(&[]),
            ListPhase::Loaded { filtered, .. } => ListRender::Rows(filtered),
        }
    }

    /// Number of selectable rows currently rendered.
    pub fn row_count(&self) -> usize {
        match self.render() {
            ListRender::Rows(rows) => rows.len(),
            ListRender::Loading | ListRender::Failed { .. } => 0,
        }
    }

    pub fn filter_controls(&self) -> [FilterControl; 3] {
        Filter::ALL.map(|filter| FilterControl {
            filter,
            id: filter.control_id(),
            label: filter.label(),
            active: filter == self.filter,
        })
    }

    /// Activate the rendered row at `index`, handing its identifier to
    /// `on_select`. Does nothing when no such row is on screen.
    pub fn activate<F>(&self, index: usize, on_select: F) -> Option<TodoId>
    where
        F: FnOnce(TodoId),
    {
        let ListRender::Rows(rows) = self.render() else {
            return None;
        };
        let id = rows.get(index)?.id;
        on_select(id);
        Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::testing::StubTransport;

    fn todo(id: u64, completed: bool) -> Todo {
        Todo {
            id,
            user_id: id % 3 + 1,
            title: format!("todo {id}"),
            completed,
        }
    }

    fn sample() -> Vec<Todo> {
        vec![
            todo(1, false),
            todo(2, true),
            todo(3, false),
            todo(4, true),
            todo(5, false),
        ]
    }

    fn loaded() -> ListView {
        let mut view = ListView::new();
        let ticket = view.mount();
        assert_eq!(view.apply(ticket, FetchOutcome::Loaded(sample())), ApplyOutcome::Applied);
        view
    }

    #[test]
    fn starts_idle_and_empty() {
        let view = ListView::new();
        assert_eq!(view.phase(), &ListPhase::Idle);
        assert_eq!(view.filter(), Filter::All);
        assert_eq!(view.row_count(), 0);
        assert!(!view.is_loading());
        assert!(view.error().is_none());
    }

    #[test]
    fn mount_enters_loading_and_suppresses_rows() {
        let mut view = ListView::new();
        view.mount();
        assert!(view.is_loading());
        assert_eq!(view.render(), ListRender::Loading);
        assert_eq!(view.row_count(), 0);
    }

    #[test]
    fn success_populates_both_collections() {
        let view = loaded();
        assert!(!view.is_loading());
        assert_eq!(view.raw(), sample().as_slice());
        assert_eq!(view.filtered(), sample().as_slice());
        assert_eq!(view.row_count(), 5);
    }

    #[test]
    fn failure_records_message_and_leaves_collections_empty() {
        let mut view = ListView::new();
        let ticket = view.mount();
        view.apply(
            ticket,
            FetchOutcome::Failed("HTTP error! Status: 404".to_string()),
        );
        assert!(!view.is_loading());
        assert_eq!(view.error(), Some("HTTP error! Status: 404"));
        assert!(view.raw().is_empty());
        assert_eq!(view.row_count(), 0);
        assert!(matches!(view.render(), ListRender::Failed { .. }));
    }

    #[test]
    fn filters_derive_from_raw() {
        let mut view = loaded();
        for filter in Filter::ALL {
            view.set_filter(filter);
            let expected: Vec<Todo> = sample().into_iter().filter(|t| filter.accepts(t)).collect();
            assert_eq!(view.filtered(), expected.as_slice(), "{filter}");
            assert_eq!(view.raw(), sample().as_slice());
        }
    }

    #[test]
    fn all_open_all_restores_raw_exactly() {
        let mut view = loaded();
        view.set_filter(Filter::Open);
        assert_eq!(view.row_count(), 3);
        view.set_filter(Filter::All);
        assert_eq!(view.filtered(), view.raw());
        assert_eq!(view.filtered(), sample().as_slice());
    }

    #[test]
    fn filter_is_idempotent() {
        let mut view = loaded();
        view.set_filter(Filter::Completed);
        let once = view.filtered().to_vec();
        view.set_filter(Filter::Completed);
        assert_eq!(view.filtered(), once.as_slice());
    }

    #[test]
    fn filter_during_loading_is_recorded_then_reset_by_load() {
        let mut view = ListView::new();
        let ticket = view.mount();
        view.set_filter(Filter::Open);
        assert_eq!(view.filter(), Filter::Open);
        assert_eq!(view.render(), ListRender::Loading);
        view.apply(ticket, FetchOutcome::Loaded(sample()));
        assert_eq!(view.filter(), Filter::All);
        assert_eq!(view.row_count(), 5);
    }

    #[test]
    fn controls_are_always_present() {
        let mut view = ListView::new();
        assert_eq!(view.filter_controls().len(), 3);
        view.mount();
        let controls = view.filter_controls();
        let ids: Vec<_> = controls.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec!["filter-all", "filter-open", "filter-completed"]);
        assert!(controls[0].active);
        assert!(view.press_control("filter-completed"));
        assert!(view.filter_controls()[2].active);
        assert!(!view.press_control("filter-bogus"));
        assert_eq!(view.filter(), Filter::Completed);
    }

    #[test]
    fn controls_stay_operable_after_failure() {
        let mut view = ListView::new();
        let ticket = view.mount();
        view.apply(
            ticket,
            FetchOutcome::Failed("HTTP error! Status: 500".to_string()),
        );
        assert!(view.press_control("filter-open"));
        assert_eq!(view.filter(), Filter::Open);
        assert!(view.filter_controls()[1].active);
        assert_eq!(
            view.render(),
            ListRender::Failed {
                message: "HTTP error! Status: 500"
            }
        );
        assert_eq!(view.row_count(), 0);
    }

    #[test]
    fn controls_rederive_rows_when_loaded() {
        let mut view = loaded();
        assert!(view.press_control("filter-completed"));
        assert_eq!(view.filter(), Filter::Completed);
        let ids: Vec<_> = view.filtered().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![2, 4]);
        assert!(view.press_control("filter-open"));
        assert_eq!(view.row_count(), 3);
        assert!(view.press_control("filter-all"));
        assert_eq!(view.filtered(), sample().as_slice());
    }

    #[test]
    fn activate_hands_row_id_to_callback() {
        let mut view = loaded();
        view.set_filter(Filter::Completed);
        let mut selected = None;
        let id = view.activate(1, |id| selected = Some(id));
        assert_eq!(id, Some(4));
        assert_eq!(selected, Some(4));
    }

    #[test]
    fn activate_out_of_range_does_nothing() {
        let view = loaded();
        let mut called = false;
        assert_eq!(view.activate(99, |_| called = true), None);
        assert!(!called);
    }

    #[test]
    fn activate_while_loading_does_nothing() {
        let mut view = ListView::new();
        view.mount();
        let mut called = false;
        assert_eq!(view.activate(0, |_| called = true), None);
        assert!(!called);
    }

    #[test]
    fn stale_ticket_is_dropped() {
        let mut view = ListView::new();
        let first = view.mount();
        let second = view.mount();
        assert_eq!(
            view.apply(first, FetchOutcome::Loaded(sample())),
            ApplyOutcome::Stale
        );
        assert!(view.is_loading());
        assert_eq!(
            view.apply(second, FetchOutcome::Loaded(vec![todo(9, true)])),
            ApplyOutcome::Applied
        );
        assert_eq!(view.row_count(), 1);
    }

    #[test]
    fn outcome_applied_twice_is_ignored() {
        let mut view = ListView::new();
        let ticket = view.mount();
        view.apply(ticket, FetchOutcome::Loaded(sample()));
        assert_eq!(
            view.apply(ticket, FetchOutcome::Failed("late".to_string())),
            ApplyOutcome::Stale
        );
        assert_eq!(view.row_count(), 5);
    }

    #[tokio::test]
    async fn load_runs_the_whole_cycle() {
        let transport = StubTransport::default().respond(
            "http://stub/todos",
            200,
            r#"[{"userId":1,"id":1,"title":"a","completed":false},
                {"userId":2,"id":2,"title":"b","completed":true}]"#,
        );
        let mut view = ListView::new();
        let applied = view.load(&TodoClient::new("http://stub/todos"), &transport).await;
        assert_eq!(applied, ApplyOutcome::Applied);
        assert_eq!(view.row_count(), 2);
        assert!(!view.is_loading());
    }

    #[tokio::test]
    async fn load_404_shows_error_and_no_rows() {
        let transport = StubTransport::default().respond("http://stub/todos", 404, "");
        let mut view = ListView::new();
        view.load(&TodoClient::new("http://stub/todos"), &transport).await;
        assert_eq!(view.render(), ListRender::Failed { message: "HTTP error! Status: 404" });
        assert_eq!(view.row_count(), 0);
    }
}
