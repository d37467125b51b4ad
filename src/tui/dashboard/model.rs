//! Dashboard model types for testable state management
//!
//! This module separates state (DashboardState) from view
//! (DashboardViewModel) so the whole interaction can be unit tested
//! without the iocraft framework. Network work is described by
//! [`DashboardEffect`] values that the view component executes.

use iocraft::prelude::{KeyCode, KeyModifiers};

use crate::api::{ListPayload, ListQuery, Record, Resource};
use crate::display::{detail_rows, pagination_label, row_cells};
use crate::listing::{FetchTicket, ListState};
use crate::tui::components::footer::{
    Shortcut, detail_shortcuts, list_shortcuts, search_shortcuts, status_picker_shortcuts,
};
use crate::tui::components::{EmptyStateKind, Toast, ToastLevel};

// ============================================================================
// State Types
// ============================================================================

/// Status picker opened over one record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusPicker {
    /// Record whose status is being changed
    pub record_id: String,
    /// Vocabulary of the resource
    pub options: &'static [&'static str],
    /// Highlighted option
    pub index: usize,
}

impl StatusPicker {
    pub fn choice(&self) -> Option<&'static str> {
        self.options.get(self.index).copied()
    }
}

/// Raw state that changes during user interaction
#[derive(Debug, Clone)]
pub struct DashboardState {
    /// One list view per resource tab, in tab order
    pub tabs: Vec<ListState>,
    /// Index into `tabs`
    pub active_tab: usize,
    /// Highlighted row within the current page
    pub cursor: usize,

    // Search
    /// Text typed into the search box
    pub search_input: String,
    /// Whether the search box has focus
    pub search_focused: bool,

    // Modals
    /// Status picker, when open
    pub status_picker: Option<StatusPicker>,
    /// Optional toast notification to display
    pub toast: Option<Toast>,

    /// Id of the record whose status write is in flight
    pub pending_update: Option<String>,
    /// Whether the application should exit
    pub should_exit: bool,
}

impl DashboardState {
    /// One tab per resource; `initial` picks the starting tab when present.
    pub fn new(resources: &[Resource], initial: Option<Resource>, page_size: u32) -> Self {
        let tabs: Vec<ListState> = resources
            .iter()
            .map(|resource| ListState::new(resource.spec(), page_size))
            .collect();
        let active_tab = initial
            .and_then(|initial| resources.iter().position(|r| *r == initial))
            .unwrap_or(0);

        Self {
            tabs,
            active_tab,
            cursor: 0,
            search_input: String::new(),
            search_focused: false,
            status_picker: None,
            toast: None,
            pending_update: None,
            should_exit: false,
        }
    }

    /// List view of the active tab.
    ///
    /// # Panics
    ///
    /// Never for states built through [`DashboardState::new`] with at least
    /// one resource; the dashboard refuses to start without one.
    pub fn active(&self) -> &ListState {
        &self.tabs[self.active_tab]
    }

    fn active_mut(&mut self) -> &mut ListState {
        &mut self.tabs[self.active_tab]
    }

    /// Record under the cursor
    pub fn highlighted(&self) -> Option<&Record> {
        self.active().page_items().get(self.cursor).copied()
    }

    /// Record the detail modal shows, falling back to the highlighted row
    pub fn target(&self) -> Option<&Record> {
        self.active().selected().or_else(|| self.highlighted())
    }

    pub fn detail_open(&self) -> bool {
        self.active().selected().is_some()
    }

    fn clamp_cursor(&mut self) {
        let len = self.active().page_items().len();
        self.cursor = self.cursor.min(len.saturating_sub(1));
    }

    fn start_fetch(&mut self, tab: usize) -> DashboardEffect {
        let list = &mut self.tabs[tab];
        let ticket = list.begin_fetch();
        DashboardEffect::Fetch {
            tab,
            ticket,
            query: list.query(),
        }
    }

    fn notify(&mut self, message: impl Into<String>, level: ToastLevel) {
        self.toast = Some(Toast::new(message.into(), level));
    }
}

// ============================================================================
// Action Types
// ============================================================================

/// All possible actions on the dashboard
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardAction {
    // Navigation
    /// Move the cursor up one row
    MoveUp,
    /// Move the cursor down one row
    MoveDown,
    /// Go to the next page
    NextPage,
    /// Go to the previous page
    PreviousPage,
    /// Switch to the next resource tab
    NextTab,
    /// Switch to the previous resource tab
    PreviousTab,
    /// Switch to the tab at this index
    SelectTab(usize),

    // Detail
    /// Open the detail modal of the highlighted record
    OpenDetail,
    /// Close the detail modal
    CloseDetail,

    // Search and filter
    /// Focus the search box
    FocusSearch,
    /// Append a character to the search query
    SearchInput(char),
    /// Delete the last character of the search query
    SearchBackspace,
    /// Leave search mode, keeping the query
    ExitSearch,
    /// Clear the query and leave search mode
    ClearSearchAndExit,
    /// Step through the status vocabulary as a filter, then back to none
    CycleStatusFilter,

    // Status update
    /// Open the status picker over the target record
    OpenStatusPicker,
    /// Highlight the previous status
    PickerUp,
    /// Highlight the next status
    PickerDown,
    /// Send the highlighted status to the server
    ConfirmStatus,
    /// Close the picker without writing
    CancelPicker,

    // App
    /// Copy the target record's id to the clipboard
    CopyId,
    /// Re-fetch the active resource
    Refresh,
    /// Quit the application
    Quit,

    // Results of effects
    /// A list fetch completed
    FetchFinished {
        tab: usize,
        ticket: FetchTicket,
        result: Result<ListPayload, String>,
    },
    /// The server confirmed a status write
    StatusUpdated {
        tab: usize,
        id: String,
        status: String,
        record: Option<Record>,
    },
    /// A status write failed
    StatusUpdateFailed(String),
    /// The server accepted a read receipt
    MarkedRead {
        tab: usize,
        id: String,
        record: Option<Record>,
    },
    /// A read receipt failed; the record stays unread
    MarkReadFailed(String),
    /// Show a toast
    Notify { message: String, level: ToastLevel },
}

impl DashboardAction {
    fn is_effect_result(&self) -> bool {
        matches!(
            self,
            DashboardAction::FetchFinished { .. }
                | DashboardAction::StatusUpdated { .. }
                | DashboardAction::StatusUpdateFailed(_)
                | DashboardAction::MarkedRead { .. }
                | DashboardAction::MarkReadFailed(_)
                | DashboardAction::Notify { .. }
        )
    }
}

/// Side effects requested by the reducer
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardEffect {
    /// Fetch a list; the result comes back as `FetchFinished`
    Fetch {
        tab: usize,
        ticket: FetchTicket,
        query: ListQuery,
    },
    /// Write a status; the result comes back as `StatusUpdated` or
    /// `StatusUpdateFailed`
    UpdateStatus {
        tab: usize,
        id: String,
        status: &'static str,
    },
    /// Send a read receipt; the result comes back as `MarkedRead` or
    /// `MarkReadFailed`
    MarkRead { tab: usize, id: String },
    /// Put text on the clipboard
    CopyId(String),
}

// ============================================================================
// Reducer
// ============================================================================

/// Pure function: apply action to state (reducer pattern)
///
/// Returns the new state and at most one effect for the component to run.
pub fn reduce_dashboard_state(
    mut state: DashboardState,
    action: DashboardAction,
) -> (DashboardState, Option<DashboardEffect>) {
    if state.tabs.is_empty() {
        return (state, None);
    }
    if !action.is_effect_result() {
        state.toast = None;
    }

    let effect = match action {
        // Navigation
        DashboardAction::MoveUp => {
            state.cursor = state.cursor.saturating_sub(1);
            None
        }
        DashboardAction::MoveDown => {
            state.cursor += 1;
            state.clamp_cursor();
            None
        }
        DashboardAction::NextPage => {
            let next = state.active().page() + 1;
            change_page(&mut state, next)
        }
        DashboardAction::PreviousPage => {
            let previous = state.active().page().saturating_sub(1);
            change_page(&mut state, previous)
        }
        DashboardAction::NextTab => {
            let next = (state.active_tab + 1) % state.tabs.len();
            switch_tab(&mut state, next)
        }
        DashboardAction::PreviousTab => {
            let len = state.tabs.len();
            let previous = (state.active_tab + len - 1) % len;
            switch_tab(&mut state, previous)
        }
        DashboardAction::SelectTab(index) => switch_tab(&mut state, index),

        // Detail
        DashboardAction::OpenDetail => open_detail(&mut state),
        DashboardAction::CloseDetail => {
            state.active_mut().close();
            None
        }

        // Search and filter
        DashboardAction::FocusSearch => {
            state.search_focused = true;
            state.search_input = state.active().search().unwrap_or_default().to_string();
            None
        }
        DashboardAction::SearchInput(c) => {
            state.search_input.push(c);
            apply_search(&mut state)
        }
        DashboardAction::SearchBackspace => {
            state.search_input.pop();
            apply_search(&mut state)
        }
        DashboardAction::ExitSearch => {
            state.search_focused = false;
            None
        }
        DashboardAction::ClearSearchAndExit => {
            state.search_input.clear();
            state.search_focused = false;
            apply_search(&mut state)
        }
        DashboardAction::CycleStatusFilter => cycle_status_filter(&mut state),

        // Status update
        DashboardAction::OpenStatusPicker => {
            open_status_picker(&mut state);
            None
        }
        DashboardAction::PickerUp => {
            if let Some(picker) = state.status_picker.as_mut() {
                picker.index = picker.index.saturating_sub(1);
            }
            None
        }
        DashboardAction::PickerDown => {
            if let Some(picker) = state.status_picker.as_mut() {
                picker.index = (picker.index + 1).min(picker.options.len().saturating_sub(1));
            }
            None
        }
        DashboardAction::ConfirmStatus => confirm_status(&mut state),
        DashboardAction::CancelPicker => {
            state.status_picker = None;
            None
        }

        // App
        DashboardAction::CopyId => state
            .target()
            .map(|record| DashboardEffect::CopyId(record.id().to_string())),
        DashboardAction::Refresh => Some(state.start_fetch(state.active_tab)),
        DashboardAction::Quit => {
            state.should_exit = true;
            None
        }

        // Results of effects
        DashboardAction::FetchFinished {
            tab,
            ticket,
            result,
        } => {
            if let Some(list) = state.tabs.get_mut(tab)
                && list.finish_fetch(ticket, result)
                && tab == state.active_tab
            {
                state.clamp_cursor();
            }
            None
        }
        DashboardAction::StatusUpdated {
            tab,
            id,
            status,
            record,
        } => {
            state.pending_update = None;
            let applied = state
                .tabs
                .get_mut(tab)
                .is_some_and(|list| list.apply_status(&id, &status, record));
            if applied {
                state.notify(format!("Status of {id} set to {status}"), ToastLevel::Success);
            }
            state.clamp_cursor();
            None
        }
        DashboardAction::StatusUpdateFailed(message) => {
            state.pending_update = None;
            state.notify(message, ToastLevel::Error);
            None
        }
        DashboardAction::MarkedRead { tab, id, record } => {
            if let Some(list) = state.tabs.get_mut(tab) {
                list.apply_read(&id, record);
            }
            None
        }
        DashboardAction::MarkReadFailed(message) => {
            state.notify(message, ToastLevel::Warning);
            None
        }
        DashboardAction::Notify { message, level } => {
            state.notify(message, level);
            None
        }
    };

    (state, effect)
}

fn change_page(state: &mut DashboardState, page: u32) -> Option<DashboardEffect> {
    if !state.active_mut().go_to_page(page) {
        return None;
    }
    state.cursor = 0;
    if state.active().fetches_pages() {
        Some(state.start_fetch(state.active_tab))
    } else {
        None
    }
}

fn switch_tab(state: &mut DashboardState, index: usize) -> Option<DashboardEffect> {
    if index >= state.tabs.len() || index == state.active_tab {
        return None;
    }
    state.active_tab = index;
    state.cursor = 0;
    state.search_focused = false;
    state.status_picker = None;
    state.search_input = state.active().search().unwrap_or_default().to_string();

    // Tabs load lazily on first visit
    if state.active().fetch_seq() == 0 {
        Some(state.start_fetch(index))
    } else {
        None
    }
}

fn open_detail(state: &mut DashboardState) -> Option<DashboardEffect> {
    let (id, unread) = state
        .highlighted()
        .map(|record| (record.id().to_string(), !record.is_read()))?;
    state.active_mut().view(&id);
    let receipt = unread && state.active().spec().read_receipt.is_some();
    receipt.then(|| DashboardEffect::MarkRead {
        tab: state.active_tab,
        id,
    })
}

fn apply_search(state: &mut DashboardState) -> Option<DashboardEffect> {
    let query = state.search_input.clone();
    let refetch = state.active_mut().set_search(Some(query));
    state.cursor = 0;
    refetch.then(|| state.start_fetch(state.active_tab))
}

fn cycle_status_filter(state: &mut DashboardState) -> Option<DashboardEffect> {
    let spec = state.active().spec();
    if !spec.supports_status() {
        state.notify(format!("{} have no status", spec.title), ToastLevel::Warning);
        return None;
    }
    let statuses = spec.statuses();
    let next = match state.active().status_filter() {
        None => statuses.first().copied(),
        Some(current) => statuses
            .iter()
            .position(|s| unicase::eq(*s, current))
            .and_then(|i| statuses.get(i + 1))
            .copied(),
    };
    let refetch = state
        .active_mut()
        .set_status_filter(next.map(str::to_string));
    state.cursor = 0;
    match next {
        Some(status) => state.notify(format!("Showing {status} only"), ToastLevel::Info),
        None => state.notify("Status filter cleared", ToastLevel::Info),
    }
    refetch.then(|| state.start_fetch(state.active_tab))
}

fn open_status_picker(state: &mut DashboardState) {
    let spec = state.active().spec();
    if !spec.supports_status() {
        state.notify(
            format!("{} do not support status changes", spec.title),
            ToastLevel::Warning,
        );
        return;
    }
    if state.pending_update.is_some() {
        state.notify("A status update is already in progress", ToastLevel::Warning);
        return;
    }
    let options = spec.statuses();
    let Some((record_id, index)) = state.target().map(|record| {
        let index = record
            .status()
            .and_then(|current| options.iter().position(|s| unicase::eq(*s, current)))
            .unwrap_or(0);
        (record.id().to_string(), index)
    }) else {
        return;
    };
    state.status_picker = Some(StatusPicker {
        record_id,
        options,
        index,
    });
}

fn confirm_status(state: &mut DashboardState) -> Option<DashboardEffect> {
    let picker = state.status_picker.take()?;
    let status = picker.choice()?;
    if state.active().find(&picker.record_id).is_none() {
        state.notify(
            format!("Record not found: {}", picker.record_id),
            ToastLevel::Error,
        );
        return None;
    }
    state.pending_update = Some(picker.record_id.clone());
    state.notify(
        format!("Updating {} to {status}...", picker.record_id),
        ToastLevel::Info,
    );
    Some(DashboardEffect::UpdateStatus {
        tab: state.active_tab,
        id: picker.record_id,
        status,
    })
}

// ============================================================================
// Key Mapping
// ============================================================================

/// Convert a key event to a DashboardAction given the current state
pub fn key_to_action(
    code: KeyCode,
    modifiers: KeyModifiers,
    state: &DashboardState,
) -> Option<DashboardAction> {
    if modifiers.contains(KeyModifiers::CONTROL)
        && matches!(code, KeyCode::Char('c') | KeyCode::Char('q'))
    {
        return Some(DashboardAction::Quit);
    }

    // Modals capture all input
    if state.status_picker.is_some() {
        return match code {
            KeyCode::Esc => Some(DashboardAction::CancelPicker),
            KeyCode::Enter => Some(DashboardAction::ConfirmStatus),
            KeyCode::Char('j') | KeyCode::Down => Some(DashboardAction::PickerDown),
            KeyCode::Char('k') | KeyCode::Up => Some(DashboardAction::PickerUp),
            _ => None,
        };
    }

    if state.search_focused {
        return match code {
            KeyCode::Esc => Some(DashboardAction::ClearSearchAndExit),
            KeyCode::Enter | KeyCode::Tab => Some(DashboardAction::ExitSearch),
            KeyCode::Backspace => Some(DashboardAction::SearchBackspace),
            KeyCode::Char(c) => Some(DashboardAction::SearchInput(c)),
            _ => None,
        };
    }

    if state.detail_open() {
        return match code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => {
                Some(DashboardAction::CloseDetail)
            }
            KeyCode::Char('s') => Some(DashboardAction::OpenStatusPicker),
            KeyCode::Char('y') => Some(DashboardAction::CopyId),
            _ => None,
        };
    }

    match code {
        KeyCode::Char('q') => Some(DashboardAction::Quit),
        KeyCode::Char('j') | KeyCode::Down => Some(DashboardAction::MoveDown),
        KeyCode::Char('k') | KeyCode::Up => Some(DashboardAction::MoveUp),
        KeyCode::Char('l') | KeyCode::Right | KeyCode::PageDown => {
            Some(DashboardAction::NextPage)
        }
        KeyCode::Char('h') | KeyCode::Left | KeyCode::PageUp => {
            Some(DashboardAction::PreviousPage)
        }
        KeyCode::Tab => Some(DashboardAction::NextTab),
        KeyCode::BackTab => Some(DashboardAction::PreviousTab),
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .map(|n| DashboardAction::SelectTab(n as usize - 1)),
        KeyCode::Enter => Some(DashboardAction::OpenDetail),
        KeyCode::Char('/') => Some(DashboardAction::FocusSearch),
        KeyCode::Char('f') => Some(DashboardAction::CycleStatusFilter),
        KeyCode::Char('s') => Some(DashboardAction::OpenStatusPicker),
        KeyCode::Char('y') => Some(DashboardAction::CopyId),
        KeyCode::Char('r') => Some(DashboardAction::Refresh),
        _ => None,
    }
}

// ============================================================================
// View Model
// ============================================================================

/// Computed view model for rendering
#[derive(Debug, Clone)]
pub struct DashboardViewModel {
    pub tabs: Vec<TabViewModel>,
    pub title: &'static str,
    /// Column headers of the record table
    pub columns: Vec<&'static str>,
    pub rows: Vec<RowViewModel>,
    pub pagination: PaginationViewModel,
    /// Set when `rows` is empty
    pub empty_state: Option<EmptyStateKind>,
    /// Search text or error message shown with the empty state
    pub empty_detail: Option<String>,
    pub is_loading: bool,
    pub status_filter: Option<String>,
    pub search: SearchViewModel,
    pub detail: Option<DetailViewModel>,
    pub picker: Option<PickerViewModel>,
    pub toast: Option<Toast>,
    pub shortcuts: Vec<Shortcut>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabViewModel {
    pub label: &'static str,
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowViewModel {
    pub id: String,
    pub cells: Vec<String>,
    pub status: Option<String>,
    pub is_highlighted: bool,
    pub is_updating: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationViewModel {
    /// `Page X of Y`
    pub label: String,
    pub has_previous: bool,
    pub has_next: bool,
    /// Records after filtering, across all pages
    pub record_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchViewModel {
    pub query: String,
    pub is_focused: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailViewModel {
    pub title: &'static str,
    pub id: String,
    pub fields: Vec<(&'static str, String)>,
    pub status: Option<String>,
    pub supports_status: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerViewModel {
    pub record_id: String,
    pub options: &'static [&'static str],
    pub index: usize,
    pub current: Option<String>,
}

/// Pure function: compute view model from state
pub fn compute_dashboard_view_model(state: &DashboardState) -> DashboardViewModel {
    let list = state.active();
    let spec = list.spec();
    let page_items = list.page_items();
    let visible_count = list.visible().len();

    let rows: Vec<RowViewModel> = page_items
        .iter()
        .enumerate()
        .map(|(i, record)| RowViewModel {
            id: record.id().to_string(),
            cells: row_cells(record, spec),
            status: record.status().map(str::to_string),
            is_highlighted: i == state.cursor && !state.detail_open(),
            is_updating: state.pending_update.as_deref() == Some(record.id()),
        })
        .collect();

    let (empty_state, empty_detail) = if !rows.is_empty() {
        (None, None)
    } else if let Some(error) = list.error() {
        (Some(EmptyStateKind::FetchError), Some(error.to_string()))
    } else if list.is_loading() && list.items().is_empty() {
        (Some(EmptyStateKind::Loading), None)
    } else if !list.items().is_empty() {
        (
            Some(EmptyStateKind::NoSearchResults),
            list.search()
                .or(list.status_filter())
                .map(str::to_string),
        )
    } else {
        (Some(EmptyStateKind::NoRecords), None)
    };

    let detail = list.selected().map(|record| DetailViewModel {
        title: spec.title,
        id: record.id().to_string(),
        fields: detail_rows(record, spec),
        status: record.status().map(str::to_string),
        supports_status: spec.supports_status(),
    });

    let picker = state.status_picker.as_ref().map(|picker| PickerViewModel {
        record_id: picker.record_id.clone(),
        options: picker.options,
        index: picker.index,
        current: list
            .find(&picker.record_id)
            .and_then(|r| r.status())
            .map(str::to_string),
    });

    let shortcuts = if picker.is_some() {
        status_picker_shortcuts()
    } else if state.search_focused {
        search_shortcuts()
    } else if detail.is_some() {
        detail_shortcuts(spec.supports_status())
    } else {
        list_shortcuts(spec.supports_status())
    };

    DashboardViewModel {
        tabs: state
            .tabs
            .iter()
            .enumerate()
            .map(|(i, tab)| TabViewModel {
                label: tab.spec().title,
                is_active: i == state.active_tab,
            })
            .collect(),
        title: spec.title,
        columns: spec.columns.iter().map(|c| c.label).collect(),
        rows,
        pagination: PaginationViewModel {
            label: pagination_label(list.page(), list.page_count()),
            has_previous: list.has_previous(),
            has_next: list.has_next(),
            record_count: visible_count,
        },
        empty_state,
        empty_detail,
        is_loading: list.is_loading(),
        status_filter: list.status_filter().map(str::to_string),
        search: SearchViewModel {
            query: if state.search_focused {
                state.search_input.clone()
            } else {
                list.search().unwrap_or_default().to_string()
            },
            is_focused: state.search_focused,
        },
        detail,
        picker,
        toast: state.toast.clone(),
        shortcuts,
    }
}

// ============================================================================
// Tests
// ============================================================================
