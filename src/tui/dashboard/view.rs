//! Main dashboard view component
//!
//! Owns a single [`DashboardState`], feeds key events through
//! `key_to_action` and the reducer, and runs the effects the reducer asks
//! for: list fetches and status writes on async handlers, clipboard copies
//! in place.

// Allow clone on Copy types - used intentionally in async closures for clarity
#![allow(clippy::clone_on_copy)]

use clipboard_rs::Clipboard;
use iocraft::prelude::*;

use crate::api::{FieldFormat, ListQuery, Resource};
use crate::commands::AppContext;
use crate::listing::{
    FetchTicket, fetch_failure, fetch_list, send_read, send_status, update_failure,
};
use crate::tui::components::{Footer, ToastLevel, render_toast};
use crate::tui::theme::theme;

use super::components::{
    DashboardHeader, DetailModal, PaginationBar, RecordTable, StatusPickerModal, TabBar,
};
use super::model::{
    DashboardAction, DashboardEffect, DashboardState, compute_dashboard_view_model,
    key_to_action, reduce_dashboard_state,
};

type FetchRequest = (usize, FetchTicket, ListQuery);
type UpdateRequest = (usize, String, &'static str);
type ReadRequest = (usize, String);

/// Async handlers the effects are dispatched to
#[derive(Clone)]
struct EffectHandlers {
    fetch: Handler<FetchRequest>,
    update: Handler<UpdateRequest>,
    read: Handler<ReadRequest>,
}

/// Props for the Dashboard component
#[derive(Default, Props)]
pub struct DashboardProps {
    /// Client, session and list settings
    pub context: Option<AppContext>,
    /// Resource tab to open first
    pub initial: Option<Resource>,
}

/// Run one action through the reducer and store the result
fn apply(state: &mut State<DashboardState>, action: DashboardAction) -> Option<DashboardEffect> {
    let current = state.read().clone();
    let (next, effect) = reduce_dashboard_state(current, action);
    state.set(next);
    effect
}

fn run_effect(
    effect: DashboardEffect,
    state: &mut State<DashboardState>,
    handlers: &EffectHandlers,
) {
    match effect {
        DashboardEffect::Fetch { tab, ticket, query } => {
            handlers.fetch.clone()((tab, ticket, query));
        }
        DashboardEffect::UpdateStatus { tab, id, status } => {
            handlers.update.clone()((tab, id, status));
        }
        DashboardEffect::MarkRead { tab, id } => {
            handlers.read.clone()((tab, id));
        }
        DashboardEffect::CopyId(id) => {
            let action = match copy_to_clipboard(&id) {
                Ok(()) => DashboardAction::Notify {
                    message: format!("Copied {id}"),
                    level: ToastLevel::Success,
                },
                Err(e) => DashboardAction::Notify {
                    message: format!("Clipboard unavailable: {e}"),
                    level: ToastLevel::Error,
                },
            };
            apply(state, action);
        }
    }
}

fn copy_to_clipboard(text: &str) -> Result<(), String> {
    clipboard_rs::ClipboardContext::new()
        .and_then(|ctx| ctx.set_text(text.to_string()))
        .map_err(|e| e.to_string())
}

/// Full-screen dashboard over every resource the session may see
#[component]
pub fn Dashboard<'a>(props: &DashboardProps, mut hooks: Hooks) -> impl Into<AnyElement<'a>> {
    let (width, height) = hooks.use_terminal_size();
    let mut system = hooks.use_context_mut::<SystemContext>();
    let theme = theme();

    let context = props.context.clone();
    let initial = props.initial;
    let mut state = hooks.use_state(|| match &context {
        Some(ctx) => DashboardState::new(
            &Resource::visible_to(ctx.session.role()),
            initial,
            ctx.page_size,
        ),
        None => DashboardState::new(&[], None, 0),
    });

    // Async fetch handler; results go back through the reducer, which
    // drops responses of superseded fetches
    let fetch_handler: Handler<FetchRequest> = hooks.use_async_handler({
        let state_setter = state.clone();
        let context = context.clone();

        move |(tab, ticket, query): FetchRequest| {
            let mut state_setter = state_setter.clone();
            let context = context.clone();

            async move {
                let Some(ctx) = context else {
                    return;
                };
                let Some(spec) = state_setter.read().tabs.get(tab).map(|list| list.spec()) else {
                    return;
                };
                let result = fetch_list(&ctx.client, spec, query, &ctx.session, ctx.timeout)
                    .await
                    .map_err(|err| fetch_failure(spec, err).to_string());
                apply(
                    &mut state_setter,
                    DashboardAction::FetchFinished {
                        tab,
                        ticket,
                        result,
                    },
                );
            }
        }
    });

    // Async status write handler; the table changes only once the server
    // has confirmed
    let update_handler: Handler<UpdateRequest> = hooks.use_async_handler({
        let state_setter = state.clone();
        let context = context.clone();

        move |(tab, id, status): UpdateRequest| {
            let mut state_setter = state_setter.clone();
            let context = context.clone();

            async move {
                let Some(ctx) = context else {
                    return;
                };
                let Some(spec) = state_setter.read().tabs.get(tab).map(|list| list.spec()) else {
                    return;
                };
                let action =
                    match send_status(&ctx.client, spec, &id, status, &ctx.session, ctx.timeout)
                        .await
                    {
                        Ok(record) => {
                            tracing::info!(resource = spec.name, id = %id, status, "status updated");
                            DashboardAction::StatusUpdated {
                                tab,
                                id,
                                status: status.to_string(),
                                record,
                            }
                        }
                        Err(err) => DashboardAction::StatusUpdateFailed(
                            update_failure(spec, err).to_string(),
                        ),
                    };
                apply(&mut state_setter, action);
            }
        }
    });

    // Read receipts for opened records; failures only warn
    let read_handler: Handler<ReadRequest> = hooks.use_async_handler({
        let state_setter = state.clone();
        let context = context.clone();

        move |(tab, id): ReadRequest| {
            let mut state_setter = state_setter.clone();
            let context = context.clone();

            async move {
                let Some(ctx) = context else {
                    return;
                };
                let Some(spec) = state_setter.read().tabs.get(tab).map(|list| list.spec()) else {
                    return;
                };
                let action = match send_read(&ctx.client, spec, &id, &ctx.session, ctx.timeout)
                    .await
                {
                    Ok(record) => DashboardAction::MarkedRead { tab, id, record },
                    Err(err) => {
                        tracing::warn!(resource = spec.name, id = %id, error = %err, "read receipt failed");
                        DashboardAction::MarkReadFailed(update_failure(spec, err).to_string())
                    }
                };
                apply(&mut state_setter, action);
            }
        }
    });

    let handlers = EffectHandlers {
        fetch: fetch_handler,
        update: update_handler,
        read: read_handler,
    };

    // Trigger initial fetch on startup
    let mut fetch_started = hooks.use_state(|| false);
    if !fetch_started.get() {
        fetch_started.set(true);
        if let Some(effect) = apply(&mut state, DashboardAction::Refresh) {
            run_effect(effect, &mut state, &handlers);
        }
    }

    hooks.use_terminal_events({
        let handlers = handlers.clone();

        move |event| match event {
            TerminalEvent::Key(KeyEvent {
                code,
                kind,
                modifiers,
                ..
            }) if kind != KeyEventKind::Release => {
                let action = key_to_action(code, modifiers, &state.read());
                if let Some(action) = action
                    && let Some(effect) = apply(&mut state, action)
                {
                    run_effect(effect, &mut state, &handlers);
                }
            }
            _ => {}
        }
    });

    // Exit if requested
    if state.read().should_exit {
        system.exit();
    }

    if state.read().tabs.is_empty() {
        return element! {
            View(width, height, justify_content: JustifyContent::Center, align_items: AlignItems::Center) {
                Text(content: "No resources available for this session", color: theme.text_dimmed)
            }
        };
    }

    let vm = compute_dashboard_view_model(&state.read());
    let status_column = state
        .read()
        .active()
        .spec()
        .columns
        .iter()
        .position(|column| matches!(column.format, FieldFormat::Status));
    let api_url = context
        .as_ref()
        .map(|ctx| ctx.client.base_url().to_string())
        .unwrap_or_default();
    let session_label = context.as_ref().map(|ctx| match ctx.session.email() {
        Some(email) => format!("{email} ({})", ctx.session.role()),
        None => ctx.session.role().to_string(),
    });

    element! {
        View(
            width,
            height,
            flex_direction: FlexDirection::Column,
            background_color: theme.background,
        ) {
            DashboardHeader(
                api_url,
                session: session_label,
                is_loading: vm.is_loading,
            )

            TabBar(
                tabs: vm.tabs.clone(),
                search_query: Some(vm.search.query.clone()),
                search_focused: vm.search.is_focused,
                status_filter: vm.status_filter.clone(),
            )

            RecordTable(
                columns: vm.columns.clone(),
                rows: vm.rows.clone(),
                empty_state: vm.empty_state,
                empty_detail: vm.empty_detail.clone(),
                status_column,
            )

            PaginationBar(pagination: Some(vm.pagination.clone()))

            Footer(shortcuts: vm.shortcuts.clone())

            #(render_toast(&vm.toast))

            DetailModal(detail: vm.detail.clone())

            StatusPickerModal(picker: vm.picker.clone())
        }
    }
}
