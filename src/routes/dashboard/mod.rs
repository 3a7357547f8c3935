//! Guarded dashboard with tabbed panels: task list, create form, search &
//! filter, and the admin panel. The admin tab is rendered only for an admin
//! session and re-checked on every render; the panel itself is additionally
//! wrapped in `RequireAdmin`. Task creation bumps an explicit refresh counter
//! that the list resource subscribes to.

mod admin;
mod search;
mod task_form;
mod task_list;

use crate::components::AppShell;
use crate::features::auth::state::use_auth;
use crate::features::auth::{RequireAdmin, RequireAuth};
use admin::AdminPanel;
use leptos::prelude::*;
use search::SearchPanel;
use task_form::TaskFormPanel;
use task_list::TaskListPanel;

#[derive(Clone, Copy, PartialEq, Eq)]
enum DashboardTab {
    Tasks,
    Create,
    Search,
    Admin,
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = use_auth();
    let active_tab = RwSignal::new(DashboardTab::Tasks);
    // Explicit cache-invalidation signal: bumped after create/update/delete.
    let refresh = RwSignal::new(0u32);

    let on_task_created = Callback::new(move |()| {
        refresh.update(|count| *count += 1);
        active_tab.set(DashboardTab::Tasks);
    });

    let welcome = move || {
        auth.user()
            .map(|user| format!("Welcome, {} ({})", user.email, user.role.as_str()))
    };

    view! {
        <AppShell>
            <RequireAuth children=move || view! {
                <div class="space-y-6">
                    <div class="space-y-1">
                        <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">
                            "Task Management Dashboard"
                        </h1>
                        <p class="text-sm text-gray-500 dark:text-gray-400">{welcome}</p>
                    </div>

                    <div class="flex flex-wrap gap-2 border-b border-gray-200 dark:border-gray-700 pb-2">
                        <TabButton label="My Tasks" tab=DashboardTab::Tasks active_tab=active_tab />
                        <TabButton label="Create Task" tab=DashboardTab::Create active_tab=active_tab />
                        <TabButton label="Search & Filter" tab=DashboardTab::Search active_tab=active_tab />
                        <Show when=move || auth.is_admin.get()>
                            <TabButton label="Admin Panel" tab=DashboardTab::Admin active_tab=active_tab />
                        </Show>
                    </div>

                    {move || match active_tab.get() {
                        DashboardTab::Tasks => {
                            view! { <TaskListPanel refresh=refresh /> }.into_any()
                        }
                        DashboardTab::Create => {
                            view! { <TaskFormPanel on_created=on_task_created /> }.into_any()
                        }
                        DashboardTab::Search => view! { <SearchPanel /> }.into_any(),
                        DashboardTab::Admin => {
                            view! {
                                <RequireAdmin children=move || view! { <AdminPanel /> } />
                            }
                                .into_any()
                        }
                    }}
                </div>
            } />
        </AppShell>
    }
}

#[component]
fn TabButton(
    label: &'static str,
    tab: DashboardTab,
    active_tab: RwSignal<DashboardTab>,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class="px-4 py-2 text-sm font-medium rounded-t-lg"
            class:text-blue-700=move || active_tab.get() == tab
            class:border-b-2=move || active_tab.get() == tab
            class:border-blue-700=move || active_tab.get() == tab
            class:text-gray-500=move || active_tab.get() != tab
            on:click=move |_| active_tab.set(tab)
        >
            {label}
        </button>
    }
}
