//! Paginated task list with completion toggle and admin-only delete. The list
//! refetches when the page changes or the shared refresh counter is bumped.

use crate::components::{Alert, AlertKind, Spinner};
use crate::features::auth::state::use_auth;
use crate::features::tasks::client;
use crate::features::tasks::types::{Pagination, Task, UpdateTaskRequest};
use leptos::{prelude::*, task::spawn_local};

const PAGE_SIZE: u32 = 10;

#[component]
pub fn TaskListPanel(refresh: RwSignal<u32>) -> impl IntoView {
    let auth = use_auth();
    let page = RwSignal::new(1u32);
    let (error, set_error) = signal::<Option<String>>(None);

    let tasks = LocalResource::new(move || {
        // Subscribe to both the page and the invalidation counter.
        let _ = refresh.get();
        let page_value = page.get();
        let token = auth.access_token().unwrap_or_default();
        async move { client::list_tasks(&token, page_value, PAGE_SIZE).await }
    });

    let heading = move || {
        if auth.is_admin.get() {
            "Tasks (All Users)"
        } else {
            "Tasks (My Tasks)"
        }
    };

    view! {
        <div class="space-y-4">
            <h2 class="text-xl font-semibold text-gray-900 dark:text-white">{heading}</h2>

            {move || {
                error
                    .get()
                    .map(|message| view! { <Alert kind=AlertKind::Error message=message /> })
            }}

            <Suspense fallback=move || view! { <div class="py-12 text-center"><Spinner /></div> }>
                {move || match tasks.get() {
                    Some(Ok(response)) if response.tasks.is_empty() => {
                        view! {
                            <p class="py-12 text-center text-sm text-gray-500 dark:text-gray-400">
                                "No tasks found. Create your first task!"
                            </p>
                        }
                            .into_any()
                    }
                    Some(Ok(response)) => {
                        let pagination = response.pagination.clone();
                        view! {
                            <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                                <For
                                    each=move || response.tasks.clone()
                                    key=|task| (task.id, task.completed)
                                    children=move |task| {
                                        view! {
                                            <TaskCard
                                                task=task
                                                refresh=refresh
                                                set_error=set_error
                                            />
                                        }
                                    }
                                />
                            </div>
                            <PaginationControls pagination=pagination page=page />
                        }
                            .into_any()
                    }
                    Some(Err(err)) => {
                        view! {
                            <Alert
                                kind=AlertKind::Error
                                message=err.user_message("Failed to fetch tasks")
                            />
                        }
                            .into_any()
                    }
                    None => {
                        view! { <div class="py-12 text-center"><Spinner /></div> }.into_any()
                    }
                }}
            </Suspense>
        </div>
    }
}

#[component]
fn TaskCard(
    task: Task,
    refresh: RwSignal<u32>,
    set_error: WriteSignal<Option<String>>,
) -> impl IntoView {
    let auth = use_auth();
    let is_admin = auth.is_admin;
    let owner = task.user.as_ref().map(|owner| owner.email.clone());
    let created = task.created_date().to_string();
    let task_id = task.id;
    let completed = task.completed;

    let toggle_task = task.clone();
    let on_toggle = move |_| {
        let task = toggle_task.clone();
        let token = auth.access_token().unwrap_or_default();
        spawn_local(async move {
            let request = UpdateTaskRequest {
                title: task.title.clone(),
                description: task.description.clone(),
                completed: !task.completed,
            };
            match client::update_task(task.id, &request, &token).await {
                Ok(()) => refresh.update(|count| *count += 1),
                Err(err) => set_error.set(Some(err.user_message("Failed to update task"))),
            }
        });
    };

    let on_delete = move |_| {
        if !confirm_delete() {
            return;
        }
        let token = auth.access_token().unwrap_or_default();
        spawn_local(async move {
            match client::delete_task(task_id, &token).await {
                Ok(()) => refresh.update(|count| *count += 1),
                Err(err) => set_error.set(Some(err.user_message("Failed to delete task"))),
            }
        });
    };

    view! {
        <div
            class="rounded-lg border border-gray-200 bg-white p-4 shadow-sm dark:border-gray-700 dark:bg-gray-800"
            class:opacity-70=completed
        >
            <div class="flex items-start justify-between">
                <h3 class="font-semibold text-gray-900 dark:text-white">{task.title.clone()}</h3>
                <div class="flex items-center gap-2">
                    <button
                        type="button"
                        class="text-lg"
                        title={if completed { "Mark as incomplete" } else { "Mark as complete" }}
                        on:click=on_toggle
                    >
                        {if completed { "\u{2713}" } else { "\u{25cb}" }}
                    </button>
                    <Show when=move || is_admin.get()>
                        <button
                            type="button"
                            class="text-sm text-red-600 hover:text-red-800 dark:text-red-400"
                            title="Delete task"
                            on:click=on_delete.clone()
                        >
                            "Delete"
                        </button>
                    </Show>
                </div>
            </div>

            {task
                .description
                .clone()
                .map(|description| {
                    view! {
                        <p class="mt-2 text-sm text-gray-600 dark:text-gray-300">{description}</p>
                    }
                })}

            <div class="mt-3 flex flex-wrap gap-x-4 text-xs text-gray-500 dark:text-gray-400">
                <span>
                    "Status: " {if completed { "Completed" } else { "Pending" }}
                </span>
                <Show when=move || is_admin.get()>
                    {owner.clone().map(|email| view! { <span>"Owner: " {email}</span> })}
                </Show>
                <span>"Created: " {created.clone()}</span>
            </div>
        </div>
    }
}

#[component]
fn PaginationControls(pagination: Pagination, page: RwSignal<u32>) -> impl IntoView {
    let pages = pagination.pages;
    let total = pagination.total;
    let current = pagination.page;

    view! {
        <Show when=move || pages > 1>
            <div class="flex items-center justify-between pt-2">
                <button
                    type="button"
                    class="px-3 py-1.5 text-sm rounded-lg border border-gray-300 disabled:opacity-50 dark:border-gray-600 dark:text-gray-300"
                    disabled={current <= 1}
                    on:click=move |_| page.update(|value| *value = value.saturating_sub(1).max(1))
                >
                    "Previous"
                </button>
                <span class="text-sm text-gray-500 dark:text-gray-400">
                    {format!("Page {current} of {pages} ({total} total tasks)")}
                </span>
                <button
                    type="button"
                    class="px-3 py-1.5 text-sm rounded-lg border border-gray-300 disabled:opacity-50 dark:border-gray-600 dark:text-gray-300"
                    disabled={current >= pages}
                    on:click=move |_| page.update(|value| *value = (*value + 1).min(pages))
                >
                    "Next"
                </button>
            </div>
        </Show>
    }
}

fn confirm_delete() -> bool {
    web_sys::window()
        .and_then(|window| {
            window
                .confirm_with_message("Are you sure you want to delete this task?")
                .ok()
        })
        .unwrap_or(false)
}
