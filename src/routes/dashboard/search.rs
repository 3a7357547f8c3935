//! Search and filter panel. Both forms share one result list; results render
//! read-only task cards with the admin-only owner column.

use crate::components::{Alert, AlertKind, Button, Spinner};
use crate::features::auth::state::use_auth;
use crate::features::tasks::client;
use crate::features::tasks::types::{FilterTasksRequest, SearchTasksRequest, Task};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

const RESULT_LIMIT: u32 = 20;

#[component]
pub fn SearchPanel() -> impl IntoView {
    let auth = use_auth();
    let (query, set_query) = signal(String::new());
    let (status, set_status) = signal(String::new());
    let (results, set_results) = signal::<Option<Vec<Task>>>(None);
    let (error, set_error) = signal::<Option<String>>(None);

    let search_action = Action::new_local(move |query: &String| {
        let request = SearchTasksRequest {
            query: query.clone(),
            page: 1,
            limit: RESULT_LIMIT,
        };
        let token = auth.access_token().unwrap_or_default();
        async move { client::search_tasks(&request, &token).await }
    });

    let filter_action = Action::new_local(move |completed: &bool| {
        let request = FilterTasksRequest {
            completed: *completed,
            page: 1,
            limit: RESULT_LIMIT,
        };
        let token = auth.access_token().unwrap_or_default();
        async move { client::filter_tasks(&request, &token).await }
    });

    Effect::new(move |_| {
        if let Some(result) = search_action.value().get() {
            match result {
                Ok(response) => set_results.set(Some(response.tasks)),
                Err(err) => set_error.set(Some(err.user_message("Search failed"))),
            }
        }
    });

    Effect::new(move |_| {
        if let Some(result) = filter_action.value().get() {
            match result {
                Ok(response) => set_results.set(Some(response.tasks)),
                Err(err) => set_error.set(Some(err.user_message("Filter failed"))),
            }
        }
    });

    let loading = Signal::derive(move || {
        search_action.pending().get() || filter_action.pending().get()
    });

    let on_search = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);

        let query_value = query.get_untracked().trim().to_string();
        if query_value.is_empty() {
            set_error.set(Some("Please enter a search query".to_string()));
            return;
        }
        search_action.dispatch(query_value);
    };

    let on_filter = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);

        match status.get_untracked().as_str() {
            "completed" => {
                filter_action.dispatch(true);
            }
            "pending" => {
                filter_action.dispatch(false);
            }
            _ => set_error.set(Some("Please select a filter option".to_string())),
        }
    };

    let on_clear = move |_| {
        set_results.set(None);
        set_query.set(String::new());
        set_status.set(String::new());
        set_error.set(None);
    };

    view! {
        <div class="space-y-6">
            <h2 class="text-xl font-semibold text-gray-900 dark:text-white">
                "Search & Filter Tasks"
            </h2>

            <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                <form class="space-y-3" on:submit=on_search>
                    <h3 class="font-medium text-gray-900 dark:text-white">"Search Tasks"</h3>
                    <input
                        type="text"
                        class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:text-white"
                        placeholder="Search by title or description..."
                        prop:value=query
                        on:input=move |event| set_query.set(event_target_value(&event))
                    />
                    <Button button_type="submit" disabled=loading>
                        "Search"
                    </Button>
                </form>

                <form class="space-y-3" on:submit=on_filter>
                    <h3 class="font-medium text-gray-900 dark:text-white">"Filter by Status"</h3>
                    <select
                        class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:text-white"
                        prop:value=status
                        on:change=move |event| set_status.set(event_target_value(&event))
                    >
                        <option value="">"Select status..."</option>
                        <option value="completed">"Completed"</option>
                        <option value="pending">"Pending"</option>
                    </select>
                    <Button button_type="submit" disabled=loading>
                        "Filter"
                    </Button>
                </form>
            </div>

            {move || {
                error
                    .get()
                    .map(|message| view! { <Alert kind=AlertKind::Error message=message /> })
            }}
            {move || loading.get().then_some(view! { <Spinner /> })}

            {move || {
                results
                    .get()
                    .map(|tasks| {
                        let count = tasks.len();
                        view! {
                            <div class="space-y-3">
                                <div class="flex items-center justify-between">
                                    <h3 class="font-medium text-gray-900 dark:text-white">
                                        {format!("Results ({count} found)")}
                                    </h3>
                                    <button
                                        type="button"
                                        class="text-sm text-blue-600 hover:text-blue-800 dark:text-blue-400"
                                        on:click=on_clear
                                    >
                                        "Clear Results"
                                    </button>
                                </div>
                                {if tasks.is_empty() {
                                    view! {
                                        <p class="text-sm text-gray-500 dark:text-gray-400">
                                            "No tasks found matching your criteria."
                                        </p>
                                    }
                                        .into_any()
                                } else {
                                    view! {
                                        <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                                            <For
                                                each=move || tasks.clone()
                                                key=|task| task.id
                                                children=move |task| view! { <ResultCard task=task /> }
                                            />
                                        </div>
                                    }
                                        .into_any()
                                }}
                            </div>
                        }
                    })
            }}
        </div>
    }
}

#[component]
fn ResultCard(task: Task) -> impl IntoView {
    let auth = use_auth();
    let is_admin = auth.is_admin;
    let owner = task.user.as_ref().map(|owner| owner.email.clone());
    let created = task.created_date().to_string();
    let completed = task.completed;

    view! {
        <div
            class="rounded-lg border border-gray-200 bg-white p-4 shadow-sm dark:border-gray-700 dark:bg-gray-800"
            class:opacity-70=completed
        >
            <h4 class="font-semibold text-gray-900 dark:text-white">{task.title.clone()}</h4>
            {task
                .description
                .clone()
                .map(|description| {
                    view! {
                        <p class="mt-2 text-sm text-gray-600 dark:text-gray-300">{description}</p>
                    }
                })}
            <div class="mt-3 flex flex-wrap gap-x-4 text-xs text-gray-500 dark:text-gray-400">
                <span>"Status: " {if completed { "Completed" } else { "Pending" }}</span>
                <Show when=move || is_admin.get()>
                    {owner.clone().map(|email| view! { <span>"Owner: " {email}</span> })}
                </Show>
                <span>"Created: " {created.clone()}</span>
            </div>
        </div>
    }
}
