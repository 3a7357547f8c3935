//! Create-task form. The title is required locally; everything else is the
//! server's call. On success the parent is notified so the list refreshes and
//! the tasks tab comes back into view.

use crate::components::{Alert, AlertKind, Button};
use crate::features::auth::state::use_auth;
use crate::features::tasks::client;
use crate::features::tasks::types::CreateTaskRequest;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

/// Longest accepted task title, matching the API's limit.
const MAX_TITLE_CHARS: usize = 200;
/// Longest accepted description, matching the API's limit.
const MAX_DESCRIPTION_CHARS: usize = 1000;

#[component]
pub fn TaskFormPanel(on_created: Callback<()>) -> impl IntoView {
    let auth = use_auth();
    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (success, set_success) = signal(false);

    let create_action = Action::new_local(move |request: &CreateTaskRequest| {
        let request = request.clone();
        let token = auth.access_token().unwrap_or_default();
        async move { client::create_task(&request, &token).await }
    });

    Effect::new(move |_| {
        if let Some(result) = create_action.value().get() {
            match result {
                Ok(()) => {
                    set_title.set(String::new());
                    set_description.set(String::new());
                    set_success.set(true);
                    on_created.run(());
                }
                Err(err) => set_error.set(Some(err.user_message("Failed to create task"))),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);
        set_success.set(false);

        let title_value = title.get_untracked().trim().to_string();
        if title_value.is_empty() {
            set_error.set(Some("Task title is required".to_string()));
            return;
        }

        create_action.dispatch(CreateTaskRequest {
            title: title_value,
            description: description.get_untracked(),
        });
    };

    view! {
        <div class="max-w-lg space-y-4">
            <h2 class="text-xl font-semibold text-gray-900 dark:text-white">"Create New Task"</h2>

            <form class="space-y-4" on:submit=on_submit>
                <div>
                    <label
                        class="block mb-2 text-sm font-medium text-gray-900 dark:text-white"
                        for="title"
                    >
                        "Task Title *"
                    </label>
                    <input
                        id="title"
                        type="text"
                        class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:text-white"
                        placeholder="Enter task title"
                        maxlength=MAX_TITLE_CHARS.to_string()
                        required
                        prop:value=title
                        on:input=move |event| set_title.set(event_target_value(&event))
                    />
                </div>
                <div>
                    <label
                        class="block mb-2 text-sm font-medium text-gray-900 dark:text-white"
                        for="description"
                    >
                        "Description"
                    </label>
                    <textarea
                        id="description"
                        class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:text-white"
                        placeholder="Enter task description (optional)"
                        maxlength=MAX_DESCRIPTION_CHARS.to_string()
                        rows="4"
                        prop:value=description
                        on:input=move |event| set_description.set(event_target_value(&event))
                    ></textarea>
                </div>

                {move || {
                    error
                        .get()
                        .map(|message| view! { <Alert kind=AlertKind::Error message=message /> })
                }}
                {move || {
                    success
                        .get()
                        .then_some(view! {
                            <Alert
                                kind=AlertKind::Success
                                message="Task created successfully!".to_string()
                            />
                        })
                }}

                <Button button_type="submit" disabled=create_action.pending()>
                    {move || if create_action.pending().get() { "Creating..." } else { "Create Task" }}
                </Button>
            </form>
        </div>
    }
}
