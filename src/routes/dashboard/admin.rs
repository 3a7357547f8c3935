//! Admin panel for provisioning administrator accounts. Local validation
//! (mismatch, minimum length) never reaches the network; server rejections are
//! rendered inline. Always rendered behind `RequireAdmin`.

use crate::components::{Alert, AlertKind, Button};
use crate::features::auth::client;
use crate::features::auth::state::use_auth;
use crate::features::auth::types::RegisterRequest;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

/// Minimum password length enforced by the client for early feedback.
const MIN_PASSWORD_LENGTH: usize = 8;

#[component]
pub fn AdminPanel() -> impl IntoView {
    let auth = use_auth();
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (confirm_password, set_confirm_password) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (success, set_success) = signal(false);

    let create_action = Action::new_local(move |request: &RegisterRequest| {
        let request = request.clone();
        let token = auth.access_token().unwrap_or_default();
        async move { client::create_admin(&request, &token).await }
    });

    Effect::new(move |_| {
        if let Some(result) = create_action.value().get() {
            match result {
                Ok(()) => {
                    set_email.set(String::new());
                    set_password.set(String::new());
                    set_confirm_password.set(String::new());
                    set_success.set(true);
                }
                Err(err) => set_error.set(Some(err.user_message("Failed to create admin user"))),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);
        set_success.set(false);

        let password_value = password.get_untracked();
        if password_value != confirm_password.get_untracked() {
            set_error.set(Some("Passwords do not match".to_string()));
            return;
        }
        if password_value.len() < MIN_PASSWORD_LENGTH {
            set_error.set(Some(format!(
                "Password must be at least {MIN_PASSWORD_LENGTH} characters"
            )));
            return;
        }

        create_action.dispatch(RegisterRequest {
            email: email.get_untracked().trim().to_string(),
            password: password_value,
        });
    };

    view! {
        <div class="max-w-lg space-y-4">
            <div class="space-y-1">
                <h2 class="text-xl font-semibold text-gray-900 dark:text-white">
                    "Admin Management"
                </h2>
                <p class="text-sm text-gray-500 dark:text-gray-400">
                    "Create new administrator accounts"
                </p>
            </div>

            <form class="space-y-4" on:submit=on_submit>
                <div>
                    <label
                        class="block mb-2 text-sm font-medium text-gray-900 dark:text-white"
                        for="admin_email"
                    >
                        "Admin Email"
                    </label>
                    <input
                        id="admin_email"
                        type="email"
                        class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:text-white"
                        placeholder="Enter admin email"
                        required
                        prop:value=email
                        on:input=move |event| set_email.set(event_target_value(&event))
                    />
                </div>
                <div>
                    <label
                        class="block mb-2 text-sm font-medium text-gray-900 dark:text-white"
                        for="admin_password"
                    >
                        "Password"
                    </label>
                    <input
                        id="admin_password"
                        type="password"
                        class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:text-white"
                        placeholder="Enter password"
                        required
                        prop:value=password
                        on:input=move |event| set_password.set(event_target_value(&event))
                    />
                    <p class="mt-1 text-xs text-gray-500 dark:text-gray-400">
                        "Must contain uppercase, lowercase, and number"
                    </p>
                </div>
                <div>
                    <label
                        class="block mb-2 text-sm font-medium text-gray-900 dark:text-white"
                        for="admin_confirm_password"
                    >
                        "Confirm Password"
                    </label>
                    <input
                        id="admin_confirm_password"
                        type="password"
                        class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:text-white"
                        placeholder="Confirm password"
                        required
                        prop:value=confirm_password
                        on:input=move |event| {
                            set_confirm_password.set(event_target_value(&event));
                        }
                    />
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
                                message="Admin user created successfully!".to_string()
                            />
                        })
                }}

                <Button button_type="submit" disabled=create_action.pending()>
                    {move || {
                        if create_action.pending().get() {
                            "Creating Admin..."
                        } else {
                            "Create Admin User"
                        }
                    }}
                </Button>
            </form>
        </div>
    }
}
