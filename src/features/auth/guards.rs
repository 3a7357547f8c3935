//! Client-side route guards. These are UX only; the API enforces the real
//! access control. Both guards read the current session value reactively so a
//! role change or logout takes effect on the very next render.

use crate::components::Spinner;
use crate::features::auth::state::use_auth;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

/// Redirects anonymous visitors to the login page once the stored-credential
/// check has settled, showing a spinner while it is still running.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();

    Effect::new(move |_| {
        if !auth.initializing.get() && !auth.is_authenticated.get() {
            navigate("/login", Default::default());
        }
    });

    view! {
        <Show
            when=move || auth.is_authenticated.get()
            fallback=move || view! { <div class="mt-12 flex justify-center"><Spinner /></div> }
        >
            {children()}
        </Show>
    }
}

/// Renders children only for an admin session, re-checked on every render.
#[component]
pub fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();

    view! {
        <Show when=move || auth.is_admin.get() fallback=|| view! { <AccessDenied /> }>
            {children()}
        </Show>
    }
}

#[component]
fn AccessDenied() -> impl IntoView {
    view! {
        <div class="rounded-lg border border-gray-200 bg-white p-6 dark:border-gray-700 dark:bg-gray-800">
            <h2 class="text-lg font-semibold text-gray-900 dark:text-white">"Access Denied"</h2>
            <p class="mt-2 text-sm text-gray-500 dark:text-gray-400">
                "Only administrators can access this panel."
            </p>
        </div>
    }
}
