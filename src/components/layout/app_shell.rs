//! Shared layout wrapper with the navigation bar and content container. It
//! centralizes header markup so routes can focus on content. Navigation is
//! client-side only; the API enforces the real access control.

use crate::app_lib::build_info;
use crate::features::auth::state::use_auth;
use leptos::{prelude::*, task::spawn_local};
use leptos_router::{components::A, hooks::use_navigate};

const NAV_LINK_CLASS: &str = "block py-2 px-3 text-gray-900 rounded hover:bg-gray-100 md:hover:bg-transparent md:border-0 md:hover:text-blue-700 md:p-0 dark:text-white md:dark:hover:text-blue-500 dark:hover:bg-gray-700 dark:hover:text-white md:dark:hover:bg-transparent";

/// Wraps routes with a header and main content container.
#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let is_authenticated = auth.is_authenticated;
    let user_label = move || {
        auth.user()
            .map(|user| format!("{} ({})", user.email, user.role.as_str()))
    };

    let on_logout = move |_| {
        let navigate = navigate.clone();
        spawn_local(async move {
            auth.logout().await;
            navigate("/login", Default::default());
        });
    };

    view! {
        <div class="min-h-screen flex flex-col">
            <header class="border-b border-gray-200 dark:bg-gray-900 dark:border-gray-700">
                <div class="max-w-screen-xl flex flex-wrap items-center justify-between mx-auto p-4">
                    <A href="/" {..} class="flex items-center space-x-3">
                        <span class="font-semibold whitespace-nowrap dark:text-white">
                            "TaskManager"
                        </span>
                    </A>
                    <ul class="font-medium flex flex-row items-center space-x-6">
                        <Show
                            when=move || is_authenticated.get()
                            fallback=move || {
                                view! {
                                    <li>
                                        <A href="/login" {..} class=NAV_LINK_CLASS>
                                            "Login"
                                        </A>
                                    </li>
                                    <li>
                                        <A href="/register" {..} class=NAV_LINK_CLASS>
                                            "Register"
                                        </A>
                                    </li>
                                }
                            }
                        >
                            <li class="text-sm text-gray-500 dark:text-gray-400">
                                {user_label}
                            </li>
                            <li>
                                <A href="/" {..} class=NAV_LINK_CLASS>
                                    "Dashboard"
                                </A>
                            </li>
                            <li>
                                <button type="button" class=NAV_LINK_CLASS on:click=on_logout.clone()>
                                    "Logout"
                                </button>
                            </li>
                        </Show>
                    </ul>
                </div>
            </header>
            <main class="flex-1">
                <div class="container mx-auto p-4 mt-6">
                    {children()}
                </div>
            </main>
            <footer class="p-4 text-center text-xs text-gray-400 dark:text-gray-500">
                {format!(
                    "taskman-web {} \u{b7} {}",
                    env!("CARGO_PKG_VERSION"),
                    build_info::git_commit_hash()
                )}
            </footer>
        </div>
    }
}
