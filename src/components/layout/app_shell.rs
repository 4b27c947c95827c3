//! Shared layout wrapper with the marketplace header and content container. It
//! centralizes navigation markup so routes can focus on content. Navigation is
//! client-side only; the API enforces access control on every call.

use crate::{
    app_lib::build_info,
    features::auth::{phone::mask_phone_number, state::use_auth},
};
use leptos::prelude::*;
use leptos_router::{components::A, hooks::use_location};

/// Wraps routes with a header, main content container, and footer.
#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    let auth = use_auth();
    let is_authenticated = auth.is_authenticated;
    let location = use_location();
    let on_sign_in = move || location.pathname.get() == "/signin";
    let masked_phone = move || {
        auth.session
            .get()
            .map(|session| mask_phone_number(&session.phone))
            .unwrap_or_default()
    };

    view! {
        <div class="flex min-h-screen flex-col">
            <header class="border-b border-stone-200 bg-white">
                <div class="mx-auto flex max-w-screen-xl items-center justify-between p-4">
                    <A href="/" {..} class="flex items-center gap-2">
                        <span class="rounded-lg bg-amber-500 px-2 py-1 text-sm font-bold text-stone-900">
                            "S"
                        </span>
                        <span class="text-lg font-semibold text-stone-900">"Suuq"</span>
                    </A>
                    <Show
                        when=move || is_authenticated.get()
                        fallback=move || {
                            view! {
                                <Show when=move || !on_sign_in()>
                                    <A
                                        href="/signin"
                                        {..}
                                        class="rounded-xl px-4 py-2 text-sm font-medium text-stone-700 hover:bg-stone-100"
                                    >
                                        "Sign In"
                                    </A>
                                </Show>
                            }
                        }
                    >
                        <div class="flex items-center gap-3">
                            <span class="text-sm text-stone-500">{masked_phone}</span>
                            <button
                                type="button"
                                class="rounded-xl px-4 py-2 text-sm font-medium text-stone-700 hover:bg-stone-100"
                                on:click=move |_| auth.clear_session()
                            >
                                "Sign Out"
                            </button>
                        </div>
                    </Show>
                </div>
            </header>
            <main class="flex-1">
                <div class="container mx-auto mt-6 p-4">{children()}</div>
            </main>
            <footer class="border-t border-stone-200 py-4 text-center text-xs text-stone-400">
                {format!("Suuq build {}", build_info::git_commit_hash())}
            </footer>
        </div>
    }
}
