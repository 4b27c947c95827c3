//! Minimalistic 404 page for unknown routes.

use crate::components::AppShell;
use leptos::prelude::*;
use leptos_router::components::A;

/// Renders a minimal not-found page for top-level route fallbacks.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <AppShell>
            <div class="flex min-h-[50vh] flex-col items-center justify-center px-4 text-center">
                <h1 class="select-none text-9xl font-black text-stone-200">"404"</h1>
                <p class="mt-2 text-2xl font-bold text-stone-900">"Page not found"</p>
                <p class="mx-auto mt-4 max-w-sm text-stone-500">
                    "The listing or page you requested is missing or was removed."
                </p>
                <A
                    href="/"
                    {..}
                    class="mt-6 inline-block rounded-xl bg-amber-500 px-5 py-2.5 text-sm font-semibold text-stone-900 hover:bg-amber-400"
                >
                    "Go Home"
                </A>
            </div>
        </AppShell>
    }
}
