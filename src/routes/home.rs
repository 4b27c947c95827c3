//! Default landing page for the marketplace shell. Listing browse and post
//! flows live behind the API gateway and are not part of this app yet.

use crate::{
    components::AppShell,
    features::auth::{phone::mask_phone_number, state::use_auth},
    routes::paths,
};
use leptos::prelude::*;
use leptos_router::components::A;

/// Renders the landing page with a sign-in call to action.
#[component]
pub fn HomePage() -> impl IntoView {
    let auth = use_auth();
    let is_authenticated = auth.is_authenticated;
    let masked_phone = move || {
        auth.session
            .get()
            .map(|session| mask_phone_number(&session.phone))
            .unwrap_or_default()
    };

    view! {
        <AppShell>
            <div class="mx-auto max-w-2xl py-12 text-center">
                <h1 class="text-3xl font-bold text-stone-900">
                    "Buy and sell anything nearby"
                </h1>
                <p class="mt-3 text-stone-500">
                    "Property, vehicles, electronics and more. Sign in with your phone number to post a listing."
                </p>
                <div class="mt-8">
                    <Show
                        when=move || is_authenticated.get()
                        fallback=move || {
                            view! {
                                <A
                                    href=paths::SIGN_IN
                                    {..}
                                    class="inline-block rounded-xl bg-amber-500 px-6 py-3 text-sm font-semibold text-stone-900 hover:bg-amber-400"
                                >
                                    "Sign in with phone"
                                </A>
                            }
                        }
                    >
                        <div class="mx-auto max-w-sm rounded-2xl border border-stone-200 bg-white p-6 text-sm text-stone-600">
                            "Signed in as "
                            <span class="font-medium text-stone-800">{masked_phone}</span>
                        </div>
                    </Show>
                </div>
            </div>
        </AppShell>
    }
}
