//! Phone sign-in route.
//!
//! Flow:
//! 1. Collect and validate the phone number.
//! 2. Request an SMS code and open the entry modal.
//! 3. Store the session returned by a verified code and go home.

use crate::{
    app_lib::{AppError, config::AppConfig},
    components::{Alert, AlertKind, AppShell, Button, OtpModal, Spinner},
    features::auth::{
        client,
        phone::{is_valid_phone, normalize_phone_number},
        state::use_auth,
        types::{AuthSession, SendCodeRequest},
    },
    routes::paths,
};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

#[component]
pub fn SignInPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let config = AppConfig::load();
    let code_length = config.otp_code_length;
    let cooldown_seconds = config.resend_cooldown_seconds;

    let (phone_input, set_phone_input) = signal(String::new());
    let (error, set_error) = signal::<Option<AppError>>(None);
    let (pending_phone, set_pending_phone) = signal::<Option<String>>(None);

    let send_action = Action::new_local(move |phone: &String| {
        let phone = phone.clone();
        let request = SendCodeRequest {
            phone: phone.clone(),
        };
        async move { client::send_code(&request).await.map(|()| phone) }
    });

    Effect::new(move |_| {
        if let Some(result) = send_action.value().get() {
            match result {
                Ok(phone) => {
                    set_error.set(None);
                    set_pending_phone.set(Some(phone));
                }
                Err(err) => set_error.set(Some(err)),
            }
        }
    });

    // A verified code flips the session; leave the page once that happens.
    let navigate_for_session = navigate.clone();
    Effect::new(move |_| {
        if auth.is_authenticated.get() {
            navigate_for_session(paths::HOME, Default::default());
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);

        let normalized = normalize_phone_number(&phone_input.get_untracked());
        if !is_valid_phone(&normalized) {
            set_error.set(Some(AppError::Validation(
                "Enter a valid phone number with country code, e.g. +252 61 234 5678.".to_string(),
            )));
            return;
        }

        send_action.dispatch(normalized);
    };

    let modal = move || {
        pending_phone.get().map(|phone| {
            view! {
                <OtpModal
                    phone=phone
                    length=code_length
                    cooldown_seconds=cooldown_seconds
                    on_verified=Callback::new(move |session: AuthSession| auth.set_session(session))
                    on_error=Callback::new(move |err: AppError| set_error.set(Some(err)))
                    on_dismiss=Callback::new(move |_: ()| set_pending_phone.set(None))
                />
            }
        })
    };

    view! {
        <AppShell>
            <form class="mx-auto max-w-sm" on:submit=on_submit>
                <h1 class="text-2xl font-semibold text-stone-900">"Sign in"</h1>
                <p class="mt-1 mb-6 text-sm text-stone-500">
                    "We will text you a one-time code. Carrier rates may apply."
                </p>
                <div class="mb-5">
                    <label class="mb-2 block text-sm font-medium text-stone-700" for="phone">
                        "Phone number"
                    </label>
                    <input
                        id="phone"
                        type="tel"
                        class="block w-full rounded-xl border border-stone-300 bg-stone-50 p-2.5 text-sm text-stone-900 focus:border-amber-500 focus:ring-amber-500"
                        autocomplete="tel"
                        placeholder="+252 61 234 5678"
                        required
                        on:input=move |event| set_phone_input.set(event_target_value(&event))
                    />
                </div>
                <Button button_type="submit" disabled=send_action.pending()>
                    "Send code"
                </Button>
                {move || {
                    send_action
                        .pending()
                        .get()
                        .then_some(view! { <div class="mt-4"><Spinner /></div> })
                }}
            </form>
            // The entry dialog covers the form, so errors surface as a toast
            // above both.
            {move || {
                error
                    .get()
                    .map(|err| {
                        view! {
                            <div class="fixed inset-x-0 top-4 z-[60] mx-auto w-full max-w-sm px-4">
                                <Alert kind=AlertKind::Error message=err.to_string() />
                            </div>
                        }
                    })
            }}
            {modal}
        </AppShell>
    }
}
