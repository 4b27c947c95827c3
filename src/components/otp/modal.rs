//! Modal for entering the SMS verification code. The view is a thin shell
//! around the `CodeEntry` state machine: every input, keystroke, and timer
//! callback feeds the machine and then executes the commands it returns.
//! The entered code stays inside this widget; hosts only see the resulting
//! session or error through callbacks.

use crate::{
    app_lib::AppError,
    components::{Button, Spinner},
    features::auth::{
        client,
        entry::{format_cooldown, CodeEntry, EntryCommand, AUTO_SUBMIT_DELAY_MS},
        phone::mask_phone_number,
        types::{AuthSession, SendCodeRequest, VerifyCodeRequest},
    },
};
use gloo_timers::callback::{Interval, Timeout};
use leptos::{html, prelude::*};

/// Code entry dialog for one phone number. The host decides when to show it
/// and unmounts it from `on_verified` or `on_dismiss`.
#[component]
pub fn OtpModal(
    /// Phone number the code was sent to, in E.164 form.
    phone: String,
    /// Number of code digits the backend issued.
    length: usize,
    /// Seconds the user must wait between resend requests.
    cooldown_seconds: u32,
    on_verified: Callback<AuthSession>,
    on_error: Callback<AppError>,
    on_dismiss: Callback<()>,
) -> impl IntoView {
    let masked_phone = mask_phone_number(&phone);
    let entry = RwSignal::new(CodeEntry::new(length));
    let length = entry.with_untracked(|e| e.length());

    let slot_refs = StoredValue::new_local(
        (0..length)
            .map(|_| NodeRef::<html::Input>::new())
            .collect::<Vec<_>>(),
    );
    let cooldown_timer = StoredValue::new_local(None::<Interval>);
    let debounce_timer = StoredValue::new_local(None::<Timeout>);

    let phone_for_verify = phone.clone();
    let verify_action = Action::new_local(move |code: &String| {
        let request = VerifyCodeRequest {
            phone: phone_for_verify.clone(),
            code: code.clone(),
        };
        async move { client::verify_code(&request).await }
    });

    let phone_for_resend = phone.clone();
    let resend_action = Action::new_local(move |_: &()| {
        let request = SendCodeRequest {
            phone: phone_for_resend.clone(),
        };
        async move { client::send_code(&request).await }
    });

    let focus_slot = move |index: usize| {
        let slot_ref = slot_refs.with_value(|refs| refs.get(index).copied());
        if let Some(slot_ref) = slot_ref {
            if let Some(input) = slot_ref.get_untracked() {
                let _ = input.focus();
            }
        }
    };

    let execute = move |commands: Vec<EntryCommand>| {
        for command in commands {
            match command {
                EntryCommand::Focus(index) => focus_slot(index),
                EntryCommand::ScheduleAutoSubmit => {
                    // Replacing a pending timer cancels it.
                    let timer = Timeout::new(AUTO_SUBMIT_DELAY_MS, move || {
                        let followups = entry
                            .try_update(|e| e.submit())
                            .unwrap_or_default();
                        for followup in followups {
                            if let EntryCommand::Verify(code) = followup {
                                verify_action.dispatch(code);
                            }
                        }
                    });
                    debounce_timer.set_value(Some(timer));
                }
                EntryCommand::Verify(code) => {
                    verify_action.dispatch(code);
                }
                EntryCommand::SendCode => {
                    resend_action.dispatch(());
                }
            }
        }
    };

    // Focus the first cell once it is mounted.
    Effect::new(move |_| {
        let first = slot_refs.with_value(|refs| refs.first().copied());
        if let Some(slot_ref) = first {
            if let Some(input) = slot_ref.get() {
                let _ = input.focus();
            }
        }
    });

    // The 1Hz countdown runs only while a cooldown is pending. The interval is
    // dropped here rather than inside its own callback.
    Effect::new(move |_| {
        let remaining = entry.with(|e| e.cooldown_remaining());
        let running = cooldown_timer.with_value(|timer| timer.is_some());
        if remaining > 0 && !running {
            let timer = Interval::new(1_000, move || {
                entry.try_update(|e| e.tick());
            });
            cooldown_timer.set_value(Some(timer));
        } else if remaining == 0 && running {
            cooldown_timer.set_value(None);
        }
    });

    let phone_for_session = phone.clone();
    Effect::new(move |_| {
        if let Some(result) = verify_action.value().get() {
            match result {
                Ok(response) => {
                    on_verified.run(AuthSession {
                        access_token: response.access_token,
                        phone: phone_for_session.clone(),
                    });
                }
                Err(err) => {
                    entry.try_update(|e| e.verification_failed());
                    on_error.run(err);
                }
            }
        }
    });

    // The cooldown already restarted when the resend was requested; a failed
    // send only surfaces the error.
    Effect::new(move |_| {
        if let Some(Err(err)) = resend_action.value().get() {
            on_error.run(err);
        }
    });

    on_cleanup(move || {
        // Dropping a timer cancels it.
        if let Some(mut stored) = cooldown_timer.try_write_value() {
            stored.take();
        }
        if let Some(mut stored) = debounce_timer.try_write_value() {
            stored.take();
        }
    });

    view! {
        <div class="fixed inset-0 z-50 flex items-center justify-center bg-stone-900/60 px-4">
            <div
                class="w-full max-w-sm rounded-2xl bg-white p-6 shadow-xl sm:p-8"
                role="dialog"
                aria-modal="true"
                aria-label="Verification code"
            >
                <div class="flex items-start justify-between">
                    <div>
                        <h2 class="text-xl font-semibold text-stone-900">"Confirm your number"</h2>
                        <p class="mt-1 text-sm text-stone-500">
                            "We sent a code to "
                            <span class="font-medium text-stone-700">{masked_phone}</span>
                        </p>
                    </div>
                    <button
                        type="button"
                        class="rounded-lg p-1.5 text-stone-400 hover:bg-stone-100 hover:text-stone-600"
                        aria-label="Close"
                        on:click=move |_| on_dismiss.run(())
                    >
                        "✕"
                    </button>
                </div>

                <div class="mt-6 flex justify-center gap-3">
                    {(0..length)
                        .map(|index| {
                            let slot_ref = slot_refs.with_value(|refs| refs[index]);
                            view! {
                                <input
                                    node_ref=slot_ref
                                    type="text"
                                    inputmode="numeric"
                                    autocomplete="one-time-code"
                                    maxlength="1"
                                    class="h-14 w-12 rounded-xl border border-stone-300 bg-stone-50 text-center text-2xl font-semibold text-stone-900 focus:border-amber-500 focus:outline-none focus:ring-2 focus:ring-amber-200 disabled:opacity-60"
                                    prop:value=move || entry.with(|e| e.slot_display(index))
                                    disabled=move || entry.with(|e| e.is_submitting())
                                    on:input=move |ev| {
                                        let value = event_target_value(&ev);
                                        let commands = entry
                                            .try_update(|e| e.input(index, &value))
                                            .unwrap_or_default();
                                        // A rejected value leaves the signal unchanged, so the
                                        // cell is rewritten by hand.
                                        let slot_ref = slot_refs.with_value(|refs| refs[index]);
                                        if let Some(input) = slot_ref.get_untracked() {
                                            input.set_value(
                                                &entry.with_untracked(|e| e.slot_display(index)),
                                            );
                                        }
                                        execute(commands);
                                    }
                                    on:keydown=move |ev| {
                                        match ev.key().as_str() {
                                            "Backspace" => {
                                                let commands = entry
                                                    .try_update(|e| e.backspace(index))
                                                    .unwrap_or_default();
                                                if !commands.is_empty() {
                                                    // Keep the delete from also editing the
                                                    // cell we move into.
                                                    ev.prevent_default();
                                                }
                                                execute(commands);
                                            }
                                            "Enter" => {
                                                let commands = entry
                                                    .try_update(|e| e.submit())
                                                    .unwrap_or_default();
                                                execute(commands);
                                            }
                                            _ => {}
                                        }
                                    }
                                />
                            }
                        })
                        .collect_view()}
                </div>

                <div class="mt-6">
                    <Button
                        disabled=Signal::derive(move || !entry.with(|e| e.can_submit()))
                        on:click=move |_| {
                            let commands = entry.try_update(|e| e.submit()).unwrap_or_default();
                            execute(commands);
                        }
                    >
                        {move || {
                            if entry.with(|e| e.is_submitting()) {
                                view! {
                                    <span class="inline-flex items-center justify-center gap-2">
                                        <Spinner/>
                                        "Verifying..."
                                    </span>
                                }
                                    .into_any()
                            } else {
                                view! { <span>"Verify"</span> }.into_any()
                            }
                        }}
                    </Button>
                </div>

                <div class="mt-4 text-center text-sm text-stone-500">
                    {move || {
                        let remaining = entry.with(|e| e.cooldown_remaining());
                        if remaining > 0 {
                            view! {
                                <span>
                                    {format!("Resend code in {}", format_cooldown(remaining))}
                                </span>
                            }
                                .into_any()
                        } else {
                            view! {
                                <button
                                    type="button"
                                    class="font-medium text-amber-700 hover:text-amber-800 disabled:cursor-not-allowed disabled:opacity-60"
                                    disabled=move || entry.with(|e| e.is_submitting())
                                    on:click=move |_| {
                                        let commands = entry
                                            .try_update(|e| e.request_resend(cooldown_seconds))
                                            .unwrap_or_default();
                                        execute(commands);
                                    }
                                >
                                    "Resend code"
                                </button>
                            }
                                .into_any()
                        }
                    }}
                </div>
            </div>
        </div>
    }
}
