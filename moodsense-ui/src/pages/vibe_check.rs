//! Vibe Check Page
//!
//! The employee's daily check-in: mood, battery, pressure source and notes.

use gloo_timers::future::TimeoutFuture;
use leptos::*;

use crate::api;
use crate::components::blocking_alert;
use crate::state::{
    battery_bar_class, deliver, Phase, SubmitError, VibeForm, MOODS, PRESSURE_OPTIONS,
    SUBMIT_DELAY_MS,
};

#[component]
pub fn VibeCheck() -> impl IntoView {
    let form = create_rw_signal(VibeForm::default());
    let submitted = create_memo(move |_| form.with(|f| f.phase == Phase::Submitted));

    let on_submit = move |_: ev::MouseEvent| {
        let entry = match form.try_update(VibeForm::begin_submit) {
            Some(Ok(entry)) => entry,
            Some(Err(SubmitError::MissingPressureSource)) => {
                blocking_alert(&SubmitError::MissingPressureSource.to_string());
                return;
            }
            Some(Err(SubmitError::NotComposing)) | None => return,
        };

        spawn_local(async move {
            let result = deliver(
                entry,
                |entry| async move { api::submit_vibe(&entry).await },
                || TimeoutFuture::new(SUBMIT_DELAY_MS),
            )
            .await;

            match result {
                Ok(()) => form.update(VibeForm::submit_succeeded),
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to submit check-in: {}", e).into());
                    form.update(VibeForm::submit_failed);
                }
            }
        });
    };

    view! {
        <Show
            when=move || submitted.get()
            fallback=move || view! { <CheckInForm form=form on_submit=on_submit /> }
        >
            <div class="h-full w-full min-h-screen bg-slate-900 flex items-center justify-center">
                <div class="text-center p-12 bg-white/10 border border-white/10 rounded-3xl shadow-2xl max-w-md w-full">
                    <div class="text-8xl mb-6 animate-bounce">"🎉"</div>
                    <h2 class="text-4xl font-extrabold text-white mb-2 tracking-tight">"Vibe Logged!"</h2>
                    <p class="text-indigo-200 mb-8 font-medium">"Your data is safe with us."</p>
                    <button
                        on:click=move |_| form.update(VibeForm::check_in_again)
                        class="w-full bg-white text-indigo-900 font-bold py-4 px-6 rounded-xl hover:bg-indigo-50 transition-all"
                    >
                        "Check In Again"
                    </button>
                </div>
            </div>
        </Show>
    }
}

#[component]
fn CheckInForm(
    form: RwSignal<VibeForm>,
    on_submit: impl Fn(ev::MouseEvent) + Copy + 'static,
) -> impl IntoView {
    let battery = create_memo(move |_| form.with(|f| f.battery));
    let submitting = create_memo(move |_| form.with(|f| f.is_submitting()));

    view! {
        <div class="h-full w-full min-h-screen bg-slate-900 flex flex-col md:flex-row">
            // Mood and energy
            <div class="w-full md:w-2/5 p-8 md:p-12 flex flex-col justify-between border-r border-white/10">
                <div>
                    <h2 class="text-2xl font-bold text-white">"👋 Welcome Back, Manu!"</h2>
                    <p class="text-indigo-300 text-sm">"Here is your daily wellness check-in."</p>
                </div>

                <div class="flex-1 flex flex-col items-center justify-center py-8">
                    <div class="text-[120px] md:text-[160px]">{move || form.with(|f| f.mood.clone())}</div>
                    <p class="text-white/50 text-sm mt-6 font-bold tracking-widest uppercase">"Current Vibe"</p>
                </div>

                <div class="mt-auto">
                    <div class="flex justify-between text-white mb-2 font-bold text-sm">
                        <span>"ENERGY"</span>
                        <span>{move || format!("{}%", battery.get())}</span>
                    </div>
                    <div class="h-4 w-full bg-slate-700/50 rounded-full overflow-hidden">
                        <div
                            class=move || format!("h-full transition-all duration-500 {}", battery_bar_class(battery.get()))
                            style=move || format!("width: {}%", battery.get())
                        />
                    </div>
                    <input
                        type="range"
                        min="0"
                        max="100"
                        prop:value=move || battery.get().to_string()
                        on:input=move |ev| form.update(|f| f.set_battery_input(&event_target_value(&ev)))
                        class="w-full mt-4 h-2 cursor-pointer accent-white"
                    />
                </div>
            </div>

            // Controls
            <div class="w-full md:w-3/5 p-8 md:p-12 flex flex-col gap-8">
                <div>
                    <label class="text-xs font-bold text-slate-400 uppercase tracking-wider mb-4 block">"Select Forecast"</label>
                    <div class="grid grid-cols-7 gap-3">
                        {MOODS
                            .iter()
                            .map(|&mood| {
                                view! {
                                    <button
                                        on:click=move |_| form.update(|f| f.set_mood(mood))
                                        class=move || {
                                            let base = "aspect-square rounded-2xl text-3xl flex items-center justify-center transition-all";
                                            if form.with(|f| f.mood == mood) {
                                                format!("{} bg-white/10 border border-indigo-500/50 scale-110", base)
                                            } else {
                                                format!("{} bg-slate-800/50 grayscale opacity-40 hover:opacity-100", base)
                                            }
                                        }
                                    >
                                        {mood}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <div>
                    <label class="text-xs font-bold text-slate-400 uppercase tracking-wider mb-4 block">
                        "Primary Driver " <span class="text-red-400">"*"</span>
                    </label>
                    <div class="flex flex-wrap gap-3">
                        {PRESSURE_OPTIONS
                            .iter()
                            .map(|&(label, icon)| {
                                view! {
                                    <button
                                        on:click=move |_| form.update(|f| f.set_pressure_source(label))
                                        class=move || {
                                            let base = "px-5 py-3 rounded-xl text-sm font-bold border transition-all flex items-center gap-2";
                                            if form.with(|f| f.pressure_source == label) {
                                                format!("{} bg-indigo-600 border-indigo-500 text-white", base)
                                            } else {
                                                format!("{} bg-slate-800/80 border-slate-700 text-slate-400", base)
                                            }
                                        }
                                    >
                                        <span class="text-base">{icon}</span>
                                        {label}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <div class="flex-1 min-h-[150px]">
                    <label class="text-xs font-bold text-slate-400 uppercase tracking-wider mb-4 block">"Notes (NLP Analysis)"</label>
                    <textarea
                        class="w-full h-full p-5 bg-slate-800/50 border border-slate-700 rounded-2xl text-slate-200 text-sm"
                        placeholder="Start typing to unlock AI insights..."
                        prop:value=move || form.with(|f| f.vent_text.clone())
                        on:input=move |ev| form.update(|f| f.set_vent_text(event_target_value(&ev)))
                    />
                </div>

                <button
                    on:click=on_submit
                    disabled=move || submitting.get()
                    class=move || {
                        let base = "w-full py-5 rounded-2xl font-bold text-lg tracking-wide shadow-xl transition-all";
                        if submitting.get() {
                            format!("{} bg-slate-700 text-slate-500 cursor-not-allowed", base)
                        } else {
                            format!("{} bg-gradient-to-r from-indigo-600 to-violet-600 text-white", base)
                        }
                    }
                >
                    {move || if submitting.get() { "Syncing..." } else { "Update Status" }}
                </button>
            </div>
        </div>
    }
}
