//! Habits Page Component
//!
//! Habit list with a one-click "done today" action and the completion
//! history of the selected habit.

use chrono::NaiveDate;
use fittrack_client::models::{Frequency, Habit, HabitLog};
use fittrack_client::{Habits, Phase};
use leptos::prelude::*;

use crate::components::{DeleteConfirmButton, ErrorBanner};
use crate::hooks::{use_resource, ResourceHandle};

#[component]
pub fn HabitsPage() -> impl IntoView {
    let habits = use_resource::<Habits>();
    let (show_form, set_show_form) = signal(false);
    let (logs, set_logs) = signal(Vec::<HabitLog>::new());

    let error = Signal::derive(move || habits.state.with(|s| s.error.clone()));

    let refresh_logs = move |id: u32| {
        habits.spawn(move |hook| async move {
            if let Some(fetched) = hook.fetch_selected_logs(id).await {
                let _ = set_logs.try_set(fetched);
            }
        });
    };

    let open_habit = move |id: u32| {
        if !habits.state.with_untracked(|s| s.is_selected(id)) {
            set_logs.set(Vec::new());
        }
        habits.select(Some(id));
        refresh_logs(id);
    };

    view! {
        <section class="page habits-page">
            <header class="page-header">
                <h1>"Habits"</h1>
                <button on:click=move |_| set_show_form.update(|v| *v = !*v)>
                    {move || if show_form.get() { "Cancel" } else { "+ New habit" }}
                </button>
            </header>

            <ErrorBanner message=error />

            <Show when=move || show_form.get()>
                <HabitForm habits=habits on_created=Callback::new(move |_| set_show_form.set(false)) />
            </Show>

            <Show
                when=move || habits.state.with(|s| s.phase != Phase::Loading || !s.items.is_empty())
                fallback=|| view! { <p class="loading">"Loading habits..."</p> }
            >
                <Show
                    when=move || habits.state.with(|s| !s.items.is_empty())
                    fallback=|| view! { <p class="empty">"No habits yet."</p> }
                >
                    <ul class="habit-list">
                        <For
                            each=move || habits.state.with(|s| s.items.clone())
                            key=|habit| (habit.id, habit.name.clone(), habit.frequency)
                            children=move |habit| view! {
                                <HabitRow
                                    habits=habits
                                    habit=habit
                                    on_open=Callback::new(open_habit)
                                    on_logged=Callback::new(refresh_logs)
                                />
                            }
                        />
                    </ul>
                </Show>
            </Show>

            {move || habits.state.with(|s| s.selected.clone()).map(|habit| view! {
                <HabitDetail habits=habits habit=habit logs=logs />
            })}
        </section>
    }
}

#[component]
fn HabitRow(
    habits: ResourceHandle<Habits>,
    habit: Habit,
    on_open: Callback<u32>,
    on_logged: Callback<u32>,
) -> impl IntoView {
    let id = habit.id;
    let is_selected = move || habits.state.with(|s| s.is_selected(id));

    let log_today = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        habits.spawn(move |hook| async move {
            let logged = hook.log_completion(id).await;
            if logged && hook.state().is_selected(id) {
                on_logged.run(id);
            }
        });
    };

    view! {
        <li
            class=move || if is_selected() { "habit-row selected" } else { "habit-row" }
            on:click=move |_| on_open.run(id)
        >
            <span class="habit-name">{habit.name.clone()}</span>
            <span class="habit-frequency">{habit.frequency.as_str()}</span>
            <span class="habit-reminder">{habit.reminder_time.clone()}</span>
            <button class="log-btn" on:click=log_today>"Log today"</button>
            <DeleteConfirmButton
                prompt="Delete this habit?"
                on_confirm=Callback::new(move |_| habits.delete(id, |_: &str| true))
            />
        </li>
    }
}

#[component]
fn HabitDetail(
    habits: ResourceHandle<Habits>,
    habit: Habit,
    logs: ReadSignal<Vec<HabitLog>>,
) -> impl IntoView {
    view! {
        <aside class="detail-panel">
            <header>
                <h2>{habit.name.clone()}</h2>
                <button class="close-btn" on:click=move |_| habits.select(None)>"×"</button>
            </header>
            <dl>
                <dt>"Frequency"</dt>
                <dd>{habit.frequency.as_str()}</dd>
                <dt>"Reminder"</dt>
                <dd>{habit.reminder_time.clone()}</dd>
                <dt>"Next"</dt>
                <dd>{habit.next_occurrence.map(|d| d.to_string()).unwrap_or_else(|| "-".to_string())}</dd>
            </dl>
            {habit.description.filter(|d| !d.is_empty()).map(|text| view! { <p class="notes">{text}</p> })}
            <h3>"History"</h3>
            {move || {
                let entries = logs.get();
                if entries.is_empty() {
                    view! { <p class="empty">"Not logged yet."</p> }.into_any()
                } else {
                    view! {
                        <ul class="habit-logs">
                            {entries.into_iter().map(|log| view! {
                                <li class=if log.completed { "log done" } else { "log missed" }>
                                    {log.timestamp}
                                </li>
                            }).collect_view()}
                        </ul>
                    }.into_any()
                }
            }}
        </aside>
    }
}

#[component]
fn HabitForm(habits: ResourceHandle<Habits>, on_created: Callback<()>) -> impl IntoView {
    let draft = move || habits.state.with(|s| s.draft.clone());
    let submitting = move || habits.state.with(|s| s.loading);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if draft().name.trim().is_empty() {
            return;
        }
        habits.create(move |created| {
            if created {
                on_created.run(());
            }
        });
    };

    view! {
        <form class="habit-form" on:submit=on_submit>
            <input
                type="text"
                placeholder="Habit name"
                prop:value=move || draft().name
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    habits.edit_draft(|d| d.name = value);
                }
            />
            <select on:change=move |ev| {
                let value = event_target_value(&ev);
                habits.edit_draft(|d| d.frequency = Frequency::from_str(&value));
            }>
                {Frequency::CHOICES.into_iter().map(|frequency| view! {
                    <option
                        value=frequency.as_str()
                        selected=move || draft().frequency == frequency
                    >
                        {frequency.as_str()}
                    </option>
                }).collect_view()}
            </select>
            <label>
                "Reminder"
                <input
                    type="time"
                    prop:value=move || draft().reminder_time
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        habits.edit_draft(|d| d.reminder_time = value);
                    }
                />
            </label>
            <label>
                "Starts"
                <input
                    type="date"
                    prop:value=move || draft().next_occurrence.to_string()
                    on:input=move |ev| {
                        if let Ok(date) = NaiveDate::parse_from_str(&event_target_value(&ev), "%Y-%m-%d") {
                            habits.edit_draft(|d| d.next_occurrence = date);
                        }
                    }
                />
            </label>
            <textarea
                placeholder="Description"
                prop:value=move || draft().description
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    habits.edit_draft(|d| d.description = value);
                }
            ></textarea>
            <button type="submit" disabled=submitting>"Create habit"</button>
        </form>
    }
}
