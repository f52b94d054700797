//! Goals Page Component
//!
//! Goal list with progress bars, a creation form and a detail panel for the
//! selected goal.

use chrono::NaiveDate;
use fittrack_client::models::{today, Goal, GoalPatch, GoalType};
use fittrack_client::{Goals, Phase};
use leptos::prelude::*;

use crate::components::{DeleteConfirmButton, ErrorBanner};
use crate::hooks::{use_resource, ResourceHandle};

const DATE_FORMAT: &str = "%Y-%m-%d";

fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).ok()
}

#[component]
pub fn GoalsPage() -> impl IntoView {
    let goals = use_resource::<Goals>();
    let (show_form, set_show_form) = signal(false);

    let error = Signal::derive(move || goals.state.with(|s| s.error.clone()));

    view! {
        <section class="page goals-page">
            <header class="page-header">
                <h1>"Goals"</h1>
                <button on:click=move |_| set_show_form.update(|v| *v = !*v)>
                    {move || if show_form.get() { "Cancel" } else { "+ New goal" }}
                </button>
            </header>

            <ErrorBanner message=error />

            <Show when=move || show_form.get()>
                <GoalForm goals=goals on_created=Callback::new(move |_| set_show_form.set(false)) />
            </Show>

            <Show
                when=move || goals.state.with(|s| s.phase != Phase::Loading || !s.items.is_empty())
                fallback=|| view! { <p class="loading">"Loading goals..."</p> }
            >
                <Show
                    when=move || goals.state.with(|s| !s.items.is_empty())
                    fallback=|| view! { <p class="empty">"No goals yet."</p> }
                >
                    <ul class="goal-list">
                        <For
                            each=move || goals.state.with(|s| s.items.clone())
                            key=|goal| (goal.id, goal.progress, goal.updated_at.clone())
                            children=move |goal| view! { <GoalRow goals=goals goal=goal /> }
                        />
                    </ul>
                </Show>
            </Show>

            {move || goals.state.with(|s| s.selected.clone()).map(|goal| view! {
                <GoalDetail goals=goals goal=goal />
            })}
        </section>
    }
}

#[component]
fn GoalRow(goals: ResourceHandle<Goals>, goal: Goal) -> impl IntoView {
    let id = goal.id;
    let percentage = goal.progress_percentage();
    let next_progress = goal.progress.saturating_add(1);
    let is_selected = move || goals.state.with(|s| s.is_selected(id));

    view! {
        <li
            class=move || if is_selected() { "goal-row selected" } else { "goal-row" }
            on:click=move |_| goals.select(Some(id))
        >
            <span class=format!("goal-type {}", goal.goal_type.color())>{goal.goal_type.as_str()}</span>
            <span class="goal-name">{goal.name.clone()}</span>
            <div class="progress-bar">
                <div class="progress-fill" style=format!("width: {}%", percentage)></div>
            </div>
            <span class="goal-progress">{format!("{}/{} ({}%)", goal.progress, goal.target, percentage)}</span>
            <button
                class="progress-btn"
                on:click=move |ev| {
                    ev.stop_propagation();
                    goals.update(id, GoalPatch::progress(next_progress));
                }
            >
                "+1"
            </button>
            <DeleteConfirmButton
                prompt="Delete this goal?"
                on_confirm=Callback::new(move |_| goals.delete(id, |_: &str| true))
            />
        </li>
    }
}

#[component]
fn GoalDetail(goals: ResourceHandle<Goals>, goal: Goal) -> impl IntoView {
    let deadline = match (goal.deadline, goal.days_remaining(today())) {
        (Some(date), Some(days)) if days >= 0 => format!("{} ({} days left)", date, days),
        (Some(date), Some(_)) => format!("{} (overdue)", date),
        _ => "No deadline".to_string(),
    };

    view! {
        <aside class="detail-panel">
            <header>
                <h2>{goal.name.clone()}</h2>
                <button class="close-btn" on:click=move |_| goals.select(None)>"×"</button>
            </header>
            <dl>
                <dt>"Type"</dt>
                <dd>{goal.goal_type.as_str()}</dd>
                <dt>"Progress"</dt>
                <dd>{format!("{} of {} ({}%)", goal.progress, goal.target, goal.progress_percentage())}</dd>
                <dt>"Deadline"</dt>
                <dd>{deadline}</dd>
            </dl>
        </aside>
    }
}

#[component]
fn GoalForm(goals: ResourceHandle<Goals>, on_created: Callback<()>) -> impl IntoView {
    let draft = move || goals.state.with(|s| s.draft.clone());
    let submitting = move || goals.state.with(|s| s.loading);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if draft().name.trim().is_empty() {
            return;
        }
        goals.create(move |created| {
            if created {
                on_created.run(());
            }
        });
    };

    view! {
        <form class="goal-form" on:submit=on_submit>
            <input
                type="text"
                placeholder="Goal name"
                prop:value=move || draft().name
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    goals.edit_draft(|d| d.name = value);
                }
            />
            <select on:change=move |ev| {
                let value = event_target_value(&ev);
                goals.edit_draft(|d| d.goal_type = GoalType::from_str(&value));
            }>
                {GoalType::ALL.into_iter().map(|goal_type| view! {
                    <option
                        value=goal_type.as_str()
                        selected=move || draft().goal_type == goal_type
                    >
                        {goal_type.as_str()}
                    </option>
                }).collect_view()}
            </select>
            <label>
                "Target"
                <input
                    type="number"
                    min="0"
                    prop:value=move || draft().target.to_string()
                    on:input=move |ev| {
                        let target = event_target_value(&ev).parse().unwrap_or(0);
                        goals.edit_draft(|d| d.target = target);
                    }
                />
            </label>
            <label>
                "Progress"
                <input
                    type="number"
                    min="0"
                    prop:value=move || draft().progress.to_string()
                    on:input=move |ev| {
                        let progress = event_target_value(&ev).parse().unwrap_or(0);
                        goals.edit_draft(|d| d.progress = progress);
                    }
                />
            </label>
            <label>
                "Deadline"
                <input
                    type="date"
                    prop:value=move || draft().deadline.map(|d| d.format(DATE_FORMAT).to_string()).unwrap_or_default()
                    on:input=move |ev| {
                        let deadline = parse_date(&event_target_value(&ev));
                        goals.edit_draft(|d| d.deadline = deadline);
                    }
                />
            </label>
            <button type="submit" disabled=submitting>"Create goal"</button>
        </form>
    }
}
