//! Workouts Page Component
//!
//! Workout log. Selecting a row pulls the full workout with its exercises;
//! the creation form queues exercises before submitting.

use chrono::NaiveDate;
use fittrack_client::models::{ExerciseEntry, Workout, WorkoutDetail};
use fittrack_client::{Phase, Workouts};
use leptos::prelude::*;

use crate::components::{DeleteConfirmButton, ErrorBanner};
use crate::hooks::{use_resource, ResourceHandle};

#[component]
pub fn WorkoutsPage() -> impl IntoView {
    let workouts = use_resource::<Workouts>();
    let (show_form, set_show_form) = signal(false);

    let error = Signal::derive(move || workouts.state.with(|s| s.error.clone()));

    view! {
        <section class="page workouts-page">
            <header class="page-header">
                <h1>"Workouts"</h1>
                <button on:click=move |_| set_show_form.update(|v| *v = !*v)>
                    {move || if show_form.get() { "Cancel" } else { "+ Log workout" }}
                </button>
            </header>

            <ErrorBanner message=error />

            <Show when=move || show_form.get()>
                <WorkoutForm
                    workouts=workouts
                    on_created=Callback::new(move |_| set_show_form.set(false))
                />
            </Show>

            <Show
                when=move || workouts.state.with(|s| s.phase != Phase::Loading || !s.items.is_empty())
                fallback=|| view! { <p class="loading">"Loading workouts..."</p> }
            >
                <Show
                    when=move || workouts.state.with(|s| !s.items.is_empty())
                    fallback=|| view! { <p class="empty">"No workouts logged."</p> }
                >
                    <ul class="workout-list">
                        <For
                            each=move || workouts.state.with(|s| s.items.clone())
                            key=|workout| (workout.id, workout.duration, workout.workout_type.clone())
                            children=move |workout| view! { <WorkoutRow workouts=workouts workout=workout /> }
                        />
                    </ul>
                </Show>
            </Show>

            {move || workouts.state.with(|s| s.selected.clone()).map(|detail| view! {
                <WorkoutDetailPanel workouts=workouts detail=detail />
            })}
        </section>
    }
}

#[component]
fn WorkoutRow(workouts: ResourceHandle<Workouts>, workout: Workout) -> impl IntoView {
    let id = workout.id;
    let is_selected = move || workouts.state.with(|s| s.is_selected(id));
    let date = workout.date.map(|d| d.to_string()).unwrap_or_default();

    let open = move |_| {
        workouts.select(Some(id));
        workouts.spawn(move |hook| async move {
            hook.fetch_details(id).await;
        });
    };

    view! {
        <li
            class=move || if is_selected() { "workout-row selected" } else { "workout-row" }
            on:click=open
        >
            <span class="workout-date">{date}</span>
            <span class="workout-type">{workout.workout_type.clone()}</span>
            <span class="workout-duration">{format!("{} min", workout.duration)}</span>
            <DeleteConfirmButton
                prompt="Delete this workout?"
                on_confirm=Callback::new(move |_| workouts.delete(id, |_: &str| true))
            />
        </li>
    }
}

#[component]
fn WorkoutDetailPanel(workouts: ResourceHandle<Workouts>, detail: WorkoutDetail) -> impl IntoView {
    let WorkoutDetail { workout, exercises } = detail;

    view! {
        <aside class="detail-panel">
            <header>
                <h2>{workout.workout_type.clone()}</h2>
                <button class="close-btn" on:click=move |_| workouts.select(None)>"×"</button>
            </header>
            <p class="workout-meta">
                {workout.date.map(|d| d.to_string()).unwrap_or_default()}
                " · "
                {format!("{} min", workout.duration)}
            </p>
            {workout.notes.filter(|n| !n.is_empty()).map(|notes| view! { <p class="notes">{notes}</p> })}
            {if exercises.is_empty() {
                view! { <p class="empty">"No exercises recorded."</p> }.into_any()
            } else {
                view! {
                    <table class="exercise-table">
                        <thead>
                            <tr><th>"Exercise"</th><th>"Sets"</th><th>"Reps"</th><th>"Weight"</th></tr>
                        </thead>
                        <tbody>
                            {exercises.into_iter().map(|ex| view! {
                                <tr>
                                    <td>{ex.name}</td>
                                    <td>{ex.sets.map(|v| v.to_string()).unwrap_or_default()}</td>
                                    <td>{ex.reps.map(|v| v.to_string()).unwrap_or_default()}</td>
                                    <td>{ex.weight.map(|v| v.to_string()).unwrap_or_default()}</td>
                                </tr>
                            }).collect_view()}
                        </tbody>
                    </table>
                }.into_any()
            }}
        </aside>
    }
}

#[component]
fn WorkoutForm(workouts: ResourceHandle<Workouts>, on_created: Callback<()>) -> impl IntoView {
    let draft = move || workouts.state.with(|s| s.draft.clone());
    let submitting = move || workouts.state.with(|s| s.loading);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if draft().workout_type.trim().is_empty() {
            return;
        }
        workouts.create(move |created| {
            if created {
                on_created.run(());
            }
        });
    };

    view! {
        <form class="workout-form" on:submit=on_submit>
            <input
                type="text"
                placeholder="Type (e.g. Strength)"
                prop:value=move || draft().workout_type
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    workouts.edit_draft(|d| d.workout_type = value);
                }
            />
            <label>
                "Duration (min)"
                <input
                    type="number"
                    min="0"
                    prop:value=move || draft().duration.to_string()
                    on:input=move |ev| {
                        let duration = event_target_value(&ev).parse().unwrap_or(0);
                        workouts.edit_draft(|d| d.duration = duration);
                    }
                />
            </label>
            <input
                type="date"
                prop:value=move || draft().date.to_string()
                on:input=move |ev| {
                    if let Ok(date) = NaiveDate::parse_from_str(&event_target_value(&ev), "%Y-%m-%d") {
                        workouts.edit_draft(|d| d.date = date);
                    }
                }
            />
            <textarea
                placeholder="Notes"
                prop:value=move || draft().notes
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    workouts.edit_draft(|d| d.notes = value);
                }
            ></textarea>

            <ExerciseQueue workouts=workouts />

            <button type="submit" disabled=submitting>"Save workout"</button>
        </form>
    }
}

/// Exercises waiting to be sent with the new workout
#[component]
fn ExerciseQueue(workouts: ResourceHandle<Workouts>) -> impl IntoView {
    let (exercise_id, set_exercise_id) = signal(0u32);
    let (exercise_name, set_exercise_name) = signal(String::new());
    let (sets, set_sets) = signal(0u32);
    let (reps, set_reps) = signal(0u32);
    let (weight, set_weight) = signal(0.0f64);

    let add = move |_| {
        if exercise_id.get() == 0 {
            return;
        }
        let entry = ExerciseEntry {
            exercise_id: exercise_id.get(),
            exercise_name: exercise_name.get(),
            sets: sets.get(),
            reps: reps.get(),
            weight: weight.get(),
            ..Default::default()
        };
        workouts.with_hook(|hook| hook.add_exercise(entry));
        set_exercise_id.set(0);
        set_exercise_name.set(String::new());
        set_sets.set(0);
        set_reps.set(0);
        set_weight.set(0.0);
    };

    view! {
        <fieldset class="exercise-queue">
            <legend>"Exercises"</legend>
            <ul>
                {move || {
                    workouts.state.with(|s| s.draft.exercises.clone())
                        .into_iter()
                        .enumerate()
                        .map(|(index, entry)| view! {
                            <li>
                                <span>{format!("{} × {} × {}", entry.exercise_name, entry.sets, entry.reps)}</span>
                                <button
                                    type="button"
                                    class="remove-btn"
                                    on:click=move |_| workouts.with_hook(|hook| hook.remove_exercise(index))
                                >
                                    "Remove"
                                </button>
                            </li>
                        })
                        .collect_view()
                }}
            </ul>
            <div class="exercise-row">
                <input
                    type="number"
                    min="0"
                    placeholder="Exercise #"
                    prop:value=move || exercise_id.get().to_string()
                    on:input=move |ev| set_exercise_id.set(event_target_value(&ev).parse().unwrap_or(0))
                />
                <input
                    type="text"
                    placeholder="Name"
                    prop:value=move || exercise_name.get()
                    on:input=move |ev| set_exercise_name.set(event_target_value(&ev))
                />
                <input
                    type="number"
                    min="0"
                    placeholder="Sets"
                    prop:value=move || sets.get().to_string()
                    on:input=move |ev| set_sets.set(event_target_value(&ev).parse().unwrap_or(0))
                />
                <input
                    type="number"
                    min="0"
                    placeholder="Reps"
                    prop:value=move || reps.get().to_string()
                    on:input=move |ev| set_reps.set(event_target_value(&ev).parse().unwrap_or(0))
                />
                <input
                    type="number"
                    min="0"
                    step="0.5"
                    placeholder="Weight"
                    prop:value=move || weight.get().to_string()
                    on:input=move |ev| set_weight.set(event_target_value(&ev).parse().unwrap_or(0.0))
                />
                <button type="button" on:click=add>"Add exercise"</button>
            </div>
        </fieldset>
    }
}
