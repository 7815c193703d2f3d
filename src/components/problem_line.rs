//! Problem Line Component
//!
//! Per-widget error text; each widget reports only its own failures.

use leptos::prelude::*;

#[component]
pub fn ProblemLine(problem: ReadSignal<Option<String>>) -> impl IntoView {
    move || problem.get().map(|msg| view! { <p class="widget-problem">{msg}</p> })
}
