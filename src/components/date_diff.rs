//! Date Difference Component

use leptos::prelude::*;
use tableau_core::datediff;

#[component]
pub fn DateDiff() -> impl IntoView {
    let today = chrono::Local::now().date_naive().format("%Y-%m-%d").to_string();
    let (from, set_from) = signal(today.clone());
    let (to, set_to) = signal(today);

    let outcome = move || {
        let (from, to) = (from.get(), to.get());
        if from.is_empty() || to.is_empty() {
            return String::new();
        }
        match datediff::days_between(&from, &to) {
            Ok(span) => span.describe(),
            Err(e) => e.to_string(),
        }
    };

    view! {
        <section class="widget datediff-widget">
            <h2>"Days between"</h2>
            <div class="datediff-row">
                <input
                    type="date"
                    prop:value=move || from.get()
                    on:input=move |ev| set_from.set(event_target_value(&ev))
                />
                <span>"→"</span>
                <input
                    type="date"
                    prop:value=move || to.get()
                    on:input=move |ev| set_to.set(event_target_value(&ev))
                />
            </div>
            <p class="datediff-result">{outcome}</p>
        </section>
    }
}
