//! Removable Row Component
//!
//! List row whose × asks `Remove "<label>"?` before handing its index back
//! to the owning list.

use leptos::prelude::*;

#[component]
pub fn RemovableRow(
    /// Position in the stored collection
    index: usize,
    /// Text quoted in the confirmation prompt
    #[prop(into)]
    label: String,
    #[prop(into, optional)] class: String,
    on_remove: Callback<usize>,
    children: Children,
) -> impl IntoView {
    let asking = RwSignal::new(false);
    let prompt = format!("Remove \"{}\"?", label);

    let controls = move || {
        if asking.get() {
            view! {
                <span class="row-confirm">
                    <span class="row-confirm-text">{prompt.clone()}</span>
                    <button
                        class="confirm-btn"
                        on:click=move |_| {
                            asking.set(false);
                            on_remove.run(index);
                        }
                    >
                        "Remove"
                    </button>
                    <button class="cancel-btn" on:click=move |_| asking.set(false)>
                        "Keep"
                    </button>
                </span>
            }
            .into_any()
        } else {
            view! {
                <button class="delete-btn" title="Remove" on:click=move |_| asking.set(true)>
                    "×"
                </button>
            }
            .into_any()
        }
    };

    view! {
        <li class=format!("removable-row {}", class)>
            {children()}
            {controls}
        </li>
    }
}
