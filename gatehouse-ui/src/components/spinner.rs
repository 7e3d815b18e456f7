use leptos::*;

use crate::strings;

/// Loading indicator shown while a submission is in flight.
#[component]
pub fn Spinner() -> impl IntoView {
    view! {
        <div class="spinner" role="status" aria-label=strings::SPINNER_ALT>
            <div class="spinner-icon"></div>
        </div>
    }
}
