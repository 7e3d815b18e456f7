use leptos::*;

/// Prominent message block used by the error pages.
#[component]
pub fn Announcement(header: &'static str, description: &'static str) -> impl IntoView {
    view! {
        <div class="announcement">
            <h2 class="announcement-header">{header}</h2>
            <p class="announcement-description">{description}</p>
        </div>
    }
}
