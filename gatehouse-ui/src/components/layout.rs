use leptos::*;

/// Full-page background wrapper.
#[component]
pub fn BaseLayout(children: Children) -> impl IntoView {
    view! {
        <div class="background"></div>
        <div class="base-layout">{children()}</div>
    }
}

/// Centers its content on the page.
#[component]
pub fn CenteredLayout(children: Children) -> impl IntoView {
    view! {
        <BaseLayout>
            <div class="centered-layout">{children()}</div>
        </BaseLayout>
    }
}
