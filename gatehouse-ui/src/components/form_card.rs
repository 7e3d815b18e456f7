use leptos::*;

/// Card wrapping a form with a header and an error message slot.
///
/// The shake class is driven by the `errored` signal so a rejected submission
/// is visible even when the message text does not change.
#[component]
pub fn FormCard<F>(
    header: &'static str,
    #[prop(into)] errored: Signal<bool>,
    #[prop(into)] error_message: Signal<String>,
    on_submit: F,
    children: Children,
) -> impl IntoView
where
    F: Fn(ev::SubmitEvent) + 'static,
{
    view! {
        <div class="form-card" class:shake=move || errored.get()>
            <div class="form-card-header">
                <h1>{header}</h1>
                <span class="form-card-error">{move || error_message.get()}</span>
            </div>
            <form class="form-card-form" on:submit=on_submit>
                {children()}
            </form>
        </div>
    }
}
