use leptos::*;

#[component]
pub fn SubmitButton(#[prop(default = "Submit")] text: &'static str) -> impl IntoView {
    view! {
        <button class="submit-button" type="submit">
            {text}
        </button>
    }
}
