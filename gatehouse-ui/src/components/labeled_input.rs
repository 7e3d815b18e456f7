use leptos::*;

/// Text or password input with a label and per-field error styling.
#[component]
pub fn LabeledInput(
    label: &'static str,
    input_type: &'static str,
    placeholder: &'static str,
    value: ReadSignal<String>,
    #[prop(into)] set_value: Callback<String>,
    #[prop(into)] errored: Signal<bool>,
) -> impl IntoView {
    view! {
        <label class="labeled-input">
            <span class="labeled-input-text">{label}</span>
            <input
                class="labeled-input-field"
                class:errored=move || errored.get()
                type=input_type
                placeholder=placeholder
                prop:value=value
                on:input=move |ev| set_value.call(event_target_value(&ev))
            />
        </label>
    }
}
