//! Login page: parameter gate, credential form, and submission flow

use gatehouse_common::{validate, Credentials};
use leptos::*;

use crate::api::ApiClient;
use crate::auth;
use crate::components::{CenteredLayout, FormCard, LabeledInput, Spinner, SubmitButton};
use crate::pages::ErrorPage;
use crate::query::QueryContext;
use crate::strings;

/// Entry page of the authorization handoff.
///
/// Consumes `client_id` and `redirect_uri` from the page URL exactly once at
/// mount. If either is absent the page is terminally in error; the form is
/// never rendered and no submission can happen.
#[component]
pub fn LoginPage() -> impl IntoView {
    let query = QueryContext::consume();

    let (client_id, redirect_uri) = match (query.client_id, query.redirect_uri) {
        (Some(client_id), Some(redirect_uri)) => (client_id, redirect_uri),
        _ => {
            return view! {
                <ErrorPage
                    message=strings::MISSING_PARAMS_MESSAGE
                    description=strings::MISSING_PARAMS_DESCRIPTION
                />
            }
            .into_view();
        }
    };

    view! {
        <CenteredLayout>
            <LoginForm client_id=client_id redirect_uri=redirect_uri/>
        </CenteredLayout>
    }
    .into_view()
}

/// Credential form and its submission state machine.
///
/// Field validation runs on every keystroke and again on submit; it marks the
/// field but never blocks typing. While a request is in flight the form is
/// replaced by a spinner and further submits are ignored. A successful login
/// leaves the app through a full-page navigation to the server-provided URI.
#[component]
fn LoginForm(client_id: u32, redirect_uri: String) -> impl IntoView {
    let (username, set_username) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (username_errored, set_username_errored) = create_signal(false);
    let (password_errored, set_password_errored) = create_signal(false);
    let (errored, set_errored) = create_signal(false);
    let (message, set_message) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);

    let client = store_value(ApiClient::default());
    let redirect_uri = store_value(redirect_uri);

    let on_username_input = move |value: String| {
        // Untouched fields show no error state.
        set_username_errored.set(!value.is_empty() && validate::validate_username(&value).is_err());
        set_username.set(value);
    };

    let on_password_input = move |value: String| {
        set_password_errored.set(!value.is_empty() && validate::validate_password(&value).is_err());
        set_password.set(value);
    };

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        // One submission in flight at a time.
        if submitting.get_untracked() {
            return;
        }

        let username_value = username.get_untracked();
        let password_value = password.get_untracked();
        let username_ok = validate::validate_username(&username_value).is_ok();
        let password_ok = validate::validate_password(&password_value).is_ok();
        set_username_errored.set(!username_ok);
        set_password_errored.set(!password_ok);

        if !username_ok || !password_ok {
            set_errored.set(true);
            set_message.set(strings::INCORRECT_INPUTS_MESSAGE.to_string());
            return;
        }

        set_errored.set(false);
        set_message.set(String::new());
        set_submitting.set(true);

        let credentials = Credentials {
            username: username_value,
            password: password_value,
        };
        let client = client.get_value();
        let redirect_uri = redirect_uri.get_value();

        spawn_local(async move {
            match auth::login(&client, &credentials, client_id, &redirect_uri).await {
                Ok(response) => {
                    // Deliberate hard redirect: the browser leaves this app's
                    // in-memory state behind.
                    if let Some(window) = web_sys::window() {
                        if let Err(err) = window.location().set_href(&response.redirect_uri) {
                            logging::error!("redirect failed: {:?}", err);
                            let _ = set_errored.try_set(true);
                            let _ = set_message.try_set(strings::GENERIC_ERROR_MESSAGE.to_string());
                            let _ = set_submitting.try_set(false);
                        }
                    }
                }
                Err(err) => {
                    logging::warn!("login failed: {}", err);
                    // try_set: the view may have unmounted while the request
                    // was in flight.
                    let _ = set_errored.try_set(true);
                    let _ = set_message.try_set(err.message);
                    let _ = set_submitting.try_set(false);
                }
            }
        });
    };

    view! {
        <Show when=move || !submitting.get() fallback=|| view! { <Spinner/> }>
            <FormCard
                header=strings::SIGN_IN_HEADER
                errored=errored
                error_message=message
                on_submit=on_submit
            >
                <LabeledInput
                    label=strings::USERNAME_LABEL
                    input_type="text"
                    placeholder=strings::USERNAME_PLACEHOLDER
                    value=username
                    set_value=on_username_input
                    errored=username_errored
                />
                <LabeledInput
                    label=strings::PASSWORD_LABEL
                    input_type="password"
                    placeholder=strings::PASSWORD_PLACEHOLDER
                    value=password
                    set_value=on_password_input
                    errored=password_errored
                />
                <SubmitButton/>
            </FormCard>
        </Show>
    }
}
