//! Gatehouse front-end
//!
//! Single-page login app for the authorization code handoff: the login page
//! exchanges credentials for a redirect URI, everything else is error views.

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

pub mod api;
pub mod auth;
mod components;
mod pages;
pub mod query;
pub mod strings;

use pages::{ErrorPage, LoginPage};

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/gatehouse-ui.css"/>
        <Title text="Gatehouse - Sign In"/>
        <Meta name="description" content="Gatehouse authorization front-end"/>

        <Router>
            <main class="container">
                <Routes>
                    <Route path="/login" view=LoginPage/>
                    <Route
                        path="/error"
                        view=|| {
                            view! {
                                <ErrorPage
                                    message=strings::GENERIC_ERROR_MESSAGE
                                    description=strings::GENERIC_ERROR_DESCRIPTION
                                />
                            }
                        }
                    />
                    <Route
                        path="/*any"
                        view=|| {
                            view! {
                                <ErrorPage
                                    message=strings::NO_PAGE_MESSAGE
                                    description=strings::NO_PAGE_DESCRIPTION
                                />
                            }
                        }
                    />
                </Routes>
            </main>
        </Router>
    }
}
