use leptos::*;

use crate::components::{Announcement, CenteredLayout};

/// Terminal error view; offers no retry path.
#[component]
pub fn ErrorPage(message: &'static str, description: &'static str) -> impl IntoView {
    view! {
        <CenteredLayout>
            <Announcement header=message description=description/>
        </CenteredLayout>
    }
}
