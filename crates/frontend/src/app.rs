use crate::routes::routes::AppRoutes;
use leptos::error::Errors;
use leptos::prelude::*;

/// Fallback for errors raised by pages, e.g. a failed connections request
#[component]
fn ErrorPanel(errors: ArcRwSignal<Errors>) -> impl IntoView {
    view! {
        <div class="warning-box warning-box--error">
            <span class="warning-box__icon">"⚠"</span>
            <ul class="warning-box__text">
                {move || {
                    errors
                        .get()
                        .into_iter()
                        .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                        .collect_view()
                }}
            </ul>
        </div>
    }
}

#[component]
pub fn App() -> impl IntoView {
    view! {
        <ErrorBoundary fallback=|errors| view! { <ErrorPanel errors=errors /> }>
            <AppRoutes />
        </ErrorBoundary>
    }
}
