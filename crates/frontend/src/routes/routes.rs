use crate::domain::a001_connection::ui::page::ConnectionsPage;
use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page page--centered">
            <h1>"Page not found"</h1>
        </div>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <main class="app__content">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=|| view! { <Redirect path="/connections" /> } />
                    <Route path=path!("/connections") view=ConnectionsPage />
                </Routes>
            </main>
        </Router>
    }
}
