use super::list::ConnectionsView;
use crate::domain::a001_connection::api::use_connections_query;
use crate::shared::fetch_state::{FetchError, FetchState};
use contracts::domain::a001_connection::aggregate::Connection;
use leptos::prelude::*;

/// Что показывает страница при текущем состоянии запроса
#[derive(Debug, Clone, PartialEq)]
pub enum PageState {
    Loading,
    List(Vec<Connection>),
}

/// Loading and success map to page content; a failed request becomes an
/// error for the nearest `ErrorBoundary`, carrying the request's message.
pub fn connections_page_state(
    state: &FetchState<Vec<Connection>>,
) -> Result<PageState, FetchError> {
    match state {
        FetchState::Loading => Ok(PageState::Loading),
        FetchState::Error(e) => Err(e.clone()),
        FetchState::Success(connections) => Ok(PageState::List(connections.clone())),
    }
}

#[component]
#[allow(non_snake_case)]
pub fn ConnectionsPage() -> impl IntoView {
    let query = use_connections_query();
    let on_refresh = Callback::new(move |_: ()| query.refetch());
    let refreshing = Signal::derive(move || query.is_fetching());

    move || -> Result<AnyView, FetchError> {
        let content = match query.with(connections_page_state)? {
            PageState::Loading => view! {
                <div class="page page--centered">
                    <h1>"Loading..."</h1>
                </div>
            }
            .into_any(),
            PageState::List(connections) => view! {
                <div class="page page--centered">
                    <ConnectionsView
                        connections=connections
                        on_refresh=on_refresh
                        refreshing=refreshing
                    />
                </div>
            }
            .into_any(),
        };
        Ok(content)
    }
}
