//! Жизненный цикл асинхронного запроса данных
//!
//! `FetchState` is a closed union: a request is loading, failed, or holds
//! data, never two at once. `use_fetch` drives it from an async fetcher.

use leptos::prelude::*;
use leptos::task::spawn_local;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct FetchError {
    pub message: String,
}

impl FetchError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    Loading,
    Error(FetchError),
    Success(T),
}

impl<T> FetchState<T> {
    pub fn from_result(result: Result<T, FetchError>) -> Self {
        match result {
            Ok(data) => Self::Success(data),
            Err(e) => Self::Error(e),
        }
    }
}

type LocalFuture<T> = Pin<Box<dyn Future<Output = Result<T, FetchError>>>>;
type Fetcher<T> = Arc<dyn Fn() -> LocalFuture<T> + Send + Sync>;

/// Handle to a running query. Copy, like the signals it wraps.
pub struct FetchHandle<T: Send + Sync + 'static> {
    state: RwSignal<FetchState<T>>,
    fetching: RwSignal<bool>,
    generation: StoredValue<u64>,
    fetcher: StoredValue<Fetcher<T>>,
}

impl<T: Send + Sync + 'static> Clone for FetchHandle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for FetchHandle<T> {}

impl<T: Send + Sync + 'static> FetchHandle<T> {
    pub fn with<R>(&self, f: impl FnOnce(&FetchState<T>) -> R) -> R {
        self.state.with(f)
    }

    /// True while any request is in flight, including background refetches.
    pub fn is_fetching(&self) -> bool {
        self.fetching.get()
    }

    /// Re-runs the fetcher. Existing data stays visible until the new
    /// result arrives; a response from an older request is dropped.
    pub fn refetch(&self) {
        let generation = self.generation.get_value() + 1;
        self.generation.set_value(generation);
        self.fetching.set(true);

        let future = self.fetcher.with_value(|fetch| fetch());
        let handle = *self;
        spawn_local(async move {
            let result = future.await;
            if handle.generation.get_value() != generation {
                log::debug!("dropping stale response #{}", generation);
                return;
            }
            if let Err(e) = &result {
                log::error!("fetch failed: {}", e);
            }
            handle.fetching.set(false);
            handle.state.set(FetchState::from_result(result));
        });
    }
}

/// Starts `fetcher` immediately and returns a handle to its state.
pub fn use_fetch<T, F, Fut>(fetcher: F) -> FetchHandle<T>
where
    T: Send + Sync + 'static,
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<T, FetchError>> + 'static,
{
    let fetcher: Fetcher<T> = Arc::new(move || Box::pin(fetcher()) as LocalFuture<T>);
    let handle = FetchHandle {
        state: RwSignal::new(FetchState::Loading),
        fetching: RwSignal::new(false),
        generation: StoredValue::new(0),
        fetcher: StoredValue::new(fetcher),
    };
    handle.refetch();
    handle
}

#[cfg(test)]
mod tests {
    use super::*;
    use any_spawner::Executor;
    use std::collections::VecDeque;
    use std::sync::Mutex;
    use tokio::sync::oneshot;
    use tokio::task::LocalSet;

    #[test]
    fn test_from_result() {
        assert_eq!(FetchState::from_result(Ok(3)), FetchState::Success(3));
        assert_eq!(
            FetchState::<i32>::from_result(Err(FetchError::new("boom"))),
            FetchState::Error(FetchError::new("boom"))
        );
    }

    #[test]
    fn test_error_displays_message_only() {
        assert_eq!(FetchError::new("boom").to_string(), "boom");
    }

    type Reply = Result<u32, FetchError>;
    type Pending = Arc<Mutex<VecDeque<oneshot::Sender<Reply>>>>;

    /// Query whose responses are released by the test, one channel per request.
    fn use_scripted_fetch() -> (FetchHandle<u32>, Pending) {
        let pending: Pending = Arc::new(Mutex::new(VecDeque::new()));
        let queue = pending.clone();
        let handle = use_fetch(move || {
            let (tx, rx) = oneshot::channel();
            queue.lock().unwrap().push_back(tx);
            async move {
                rx.await
                    .unwrap_or_else(|_| Err(FetchError::new("request dropped")))
            }
        });
        (handle, pending)
    }

    fn next_sender(pending: &Pending) -> oneshot::Sender<Reply> {
        pending.lock().unwrap().pop_front().unwrap()
    }

    /// Lets spawned local tasks run to their next await point.
    async fn settle() {
        for _ in 0..8 {
            tokio::task::yield_now().await;
        }
    }

    fn setup() -> Owner {
        let _ = Executor::init_tokio();
        let owner = Owner::new();
        owner.set();
        owner
    }

    #[tokio::test]
    async fn test_initial_request_resolves() {
        let _owner = setup();
        LocalSet::new()
            .run_until(async {
                let (query, senders) = use_scripted_fetch();
                query.with(|s| assert_eq!(s, &FetchState::Loading));
                assert!(query.is_fetching());

                next_sender(&senders).send(Ok(1)).unwrap();
                settle().await;

                query.with(|s| assert_eq!(s, &FetchState::Success(1)));
                assert!(!query.is_fetching());
            })
            .await;
    }

    #[tokio::test]
    async fn test_failed_request_becomes_error() {
        let _owner = setup();
        LocalSet::new()
            .run_until(async {
                let (query, senders) = use_scripted_fetch();

                next_sender(&senders).send(Err(FetchError::new("boom"))).unwrap();
                settle().await;

                query.with(|s| assert_eq!(s, &FetchState::Error(FetchError::new("boom"))));
                assert!(!query.is_fetching());
            })
            .await;
    }

    #[tokio::test]
    async fn test_refetch_keeps_data_until_new_result() {
        let _owner = setup();
        LocalSet::new()
            .run_until(async {
                let (query, senders) = use_scripted_fetch();
                next_sender(&senders).send(Ok(1)).unwrap();
                settle().await;

                query.refetch();
                settle().await;
                assert!(query.is_fetching());
                query.with(|s| assert_eq!(s, &FetchState::Success(1)));

                next_sender(&senders).send(Ok(2)).unwrap();
                settle().await;
                query.with(|s| assert_eq!(s, &FetchState::Success(2)));
                assert!(!query.is_fetching());
            })
            .await;
    }

    #[tokio::test]
    async fn test_older_response_is_dropped() {
        let _owner = setup();
        LocalSet::new()
            .run_until(async {
                let (query, senders) = use_scripted_fetch();
                let first = next_sender(&senders);

                query.refetch();
                let second = next_sender(&senders);

                second.send(Ok(2)).unwrap();
                settle().await;
                query.with(|s| assert_eq!(s, &FetchState::Success(2)));
                assert!(!query.is_fetching());

                first.send(Ok(1)).unwrap();
                settle().await;
                query.with(|s| assert_eq!(s, &FetchState::Success(2)));
                assert!(!query.is_fetching());
            })
            .await;
    }
}
