//! Async resource loader: tracks `data`, `is_loading` and `error` for one
//! asynchronous producer at a time.
//!
//! Every `execute` waits a short random delay before running the producer so
//! loading placeholders are always visible, even for producers that resolve
//! immediately. Calls are numbered; when a newer `execute` (or `cancel`) has
//! started, the older call's result no longer reaches the shared state.

use std::future::Future;
use std::sync::{Arc, Mutex, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::Duration;

use rand::rngs::StdRng;

use crate::config::{self, LoaderConfig};
use crate::utils::AppError;

#[derive(Debug, Clone)]
pub struct LoadingOptions<T> {
    pub initial_state: Option<T>,
    pub initial_loading: bool,
}

impl<T> Default for LoadingOptions<T> {
    fn default() -> Self {
        Self {
            initial_state: None,
            initial_loading: false,
        }
    }
}

impl<T> LoadingOptions<T> {
    /// Começa em "carregando", como as telas fazem antes do primeiro fetch
    pub fn loading() -> Self {
        Self {
            initial_state: None,
            initial_loading: true,
        }
    }

    pub fn with_initial_state(mut self, state: T) -> Self {
        self.initial_state = Some(state);
        self
    }
}

/// Point-in-time copy of a loader's state
#[derive(Debug, Clone, PartialEq)]
pub struct LoadSnapshot<T> {
    pub data: Option<T>,
    pub is_loading: bool,
    pub error: Option<AppError>,
}

#[derive(Debug)]
struct Inner<T> {
    data: Option<T>,
    is_loading: bool,
    error: Option<AppError>,
    generation: u64,
}

pub struct LoadingState<T> {
    label: Arc<str>,
    inner: Arc<RwLock<Inner<T>>>,
    initial: Arc<LoadingOptions<T>>,
    config: LoaderConfig,
    rng: Arc<Mutex<StdRng>>,
}

impl<T> Clone for LoadingState<T> {
    fn clone(&self) -> Self {
        Self {
            label: Arc::clone(&self.label),
            inner: Arc::clone(&self.inner),
            initial: Arc::clone(&self.initial),
            config: self.config.clone(),
            rng: Arc::clone(&self.rng),
        }
    }
}

impl<T: Clone> LoadingState<T> {
    pub fn new(label: &str, options: LoadingOptions<T>, config: LoaderConfig) -> Self {
        let inner = Inner {
            data: options.initial_state.clone(),
            is_loading: options.initial_loading,
            error: None,
            generation: 0,
        };

        let rng = config::make_rng(config.seed);
        Self {
            label: Arc::from(label),
            inner: Arc::new(RwLock::new(inner)),
            initial: Arc::new(options),
            config,
            rng: Arc::new(Mutex::new(rng)),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn data(&self) -> Option<T> {
        self.read().data.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.read().is_loading
    }

    pub fn error(&self) -> Option<AppError> {
        self.read().error.clone()
    }

    pub fn snapshot(&self) -> LoadSnapshot<T> {
        let inner = self.read();
        LoadSnapshot {
            data: inner.data.clone(),
            is_loading: inner.is_loading,
            error: inner.error.clone(),
        }
    }

    pub fn set_data(&self, data: T) {
        self.write().data = Some(data);
    }

    /// Restores `data` and `is_loading` to their construction values and
    /// clears `error`. An `execute` already in flight is left alone.
    pub fn reset(&self) {
        let mut inner = self.write();
        inner.data = self.initial.initial_state.clone();
        inner.is_loading = self.initial.initial_loading;
        inner.error = None;
    }

    /// Discards whatever `execute` is in flight and clears the loading flag.
    pub fn cancel(&self) {
        let mut inner = self.write();
        inner.generation += 1;
        inner.is_loading = false;
        log::debug!("⏹️  [{}] cancelled (generation {})", self.label, inner.generation);
    }

    /// Any producer error convertible into [`AppError`] is accepted: plain
    /// strings, `std::io::Error` and boxed `std::error::Error`s all become
    /// `AppError::Producer` carrying their message.
    pub async fn execute<F, Fut, E>(&self, producer: F) -> Result<T, AppError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: Into<AppError>,
    {
        self.execute_with(producer, |_| {}, |_| {}).await
    }

    /// Runs `producer` after the artificial delay and records the outcome.
    ///
    /// The producer's error is converted into an [`AppError`], stored, passed
    /// to `on_error` and returned. `is_loading` is cleared however the call
    /// ends, including when the returned future is dropped early.
    pub async fn execute_with<F, Fut, E, S, X>(
        &self,
        producer: F,
        on_success: S,
        on_error: X,
    ) -> Result<T, AppError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: Into<AppError>,
        S: FnOnce(&T),
        X: FnOnce(&AppError),
    {
        let generation = self.begin();
        let _guard = LoadingGuard {
            inner: &self.inner,
            generation,
        };

        tokio::time::sleep(self.next_delay()).await;

        let outcome: Result<T, AppError> = producer().await.map_err(Into::into);
        match outcome {
            Ok(result) => {
                if self.store_outcome(generation, Ok(&result)) {
                    on_success(&result);
                }
                Ok(result)
            }
            Err(error) => {
                log::warn!("⚠️  [{}] load failed: {}", self.label, error);
                if self.store_outcome(generation, Err(&error)) {
                    on_error(&error);
                }
                Err(error)
            }
        }
    }

    fn begin(&self) -> u64 {
        let mut inner = self.write();
        inner.generation += 1;
        inner.is_loading = true;
        inner.error = None;
        log::debug!("⏳ [{}] loading (generation {})", self.label, inner.generation);
        inner.generation
    }

    /// Returns false when a newer call owns the state
    fn store_outcome(&self, generation: u64, outcome: Result<&T, &AppError>) -> bool {
        let mut inner = self.write();
        if inner.generation != generation {
            log::debug!(
                "🗑️  [{}] discarding stale result (generation {}, current {})",
                self.label,
                generation,
                inner.generation
            );
            return false;
        }
        match outcome {
            Ok(data) => inner.data = Some(data.clone()),
            Err(error) => inner.error = Some(error.clone()),
        }
        true
    }

    fn next_delay(&self) -> Duration {
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        config::pick_delay(&mut rng, self.config.delay_range())
    }

    fn read(&self) -> RwLockReadGuard<'_, Inner<T>> {
        self.inner.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Inner<T>> {
        self.inner.write().unwrap_or_else(|e| e.into_inner())
    }
}

/// Clears the loading flag on every exit path of `execute_with`.
struct LoadingGuard<'a, T> {
    inner: &'a RwLock<Inner<T>>,
    generation: u64,
}

impl<T> Drop for LoadingGuard<'_, T> {
    fn drop(&mut self) {
        let mut inner = self.inner.write().unwrap_or_else(|e| e.into_inner());
        if inner.generation == self.generation {
            inner.is_loading = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use tokio::time::Instant;

    fn loader<T: Clone>(options: LoadingOptions<T>) -> LoadingState<T> {
        LoadingState::new("test", options, LoaderConfig::default())
    }

    #[tokio::test(start_paused = true)]
    async fn test_success_updates_state() {
        let state = loader::<Vec<u32>>(LoadingOptions::loading());
        assert!(state.is_loading());

        let called = AtomicBool::new(false);
        let result = state
            .execute_with(
                || async { Ok::<_, AppError>(vec![1, 2, 3]) },
                |data| {
                    assert_eq!(data, &vec![1, 2, 3]);
                    called.store(true, Ordering::SeqCst);
                },
                |_| panic!("on_error must not run"),
            )
            .await
            .unwrap();

        assert_eq!(result, vec![1, 2, 3]);
        assert!(called.load(Ordering::SeqCst));
        assert_eq!(
            state.snapshot(),
            LoadSnapshot {
                data: Some(vec![1, 2, 3]),
                is_loading: false,
                error: None,
            }
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_failure_keeps_previous_data() {
        let state = loader(LoadingOptions::default().with_initial_state(10));
        state.execute(|| async { Ok::<_, AppError>(20) }).await.unwrap();

        let mut seen = None;
        let err = state
            .execute_with(
                || async { Err::<i32, _>(AppError::network()) },
                |_| panic!("on_success must not run"),
                |e| seen = Some(e.clone()),
            )
            .await
            .unwrap_err();

        assert_eq!(err, AppError::network());
        assert_eq!(seen, Some(AppError::network()));
        assert_eq!(state.data(), Some(20));
        assert_eq!(state.error(), Some(AppError::network()));
        assert!(!state.is_loading());
    }

    #[tokio::test(start_paused = true)]
    async fn test_plain_string_errors_are_normalized() {
        let state = loader::<i32>(LoadingOptions::default());
        let err = state
            .execute(|| async { Err::<i32, _>("disk on fire".to_string()) })
            .await
            .unwrap_err();

        assert_eq!(err, AppError::Producer("disk on fire".into()));
        assert_eq!(state.error().map(|e| e.to_string()), Some("disk on fire".into()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_io_and_boxed_errors_are_normalized() {
        let state = loader::<i32>(LoadingOptions::default());
        let err = state
            .execute(|| async {
                Err::<i32, _>(std::io::Error::new(std::io::ErrorKind::Other, "disk full"))
            })
            .await
            .unwrap_err();
        assert_eq!(err, AppError::Producer("disk full".into()));

        let err = state
            .execute(|| async {
                let boxed: Box<dyn std::error::Error + Send + Sync> = "quota exceeded".into();
                Err::<i32, _>(boxed)
            })
            .await
            .unwrap_err();
        assert_eq!(err, AppError::Producer("quota exceeded".into()));
        assert_eq!(state.error(), Some(err));
    }

    #[tokio::test(start_paused = true)]
    async fn test_new_execute_clears_previous_error() {
        let state = loader::<i32>(LoadingOptions::default());
        let _ = state.execute(|| async { Err::<i32, _>("first") }).await;
        assert!(state.error().is_some());

        let observer = state.clone();
        state
            .execute(|| async move {
                assert!(observer.error().is_none());
                assert!(observer.is_loading());
                Ok::<_, AppError>(1)
            })
            .await
            .unwrap();
        assert!(state.error().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_producer_waits_for_artificial_delay() {
        let state = loader::<u8>(LoadingOptions::default());
        for _ in 0..50 {
            let start = Instant::now();
            let mut invoked_after = Duration::ZERO;
            state
                .execute(|| {
                    invoked_after = start.elapsed();
                    async { Ok::<_, AppError>(0) }
                })
                .await
                .unwrap();

            assert!(invoked_after >= Duration::from_millis(500), "{:?}", invoked_after);
            assert!(invoked_after < Duration::from_millis(800), "{:?}", invoked_after);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_seeded_loaders_repeat_the_same_delays() {
        async fn delays(state: &LoadingState<u8>) -> Vec<Duration> {
            let mut out = Vec::new();
            for _ in 0..10 {
                let start = Instant::now();
                let mut invoked_after = Duration::ZERO;
                state
                    .execute(|| {
                        invoked_after = start.elapsed();
                        async { Ok::<_, AppError>(0) }
                    })
                    .await
                    .unwrap();
                out.push(invoked_after);
            }
            out
        }

        let config = LoaderConfig {
            seed: Some(7),
            ..LoaderConfig::default()
        };
        let first = LoadingState::new("first", LoadingOptions::default(), config.clone());
        let second = LoadingState::new("second", LoadingOptions::default(), config);

        assert_eq!(delays(&first).await, delays(&second).await);
    }

    #[tokio::test(start_paused = true)]
    async fn test_reset_restores_construction_values() {
        let state = loader(LoadingOptions::loading().with_initial_state("initial"));
        state.execute(|| async { Ok::<_, AppError>("loaded") }).await.unwrap();
        let _ = state.execute(|| async { Err::<&str, _>("oops") }).await;
        assert!(!state.is_loading());

        state.reset();
        assert_eq!(
            state.snapshot(),
            LoadSnapshot {
                data: Some("initial"),
                is_loading: true,
                error: None,
            }
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_superseded_call_does_not_overwrite_newer_result() {
        let state = loader::<&str>(LoadingOptions::default());

        let slow = state.execute(|| async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Ok::<_, AppError>("slow")
        });
        let fast = async {
            // Start after the slow call has claimed its generation
            tokio::time::sleep(Duration::from_millis(10)).await;
            state.execute(|| async { Ok::<_, AppError>("fast") }).await
        };

        let (slow_result, fast_result) = futures::join!(slow, fast);
        assert_eq!(slow_result.unwrap(), "slow");
        assert_eq!(fast_result.unwrap(), "fast");
        assert_eq!(state.data(), Some("fast"));
        assert!(!state.is_loading());
    }

    #[tokio::test(start_paused = true)]
    async fn test_stale_failure_does_not_touch_state() {
        let state = loader::<i32>(LoadingOptions::default());

        let slow = state.execute_with(
            || async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                Err::<i32, _>(AppError::network())
            },
            |_| {},
            |_| panic!("stale on_error must not run"),
        );
        let fast = async {
            tokio::time::sleep(Duration::from_millis(10)).await;
            state.execute(|| async { Ok::<_, AppError>(3) }).await
        };

        let (slow_result, _) = futures::join!(slow, fast);
        assert!(slow_result.is_err());
        assert_eq!(state.data(), Some(3));
        assert!(state.error().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_discards_in_flight_result() {
        let state = loader::<i32>(LoadingOptions::default().with_initial_state(1));

        let run = state.execute(|| async { Ok::<_, AppError>(2) });
        let cancel = async {
            tokio::time::sleep(Duration::from_millis(100)).await;
            assert!(state.is_loading());
            state.cancel();
            assert!(!state.is_loading());
        };

        let (result, ()) = futures::join!(run, cancel);
        assert_eq!(result.unwrap(), 2);
        assert_eq!(state.data(), Some(1));
        assert!(!state.is_loading());
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropping_execute_clears_loading() {
        let state = loader::<i32>(LoadingOptions::default());
        let outcome = tokio::time::timeout(
            Duration::from_millis(100),
            state.execute(|| async { Ok::<_, AppError>(5) }),
        )
        .await;

        assert!(outcome.is_err());
        assert!(!state.is_loading());
        assert!(state.data().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_reset_does_not_stop_in_flight_execute() {
        let state = loader::<i32>(LoadingOptions::default());
        let run = state.execute(|| async { Ok::<_, AppError>(9) });
        let reset = async {
            tokio::time::sleep(Duration::from_millis(100)).await;
            state.reset();
        };

        let (result, ()) = futures::join!(run, reset);
        assert_eq!(result.unwrap(), 9);
        assert_eq!(state.data(), Some(9));
    }
}
