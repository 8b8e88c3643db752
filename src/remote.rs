//! Shared fetch-on-mount state machine.
//!
//! Every page fetch goes through [`use_remote`], which owns the
//! Loading -> Ready/Error transition, pushes one error toast per failure,
//! and drops results that arrive after the owning view unmounted.

use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;

use leptos::*;
use wasm_bindgen_futures::spawn_local;

use crate::api::ApiError;
use crate::notify::use_toasts;

/// State of a remote fetch.
#[derive(Debug, Clone, PartialEq)]
pub enum Remote<T> {
    Loading,
    Ready(T),
    Error(String),
}

impl<T> Remote<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Remote::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Remote::Ready(data) => Some(data),
            _ => None,
        }
    }
}

/// Handle to a remote fetch: reactive state plus a reload action.
pub struct RemoteHandle<T: 'static> {
    pub state: RwSignal<Remote<T>>,
    reloader: Rc<dyn Fn()>,
}

impl<T> Clone for RemoteHandle<T> {
    fn clone(&self) -> Self {
        Self {
            state: self.state,
            reloader: self.reloader.clone(),
        }
    }
}

impl<T> RemoteHandle<T> {
    /// Discard current data and fetch again.
    pub fn reload(&self) {
        (self.reloader)()
    }
}

/// Start a fetch bound to the current reactive scope.
///
/// `label` names the data in the error toast. Each `reload` bumps a
/// generation counter; a completion whose generation no longer matches is
/// ignored, which covers both superseded reloads and unmounted views
/// (`on_cleanup` bumps the counter too).
pub fn use_remote<T, F, Fut>(label: &'static str, fetch: F) -> RemoteHandle<T>
where
    T: Clone + 'static,
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    let toasts = use_toasts();
    let state = create_rw_signal(Remote::Loading);
    let generation = Rc::new(Cell::new(0u64));
    let fetch = Rc::new(fetch);

    let reloader: Rc<dyn Fn()> = {
        let generation = generation.clone();
        Rc::new(move || {
            let gen = generation.get() + 1;
            generation.set(gen);
            let _ = state.try_set(Remote::Loading);

            let fetch = fetch.clone();
            let generation = generation.clone();
            spawn_local(async move {
                let result = fetch().await;
                if generation.get() != gen {
                    return;
                }
                match result {
                    Ok(data) => {
                        let _ = state.try_set(Remote::Ready(data));
                    }
                    Err(err) => {
                        toasts.error(format!("Failed to load {}: {}", label, err));
                        let _ = state.try_set(Remote::Error(err.to_string()));
                    }
                }
            });
        })
    };

    reloader();

    {
        let generation = generation.clone();
        on_cleanup(move || generation.set(generation.get() + 1));
    }

    RemoteHandle { state, reloader }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remote_accessors() {
        let loading: Remote<u32> = Remote::Loading;
        assert!(loading.is_loading());
        assert_eq!(loading.ready(), None);

        let ready = Remote::Ready(7u32);
        assert!(!ready.is_loading());
        assert_eq!(ready.ready(), Some(&7));

        let failed: Remote<u32> = Remote::Error("boom".to_string());
        assert!(!failed.is_loading());
        assert_eq!(failed.ready(), None);
    }
}
