use std::future::Future;
use std::rc::Rc;

use yew::prelude::*;

use crate::common::toast::ToastContext;
use crate::hooks::FetchState;

/// Fetch on mount with a manual refetch handle. Failures land in the
/// state and fire an error toast.
///
/// A liveness flag is cleared when the component unmounts; a request
/// that resolves after that point is dropped instead of being written
/// into state the component no longer owns.
#[hook]
pub fn use_fetch_with_refetch<T, F, Fut>(fetch_fn: F) -> (UseStateHandle<FetchState<T>>, Callback<()>)
where
    T: 'static,
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<T, String>> + 'static,
{
    let fetch_state = use_state(|| FetchState::Loading);
    let toast_ctx = use_context::<ToastContext>().unwrap();
    let fetch_fn = use_state(|| Rc::new(fetch_fn));
    let alive = use_mut_ref(|| true);

    let refetch = {
        let fetch_state = fetch_state.clone();
        let toast_ctx = toast_ctx.clone();
        let fetch_fn = fetch_fn.clone();
        let alive = alive.clone();

        use_callback((), move |_, _| {
            let fetch_state = fetch_state.clone();
            let toast_ctx = toast_ctx.clone();
            let fetch_fn = fetch_fn.clone();
            let alive = alive.clone();

            fetch_state.set(FetchState::Loading);

            wasm_bindgen_futures::spawn_local(async move {
                let result = (*fetch_fn)().await;

                if !*alive.borrow() {
                    log::debug!("Fetch resolved after unmount; dropping result");
                    return;
                }

                match result {
                    Ok(data) => fetch_state.set(FetchState::Success(data)),
                    Err(err) => {
                        fetch_state.set(FetchState::Error(err.clone()));
                        toast_ctx.show_error(err);
                    }
                }
            });
        })
    };

    // Fetch on mount, mark dead on unmount
    {
        let refetch = refetch.clone();
        use_effect_with((), move |_| {
            refetch.emit(());
            move || {
                *alive.borrow_mut() = false;
            }
        });
    }

    (fetch_state, refetch)
}
