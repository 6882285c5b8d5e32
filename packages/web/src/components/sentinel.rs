//! Invisible marker element that reports when it scrolls near the viewport.

use dioxus::prelude::*;

/// Intersection ratio that counts as visible.
#[cfg(feature = "web")]
const VISIBILITY_THRESHOLD: f64 = 0.1;

/// Root margin so the callback fires shortly before the marker is on-screen.
#[cfg(feature = "web")]
const PRELOAD_MARGIN: &str = "100px";

#[cfg(feature = "web")]
mod observer {
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::{JsCast, JsValue};
    use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

    /// Owns a live IntersectionObserver; the observer disconnects when this
    /// wrapper is dropped, so an unmounted sentinel cannot keep firing.
    pub struct VisibilityObserver {
        observer: IntersectionObserver,
        _callback: Closure<dyn FnMut(Vec<IntersectionObserverEntry>)>,
    }

    impl VisibilityObserver {
        pub fn watch(
            element: &web_sys::Element,
            threshold: f64,
            margin: &str,
            mut on_visible: impl FnMut() + 'static,
        ) -> Option<Self> {
            let callback = Closure::<dyn FnMut(Vec<IntersectionObserverEntry>)>::new(
                move |entries: Vec<IntersectionObserverEntry>| {
                    if entries.iter().any(|entry| entry.is_intersecting()) {
                        on_visible();
                    }
                },
            );

            let options = IntersectionObserverInit::new();
            options.set_threshold(&JsValue::from_f64(threshold));
            options.set_root_margin(margin);

            let observer =
                IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                    .ok()?;
            observer.observe(element);

            Some(Self {
                observer,
                _callback: callback,
            })
        }
    }

    impl Drop for VisibilityObserver {
        fn drop(&mut self) {
            self.observer.disconnect();
        }
    }
}

/// Zero-content element observed against the viewport.
///
/// `on_visible` fires whenever any intersection entry reports the marker
/// visible; it may fire repeatedly, so callers keep their own guards against
/// duplicate work. On the server target the sentinel renders inert markup.
#[component]
pub fn VisibilitySentinel(on_visible: EventHandler<()>) -> Element {
    #[cfg(feature = "web")]
    {
        let mut observer = use_signal(|| None::<observer::VisibilityObserver>);

        rsx! {
            div {
                class: "h-4",
                onmounted: move |event| {
                    if let Some(element) = event.data().downcast::<web_sys::Element>() {
                        observer.set(observer::VisibilityObserver::watch(
                            element,
                            VISIBILITY_THRESHOLD,
                            PRELOAD_MARGIN,
                            move || on_visible.call(()),
                        ));
                    }
                },
            }
        }
    }

    #[cfg(not(feature = "web"))]
    {
        let _ = on_visible;
        rsx! {
            div { class: "h-4" }
        }
    }
}
