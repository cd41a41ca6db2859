use std::collections::HashMap;
use std::future::Future;
use std::rc::Rc;

use dioxus::prelude::*;

/// Element handles registered by id as their elements mount.
///
/// Lookups never fail loudly: an id that is not mounted simply isn't there.
#[derive(Debug)]
pub struct AnchorRegistry<T> {
    anchors: HashMap<&'static str, T>,
}

impl<T> Default for AnchorRegistry<T> {
    fn default() -> Self {
        Self {
            anchors: HashMap::new(),
        }
    }
}

impl<T> AnchorRegistry<T> {
    /// Register `handle` under `id`, returning the handle it replaces.
    pub fn mount(&mut self, id: &'static str, handle: T) -> Option<T> {
        self.anchors.insert(id, handle)
    }

    pub fn unmount(&mut self, id: &str) -> Option<T> {
        self.anchors.remove(id)
    }

    pub fn locate(&self, id: &str) -> Option<&T> {
        self.anchors.get(id)
    }

    /// Run `scroll` against the anchor if it is mounted. Returns whether a
    /// request was issued.
    pub fn request_scroll(&self, id: &str, scroll: impl FnOnce(&T)) -> bool {
        match self.locate(id) {
            Some(handle) => {
                scroll(handle);
                true
            }
            None => {
                tracing::debug!(anchor = id, "anchor not mounted, skipping scroll");
                false
            }
        }
    }
}

impl AnchorRegistry<Rc<MountedData>> {
    /// Smooth-scroll request for `id`, or `None` when it is not mounted.
    /// Platform failures are logged and swallowed.
    pub fn smooth_scroll(&self, id: &'static str) -> Option<impl Future<Output = ()> + 'static> {
        let mut target = None;
        self.request_scroll(id, |el| target = Some(Rc::clone(el)));
        target.map(|el| async move {
            if let Err(err) = el.scroll_to(ScrollBehavior::Smooth).await {
                tracing::debug!("smooth scroll to {id} failed: {err:?}");
            }
        })
    }
}
