//! Client-side mirror of a live repository query.

use crate::store::{Identified, Subscription};
use std::sync::{Arc, RwLock};
use uuid::Uuid;

struct Snapshots<T> {
    current: Vec<T>,
    previous: Vec<T>,
}

impl<T> Default for Snapshots<T> {
    fn default() -> Self {
        Self {
            current: Vec::new(),
            previous: Vec::new(),
        }
    }
}

/// Local mirror of the full result set delivered by a watch port.
///
/// Every delivery replaces the whole list; the store keeps the previous
/// snapshot alongside so callers can diff consecutive deliveries without
/// receiving patches. Detaching (or dropping) the store cancels the
/// underlying subscription.
pub struct EntityStore<T> {
    state: Arc<RwLock<Snapshots<T>>>,
    subscription: Option<Subscription>,
}

impl<T> EntityStore<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Attaches a mirror to a watch port.
    ///
    /// The closure receives the observer to register and returns the
    /// subscription handle, so the store works with any repository's
    /// `watch` signature.
    ///
    /// # Errors
    ///
    /// Propagates whatever error the subscribe closure returns.
    pub fn attach<E, F>(subscribe: F) -> Result<Self, E>
    where
        F: FnOnce(Arc<dyn Fn(&[T]) + Send + Sync>) -> Result<Subscription, E>,
    {
        let state = Arc::new(RwLock::new(Snapshots::default()));
        let sink = Arc::clone(&state);
        let observer: Arc<dyn Fn(&[T]) + Send + Sync> = Arc::new(move |snapshot: &[T]| {
            if let Ok(mut snapshots) = sink.write() {
                snapshots.previous = std::mem::take(&mut snapshots.current);
                snapshots.current = snapshot.to_vec();
            }
        });
        let subscription = subscribe(observer)?;
        Ok(Self {
            state,
            subscription: Some(subscription),
        })
    }

    /// Returns the latest delivered result set.
    #[must_use]
    pub fn snapshot(&self) -> Vec<T> {
        self.state
            .read()
            .map(|snapshots| snapshots.current.clone())
            .unwrap_or_default()
    }

    /// Returns the result set delivered before the latest one.
    #[must_use]
    pub fn previous_snapshot(&self) -> Vec<T> {
        self.state
            .read()
            .map(|snapshots| snapshots.previous.clone())
            .unwrap_or_default()
    }

    /// Returns whether the mirror is still receiving deliveries.
    #[must_use]
    pub const fn is_attached(&self) -> bool {
        self.subscription.is_some()
    }

    /// Cancels the subscription; no further deliveries mutate the mirror.
    ///
    /// The last delivered snapshots stay readable through the shared state
    /// held by any clones of the internal buffers.
    pub fn detach(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            subscription.unsubscribe();
        }
    }
}

impl<T> EntityStore<T>
where
    T: Identified + Clone + Send + Sync + 'static,
{
    /// Returns entities present in the latest snapshot but not the one
    /// before it.
    #[must_use]
    pub fn newly_added(&self) -> Vec<T> {
        self.state
            .read()
            .map(|snapshots| {
                let known: Vec<Uuid> = snapshots.previous.iter().map(Identified::ident).collect();
                snapshots
                    .current
                    .iter()
                    .filter(|entity| !known.contains(&entity.ident()))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Returns entities present in the previous snapshot but gone from the
    /// latest one.
    #[must_use]
    pub fn removed(&self) -> Vec<T> {
        self.state
            .read()
            .map(|snapshots| {
                let kept: Vec<Uuid> = snapshots.current.iter().map(Identified::ident).collect();
                snapshots
                    .previous
                    .iter()
                    .filter(|entity| !kept.contains(&entity.ident()))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }
}

impl<T> std::fmt::Debug for EntityStore<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EntityStore")
            .field("attached", &self.subscription.is_some())
            .finish_non_exhaustive()
    }
}
