//! In-memory document collection with full-snapshot live queries.

use super::{Document, Observer, StoreError, StoreResult, Subscription};
use serde_json::{Map, Value};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard, Weak};
use uuid::Uuid;

/// Sort direction for an ordered live query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    /// Smallest value first.
    Ascending,
    /// Largest value first.
    Descending,
}

/// Filter and ordering declared by the caller of a query or subscription.
///
/// The result shape is owned by the caller: the store applies the predicate
/// to raw documents and orders by a named body field, treating an absent
/// field as JSON null.
#[derive(Clone, Default)]
pub struct Query {
    filter: Option<Arc<dyn Fn(&Document) -> bool + Send + Sync>>,
    order_by: Option<(String, SortDirection)>,
}

impl Query {
    /// Creates a query matching every document, in identifier order.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// Restricts the query to documents matching the predicate.
    #[must_use]
    pub fn with_filter(mut self, predicate: impl Fn(&Document) -> bool + Send + Sync + 'static) -> Self {
        self.filter = Some(Arc::new(predicate));
        self
    }

    /// Orders results by the named body field.
    ///
    /// RFC 3339 timestamp strings order chronologically under this rule, so
    /// `created_at` fields need no special treatment.
    #[must_use]
    pub fn order_by(mut self, field: impl Into<String>, direction: SortDirection) -> Self {
        self.order_by = Some((field.into(), direction));
        self
    }

    fn matches(&self, document: &Document) -> bool {
        self.filter.as_ref().is_none_or(|filter| filter(document))
    }

    fn results<'a>(&self, documents: impl Iterator<Item = &'a Document>) -> Vec<Document> {
        let mut matched: Vec<Document> = documents
            .filter(|document| self.matches(document))
            .cloned()
            .collect();
        if let Some((field, direction)) = &self.order_by {
            matched.sort_by(|left, right| {
                let ordering = compare_values(
                    left.field(field).unwrap_or(&Value::Null),
                    right.field(field).unwrap_or(&Value::Null),
                );
                match direction {
                    SortDirection::Ascending => ordering,
                    SortDirection::Descending => ordering.reverse(),
                }
            });
        }
        matched
    }
}

impl fmt::Debug for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Query")
            .field("filtered", &self.filter.is_some())
            .field("order_by", &self.order_by)
            .finish()
    }
}

/// Total order over JSON values: null < bool < number < string < other.
fn compare_values(left: &Value, right: &Value) -> Ordering {
    fn rank(value: &Value) -> u8 {
        match value {
            Value::Null => 0,
            Value::Bool(_) => 1,
            Value::Number(_) => 2,
            Value::String(_) => 3,
            Value::Array(_) | Value::Object(_) => 4,
        }
    }

    match (left, right) {
        (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
        (Value::Number(a), Value::Number(b)) => a
            .as_f64()
            .partial_cmp(&b.as_f64())
            .unwrap_or(Ordering::Equal),
        (Value::String(a), Value::String(b)) => a.cmp(b),
        _ => rank(left).cmp(&rank(right)),
    }
}

struct RegisteredObserver {
    query: Query,
    observer: Observer,
}

#[derive(Default)]
struct CollectionState {
    documents: BTreeMap<Uuid, Document>,
    observers: BTreeMap<u64, RegisteredObserver>,
    next_observer: u64,
}

/// Thread-safe in-memory document collection.
///
/// Reproduces the remote store's observable contract: field-level
/// last-writer-wins merges and live queries that re-deliver the full
/// current result set after every change.
#[derive(Clone, Default)]
pub struct MemoryCollection {
    state: Arc<RwLock<CollectionState>>,
}

impl MemoryCollection {
    /// Creates an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read_state(&self) -> StoreResult<RwLockReadGuard<'_, CollectionState>> {
        self.state.read().map_err(|_| StoreError::LockPoisoned)
    }

    fn write_state(&self) -> StoreResult<RwLockWriteGuard<'_, CollectionState>> {
        self.state.write().map_err(|_| StoreError::LockPoisoned)
    }

    /// Inserts a new document.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuplicateDocument`] when the identifier is
    /// already present.
    pub fn insert(&self, document: Document) -> StoreResult<()> {
        {
            let mut state = self.write_state()?;
            if state.documents.contains_key(&document.id()) {
                return Err(StoreError::DuplicateDocument(document.id()));
            }
            state.documents.insert(document.id(), document);
        }
        self.notify()
    }

    /// Merges the given fields into an existing document, last writer wins
    /// per field.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] when the document does not exist.
    pub fn merge_fields(&self, id: Uuid, fields: Map<String, Value>) -> StoreResult<()> {
        {
            let mut state = self.write_state()?;
            let document = state
                .documents
                .get_mut(&id)
                .ok_or(StoreError::NotFound(id))?;
            document.merge(fields);
        }
        self.notify()
    }

    /// Merges the given fields into every document matching the query and
    /// returns how many documents were touched.
    ///
    /// Observers are notified once, after all documents have been updated.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::LockPoisoned`] when the collection state is
    /// inaccessible.
    pub fn merge_matching(&self, query: &Query, fields: &Map<String, Value>) -> StoreResult<usize> {
        let touched = {
            let mut state = self.write_state()?;
            let ids: Vec<Uuid> = state
                .documents
                .values()
                .filter(|document| query.matches(document))
                .map(Document::id)
                .collect();
            for id in &ids {
                if let Some(document) = state.documents.get_mut(id) {
                    document.merge(fields.clone());
                }
            }
            ids.len()
        };
        self.notify()?;
        Ok(touched)
    }

    /// Removes a document.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] when the document does not exist.
    pub fn remove(&self, id: Uuid) -> StoreResult<()> {
        {
            let mut state = self.write_state()?;
            if state.documents.remove(&id).is_none() {
                return Err(StoreError::NotFound(id));
            }
        }
        self.notify()
    }

    /// Removes every document matching the query and returns how many were
    /// removed.
    ///
    /// Observers are notified once, after all documents have been removed.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::LockPoisoned`] when the collection state is
    /// inaccessible.
    pub fn remove_matching(&self, query: &Query) -> StoreResult<usize> {
        let removed = {
            let mut state = self.write_state()?;
            let ids: Vec<Uuid> = state
                .documents
                .values()
                .filter(|document| query.matches(document))
                .map(Document::id)
                .collect();
            for id in &ids {
                state.documents.remove(id);
            }
            ids.len()
        };
        self.notify()?;
        Ok(removed)
    }

    /// Returns a single document by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::LockPoisoned`] when the collection state is
    /// inaccessible.
    pub fn get(&self, id: Uuid) -> StoreResult<Option<Document>> {
        let state = self.read_state()?;
        Ok(state.documents.get(&id).cloned())
    }

    /// Returns the current result set of a one-shot query.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::LockPoisoned`] when the collection state is
    /// inaccessible.
    pub fn query(&self, query: &Query) -> StoreResult<Vec<Document>> {
        let state = self.read_state()?;
        Ok(query.results(state.documents.values()))
    }

    /// Establishes a live query.
    ///
    /// The observer receives the full current result set immediately and
    /// again after every subsequent change, until the returned handle is
    /// cancelled.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::LockPoisoned`] when the collection state is
    /// inaccessible.
    pub fn watch(&self, query: Query, observer: Observer) -> StoreResult<Subscription> {
        let (observer_id, initial) = {
            let mut state = self.write_state()?;
            let observer_id = state.next_observer;
            state.next_observer += 1;
            let initial = query.results(state.documents.values());
            state.observers.insert(
                observer_id,
                RegisteredObserver {
                    query,
                    observer: Arc::clone(&observer),
                },
            );
            (observer_id, initial)
        };
        observer(&initial);

        let weak: Weak<RwLock<CollectionState>> = Arc::downgrade(&self.state);
        Ok(Subscription::new(move || {
            if let Some(state) = weak.upgrade()
                && let Ok(mut state) = state.write()
            {
                state.observers.remove(&observer_id);
            }
        }))
    }

    /// Delivers the current result set of every registered live query.
    ///
    /// Observers are invoked outside the collection lock so they may issue
    /// further store operations.
    fn notify(&self) -> StoreResult<()> {
        let (observers, documents) = {
            let state = self.read_state()?;
            let observers: Vec<(Query, Observer)> = state
                .observers
                .values()
                .map(|registered| (registered.query.clone(), Arc::clone(&registered.observer)))
                .collect();
            let documents: Vec<Document> = state.documents.values().cloned().collect();
            (observers, documents)
        };
        for (query, observer) in observers {
            let results = query.results(documents.iter());
            observer(&results);
        }
        Ok(())
    }
}

impl fmt::Debug for MemoryCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryCollection").finish_non_exhaustive()
    }
}
