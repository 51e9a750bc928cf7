//! # Document Store
//!
//! In-process document store backing the CRUD endpoints. Collections are
//! registered up front; documents are JSON objects keyed by a store-assigned
//! object id and kept in insertion order.
//!
//! The store is the sole point of serialization for conflicting writes: a
//! collection may declare one unique field, and that index is the final
//! arbiter for races that slip past the validation layer's advisory
//! pre-checks. Every operation is a single atomic call under the lock.

pub mod document;
pub mod errors;

pub use document::{is_object_id, new_object_id, ID_FIELD};
pub use errors::{StoreError, StoreResult};

use std::collections::HashMap;
use std::sync::RwLock;

use serde_json::{Map, Value};

use document::{apply_patch, stamp_new};

/// Declaration of a collection and its optional unique index.
#[derive(Debug, Clone, Copy)]
pub struct CollectionSpec {
    pub name: &'static str,
    pub unique_field: Option<&'static str>,
}

/// Per-collection data: documents in insertion order.
#[derive(Debug, Default)]
struct CollectionData {
    unique_field: Option<&'static str>,
    documents: Vec<Value>,
}

impl CollectionData {
    /// Checks the unique index against `candidate`, skipping `exclude_id`.
    fn check_unique(
        &self,
        candidate: &Map<String, Value>,
        exclude_id: Option<&str>,
    ) -> StoreResult<()> {
        let Some(field) = self.unique_field else {
            return Ok(());
        };
        let Some(value) = candidate.get(field) else {
            return Ok(());
        };

        for doc in &self.documents {
            if exclude_id == Some(doc_id(doc)) {
                continue;
            }
            if doc.get(field) == Some(value) {
                return Err(StoreError::duplicate_key(
                    field,
                    value.as_str().unwrap_or_default(),
                ));
            }
        }
        Ok(())
    }
}

/// The document store: registered collections behind one lock.
pub struct DocumentStore {
    collections: RwLock<HashMap<&'static str, CollectionData>>,
}

impl DocumentStore {
    /// Creates a store with the given collections registered.
    pub fn new(specs: &[CollectionSpec]) -> Self {
        let mut collections = HashMap::new();
        for spec in specs {
            collections.insert(
                spec.name,
                CollectionData {
                    unique_field: spec.unique_field,
                    documents: Vec::new(),
                },
            );
        }
        Self {
            collections: RwLock::new(collections),
        }
    }

    /// Inserts one document: stamps identity and timestamps, enforces the
    /// unique index, returns the stored document.
    pub fn insert_one(
        &self,
        collection: &str,
        mut doc: Map<String, Value>,
    ) -> StoreResult<Value> {
        let mut collections = self.write()?;
        let data = get_mut(&mut collections, collection)?;

        data.check_unique(&doc, None)?;
        stamp_new(&mut doc);
        let stored = Value::Object(doc);
        data.documents.push(stored.clone());
        Ok(stored)
    }

    /// All documents in a collection, insertion order.
    pub fn find_all(&self, collection: &str) -> StoreResult<Vec<Value>> {
        let collections = self.read()?;
        let data = get(&collections, collection)?;
        Ok(data.documents.clone())
    }

    /// Documents whose `field` equals `value`.
    pub fn find_eq(
        &self,
        collection: &str,
        field: &str,
        value: &Value,
    ) -> StoreResult<Vec<Value>> {
        let collections = self.read()?;
        let data = get(&collections, collection)?;
        Ok(data
            .documents
            .iter()
            .filter(|doc| doc.get(field) == Some(value))
            .cloned()
            .collect())
    }

    /// Looks up one document by identity.
    pub fn find_by_id(&self, collection: &str, id: &str) -> StoreResult<Option<Value>> {
        let collections = self.read()?;
        let data = get(&collections, collection)?;
        Ok(data
            .documents
            .iter()
            .find(|doc| doc_id(doc) == id)
            .cloned())
    }

    /// Advisory uniqueness pre-check: does any document (other than
    /// `exclude_id`, if given) hold `value` in `field`?
    pub fn exists_eq(
        &self,
        collection: &str,
        field: &str,
        value: &Value,
        exclude_id: Option<&str>,
    ) -> StoreResult<bool> {
        let collections = self.read()?;
        let data = get(&collections, collection)?;
        Ok(data.documents.iter().any(|doc| {
            doc.get(field) == Some(value)
                && exclude_id.map_or(true, |excluded| doc_id(doc) != excluded)
        }))
    }

    /// Partial update: shallow-merges `patch` into the document with the
    /// given id, advances `updatedAt`, and re-checks the unique index
    /// excluding the document itself.
    ///
    /// Returns `Ok(None)` when no document has that id.
    pub fn update_by_id(
        &self,
        collection: &str,
        id: &str,
        patch: Map<String, Value>,
    ) -> StoreResult<Option<Value>> {
        let mut collections = self.write()?;
        let data = get_mut(&mut collections, collection)?;

        let Some(index) = data.documents.iter().position(|doc| doc_id(doc) == id) else {
            return Ok(None);
        };

        data.check_unique(&patch, Some(id))?;

        let Some(Value::Object(doc)) = data.documents.get_mut(index) else {
            return Ok(None);
        };
        apply_patch(doc, patch);
        Ok(data.documents.get(index).cloned())
    }

    /// Deletes by identity, returning the document's prior state.
    pub fn delete_by_id(&self, collection: &str, id: &str) -> StoreResult<Option<Value>> {
        let mut collections = self.write()?;
        let data = get_mut(&mut collections, collection)?;

        match data.documents.iter().position(|doc| doc_id(doc) == id) {
            Some(index) => Ok(Some(data.documents.remove(index))),
            None => Ok(None),
        }
    }

    fn read(
        &self,
    ) -> StoreResult<std::sync::RwLockReadGuard<'_, HashMap<&'static str, CollectionData>>> {
        self.collections.read().map_err(|_| StoreError::LockPoisoned)
    }

    fn write(
        &self,
    ) -> StoreResult<std::sync::RwLockWriteGuard<'_, HashMap<&'static str, CollectionData>>> {
        self.collections.write().map_err(|_| StoreError::LockPoisoned)
    }
}

fn get<'a>(
    collections: &'a HashMap<&'static str, CollectionData>,
    name: &str,
) -> StoreResult<&'a CollectionData> {
    collections
        .get(name)
        .ok_or_else(|| StoreError::UnknownCollection(name.to_string()))
}

fn get_mut<'a>(
    collections: &'a mut HashMap<&'static str, CollectionData>,
    name: &str,
) -> StoreResult<&'a mut CollectionData> {
    collections
        .get_mut(name)
        .ok_or_else(|| StoreError::UnknownCollection(name.to_string()))
}

fn doc_id(doc: &Value) -> &str {
    doc.get(ID_FIELD).and_then(Value::as_str).unwrap_or_default()
}
