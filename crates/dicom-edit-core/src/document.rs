//! Arena-backed dataset tree.
//!
//! A [`Document`] owns every dataset (the root and all sequence items) in a
//! single arena. Sequence elements refer to their items by [`DatasetId`] and
//! every item records the id of the dataset that holds its sequence, so a
//! walk from any item back to the root is a chain of index lookups.

use std::collections::BTreeMap;

use crate::error::CoreError;
use crate::tag::Tag;
use crate::value::Value;
use crate::vr::Vr;

/// Index of a dataset inside its [`Document`].
///
/// Ids are only meaningful for the document that minted them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DatasetId(usize);

impl DatasetId {
    pub const ROOT: DatasetId = DatasetId(0);

    pub fn index(self) -> usize {
        self.0
    }
}

/// A typed attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub vr: Vr,
    pub value: Value,
}

impl Element {
    pub fn new(vr: Vr, value: impl Into<Value>) -> Self {
        Self { vr, value: value.into() }
    }

    pub fn sequence() -> Self {
        Self { vr: Vr::SQ, value: Value::Items(Vec::new()) }
    }

    pub fn items(&self) -> Option<&[DatasetId]> {
        self.value.items()
    }

    pub fn is_sequence(&self) -> bool {
        self.value.is_items()
    }
}

/// One container of elements: the root or a sequence item.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    parent: Option<DatasetId>,
    elements: BTreeMap<Tag, Element>,
}

impl Dataset {
    pub fn parent(&self) -> Option<DatasetId> {
        self.parent
    }

    pub fn get(&self, tag: Tag) -> Option<&Element> {
        self.elements.get(&tag)
    }

    pub fn contains(&self, tag: Tag) -> bool {
        self.elements.contains_key(&tag)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Elements in tag order.
    pub fn iter(&self) -> impl Iterator<Item = (&Tag, &Element)> {
        self.elements.iter()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    datasets: Vec<Dataset>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// A document with an empty root dataset.
    pub fn new() -> Self {
        Self { datasets: vec![Dataset::default()] }
    }

    pub fn root(&self) -> DatasetId {
        DatasetId::ROOT
    }

    pub fn dataset(&self, id: DatasetId) -> &Dataset {
        &self.datasets[id.0]
    }

    fn dataset_mut(&mut self, id: DatasetId) -> &mut Dataset {
        &mut self.datasets[id.0]
    }

    pub fn parent(&self, id: DatasetId) -> Option<DatasetId> {
        self.dataset(id).parent
    }

    /// The chain of datasets from the root down to `id`, inclusive.
    pub fn ancestors(&self, id: DatasetId) -> Vec<DatasetId> {
        let mut chain = vec![id];
        let mut cursor = id;
        while let Some(parent) = self.parent(cursor) {
            chain.push(parent);
            cursor = parent;
        }
        chain.reverse();
        chain
    }

    pub fn get(&self, ds: DatasetId, tag: Tag) -> Option<&Element> {
        self.dataset(ds).get(tag)
    }

    pub fn get_mut(&mut self, ds: DatasetId, tag: Tag) -> Option<&mut Element> {
        self.dataset_mut(ds).elements.get_mut(&tag)
    }

    pub fn contains(&self, ds: DatasetId, tag: Tag) -> bool {
        self.dataset(ds).contains(tag)
    }

    /// Insert or replace an element, returning the previous one.
    ///
    /// Items of a replaced sequence stay in the arena but become unreachable.
    pub fn set(&mut self, ds: DatasetId, tag: Tag, element: Element) -> Option<Element> {
        self.dataset_mut(ds).elements.insert(tag, element)
    }

    pub fn insert(&mut self, ds: DatasetId, tag: Tag, vr: Vr, value: impl Into<Value>) -> Option<Element> {
        self.set(ds, tag, Element::new(vr, value))
    }

    pub fn delete(&mut self, ds: DatasetId, tag: Tag) -> Option<Element> {
        self.dataset_mut(ds).elements.remove(&tag)
    }

    /// Items of the sequence at `tag`, or `None` if absent or not a sequence.
    pub fn items(&self, ds: DatasetId, tag: Tag) -> Option<&[DatasetId]> {
        self.get(ds, tag).and_then(Element::items)
    }

    /// Create (or reset) `tag` as an empty sequence.
    pub fn insert_sequence(&mut self, ds: DatasetId, tag: Tag) {
        self.set(ds, tag, Element::sequence());
    }

    /// Append an empty item to the sequence at `tag`.
    pub fn push_item(&mut self, ds: DatasetId, tag: Tag) -> Result<DatasetId, CoreError> {
        if !self.get(ds, tag).is_some_and(Element::is_sequence) {
            return Err(CoreError::NotASequence(tag));
        }
        let item = self.alloc(ds);
        if let Some(Element { value: Value::Items(items), .. }) = self.get_mut(ds, tag) {
            items.push(item);
        }
        Ok(item)
    }

    /// Recursively duplicate `items` (and everything below them) as new items
    /// owned by `parent`.
    pub fn deep_copy_items(&mut self, items: &[DatasetId], parent: DatasetId) -> Vec<DatasetId> {
        items.iter().map(|&src| self.deep_copy_item(src, parent)).collect()
    }

    fn deep_copy_item(&mut self, src: DatasetId, parent: DatasetId) -> DatasetId {
        let copy = self.alloc(parent);
        let elements = self.dataset(src).elements.clone();
        for (tag, mut element) in elements {
            if let Value::Items(children) = &element.value {
                let children = children.clone();
                element.value = Value::Items(self.deep_copy_items(&children, copy));
            }
            self.dataset_mut(copy).elements.insert(tag, element);
        }
        copy
    }

    fn alloc(&mut self, parent: DatasetId) -> DatasetId {
        let id = DatasetId(self.datasets.len());
        self.datasets.push(Dataset { parent: Some(parent), elements: BTreeMap::new() });
        id
    }

    /// Number of arena slots, reachable or not.
    pub fn arena_len(&self) -> usize {
        self.datasets.len()
    }
}
