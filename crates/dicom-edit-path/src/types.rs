//! Tag path types.

use std::fmt;

use dicom_edit_core::{DatasetId, Document, Element, Tag};

/// Addresses one element inside the current dataset.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TagStep {
    pub group: u16,
    /// Element number, or the offset within the owner's block when private.
    pub element: u16,
    /// Private block owner, stored verbatim.
    pub owner: Option<String>,
}

impl TagStep {
    pub fn public(group: u16, element: u16) -> Self {
        Self { group, element, owner: None }
    }

    pub fn private(group: u16, owner: impl Into<String>, offset: u8) -> Self {
        Self { group, element: u16::from(offset), owner: Some(owner.into()) }
    }

    pub fn is_private(&self) -> bool {
        self.owner.is_some()
    }

    /// The concrete tag of a public step. Private steps depend on the
    /// document's block layout and return `None`.
    pub fn tag(&self) -> Option<Tag> {
        match self.owner {
            None => Some(Tag::new(self.group, self.element)),
            Some(_) => None,
        }
    }

    /// Offset within the private block.
    pub fn offset(&self) -> u8 {
        (self.element & 0x00FF) as u8
    }
}

/// Selects sequence items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndexStep {
    /// `[n]`
    Exact(usize),
    /// `[<n>]`: every item. The digit is kept for display only.
    Wildcard { marker: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Step {
    Tag(TagStep),
    Index(IndexStep),
}

/// A compiled path expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TagPath {
    pub steps: Vec<Step>,
}

impl TagPath {
    pub fn new(steps: Vec<Step>) -> Self {
        Self { steps }
    }

    /// The final tag step.
    pub fn terminal(&self) -> Option<&TagStep> {
        match self.steps.last() {
            Some(Step::Tag(step)) => Some(step),
            _ => None,
        }
    }

    pub fn has_wildcard(&self) -> bool {
        self.steps.iter().any(|s| matches!(s, Step::Index(IndexStep::Wildcard { .. })))
    }
}

/// One element slot found by traversal: the dataset that holds (or would
/// hold) the element, and its concrete tag.
///
/// Handles are not stable across mutations that add or remove sequence items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementHandle {
    pub dataset: DatasetId,
    pub tag: Tag,
}

impl ElementHandle {
    pub fn new(dataset: DatasetId, tag: Tag) -> Self {
        Self { dataset, tag }
    }

    /// The element, or `None` if the slot is empty.
    pub fn element<'a>(&self, doc: &'a Document) -> Option<&'a Element> {
        doc.get(self.dataset, self.tag)
    }

    pub fn exists(&self, doc: &Document) -> bool {
        doc.contains(self.dataset, self.tag)
    }

    /// Datasets descended through to reach the element, root first.
    pub fn ancestors(&self, doc: &Document) -> Vec<DatasetId> {
        doc.ancestors(self.dataset)
    }
}

impl fmt::Display for TagStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.owner {
            None => write!(f, "({:04X},{:04X})", self.group, self.element),
            Some(owner) => write!(f, "({:04X},\"{}\",{:02X})", self.group, owner, self.element),
        }
    }
}

impl fmt::Display for IndexStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexStep::Exact(i) => write!(f, "[{i}]"),
            IndexStep::Wildcard { marker } => write!(f, "[<{marker}>]"),
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Tag(step) => step.fmt(f),
            Step::Index(step) => step.fmt(f),
        }
    }
}

impl fmt::Display for TagPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<")?;
        for step in &self.steps {
            step.fmt(f)?;
        }
        f.write_str(">")
    }
}
