//! Read-only traversal.

use dicom_edit_core::{DatasetId, Document, Tag};
use tracing::debug;

use crate::parser::{ParseError, TagPathParser};
use crate::types::*;

/// Find every element slot `path` addresses, in document order.
///
/// Never mutates. A missing terminal element still yields a handle (with no
/// element behind it) so that writers can fill the slot; anything missing
/// above the terminal yields nothing. Private steps whose owner block cannot
/// be found in the current dataset or any enclosing one yield nothing.
pub fn resolve(doc: &Document, path: &TagPath) -> Vec<ElementHandle> {
    let mut out = Vec::new();
    walk(doc, doc.root(), &path.steps, &mut out);
    out
}

/// Parse `path` and [`resolve`] it.
pub fn resolve_str(doc: &Document, path: &str) -> Result<Vec<ElementHandle>, ParseError> {
    let path = TagPathParser::parse(path)?;
    Ok(resolve(doc, &path))
}

/// Concrete tag of `step` as seen from `ds`, looking for private blocks
/// outward through enclosing datasets.
pub fn locate(doc: &Document, ds: DatasetId, step: &TagStep) -> Option<Tag> {
    match &step.owner {
        None => Some(Tag::new(step.group, step.element)),
        Some(owner) => doc
            .find_private_block(ds, step.group, owner)
            .map(|block| block.tag(step.offset())),
    }
}

fn walk(doc: &Document, ds: DatasetId, steps: &[Step], out: &mut Vec<ElementHandle>) {
    let Some((Step::Tag(step), rest)) = steps.split_first() else {
        return;
    };
    let Some(tag) = locate(doc, ds, step) else {
        debug!(step = %step, "private block not found");
        return;
    };
    if rest.is_empty() {
        out.push(ElementHandle::new(ds, tag));
        return;
    }
    let Some(element) = doc.get(ds, tag) else {
        return;
    };
    let Some((Step::Index(index), rest)) = rest.split_first() else {
        debug!(%tag, "tag step must be followed by an item index");
        return;
    };
    let Some(items) = element.items() else {
        debug!(%tag, vr = %element.vr, "item index over a non-sequence element");
        return;
    };
    match index {
        IndexStep::Exact(i) => {
            if let Some(&item) = items.get(*i) {
                walk(doc, item, rest, out);
            }
        }
        IndexStep::Wildcard { .. } => {
            for &item in items {
                walk(doc, item, rest, out);
            }
        }
    }
}
