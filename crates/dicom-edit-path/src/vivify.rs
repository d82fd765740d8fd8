//! Create-on-missing traversal.

use dicom_edit_core::{CoreError, DatasetId, Document, Tag, TypeDictionary, Vr};
use thiserror::Error;
use tracing::debug;

use crate::resolve::locate;
use crate::types::*;

/// Most empty items one exact index may add to a sequence.
pub const MAX_PADDING: usize = 10_000;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum VivifyError {
    #[error("{tag} is {vr} and cannot hold items")]
    NotASequence { tag: Tag, vr: Vr },
    #[error("{tag} must be followed by an item index")]
    MissingIndex { tag: Tag },
    #[error("item index without a sequence tag before it")]
    MisplacedIndex,
    #[error("path ends with an item index; there is no element to write")]
    MissingTerminal,
    #[error("{tag}[{index}] would pad {existing} items with more than {max} empty ones", max = MAX_PADDING)]
    PaddingLimit { tag: Tag, index: usize, existing: usize },
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Like [`resolve`](crate::resolve), but builds whatever structure is
/// missing above the terminal element:
///
/// - missing sequences are created empty,
/// - exact indices past the end pad the sequence with empty items, at most
///   [`MAX_PADDING`] of them,
/// - a wildcard over an empty sequence creates one item,
/// - missing private blocks are reserved in the current dataset.
///
/// The terminal element itself is left for the caller to write.
pub fn ensure<D>(doc: &mut Document, path: &TagPath, dict: &D) -> Result<Vec<ElementHandle>, VivifyError>
where
    D: TypeDictionary + ?Sized,
{
    if path.terminal().is_none() {
        return Err(VivifyError::MissingTerminal);
    }
    let mut out = Vec::new();
    let root = doc.root();
    grow(doc, root, &path.steps, dict, &mut out)?;
    Ok(out)
}

fn grow<D>(
    doc: &mut Document,
    ds: DatasetId,
    steps: &[Step],
    dict: &D,
    out: &mut Vec<ElementHandle>,
) -> Result<(), VivifyError>
where
    D: TypeDictionary + ?Sized,
{
    let (step, rest) = match steps.split_first() {
        None => return Ok(()),
        Some((Step::Index(_), _)) => return Err(VivifyError::MisplacedIndex),
        Some((Step::Tag(step), rest)) => (step, rest),
    };
    let tag = match locate(doc, ds, step) {
        Some(tag) => tag,
        None => {
            // Only private steps can fail to locate.
            let owner = step.owner.as_deref().unwrap_or_default();
            doc.create_private_block(ds, step.group, owner)?.tag(step.offset())
        }
    };
    if rest.is_empty() {
        out.push(ElementHandle::new(ds, tag));
        return Ok(());
    }
    let (index, rest) = match rest.split_first() {
        Some((Step::Index(index), rest)) => (*index, rest),
        _ => return Err(VivifyError::MissingIndex { tag }),
    };

    match doc.get(ds, tag) {
        Some(element) if !element.is_sequence() => {
            return Err(VivifyError::NotASequence { tag, vr: element.vr });
        }
        Some(_) => {}
        None => {
            let declared = match &step.owner {
                None => dict.lookup_type(tag),
                Some(owner) => dict.lookup_private_type(step.group, owner, step.offset()),
            };
            if let Some(vr) = declared.filter(|vr| !vr.is_sequence()) {
                return Err(VivifyError::NotASequence { tag, vr });
            }
            debug!(%tag, "creating sequence");
            doc.insert_sequence(ds, tag);
        }
    }

    let existing = doc.items(ds, tag).map_or(0, <[DatasetId]>::len);
    let targets: Vec<DatasetId> = match index {
        IndexStep::Exact(i) => {
            if i >= existing {
                if i - existing >= MAX_PADDING {
                    return Err(VivifyError::PaddingLimit { tag, index: i, existing });
                }
                for _ in existing..=i {
                    doc.push_item(ds, tag)?;
                }
                debug!(%tag, from = existing, added = i - existing + 1, "padded sequence with empty items");
            }
            doc.items(ds, tag).and_then(|items| items.get(i)).copied().into_iter().collect()
        }
        IndexStep::Wildcard { .. } => {
            if existing == 0 {
                doc.push_item(ds, tag)?;
                debug!(%tag, "seeded empty sequence with one item");
            }
            doc.items(ds, tag).map(<[DatasetId]>::to_vec).unwrap_or_default()
        }
    };

    for item in targets {
        grow(doc, item, rest, dict, out)?;
    }
    Ok(())
}
