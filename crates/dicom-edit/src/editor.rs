//! Operation executor.

use dicom_edit_core::{Document, Element, StandardDictionary, TypeDictionary, Value, Vr};
use dicom_edit_path::{ensure, resolve, ElementHandle, TagPath, TagPathParser, TagStep, VivifyError};
use tracing::{debug, info, warn};

use crate::coerce::{coerce, fit_length};
use crate::date::{parse_day_offset, shift_date_text};
use crate::error::{ContentIssue, EditError, Outcome};
use crate::operation::{Operation, Verb};
use crate::options::EditOptions;
use crate::record::wrap_path;

/// Where the type of a written element came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeSource {
    /// The element already existed.
    Existing,
    /// Requested by the operation ([`Operation::vr`]).
    Requested,
    Dictionary,
    PrivateDictionary,
    /// Unknown public tag: [`EditOptions::public_fallback_vr`].
    PublicFallback,
    /// Unknown private tag: [`EditOptions::private_fallback_vr`].
    PrivateFallback,
    /// Unknown destination of a copy: the source element's type.
    Source,
}

/// Counts for one [`Editor::apply_edits`] call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub operations: usize,
    pub applied: usize,
    pub skipped: usize,
}

/// Applies [`Operation`]s to documents.
///
/// Holds no per-document state; one editor can serve any number of documents,
/// including from several threads when the dictionary allows it.
#[derive(Debug, Clone, Default)]
pub struct Editor<D = StandardDictionary> {
    dictionary: D,
    options: EditOptions,
}

impl Editor<StandardDictionary> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<D: TypeDictionary> Editor<D> {
    pub fn with_dictionary(dictionary: D) -> Self {
        Self { dictionary, options: EditOptions::default() }
    }

    pub fn with_options(mut self, options: EditOptions) -> Self {
        self.options = options;
        self
    }

    pub fn dictionary(&self) -> &D {
        &self.dictionary
    }

    pub fn options(&self) -> &EditOptions {
        &self.options
    }

    /// Apply `ops` in order. The first fatal error stops the batch; changes
    /// made before it stay in place.
    pub fn apply_edits(&self, doc: &mut Document, ops: &[Operation]) -> Result<BatchSummary, EditError> {
        let mut summary = BatchSummary::default();
        for op in ops {
            let outcomes = self.apply_op(doc, op)?;
            summary.operations += 1;
            let applied = outcomes.iter().filter(|o| o.is_applied()).count();
            summary.applied += applied;
            summary.skipped += outcomes.len() - applied;
        }
        info!(
            operations = summary.operations,
            applied = summary.applied,
            skipped = summary.skipped,
            "edit batch complete"
        );
        Ok(summary)
    }

    /// Apply one operation, returning an outcome per matched element.
    pub fn apply_op(&self, doc: &mut Document, op: &Operation) -> Result<Vec<Outcome>, EditError> {
        debug!(verb = %op.verb, path = %op.path, "applying operation");
        let path = parse_path(&op.path)?;
        let outcomes = match op.verb {
            Verb::SetTag => self.set_tag(doc, &path, op)?,
            Verb::EmptyTag => self.empty_tag(doc, &path, op)?,
            Verb::DeleteTag => delete_tag(doc, &path),
            Verb::StringReplace => self.string_replace(doc, &path, &op.arg1, &op.arg2),
            Verb::Substitute => self.substitute(doc, &path, &op.arg1, &op.arg2),
            Verb::ShiftDate => shift_date(doc, &path, &op.arg1),
            Verb::CopyFromTag => self.copy_from_tag(doc, &path, op)?,
        };
        if outcomes.is_empty() {
            debug!(verb = %op.verb, path = %op.path, "nothing matched");
            return Ok(vec![Outcome::Skipped(ContentIssue::UnresolvedTarget)]);
        }
        Ok(outcomes)
    }

    // ── create-on-missing verbs ──────────────────────────────────────────

    fn set_tag(&self, doc: &mut Document, path: &TagPath, op: &Operation) -> Result<Vec<Outcome>, EditError> {
        let text = op.arg1.as_str();
        let terminal = terminal(path, &op.path)?;
        let handles = self.ensure(doc, path, &op.path)?;
        let mut outcomes = Vec::with_capacity(handles.len());
        for handle in handles {
            let (vr, source) = self.destination_type(doc, &handle, terminal, op.vr);
            let element = if vr.is_sequence() {
                if !text.is_empty() {
                    return Err(EditError::IncompatibleCoercion { from: Vr::UT, to: Vr::SQ });
                }
                Element::sequence()
            } else {
                Element::new(vr, fit_length(Value::from_text(vr, text), vr, &self.dictionary))
            };
            debug!(tag = %handle.tag, %vr, ?source, "set");
            doc.set(handle.dataset, handle.tag, element);
            outcomes.push(Outcome::Applied);
        }
        Ok(outcomes)
    }

    fn empty_tag(&self, doc: &mut Document, path: &TagPath, op: &Operation) -> Result<Vec<Outcome>, EditError> {
        let terminal = terminal(path, &op.path)?;
        let handles = self.ensure(doc, path, &op.path)?;
        let mut outcomes = Vec::with_capacity(handles.len());
        for handle in handles {
            let (vr, source) = self.destination_type(doc, &handle, terminal, op.vr);
            let element = if vr.is_sequence() {
                Element::sequence()
            } else {
                Element::new(vr, Value::empty())
            };
            debug!(tag = %handle.tag, %vr, ?source, "emptied");
            doc.set(handle.dataset, handle.tag, element);
            outcomes.push(Outcome::Applied);
        }
        Ok(outcomes)
    }

    fn copy_from_tag(&self, doc: &mut Document, path: &TagPath, op: &Operation) -> Result<Vec<Outcome>, EditError> {
        let terminal = terminal(path, &op.path)?;
        let source_text = wrap_path(&op.arg1);
        let source_path = parse_path(&source_text)?;

        // First element present, in document order.
        let source = resolve(doc, &source_path)
            .into_iter()
            .find_map(|handle| handle.element(doc).cloned());
        let Some(source) = source else {
            debug!(source = %source_text, "copy source not found");
            return Ok(vec![Outcome::Skipped(ContentIssue::UnresolvedTarget)]);
        };

        let handles = self.ensure(doc, path, &op.path)?;
        let mut outcomes = Vec::with_capacity(handles.len());
        for handle in handles {
            let (vr, type_source) = match self.known_type(doc, &handle, terminal, op.vr) {
                Some(known) => known,
                None => (source.vr, TypeSource::Source),
            };
            let coerced = coerce(&source.value, source.vr, vr, &self.dictionary)?;
            let value = match coerced.value {
                Value::Items(items) => Value::Items(doc.deep_copy_items(&items, handle.dataset)),
                other => other,
            };
            debug!(tag = %handle.tag, from = %source.vr, to = %vr, route = ?coerced.route, ?type_source, "copied");
            doc.set(handle.dataset, handle.tag, Element { vr, value });
            outcomes.push(Outcome::Applied);
        }
        Ok(outcomes)
    }

    // ── in-place verbs ───────────────────────────────────────────────────

    fn string_replace(&self, doc: &mut Document, path: &TagPath, needle: &str, replacement: &str) -> Vec<Outcome> {
        let handles = resolve(doc, path);
        handles
            .iter()
            .map(|handle| {
                let Some(element) = handle.element(doc) else {
                    return Outcome::Skipped(ContentIssue::UnresolvedTarget);
                };
                if element.is_sequence() {
                    return skip_unsupported(handle, element.vr);
                }
                if needle.is_empty() || !element.value.entries().iter().any(|e| e.contains(needle)) {
                    return Outcome::Skipped(ContentIssue::NoMatch);
                }
                let vr = element.vr;
                let replaced = element.value.map_entries(|e| e.replace(needle, replacement));
                self.write_value(doc, handle, vr, replaced)
            })
            .collect()
    }

    fn substitute(&self, doc: &mut Document, path: &TagPath, target: &str, replacement: &str) -> Vec<Outcome> {
        let handles = resolve(doc, path);
        handles
            .iter()
            .map(|handle| {
                let Some(element) = handle.element(doc) else {
                    return Outcome::Skipped(ContentIssue::UnresolvedTarget);
                };
                if element.is_sequence() {
                    return skip_unsupported(handle, element.vr);
                }
                if !element.value.entries().contains(&target) {
                    return Outcome::Skipped(ContentIssue::NoMatch);
                }
                let vr = element.vr;
                let substituted = element
                    .value
                    .map_entries(|e| if e == target { replacement.to_string() } else { e.to_string() });
                self.write_value(doc, handle, vr, substituted)
            })
            .collect()
    }

    fn write_value(&self, doc: &mut Document, handle: &ElementHandle, vr: Vr, value: Option<Value>) -> Outcome {
        let Some(value) = value else {
            return Outcome::Skipped(ContentIssue::UnsupportedType(vr));
        };
        let value = fit_length(value, vr, &self.dictionary);
        if let Some(element) = doc.get_mut(handle.dataset, handle.tag) {
            element.value = value;
        }
        Outcome::Applied
    }

    // ── helpers ──────────────────────────────────────────────────────────

    fn ensure(&self, doc: &mut Document, path: &TagPath, raw: &str) -> Result<Vec<ElementHandle>, EditError> {
        ensure(doc, path, &self.dictionary).map_err(|source| EditError::Structural { path: raw.to_string(), source })
    }

    /// Existing type, else the requested one, else the dictionary's.
    fn known_type(
        &self,
        doc: &Document,
        handle: &ElementHandle,
        terminal: &TagStep,
        requested: Option<Vr>,
    ) -> Option<(Vr, TypeSource)> {
        if let Some(element) = handle.element(doc) {
            return Some((element.vr, TypeSource::Existing));
        }
        if let Some(vr) = requested {
            return Some((vr, TypeSource::Requested));
        }
        match &terminal.owner {
            Some(owner) => self
                .dictionary
                .lookup_private_type(terminal.group, owner, terminal.offset())
                .map(|vr| (vr, TypeSource::PrivateDictionary)),
            None => self.dictionary.lookup_type(handle.tag).map(|vr| (vr, TypeSource::Dictionary)),
        }
    }

    /// Type for a write: existing, dictionary, or the configured fallback.
    fn destination_type(
        &self,
        doc: &Document,
        handle: &ElementHandle,
        terminal: &TagStep,
        requested: Option<Vr>,
    ) -> (Vr, TypeSource) {
        if let Some(known) = self.known_type(doc, handle, terminal, requested) {
            return known;
        }
        let (vr, source) = if terminal.is_private() {
            (self.options.private_fallback_vr, TypeSource::PrivateFallback)
        } else {
            (self.options.public_fallback_vr, TypeSource::PublicFallback)
        };
        warn!(tag = %handle.tag, %vr, "type unknown; using fallback");
        (vr, source)
    }
}

fn delete_tag(doc: &mut Document, path: &TagPath) -> Vec<Outcome> {
    resolve(doc, path)
        .into_iter()
        .map(|handle| match doc.delete(handle.dataset, handle.tag) {
            Some(_) => Outcome::Applied,
            None => Outcome::Skipped(ContentIssue::UnresolvedTarget),
        })
        .collect()
}

fn shift_date(doc: &mut Document, path: &TagPath, days: &str) -> Vec<Outcome> {
    let days = parse_day_offset(days);
    let handles = resolve(doc, path);
    handles
        .iter()
        .map(|handle| {
            let Some(element) = handle.element(doc) else {
                return Outcome::Skipped(ContentIssue::UnresolvedTarget);
            };
            if !element.vr.is_date() {
                return skip_unsupported(handle, element.vr);
            }
            let days = match &days {
                Ok(days) => *days,
                Err(issue) => return skip_unparseable(handle, issue.clone()),
            };
            let shifted: Result<Vec<String>, ContentIssue> = element
                .value
                .entries()
                .into_iter()
                .map(|entry| if entry.is_empty() { Ok(String::new()) } else { shift_date_text(entry, days) })
                .collect();
            let mut shifted = match shifted {
                Ok(shifted) => shifted.into_iter(),
                Err(issue) => return skip_unparseable(handle, issue),
            };
            let value = element.value.map_entries(|_| shifted.next().unwrap_or_default());
            if let (Some(value), Some(element)) = (value, doc.get_mut(handle.dataset, handle.tag)) {
                element.value = value;
            }
            Outcome::Applied
        })
        .collect()
}

fn skip_unsupported(handle: &ElementHandle, vr: Vr) -> Outcome {
    warn!(tag = %handle.tag, %vr, "operation does not apply to this type");
    Outcome::Skipped(ContentIssue::UnsupportedType(vr))
}

fn skip_unparseable(handle: &ElementHandle, issue: ContentIssue) -> Outcome {
    warn!(tag = %handle.tag, ?issue, "left unchanged");
    Outcome::Skipped(issue)
}

fn parse_path(raw: &str) -> Result<TagPath, EditError> {
    TagPathParser::parse(raw).map_err(|source| EditError::MalformedPath { path: raw.to_string(), source })
}

fn terminal<'p>(path: &'p TagPath, raw: &str) -> Result<&'p TagStep, EditError> {
    path.terminal().ok_or_else(|| EditError::Structural {
        path: raw.to_string(),
        source: VivifyError::MissingTerminal,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_types_come_from_options() {
        let options = EditOptions { public_fallback_vr: Vr::UT, private_fallback_vr: Vr::SH };
        let editor = Editor::new().with_options(options);
        let mut doc = Document::new();
        editor
            .apply_edits(
                &mut doc,
                &[
                    Operation::set_tag("<(0009,1001)>", "public"),
                    Operation::set_tag(r#"<(0011,"UNKNOWN OWNER",01)>"#, "private"),
                ],
            )
            .unwrap();
        let root = doc.root();
        assert_eq!(doc.get(root, dicom_edit_core::Tag::new(0x0009, 0x1001)).unwrap().vr, Vr::UT);
        assert_eq!(doc.get(root, dicom_edit_core::Tag::new(0x0011, 0x1001)).unwrap().vr, Vr::SH);
    }

    #[test]
    fn destination_type_sources() {
        let editor = Editor::new();
        let mut doc = Document::new();
        let root = doc.root();
        let name = dicom_edit_core::Tag::new(0x0010, 0x0010);
        let terminal = TagStep::public(0x0010, 0x0010);
        let handle = ElementHandle::new(root, name);

        assert_eq!(editor.destination_type(&doc, &handle, &terminal, None), (Vr::PN, TypeSource::Dictionary));
        doc.insert(root, name, Vr::LO, "x");
        assert_eq!(editor.destination_type(&doc, &handle, &terminal, None), (Vr::LO, TypeSource::Existing));

        let ctp = TagStep::private(0x0013, "CTP", 0x12);
        let handle = ElementHandle::new(root, dicom_edit_core::Tag::new(0x0013, 0x1012));
        assert_eq!(editor.destination_type(&doc, &handle, &ctp, None), (Vr::LO, TypeSource::PrivateDictionary));

        let unknown = TagStep::public(0x0009, 0x1001);
        let handle = ElementHandle::new(root, dicom_edit_core::Tag::new(0x0009, 0x1001));
        assert_eq!(editor.destination_type(&doc, &handle, &unknown, None), (Vr::LO, TypeSource::PublicFallback));
        assert_eq!(
            editor.destination_type(&doc, &handle, &unknown, Some(Vr::CS)),
            (Vr::CS, TypeSource::Requested)
        );

        // An existing element keeps its type over a requested one.
        let handle = ElementHandle::new(root, name);
        assert_eq!(
            editor.destination_type(&doc, &handle, &terminal, Some(Vr::CS)),
            (Vr::LO, TypeSource::Existing)
        );
    }
}
