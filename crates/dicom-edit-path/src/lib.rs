//! Tag path expressions over DICOM-style datasets.
//!
//! A path such as `<(5200,9230)[<0>](0008,9124)[0](0008,2112)[<0>](0040,A170)>`
//! names elements by tag, descending into sequence items by exact index
//! (`[n]`) or over every item (`[<n>]`). Private elements are addressed by
//! owner and offset: `<(0013,"CTP",10)>`.
//!
//! [`resolve`] finds existing element slots without touching the document;
//! [`ensure`] creates missing sequences, items and private blocks first.
//!
//! # Example
//!
//! ```
//! use dicom_edit_core::{Document, Tag, Vr};
//! use dicom_edit_path::{resolve, TagPathParser};
//!
//! let mut doc = Document::new();
//! let root = doc.root();
//! doc.insert(root, Tag::new(0x0010, 0x0010), Vr::PN, "Doe^John");
//!
//! let path = TagPathParser::parse("<(0010,0010)>").unwrap();
//! let handles = resolve(&doc, &path);
//! assert_eq!(handles.len(), 1);
//! assert_eq!(handles[0].element(&doc).unwrap().vr, Vr::PN);
//! ```

mod types;
pub use types::*;

mod parser;
pub use parser::{ParseError, TagPathParser};

mod resolve;
pub use resolve::{locate, resolve, resolve_str};

mod vivify;
pub use vivify::{ensure, VivifyError, MAX_PADDING};
