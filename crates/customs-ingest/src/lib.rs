//! Declaration XML ingestion.
//!
//! A declaration document carries one `BeyannameBilgi` header, a list of
//! `kalem` line items, and side lists (`Vergiler`) joined to the items by
//! item number. Import flattens each file into rows of string fields,
//! broadcasting the header onto every item, then merges files into one
//! [`customs_model::Dataset`] with a union-of-columns schema and a
//! synthetic unique `row_id`.

pub mod declaration;
pub mod folder;

pub use declaration::{DeclarationFile, read_declaration};
pub use folder::{FolderImport, import_folder, merge_files};
