//! HTMLCOMPAT Data: the feature support database
//!
//! An immutable, in-memory view of the HTML part of the browser
//! compatibility dataset. The database is loaded once from a JSON document
//! supplied by the caller and then shared by reference with every query.
//!
//! ```
//! use htmlcompat_data::{CompatStatement, FeatureDatabase, SupportStatement};
//!
//! let db = FeatureDatabase::builder()
//!     .with_element(
//!         "dialog",
//!         CompatStatement::new()
//!             .with_support("chrome", SupportStatement::since("37"))
//!             .with_support("ie", SupportStatement::never()),
//!     )
//!     .build();
//!
//! assert!(db.element("dialog").is_some());
//! assert!(db.element("blink").is_none());
//! ```

pub mod database;
pub mod records;

pub use database::{FeatureDatabase, FeatureDatabaseBuilder};
pub use records::{
    CompatStatement, Deprecation, StatusRecord, SupportRecord, SupportStatement, VersionAdded,
};
