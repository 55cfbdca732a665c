//! Browser step bindings for `rstest-bdd`.
//!
//! The bindings translate UI phrases such as
//! `Then page title should become "Inbox"` or
//! `Then "Folders" list should contain the following items:` into polling
//! assertions from [`rstest_bdd_assert`]. The browser itself stays behind the
//! [`BrowserDriver`] and [`ListProbe`] traits, so any automation backend can
//! be plugged in.

mod config;
mod datatable;
mod driver;
mod error;
mod expectation;
mod list;
mod navigation;

pub use config::{BASE_URL_ENV, UiConfig, UiConfigError};
pub use datatable::{DataTableError, ReferenceTable, table_to_rows};
pub use driver::{BrowserDriver, DriverError, ListProbe};
pub use error::StepFailure;
pub use expectation::{ExpectationParseError, ListExpectation, Presence};
pub use list::ListSteps;
pub use navigation::NavigationSteps;
