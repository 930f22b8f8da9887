// SPDX-License-Identifier: PMPL-1.0-or-later

//! Internationalisation for the portfolio.
//!
//! Two kinds of text are localized:
//!
//! - interface strings (headings, buttons) from the compiled-in catalog,
//!   looked up with [`t`];
//! - personal content from the data fixtures, resolved with [`resolve`],
//!   [`localize`] or [`LocalizedText`].
//!
//! Both fall back to English when the active language has no entry, and
//! neither ever fails: the worst case is an empty string.
//!
//! | Code | Language | Native name |
//! |------|----------|-------------|
//! | en   | English  | English     |
//! | es   | Spanish  | Español     |

mod active;
mod catalog;
mod resolve;

pub use active::ActiveLanguage;
pub use catalog::{t, t_or_key, Lang};
pub use resolve::{localize, localize_list, resolve, LocalizedText, FALLBACK_LANG};
