// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! UI strings come from Fluent bundles embedded at build time; the display
//! language is resolved from the CLI, the preference store, or the OS locale.
//! Regional formatting conventions (date and time shapes) are resolved
//! separately in [`regional`] from the stored locale identifier.

pub mod fluent;
pub mod regional;
