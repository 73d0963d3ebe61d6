// SPDX-License-Identifier: MPL-2.0
//! `chatdesk` is a desktop shell for a support-chat workspace built with the
//! Iced GUI framework.
//!
//! The crate wires a display-mode resolver and theme composer around a small
//! screen tree, with preference persistence, Fluent-based internationalization,
//! and handles for the data-fetching cache and the real-time connection.

#![doc(html_root_url = "https://docs.rs/chatdesk/0.1.0")]

pub mod app;
pub mod data;
pub mod error;
pub mod i18n;
pub mod realtime;
pub mod store;
pub mod ui;
