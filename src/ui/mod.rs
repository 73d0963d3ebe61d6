// SPDX-License-Identifier: MPL-2.0
//! UI components, design tokens, and the theming system.

pub mod design_tokens;
pub mod navbar;
pub mod settings;
pub mod styles;
pub mod theming;
