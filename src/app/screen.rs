// SPDX-License-Identifier: MPL-2.0
//! Top-level screens reachable from the navbar.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Screen {
    #[default]
    Dashboard,
    Settings,
    About,
}
