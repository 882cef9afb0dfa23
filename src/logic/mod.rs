// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Business logic with no UI dependencies: countdown arithmetic and the
//! submission backend seam.

pub mod countdown;
pub mod submit;
