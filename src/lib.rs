// SPDX-FileCopyrightText: 2026 The insiight contributors
//
// SPDX-License-Identifier: GPL-3.0-only

pub mod cli;
pub mod print;
