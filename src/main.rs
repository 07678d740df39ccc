// SPDX-FileCopyrightText: 2026 The insiight contributors
//
// SPDX-License-Identifier: GPL-3.0-only

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    insiight::cli::run();
}
