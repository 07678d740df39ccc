// SPDX-FileCopyrightText: 2026 The insiight contributors
//
// SPDX-License-Identifier: GPL-3.0-only

use anyhow::Context;
use std::{
    env,
    io::{self, Write},
    process,
};

use insiight_client::{decode_overviews, Client, ClientConf};

use crate::print::pretty_json;

pub const USAGE: &str = "Usage: insiight [--refresh] [--] <username> <password>";

#[derive(Debug, PartialEq, Eq)]
pub struct Args {
    pub username: String,
    pub password: String,
    /// Trade the refresh token for a new access token before fetching.
    pub refresh: bool,
}

impl Args {
    /// `None` unless both a username and a password are present. Extra
    /// positional arguments are ignored.
    ///
    /// Only the first `--refresh` is a flag, and `--` ends flag parsing, so
    /// either form lets a password start with dashes.
    pub fn parse<I: IntoIterator<Item = String>>(args: I) -> Option<Self> {
        let mut refresh = false;
        let mut flags_done = false;
        let mut positional = Vec::new();
        for arg in args {
            if !flags_done && arg == "--" {
                flags_done = true;
            } else if !flags_done && !refresh && arg == "--refresh" {
                refresh = true;
            } else {
                positional.push(arg);
            }
        }

        let mut positional = positional.into_iter();
        Some(Self {
            username: positional.next()?,
            password: positional.next()?,
            refresh,
        })
    }
}

/// Log in, fetch the overviews and write them to `out`.
pub fn fetch_and_print<W: Write>(
    args: &Args,
    conf: ClientConf,
    out: &mut W,
) -> anyhow::Result<()> {
    let mut client = Client::with_conf(conf).context("Failed to set up HTTP client")?;

    eprintln!("Logging in...");
    let auth = client
        .login(&args.username, &args.password)
        .context("Login failed")?;
    eprintln!("Login successful! Token expires in {} seconds", auth.expires_in);

    if args.refresh {
        let auth = client.refresh().context("Token refresh failed")?;
        eprintln!(
            "Token refreshed! New token expires in {} seconds",
            auth.expires_in
        );
    }

    eprintln!("Fetching PWD overviews...");
    let body = client.pwd_overviews().context("Failed to get overviews")?;

    match decode_overviews(&body) {
        Ok(overviews) => {
            for overview in &overviews {
                let summary = &overview.status.summary;
                log::info!(
                    "{}: {} {} ({}), pump battery {}",
                    overview.pwd_nickname,
                    summary.glucose_quantity,
                    summary.glucose_unit,
                    summary.cgm_rate_arrow,
                    summary.pump_battery_level,
                );
            }
        }
        Err(err) => log::debug!("overviews not in the expected shape: {}", err),
    }

    out.write_all(&pretty_json(&body))?;
    out.write_all(b"\n")?;
    out.flush()?;
    Ok(())
}

pub fn run() {
    let args = match Args::parse(env::args().skip(1)) {
        Some(args) => args,
        None => {
            println!("{}", USAGE);
            process::exit(1);
        }
    };

    let stdout = io::stdout();
    if let Err(err) = fetch_and_print(&args, ClientConf::default(), &mut stdout.lock()) {
        eprintln!("{:#}", err);
        process::exit(1);
    }
}
