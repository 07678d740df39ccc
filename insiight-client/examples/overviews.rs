// SPDX-FileCopyrightText: 2026 The insiight contributors
//
// SPDX-License-Identifier: MPL-2.0

use std::env;

fn main() {
    let mut args = env::args().skip(1);
    let (Some(username), Some(password)) = (args.next(), args.next()) else {
        eprintln!("Usage: overviews <username> <password>");
        return;
    };

    let mut client = insiight_client::Client::new().unwrap();
    println!("{:#?}", client.login(&username, &password).unwrap());
    println!("{:#?}", client.refresh().unwrap());
    let body = client.pwd_overviews().unwrap();
    println!("{:#?}", insiight_client::decode_overviews(&body).unwrap());
}
