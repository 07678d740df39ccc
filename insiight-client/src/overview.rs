// SPDX-FileCopyrightText: 2026 The insiight contributors
//
// SPDX-License-Identifier: MPL-2.0

use serde::{Deserialize, Serialize};

/// Status snapshot of one followed person with diabetes (PWD).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PwdOverview {
    pub pwd_id: String,
    pub pwd_nickname: String,
    pub status: PwdStatus,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct PwdStatus {
    pub date: String,
    pub summary: PwdSummary,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PwdSummary {
    pub glucose_date: String,
    pub glucose_unit: String,
    pub cgm_rate_arrow: String,
    pub glucose_quantity: String,
    pub pump_battery_level: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Overviews {
    Many(Vec<PwdOverview>),
    One(PwdOverview),
}

/// Decode the body returned by [`crate::Client::pwd_overviews`].
///
/// The service answers with a list, but a lone object is accepted too.
pub fn decode_overviews(bytes: &[u8]) -> Result<Vec<PwdOverview>, crate::Error> {
    Ok(match serde_json::from_slice(bytes)? {
        Overviews::Many(overviews) => overviews,
        Overviews::One(overview) => vec![overview],
    })
}
