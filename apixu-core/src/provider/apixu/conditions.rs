//! Apixu condition codes and their canonical [`Condition`].
//!
//! Codes come from <https://www.apixu.com/doc/Apixu_weather_conditions.json>.
//! Fine-grained provider states collapse many-to-one: every rain intensity is
//! `Rain`, blizzards and blowing snow are `Snow`, thunder with snow stays `Snow`.

use std::{collections::HashMap, sync::LazyLock};

use crate::Condition;

const TABLE: &[(&str, Condition)] = &[
    ("1000", Condition::Clear),
    ("1003", Condition::PartlyCloudy),
    ("1006", Condition::Cloudy),
    ("1009", Condition::Overcast),
    ("1030", Condition::Mist),
    ("1063", Condition::Rain),
    ("1066", Condition::Snow),
    ("1069", Condition::Sleet),
    ("1072", Condition::Drizzle),
    ("1087", Condition::Thunderstorm),
    ("1114", Condition::Snow),
    ("1117", Condition::Snow),
    ("1135", Condition::Fog),
    ("1147", Condition::Fog),
    ("1150", Condition::Drizzle),
    ("1153", Condition::Drizzle),
    ("1168", Condition::Drizzle),
    ("1171", Condition::Drizzle),
    ("1180", Condition::Rain),
    ("1183", Condition::Rain),
    ("1186", Condition::Rain),
    ("1189", Condition::Rain),
    ("1192", Condition::Rain),
    ("1195", Condition::Rain),
    ("1198", Condition::Rain),
    ("1201", Condition::Rain),
    ("1204", Condition::Sleet),
    ("1207", Condition::Sleet),
    ("1210", Condition::Snow),
    ("1213", Condition::Snow),
    ("1216", Condition::Snow),
    ("1219", Condition::Snow),
    ("1222", Condition::Snow),
    ("1225", Condition::Snow),
    ("1237", Condition::Hail),
    ("1240", Condition::Rain),
    ("1243", Condition::Rain),
    ("1246", Condition::Rain),
    ("1249", Condition::Sleet),
    ("1252", Condition::Sleet),
    ("1255", Condition::Snow),
    ("1258", Condition::Snow),
    ("1261", Condition::Hail),
    ("1264", Condition::Hail),
    ("1273", Condition::Thunderstorm),
    ("1276", Condition::Thunderstorm),
    ("1279", Condition::Snow),
    ("1282", Condition::Snow),
];

static CONDITIONS: LazyLock<HashMap<&'static str, Condition>> =
    LazyLock::new(|| TABLE.iter().copied().collect());

/// Canonical condition for an Apixu code. Unlisted codes, including ones the
/// provider adds later, are [`Condition::ConditionUnknown`].
pub fn condition_for(code: &str) -> Condition {
    CONDITIONS.get(code).copied().unwrap_or(Condition::ConditionUnknown)
}
