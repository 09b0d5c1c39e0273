//! Weather/time toolkit: five stateless demo tools over fixed city tables.
//!
//! Each tool is a pure function over its literal inputs; the only exception
//! is the current-time lookup, which reads the wall clock through the
//! injectable [`Clock`] trait so tests stay deterministic.

use crate::tools::registry::{require_f64, require_str, to_json, Tool};
use crate::types::{Result, ToolResponse};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use serde_json::{json, Value};
use std::sync::Arc;

/// Canned weather reports keyed by lower-cased city name.
const WEATHER_REPORTS: [(&str, &str); 2] = [
    (
        "new york",
        "The weather in New York is sunny with a temperature of 25 degrees Celsius \
         (77 degrees Fahrenheit).",
    ),
    (
        "amawbia",
        "The weather for Amawbia dey sunny o with a temperature wey dey up to 32 degrees \
         Celsius.",
    ),
];

/// Display table mapping lower-cased city names to their IANA zone plus a
/// UTC offset annotation.
const CITY_TIMEZONES: [(&str, &str); 4] = [
    ("new york", "America/New_York (UTC-5/-4)"),
    ("amawbia", "Africa/Lagos (UTC+1)"),
    ("london", "Europe/London (UTC+0/+1)"),
    ("tokyo", "Asia/Tokyo (UTC+9)"),
];

/// Source of the current wall-clock time.
///
/// Production uses [`SystemClock`]; tests inject a fixed instant.
pub trait Clock: Send + Sync {
    /// The current instant in UTC.
    fn now_utc(&self) -> DateTime<Utc>;
}

/// [`Clock`] backed by the system clock.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_utc(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Retrieve the canned weather report for a city.
///
/// Matching is case-insensitive against the fixed two-city table; any other
/// city (including the empty string) yields an error response.
pub fn get_weather(city: &str) -> ToolResponse {
    let city_lower = city.to_lowercase();
    match WEATHER_REPORTS
        .iter()
        .find(|(name, _)| *name == city_lower)
    {
        Some((_, report)) => ToolResponse::report(*report),
        None => ToolResponse::error(format!(
            "Weather information for '{}' is not available.",
            city
        )),
    }
}

/// IANA zone for the one city the time lookup recognizes.
fn time_zone_for(city_lower: &str) -> Option<Tz> {
    match city_lower {
        "new york" => Some(chrono_tz::America::New_York),
        _ => None,
    }
}

/// Format the current time in a city's zone as
/// `YYYY-MM-DD HH:MM:SS <abbrev><offset>` (e.g. `2026-07-04 12:30:00 EDT-0400`).
pub fn current_time_report(city: &str, now: DateTime<Utc>) -> ToolResponse {
    let Some(tz) = time_zone_for(&city.to_lowercase()) else {
        return ToolResponse::error(format!(
            "Sorry, I don't have timezone information for {}.",
            city
        ));
    };

    let local = now.with_timezone(&tz);
    ToolResponse::report(format!(
        "The current time in {} is {}",
        city,
        local.format("%Y-%m-%d %H:%M:%S %Z%z")
    ))
}

/// Celsius value of `value` expressed in `unit` (one of `C`, `F`, `K`).
fn to_celsius(value: f64, unit: &str) -> f64 {
    match unit {
        "C" => value,
        "F" => (value - 32.0) * 5.0 / 9.0,
        _ => value - 273.15,
    }
}

/// `celsius` expressed in `unit` (one of `C`, `F`, `K`).
fn from_celsius(celsius: f64, unit: &str) -> f64 {
    match unit {
        "C" => celsius,
        "F" => celsius * 9.0 / 5.0 + 32.0,
        _ => celsius + 273.15,
    }
}

/// Convert a temperature between Celsius, Fahrenheit, and Kelvin.
///
/// Units are case-insensitive; an unknown unit on either side errors. Equal
/// units are an identity conversion (no round-trip through Celsius), so the
/// reported value never drifts. The result is formatted to two decimal
/// places with Rust's `{:.2}` (round half to even).
pub fn convert_temperature(temperature: f64, from_unit: &str, to_unit: &str) -> ToolResponse {
    let from = from_unit.to_uppercase();
    let to = to_unit.to_uppercase();

    let valid = ["C", "F", "K"];
    if !valid.contains(&from.as_str()) || !valid.contains(&to.as_str()) {
        return ToolResponse::error("Invalid unit. Use 'C', 'F', or 'K'.");
    }

    let result = if from == to {
        temperature
    } else {
        from_celsius(to_celsius(temperature, &from), &to)
    };

    ToolResponse::report(format!(
        "{}°{} is {:.2}°{}",
        temperature, from, result, to
    ))
}

/// Look up a city's timezone in the fixed four-city display table.
pub fn get_city_timezone(city: &str) -> ToolResponse {
    let city_lower = city.to_lowercase();
    match CITY_TIMEZONES
        .iter()
        .find(|(name, _)| *name == city_lower)
    {
        Some((_, zone)) => ToolResponse::report(format!("The timezone for {} is {}.", city, zone)),
        None => ToolResponse::error(format!(
            "Timezone information for '{}' is not available.",
            city
        )),
    }
}

/// Finite and without a fractional part.
fn is_whole(x: f64) -> bool {
    x.is_finite() && x.fract() == 0.0
}

/// Add two numbers, requiring both to be whole.
///
/// Non-whole (or non-finite) input on either side errors rather than
/// silently truncating. The sum of two whole f64 values is itself whole,
/// so `Display` prints it without a fractional part at any magnitude.
pub fn add_two_numbers(num1: f64, num2: f64) -> ToolResponse {
    if is_whole(num1) && is_whole(num2) {
        ToolResponse::result(format!("The result is {}.", num1 + num2))
    } else {
        ToolResponse::error("Please enter valid numbers.")
    }
}

// ============= Tool wrappers =============

/// Registry wrapper for [`get_weather`].
pub struct WeatherTool;

#[async_trait]
impl Tool for WeatherTool {
    fn name(&self) -> &str {
        "get_weather"
    }

    fn description(&self) -> &str {
        "Retrieves the current weather report for a specified city"
    }

    fn parameters_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "city": {
                    "type": "string",
                    "description": "The name of the city for which to retrieve the weather report"
                }
            },
            "required": ["city"]
        })
    }

    async fn execute(&self, args: Value) -> Result<Value> {
        let city = require_str(&args, "city")?;
        to_json(get_weather(city))
    }
}

/// Registry wrapper for [`current_time_report`]. Holds the injected clock.
pub struct CurrentTimeTool {
    clock: Arc<dyn Clock>,
}

impl CurrentTimeTool {
    /// Tool reading the system clock.
    pub fn new() -> Self {
        Self {
            clock: Arc::new(SystemClock),
        }
    }

    /// Tool reading a caller-supplied clock (used by tests).
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }
}

impl Default for CurrentTimeTool {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Tool for CurrentTimeTool {
    fn name(&self) -> &str {
        "get_current_time"
    }

    fn description(&self) -> &str {
        "Returns the current time in a specified city"
    }

    fn parameters_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "city": {
                    "type": "string",
                    "description": "The name of the city for which to retrieve the current time"
                }
            },
            "required": ["city"]
        })
    }

    async fn execute(&self, args: Value) -> Result<Value> {
        let city = require_str(&args, "city")?;
        to_json(current_time_report(city, self.clock.now_utc()))
    }
}

/// Registry wrapper for [`convert_temperature`].
pub struct TemperatureTool;

#[async_trait]
impl Tool for TemperatureTool {
    fn name(&self) -> &str {
        "convert_temperature"
    }

    fn description(&self) -> &str {
        "Converts temperature between Celsius, Fahrenheit, and Kelvin"
    }

    fn parameters_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "temperature": {
                    "type": "number",
                    "description": "The temperature value to convert"
                },
                "from_unit": {
                    "type": "string",
                    "description": "Source unit ('C', 'F', or 'K')"
                },
                "to_unit": {
                    "type": "string",
                    "description": "Target unit ('C', 'F', or 'K')"
                }
            },
            "required": ["temperature", "from_unit", "to_unit"]
        })
    }

    async fn execute(&self, args: Value) -> Result<Value> {
        let temperature = require_f64(&args, "temperature")?;
        let from_unit = require_str(&args, "from_unit")?;
        let to_unit = require_str(&args, "to_unit")?;
        to_json(convert_temperature(temperature, from_unit, to_unit))
    }
}

/// Registry wrapper for [`get_city_timezone`].
pub struct CityTimezoneTool;

#[async_trait]
impl Tool for CityTimezoneTool {
    fn name(&self) -> &str {
        "get_city_timezone"
    }

    fn description(&self) -> &str {
        "Returns the timezone for a specified city"
    }

    fn parameters_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "city": {
                    "type": "string",
                    "description": "The name of the city"
                }
            },
            "required": ["city"]
        })
    }

    async fn execute(&self, args: Value) -> Result<Value> {
        let city = require_str(&args, "city")?;
        to_json(get_city_timezone(city))
    }
}

/// Registry wrapper for [`add_two_numbers`].
pub struct AddNumbersTool;

#[async_trait]
impl Tool for AddNumbersTool {
    fn name(&self) -> &str {
        "add_two_numbers"
    }

    fn description(&self) -> &str {
        "Adds two whole numbers and returns the sum"
    }

    fn parameters_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "num1": {
                    "type": "number",
                    "description": "The first number"
                },
                "num2": {
                    "type": "number",
                    "description": "The second number"
                }
            },
            "required": ["num1", "num2"]
        })
    }

    async fn execute(&self, args: Value) -> Result<Value> {
        let num1 = require_f64(&args, "num1")?;
        let num2 = require_f64(&args, "num2")?;
        to_json(add_two_numbers(num1, num2))
    }
}
