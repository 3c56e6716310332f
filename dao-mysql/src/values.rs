use crate::ERROR_NAME;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use dao_core::error::Error;
use dao_core::values::Value;
use mysql::consts::{ColumnFlags, ColumnType};
use rust_decimal::Decimal;

fn parse_error(what: &str, raw: &str) -> Error {
    Error::Driver { name: ERROR_NAME, error: format!("Couldn't parse {}: {}", what, raw).into() }
}

/// Convert a raw value read from a result set into a {{Value}}, driven by the column metadata.
///
/// The text protocol hands back most cells as bytes, the column type decides what they become. All-zero dates and
/// timestamps, the MySQL way of saying "no value", convert to null.
pub(crate) fn typecast(
    raw: mysql::Value,
    column_type: ColumnType,
    flags: ColumnFlags,
) -> std::result::Result<Value, Error> {
    match raw {
        mysql::Value::NULL => Ok(Value::Null),
        mysql::Value::Int(v) => Ok(Value::Int64(v)),
        mysql::Value::UInt(v) => Ok(Value::UInt64(v)),
        mysql::Value::Float(v) => Ok(Value::Float64(v as f64)),
        mysql::Value::Double(v) => Ok(Value::Float64(v)),
        mysql::Value::Date(year, month, day, hour, minute, second, micros) => {
            if year == 0 && month == 0 && day == 0 {
                // MySQL dates and timestamps can default to all-zero.
                return Ok(Value::Null);
            }
            let date = NaiveDate::from_ymd_opt(year as i32, month as u32, day as u32)
                .ok_or_else(|| parse_error("date", &format!("{:04}-{:02}-{:02}", year, month, day)))?;
            if column_type == ColumnType::MYSQL_TYPE_DATE || column_type == ColumnType::MYSQL_TYPE_NEWDATE {
                Ok(Value::Date(date))
            } else {
                let date_time = date
                    .and_hms_micro_opt(hour as u32, minute as u32, second as u32, micros)
                    .ok_or_else(|| parse_error("timestamp", &format!("{:02}:{:02}:{:02}", hour, minute, second)))?;
                Ok(Value::DateTime(date_time))
            }
        }
        mysql::Value::Time(negative, days, hours, minutes, seconds, micros) => {
            if negative || days > 0 {
                // MySQL TIME values can exceed the range of a time of day.
                let sign = if negative { "-" } else { "" };
                return Ok(Value::String(format!(
                    "{}{:02}:{:02}:{:02}",
                    sign,
                    days * 24 + hours as u32,
                    minutes,
                    seconds
                )));
            }
            let time = NaiveTime::from_hms_micro_opt(hours as u32, minutes as u32, seconds as u32, micros)
                .ok_or_else(|| parse_error("time", &format!("{:02}:{:02}:{:02}", hours, minutes, seconds)))?;
            Ok(Value::Time(time))
        }
        mysql::Value::Bytes(bytes) => typecast_bytes(bytes, column_type, flags),
    }
}

/// Typecast a text-protocol cell by its column type.
fn typecast_bytes(
    bytes: Vec<u8>,
    column_type: ColumnType,
    flags: ColumnFlags,
) -> std::result::Result<Value, Error> {
    match column_type {
        ColumnType::MYSQL_TYPE_TINY
        | ColumnType::MYSQL_TYPE_SHORT
        | ColumnType::MYSQL_TYPE_INT24
        | ColumnType::MYSQL_TYPE_LONG
        | ColumnType::MYSQL_TYPE_LONGLONG
        | ColumnType::MYSQL_TYPE_YEAR => {
            let text = as_text(&bytes, "integer")?;
            if flags.contains(ColumnFlags::UNSIGNED_FLAG) {
                Ok(Value::UInt64(text.parse::<u64>().map_err(|_| parse_error("integer", text))?))
            } else {
                Ok(Value::Int64(text.parse::<i64>().map_err(|_| parse_error("integer", text))?))
            }
        }
        ColumnType::MYSQL_TYPE_DECIMAL | ColumnType::MYSQL_TYPE_NEWDECIMAL => {
            let text = as_text(&bytes, "decimal")?;
            Ok(Value::Decimal(text.parse::<Decimal>().map_err(|_| parse_error("decimal", text))?))
        }
        ColumnType::MYSQL_TYPE_FLOAT | ColumnType::MYSQL_TYPE_DOUBLE => {
            let text = as_text(&bytes, "float")?;
            Ok(Value::Float64(text.parse::<f64>().map_err(|_| parse_error("float", text))?))
        }
        ColumnType::MYSQL_TYPE_DATE | ColumnType::MYSQL_TYPE_NEWDATE => {
            let text = as_text(&bytes, "date")?;
            if is_zero_temporal(text) {
                return Ok(Value::Null);
            }
            Ok(Value::Date(NaiveDate::parse_from_str(text, "%Y-%m-%d").map_err(|_| parse_error("date", text))?))
        }
        ColumnType::MYSQL_TYPE_DATETIME
        | ColumnType::MYSQL_TYPE_DATETIME2
        | ColumnType::MYSQL_TYPE_TIMESTAMP
        | ColumnType::MYSQL_TYPE_TIMESTAMP2 => {
            let text = as_text(&bytes, "timestamp")?;
            if is_zero_temporal(text) {
                return Ok(Value::Null);
            }
            Ok(Value::DateTime(
                NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S%.f")
                    .map_err(|_| parse_error("timestamp", text))?,
            ))
        }
        ColumnType::MYSQL_TYPE_TIME | ColumnType::MYSQL_TYPE_TIME2 => {
            let text = as_text(&bytes, "time")?;
            Ok(Value::Time(
                NaiveTime::parse_from_str(text, "%H:%M:%S%.f").map_err(|_| parse_error("time", text))?,
            ))
        }
        _ => {
            if flags.contains(ColumnFlags::BINARY_FLAG) {
                return Ok(Value::Blob(bytes));
            }
            match String::from_utf8(bytes) {
                Ok(text) => Ok(Value::String(text)),
                // Non UTF-8 text is handed back raw.
                Err(e) => Ok(Value::Blob(e.into_bytes())),
            }
        }
    }
}

fn as_text<'b>(bytes: &'b [u8], what: &str) -> std::result::Result<&'b str, Error> {
    std::str::from_utf8(bytes).map_err(|_| parse_error(what, &format!("{:?}", bytes)))
}

/// MySQL renders missing dates and timestamps as all-zero values.
fn is_zero_temporal(text: &str) -> bool {
    matches!(text, "0000-00-00" | "0000-00-00 00:00:00")
}
