//! Individual track entry parsing
//!
//! This module converts one data line into a structured track entry:
//! timestamp, position with hemisphere sign convention applied, status,
//! wind speed, and pressure.

use super::field_parsers::{
    assemble_timestamp, parse_hemisphere_coordinate, parse_required_f64, split_fields,
};
use crate::app::models::Entry;
use crate::constants::ENTRY_FIELD_COUNT;
use crate::{Error, Result};

/// Parse a single track entry from a data line
///
/// Fields, in order: date `YYYYMMDD`, time `HHMM`, record identifier
/// (may be blank), status code, latitude with `N`/`S` suffix, longitude
/// with `E`/`W` suffix, wind speed in knots, pressure in millibars.
/// Trailing fields beyond the eighth are ignored.
pub fn parse_track_entry(line: &str, line_number: usize) -> Result<Entry> {
    let fields = split_fields(line);
    if fields.len() < ENTRY_FIELD_COUNT {
        return Err(Error::parse(
            line_number,
            format!(
                "data line has {} fields, expected at least {}",
                fields.len(),
                ENTRY_FIELD_COUNT
            ),
        ));
    }

    let datetime_utc = assemble_timestamp(fields[0], fields[1], line_number)?;

    // Identifier and status pass through verbatim
    let identifier_code = fields[2].to_string();
    let system_status = fields[3].to_string();

    // Southern latitudes and western longitudes become negative
    let latitude = parse_hemisphere_coordinate(fields[4], 'S', "latitude", line_number)?;
    let longitude = parse_hemisphere_coordinate(fields[5], 'W', "longitude", line_number)?;

    let wind_speed = parse_required_f64(fields[6], "wind speed", line_number)?;
    let pressure_mb = parse_required_f64(fields[7], "pressure", line_number)?;

    Ok(Entry {
        datetime_utc,
        identifier_code,
        system_status,
        latitude,
        longitude,
        wind_speed,
        pressure_mb,
    })
}
