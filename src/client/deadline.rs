//! Deadline timestamp handling.
//!
//! The interface collects deadlines as a local date-time without
//! seconds (`YYYY-MM-DDTHH:MM`), while the service stores and returns
//! `YYYY-MM-DD HH:MM:SS`. Both directions of the conversion are
//! lossless to the minute. Wire timestamps are fixed-width and
//! zero-padded, so their lexicographic order is chronological order.

use crate::{
    Error,
    error::Result,
};

const LOCAL_LEN: usize = 16; // YYYY-MM-DDTHH:MM
const WIRE_LEN : usize = 19; // YYYY-MM-DD HH:MM:SS

/// Converts a local date-time input into the wire form the service
/// expects, appending the seconds field.
pub fn normalize(input: &str) -> Result<String> {
    check_fields(input, 'T')?;
    if input.len() != LOCAL_LEN {
        return Err(Error::Argument(format!("Invalid deadline {}", input)));
    }

    let mut wire = input.replace('T', " ");
    wire.push_str(":00");
    Ok(wire)
}

/// Converts a stored wire timestamp back into the local input form,
/// dropping the seconds field.
pub fn to_input(wire: &str) -> Result<String> {
    check_fields(wire, ' ')?;
    if wire.len() != WIRE_LEN {
        return Err(Error::Argument(format!("Invalid deadline {}", wire)));
    }

    let bytes = wire.as_bytes();
    if bytes[16] != b':' ||
        !bytes[17].is_ascii_digit() ||
        !bytes[18].is_ascii_digit() {
        return Err(Error::Argument(format!("Invalid deadline {}", wire)));
    }

    Ok(wire[..LOCAL_LEN].replace(' ', "T"))
}

// Validates the YYYY-MM-DD{sep}HH:MM prefix common to both forms.
fn check_fields(value: &str, sep: char) -> Result<()> {
    let bytes = value.as_bytes();
    if bytes.len() < LOCAL_LEN {
        return Err(Error::Argument(format!("Invalid deadline {}", value)));
    }

    let digits = [0usize, 1, 2, 3, 5, 6, 8, 9, 11, 12, 14, 15];
    for pos in digits {
        if !bytes[pos].is_ascii_digit() {
            return Err(Error::Argument(format!("Invalid deadline {}", value)));
        }
    }
    if bytes[4] != b'-' || bytes[7] != b'-' ||
        bytes[10] != sep as u8 || bytes[13] != b':' {
        return Err(Error::Argument(format!("Invalid deadline {}", value)));
    }

    let month : u32 = value[5..7].parse().unwrap();
    let day   : u32 = value[8..10].parse().unwrap();
    let hour  : u32 = value[11..13].parse().unwrap();
    let minute: u32 = value[14..16].parse().unwrap();

    let valid = (1..=12).contains(&month)
        && (1..=31).contains(&day)
        && hour <= 23
        && minute <= 59;

    match valid {
        true => Ok(()),
        false => Err(Error::Argument(format!("Invalid deadline {}", value)))
    }
}
