//! Pure validation of operator input.
//!
//! The console layer reads raw lines; everything that decides whether a line
//! is acceptable lives here so it can be tested without a terminal.

use crate::core::geography::Geography;
use crate::error::InputError;

/// A resolved main-menu choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    Kpessekou,
    Zobibi,
    Statistics,
    Quit,
}

impl MenuCommand {
    pub const ENTRIES: [(u8, &'static str); 4] = [
        (1, "Draw a Kpessekou match"),
        (2, "Draw a Zobibi match"),
        (3, "Show tournament statistics"),
        (4, "Quit"),
    ];
}

/// Parse a main-menu line (`1`-`4`).
pub fn parse_menu_choice(input: &str) -> Result<MenuCommand, InputError> {
    match parse_number(input)? {
        1 => Ok(MenuCommand::Kpessekou),
        2 => Ok(MenuCommand::Zobibi),
        3 => Ok(MenuCommand::Statistics),
        4 => Ok(MenuCommand::Quit),
        value => Err(InputError::OutOfRange {
            value,
            max: MenuCommand::ENTRIES.len(),
        }),
    }
}

/// Parse a 1-based region number into a 0-based index.
pub fn parse_region_index(input: &str, region_count: usize) -> Result<usize, InputError> {
    let value = parse_number(input)?;
    if value < 1 || value as u64 > region_count as u64 {
        return Err(InputError::OutOfRange {
            value,
            max: region_count,
        });
    }
    Ok((value - 1) as usize)
}

/// Resolve the two region numbers typed for a Zobibi draw.
pub fn parse_region_pair(
    geography: &Geography,
    first: &str,
    second: &str,
) -> Result<(String, String), InputError> {
    let count = geography.regions().len();
    let first = parse_region_index(first, count)?;
    let second = parse_region_index(second, count)?;
    if first == second {
        return Err(InputError::DuplicateRegion);
    }
    let regions = geography.regions();
    Ok((regions[first].name.clone(), regions[second].name.clone()))
}

/// Resolve a region given either by name (case-insensitive) or 1-based number.
pub fn resolve_region(geography: &Geography, token: &str) -> Result<String, InputError> {
    if let Some(region) = geography.find_region(token) {
        return Ok(region.name.clone());
    }
    match parse_region_index(token, geography.regions().len()) {
        Ok(index) => Ok(geography.regions()[index].name.clone()),
        Err(InputError::NotANumber(_)) => Err(InputError::UnknownRegion(token.trim().to_string())),
        Err(err) => Err(err),
    }
}

fn parse_number(input: &str) -> Result<i64, InputError> {
    let trimmed = input.trim();
    trimmed
        .parse::<i64>()
        .map_err(|_| InputError::NotANumber(trimmed.to_string()))
}
