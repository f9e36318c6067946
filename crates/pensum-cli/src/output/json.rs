use pensum_core::error::PensumError;
use serde::Serialize;
use std::path::Path;

pub fn print<T: Serialize>(value: &T) -> Result<(), PensumError> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{json}");
    Ok(())
}

pub fn write<T: Serialize>(value: &T, path: &Path) -> Result<(), PensumError> {
    let json = serde_json::to_string_pretty(value)?;
    std::fs::write(path, json)?;
    Ok(())
}
