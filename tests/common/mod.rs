#![allow(dead_code)]

use payment_params::application::builder::ParamBuilder;
use payment_params::infrastructure::fixed::FixedDeviceIdentity;
use std::io::{Error, Write};
use tempfile::NamedTempFile;

pub const DEVICE_ID: &str = "abc123";
pub const PACKAGE: &str = "com.example.app";

pub const GUID_ABC123: &str = "6ca13d52ca70c883e0f0bb101e425a89e8624de51db2d2392593af6a84118090";
pub const MUID_ABC123: &str = "048c169f8385db56f4bdf6ced2c36a4f6d107813606fea32afde058a1f6c821f";

pub fn fixed_builder(device_id: &str, package: &str) -> ParamBuilder {
    ParamBuilder::new(Box::new(FixedDeviceIdentity::new(device_id, package)))
}

pub fn write_csv(header: &[&str], rows: &[&[&str]]) -> Result<NamedTempFile, Error> {
    let file = NamedTempFile::new()?;
    let mut wtr = csv::WriterBuilder::new()
        .flexible(true)
        .from_writer(file.reopen()?);

    wtr.write_record(header)?;
    for row in rows {
        wtr.write_record(*row)?;
    }

    wtr.flush()?;
    Ok(file)
}

pub fn write_text(contents: &str) -> Result<NamedTempFile, Error> {
    let mut file = NamedTempFile::new()?;
    file.write_all(contents.as_bytes())?;
    file.flush()?;
    Ok(file)
}
