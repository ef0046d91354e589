//! Report rendering - turns an `InspectionReport` into labeled text
//! blocks. All computation happens upstream; this module only formats.

use console::style;
use exifscope_core::{InspectionReport, StegoFinding};
use std::io::{self, Write};

/// Render the full report.
pub fn render<W: Write>(out: &mut W, report: &InspectionReport) -> io::Result<()> {
    writeln!(
        out,
        "{} ({}x{} {}, {} bytes)",
        style(&report.file_name).bold(),
        report.width,
        report.height,
        report.format,
        report.file_size
    )?;

    render_exif(out, report)?;
    render_gps(out, report)?;
    render_camera(out, report)?;
    render_timestamps(out, report)?;
    render_integrity(out, report)?;
    render_steganography(out, report)
}

fn section<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    writeln!(out, "\n{}", style(title).bold().underlined())
}

fn render_exif<W: Write>(out: &mut W, report: &InspectionReport) -> io::Result<()> {
    section(out, "EXIF Data")?;
    for (name, value) in &report.exif {
        writeln!(out, "  {}: {}", style(name).bold(), value)?;
    }
    Ok(())
}

fn render_gps<W: Write>(out: &mut W, report: &InspectionReport) -> io::Result<()> {
    let Some(coordinates) = &report.coordinates else {
        return Ok(());
    };

    section(out, "GPS Coordinates")?;
    writeln!(out, "  Latitude: {}", coordinates.latitude)?;
    writeln!(out, "  Longitude: {}", coordinates.longitude)?;
    if let Some(address) = &report.address {
        writeln!(out, "  Location: {}", address)?;
    }
    writeln!(
        out,
        "  Map: https://www.openstreetmap.org/?mlat={lat}&mlon={lon}#map=15/{lat}/{lon}",
        lat = coordinates.latitude,
        lon = coordinates.longitude
    )
}

fn render_camera<W: Write>(out: &mut W, report: &InspectionReport) -> io::Result<()> {
    section(out, "Camera and Lens Information")?;
    let labeled = [
        ("Camera Make", "Make"),
        ("Camera Model", "Model"),
        ("Lens Model", "LensModel"),
        ("Focal Length", "FocalLength"),
        ("Aperture", "ApertureValue"),
    ];
    for (label, tag) in labeled {
        let value = report
            .exif
            .get(tag)
            .map(|v| v.to_string())
            .unwrap_or_else(|| "Unknown".to_string());
        writeln!(out, "  {}: {}", label, value)?;
    }
    Ok(())
}

fn render_timestamps<W: Write>(out: &mut W, report: &InspectionReport) -> io::Result<()> {
    section(out, "Timestamp Analysis")?;
    let shown = |value: &Option<String>| value.clone().unwrap_or_else(|| "None".to_string());
    writeln!(out, "  Original DateTime: {}", shown(&report.timestamps.original))?;
    writeln!(out, "  Digitized DateTime: {}", shown(&report.timestamps.digitized))?;
    writeln!(out, "  Modified DateTime: {}", shown(&report.timestamps.modified))?;
    if report.timestamps.modified_after_capture {
        writeln!(
            out,
            "  {}",
            style("The image appears to have been modified after it was originally taken.")
                .yellow()
        )?;
    }
    Ok(())
}

fn render_integrity<W: Write>(out: &mut W, report: &InspectionReport) -> io::Result<()> {
    section(out, "File Integrity")?;
    writeln!(out, "  BLAKE3 Hash: {}", report.content_hash)
}

fn render_steganography<W: Write>(out: &mut W, report: &InspectionReport) -> io::Result<()> {
    section(out, "Steganography")?;
    match &report.steganography {
        StegoFinding::Payload(message) => {
            writeln!(
                out,
                "  {}",
                style("Hidden message found in the image!").red().bold()
            )?;
            writeln!(out, "  Hidden Message: {}", message)
        }
        StegoFinding::NoneDetected => {
            writeln!(out, "  No hidden messages detected in the image.")
        }
    }
}
