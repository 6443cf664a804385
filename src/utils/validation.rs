use std::path::Path;
use crate::core::{AssemblySettings, AssemblyTask};
use crate::utils::{AssemblerResult, ValidationError};

/// Validates an assembly task before any file is read or written
pub fn validate_task(task: &AssemblyTask) -> AssemblerResult<()> {
    validate_settings(&task.settings)?;
    validate_input_dir(&task.input_dir)?;
    validate_output_path(&task.output_path)?;
    Ok(())
}

/// Validates the source directory
pub fn validate_input_dir(path: &Path) -> AssemblerResult<()> {
    if !path.exists() {
        return Err(ValidationError::path_not_found(path).into());
    }

    if !path.is_dir() {
        return Err(ValidationError::not_a_directory(path).into());
    }

    Ok(())
}

/// Validates the destination path
pub fn validate_output_path(path: &Path) -> AssemblerResult<()> {
    if path.is_dir() {
        return Err(ValidationError::is_a_directory(path).into());
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if !parent.is_dir() {
            return Err(ValidationError::path_not_found(parent).into());
        }
    }

    Ok(())
}

/// Validates encoding and optimization settings
pub fn validate_settings(settings: &AssemblySettings) -> AssemblerResult<()> {
    if !(1..=30).contains(&settings.quantizer_speed) {
        return Err(ValidationError::settings(format!(
            "Invalid quantizer speed: {}. Must be between 1 and 30",
            settings.quantizer_speed
        ))
        .into());
    }

    // GIF delays are stored in hundredths of a second in a u16
    if settings.frame_delay_ms > u32::from(u16::MAX) * 10 {
        return Err(ValidationError::settings(format!(
            "Frame delay too long: {}ms", settings.frame_delay_ms
        ))
        .into());
    }

    if settings.frame_delay_ms % 10 != 0 {
        return Err(ValidationError::settings(format!(
            "Invalid frame delay: {}ms. GIF delays are whole multiples of 10ms",
            settings.frame_delay_ms
        ))
        .into());
    }

    let optimize = &settings.optimize;
    if !optimize.enabled {
        return Ok(());
    }

    if !(1..=3).contains(&optimize.level) {
        return Err(ValidationError::settings(format!(
            "Invalid optimize level: {}. Must be between 1 and 3", optimize.level
        ))
        .into());
    }

    if let Some(colors) = optimize.colors {
        if !(2..=256).contains(&colors) {
            return Err(ValidationError::settings(format!(
                "Invalid color count: {}. Must be between 2 and 256", colors
            ))
            .into());
        }
    }

    if optimize.program.as_os_str().is_empty() {
        return Err(ValidationError::settings("Optimizer program cannot be empty").into());
    }

    Ok(())
}
