//! TrueType font registration for figure labels
//!
//! Labels are drawn with fonts registered in-process so rendering does not
//! depend on a system font service. A font given explicitly must load; the
//! fallback list is probed quietly.

use crate::io::configuration::{FONT_CANDIDATES, FONT_FAMILY};
use crate::io::error::{Result, WithPath, invalid_parameter};
use plotters::style::{FontStyle, register_font};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

// Path of the font currently registered under FONT_FAMILY
static REGISTERED: Mutex<Option<PathBuf>> = Mutex::new(None);

fn register_file(path: &Path) -> Result<()> {
    let bytes = std::fs::read(path).with_path(path, "read font")?;
    // Fonts stay registered for the rest of the process
    let bytes: &'static [u8] = Box::leak(bytes.into_boxed_slice());
    register_font(FONT_FAMILY, FontStyle::Normal, bytes)
        .ok()
        .ok_or_else(|| invalid_parameter("font", &path.display(), &"not a usable TrueType font"))
}

/// Make a label font available, returning the file that was registered
///
/// With `explicit` set that font is loaded, otherwise the first loadable
/// entry of the candidate list is used. Returns `Ok(None)` if no candidate
/// could be loaded.
///
/// # Errors
///
/// Returns an error if an explicitly requested font cannot be read or parsed
pub fn ensure_font(explicit: Option<&Path>) -> Result<Option<PathBuf>> {
    let mut registered = REGISTERED
        .lock()
        .unwrap_or_else(std::sync::PoisonError::into_inner);

    if let Some(path) = explicit {
        if registered.as_deref() != Some(path) {
            register_file(path)?;
            *registered = Some(path.to_path_buf());
        }
        return Ok(registered.clone());
    }

    if registered.is_some() {
        return Ok(registered.clone());
    }

    *registered = FONT_CANDIDATES
        .iter()
        .map(PathBuf::from)
        .find(|candidate| candidate.is_file() && register_file(candidate).is_ok());

    Ok(registered.clone())
}
