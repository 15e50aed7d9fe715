use log::Level;

#[cfg(debug_assertions)]
pub fn get_log_level() -> Level {
    Level::Debug  // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_log_level() -> Level {
    Level::Info
}

/// Vertical offset in CSS pixels past which the navbar switches to its solid style.
pub fn get_scroll_threshold() -> f64 {
    20.0
}

/// Viewports narrower than this render the stacked plan cards instead of the grid.
pub fn get_narrow_breakpoint() -> f64 {
    768.0
}

pub fn get_logo_path() -> &'static str {
    "images/logo.svg"
}

pub fn get_contact_url() -> &'static str {
    "mailto:hello@vedanco.com"
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn logo_ships_with_the_build() {
        let logo = Path::new(env!("CARGO_MANIFEST_DIR")).join(get_logo_path());
        assert!(logo.is_file(), "missing {}", logo.display());
    }
}
