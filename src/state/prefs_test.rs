use super::*;

#[test]
fn prefs_default_to_light_mode() {
    assert!(!PrefsState::default().dark_mode);
}
