const UNMATCHED_IDS: [&str; 2] = ["NOASSERTION", "other"];

/// True when `id` names an SPDX license that is OSI approved or FSF libre.
pub fn is_open_source(id: &str) -> bool {
    let id = id.trim();
    if id.is_empty()
        || UNMATCHED_IDS
            .iter()
            .any(|unmatched| unmatched.eq_ignore_ascii_case(id))
    {
        return false;
    }
    spdx::license_id(id)
        .or_else(|| canonical_id(id).and_then(spdx::license_id))
        .map(|license| license.is_osi_approved() || license.is_fsf_free_libre())
        .unwrap_or(false)
}

// Collaborators do not always preserve SPDX casing ("mit", "apache-2.0").
fn canonical_id(id: &str) -> Option<&'static str> {
    let id = id.trim_end_matches('+');
    spdx::identifiers::LICENSES
        .iter()
        .find(|license| license.name.eq_ignore_ascii_case(id))
        .map(|license| license.name)
}
