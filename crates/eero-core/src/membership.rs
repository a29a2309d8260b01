// ── Profile membership edits ──
//
// The vendor only accepts a full replacement of a profile's device list,
// so membership changes are computed locally from the current list.
// Order is preserved; URLs are compared exactly as the vendor returned them.

/// Append `device_url`. `None` if it is already a member.
pub fn with_member(members: &[String], device_url: &str) -> Option<Vec<String>> {
    if members.iter().any(|m| m == device_url) {
        return None;
    }
    let mut next = members.to_vec();
    next.push(device_url.to_owned());
    Some(next)
}

/// Drop `device_url`. `None` if it is not a member.
pub fn without_member(members: &[String], device_url: &str) -> Option<Vec<String>> {
    if !members.iter().any(|m| m == device_url) {
        return None;
    }
    Some(
        members
            .iter()
            .filter(|m| *m != device_url)
            .cloned()
            .collect(),
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn urls(ids: &[&str]) -> Vec<String> {
        ids.iter()
            .map(|id| format!("/2.2/networks/1/devices/{id}"))
            .collect()
    }

    #[test]
    fn add_then_remove_restores_original_order() {
        let original = urls(&["a", "b", "c"]);
        let added = with_member(&original, "/2.2/networks/1/devices/z").unwrap();
        assert_eq!(added, urls(&["a", "b", "c", "z"]));
        let removed = without_member(&added, "/2.2/networks/1/devices/z").unwrap();
        assert_eq!(removed, original);
    }

    #[test]
    fn remove_from_middle_keeps_order() {
        let removed = without_member(&urls(&["a", "b", "c"]), "/2.2/networks/1/devices/b").unwrap();
        assert_eq!(removed, urls(&["a", "c"]));
    }

    #[test]
    fn adding_existing_member_is_rejected() {
        assert!(with_member(&urls(&["a"]), "/2.2/networks/1/devices/a").is_none());
    }

    #[test]
    fn removing_non_member_is_rejected() {
        assert!(without_member(&urls(&["a"]), "/2.2/networks/1/devices/b").is_none());
    }
}
