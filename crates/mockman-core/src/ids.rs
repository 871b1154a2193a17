use uuid::Uuid;

/// Fresh identifier for tokens, components, builder elements and mock records.
pub fn new_id() -> String {
    Uuid::new_v4().simple().to_string()
}

#[cfg(test)]
mod tests {
    use super::new_id;
    use std::collections::HashSet;

    #[test]
    fn new_id_is_hex_and_unique() {
        let ids: HashSet<String> = (0..64).map(|_| new_id()).collect();
        assert_eq!(ids.len(), 64);
        assert!(ids
            .iter()
            .all(|id| id.len() == 32 && id.chars().all(|ch| ch.is_ascii_hexdigit())));
    }
}
