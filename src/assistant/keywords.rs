//! Keyword table used to answer in demo mode.

/// Ordered substring → canned reply table.
///
/// Keys are stored lowercase. Lookup scans entries in declaration order and
/// returns the first key contained in the message, ignoring case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordTable {
    entries: Vec<(String, String)>,
}

impl KeywordTable {
    pub fn new<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.into().to_lowercase(), v.into()))
                .collect(),
        }
    }

    /// Reply for the first key found in `message`.
    pub fn lookup(&self, message: &str) -> Option<&str> {
        let message = message.to_lowercase();
        self.entries
            .iter()
            .find(|(key, _)| message.contains(key.as_str()))
            .map(|(_, reply)| reply.as_str())
    }
}

impl Default for KeywordTable {
    fn default() -> Self {
        Self::new([
            (
                "fire",
                "For fires: Follow RACE (Rescue, Alarm, Confine, Extinguish/Evacuate) and your facility's plan. Check posted maps! (Demo Mode)",
            ),
            (
                "manual",
                "Safety manuals are usually on the company intranet or from your supervisor. (Demo Mode)",
            ),
            (
                "report hazard",
                "To report a hazard, note details (what, where, when) and use the official reporting form or tell your supervisor. (Demo Mode)",
            ),
            (
                "schedule",
                "Check the official training calendar or portal for schedules. (Demo Mode)",
            ),
            (
                "ppe",
                "For PPE advice, tell me the task. Always check the official SOP/SDS! (Demo Mode)",
            ),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(table: &KeywordTable) -> Vec<&str> {
        table.entries.iter().map(|(k, _)| k.as_str()).collect()
    }

    #[test]
    fn test_default_table_order() {
        let table = KeywordTable::default();
        assert_eq!(keys(&table), ["fire", "manual", "report hazard", "schedule", "ppe"]);
    }

    #[test]
    fn test_lookup_is_case_insensitive_substring() {
        let table = KeywordTable::default();
        let reply = table.lookup("Where do I find the PPE guide?").unwrap();
        assert!(reply.starts_with("For PPE advice"));

        let reply = table.lookup("what about FIREWORKS at the site").unwrap();
        assert!(reply.starts_with("For fires"));
    }

    #[test]
    fn test_every_key_matches_its_own_reply_in_context() {
        let table = KeywordTable::default();
        for key in keys(&table) {
            let message = format!("Hi there, {} please!", key.to_uppercase());
            let expected = table
                .entries
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.as_str());
            assert_eq!(table.lookup(&message), expected, "key {key}");
        }
    }

    #[test]
    fn test_first_key_in_declaration_order_wins() {
        let table = KeywordTable::default();
        // Contains both "schedule" and "fire"; "fire" is declared first.
        let reply = table.lookup("schedule for fire drills").unwrap();
        assert!(reply.starts_with("For fires"));
    }

    #[test]
    fn test_multi_word_key_requires_full_phrase() {
        let table = KeywordTable::default();
        assert!(table.lookup("how do I report a hazard").is_none());
        assert!(table.lookup("I want to Report Hazard now").is_some());
    }

    #[test]
    fn test_no_match() {
        let table = KeywordTable::default();
        assert!(table.lookup("hello").is_none());
        assert!(KeywordTable::new(Vec::<(String, String)>::new())
            .lookup("fire")
            .is_none());
    }

    #[test]
    fn test_custom_keys_are_lowercased() {
        let table = KeywordTable::new([("LOTO", "Lock it out.")]);
        assert_eq!(keys(&table), ["loto"]);
        assert_eq!(table.lookup("explain loto steps"), Some("Lock it out."));
    }
}
