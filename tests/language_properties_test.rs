//! Property tests for translation table parsing

use polyglot::{Language, MemoryResolver, LANG_PATH};
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_every_key_returns_its_value(strings in prop::collection::hash_map(".*", ".*", 0..32)) {
        let json = serde_json::to_string(&strings).unwrap();
        let resolver = MemoryResolver::new().with("/lang/xx.json", json.into_bytes());

        let lang = Language::load(&resolver, LANG_PATH, "xx.json").unwrap();

        prop_assert_eq!(lang.len(), strings.len());
        for (key, value) in &strings {
            prop_assert_eq!(lang.get_string(key), Some(value.as_str()));
        }
    }

    #[test]
    fn test_absent_keys_return_none(
        strings in prop::collection::hash_map("[a-z]{1,8}", ".*", 0..16),
        probe in "[A-Z0-9]{1,8}",
    ) {
        let content = serde_json::to_vec(&strings).unwrap();
        let lang = Language::from_reader("xx.json", content.as_slice()).unwrap();

        prop_assert_eq!(lang.get_string(&probe), None);
    }
}
