use derive_new::new;
use serde::{Deserialize, Serialize};

/// One labelled example for sequence labelling
///
/// The fields are filled in place by external code: a reader sets the raw tokens, labels and
/// size counters, and an indexing step later sets the `*_index` fields once a vocabulary
/// exists. No relationship between the fields is enforced here; see
/// [`alignment::check`](super::alignment::check) for an explicit check.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct Instance {
    /// The token sequence
    #[new(default)]
    pub words: Vec<String>,

    /// The character sequence of each word
    #[new(default)]
    pub chars: Vec<Vec<String>>,

    /// The labels, aligned to `words`
    #[new(default)]
    pub labels: Vec<String>,

    /// The number of words
    #[new(default)]
    pub words_size: usize,

    /// The number of per-word character groups
    #[new(default)]
    pub chars_size: usize,

    /// Vocabulary ids, aligned to `words`
    #[new(default)]
    pub words_index: Vec<usize>,

    /// Character vocabulary ids, aligned to `chars`
    #[new(default)]
    pub chars_index: Vec<Vec<usize>>,

    /// Label vocabulary ids, aligned to `labels`
    #[new(default)]
    pub label_index: Vec<usize>,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_new_is_empty() {
        let instance = Instance::new();

        assert!(instance.words.is_empty());
        assert!(instance.chars.is_empty());
        assert!(instance.labels.is_empty());
        assert!(instance.words_index.is_empty());
        assert!(instance.chars_index.is_empty());
        assert!(instance.label_index.is_empty());
        assert_eq!(instance.words_size, 0);
        assert_eq!(instance.chars_size, 0);
        assert_eq!(instance, Instance::default());
    }

    #[test]
    fn test_instances_do_not_share_state() {
        let mut first = Instance::new();
        let second = Instance::new();

        first.words.push("hello".to_string());
        first.chars.push(strings(&["h", "e", "l", "l", "o"]));
        first.label_index.push(7);

        assert!(second.words.is_empty());
        assert!(second.chars.is_empty());
        assert!(second.label_index.is_empty());
    }

    #[test]
    fn test_fields_are_writable_independently() {
        let mut instance = Instance::new();

        instance.words = strings(&["a", "b"]);
        assert_eq!(instance.words, strings(&["a", "b"]));
        assert!(instance.labels.is_empty());

        instance.chars = vec![strings(&["a"]), strings(&["b"])];
        instance.labels = strings(&["X", "Y"]);
        instance.words_size = 2;
        instance.chars_size = 2;
        instance.words_index = vec![4, 5];
        instance.chars_index = vec![vec![1], vec![2]];
        instance.label_index = vec![0, 1];

        assert_eq!(instance.chars, vec![strings(&["a"]), strings(&["b"])]);
        assert_eq!(instance.labels, strings(&["X", "Y"]));
        assert_eq!(instance.words_size, 2);
        assert_eq!(instance.chars_size, 2);
        assert_eq!(instance.words_index, vec![4, 5]);
        assert_eq!(instance.chars_index, vec![vec![1], vec![2]]);
        assert_eq!(instance.label_index, vec![0, 1]);
        assert_eq!(instance.words, strings(&["a", "b"]));
    }

    #[test]
    fn test_mismatched_lengths_are_accepted() {
        let mut instance = Instance::new();

        instance.words = strings(&["one", "two", "three"]);
        instance.labels = strings(&["A", "B"]);

        assert_eq!(instance.words.len(), 3);
        assert_eq!(instance.labels.len(), 2);
    }

    #[test]
    fn test_words_and_labels_read_back_in_order() {
        let mut instance = Instance::new();

        instance.words = strings(&["I", "love", "it"]);
        instance.labels = strings(&["PRON", "VERB", "PRON"]);
        instance.words_size = 3;

        assert_eq!(instance.words, strings(&["I", "love", "it"]));
        assert_eq!(instance.labels, strings(&["PRON", "VERB", "PRON"]));
        assert_eq!(instance.words_size, 3);
    }

    #[test]
    fn test_serde_keeps_field_names() {
        let mut instance = Instance::new();
        instance.words = strings(&["ok"]);
        instance.words_size = 1;

        let value = serde_json::to_value(&instance).unwrap();
        assert_eq!(value["words"], serde_json::json!(["ok"]));
        assert_eq!(value["words_size"], serde_json::json!(1));
        assert_eq!(value["chars_index"], serde_json::json!([]));

        let decoded: Instance = serde_json::from_value(value).unwrap();
        assert_eq!(decoded, instance);
    }
}
