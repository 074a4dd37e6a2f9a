use super::Instance;

/// A mismatch between the parallel fields of an [`Instance`]
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum AlignmentError {
    /// The labels don't line up with the words
    #[error("{labels} labels for {words} words")]
    Labels {
        /// Number of words
        words: usize,
        /// Number of labels
        labels: usize,
    },

    /// The character groups don't line up with the words
    #[error("{chars} character groups for {words} words")]
    Chars {
        /// Number of words
        words: usize,
        /// Number of character groups
        chars: usize,
    },

    /// `words_size` disagrees with `words`
    #[error("words_size is {actual} but there are {expected} words")]
    WordsSize {
        /// Length of `words`
        expected: usize,
        /// Value of `words_size`
        actual: usize,
    },

    /// `chars_size` disagrees with `chars`
    #[error("chars_size is {actual} but there are {expected} character groups")]
    CharsSize {
        /// Length of `chars`
        expected: usize,
        /// Value of `chars_size`
        actual: usize,
    },

    /// The word ids don't line up with the words
    #[error("{indices} word ids for {words} words")]
    WordsIndex {
        /// Number of words
        words: usize,
        /// Number of word ids
        indices: usize,
    },

    /// The character ids don't line up with the characters at a position
    #[error("{indices} character ids for {chars} characters at position {position}")]
    CharsIndex {
        /// Word position, or the outer length when the outer sequences differ
        position: usize,
        /// Number of characters (or character groups)
        chars: usize,
        /// Number of ids (or id groups)
        indices: usize,
    },

    /// The label ids don't line up with the labels
    #[error("{indices} label ids for {labels} labels")]
    LabelIndex {
        /// Number of labels
        labels: usize,
        /// Number of label ids
        indices: usize,
    },
}

/// Check that the populated fields of an instance have matching lengths.
///
/// Empty sequences count as not yet populated and are skipped. The size counters are always
/// compared, so a freshly constructed instance passes. Returns the first mismatch found.
pub fn check(instance: &Instance) -> Result<(), AlignmentError> {
    let words = instance.words.len();
    let chars = instance.chars.len();
    let labels = instance.labels.len();

    if labels != 0 && labels != words {
        return Err(AlignmentError::Labels { words, labels });
    }

    if chars != 0 && chars != words {
        return Err(AlignmentError::Chars { words, chars });
    }

    if instance.words_size != words {
        return Err(AlignmentError::WordsSize {
            expected: words,
            actual: instance.words_size,
        });
    }

    if instance.chars_size != chars {
        return Err(AlignmentError::CharsSize {
            expected: chars,
            actual: instance.chars_size,
        });
    }

    let indices = instance.words_index.len();
    if indices != 0 && indices != words {
        return Err(AlignmentError::WordsIndex { words, indices });
    }

    if !instance.chars_index.is_empty() {
        check_chars_index(&instance.chars, &instance.chars_index)?;
    }

    let indices = instance.label_index.len();
    if indices != 0 && indices != labels {
        return Err(AlignmentError::LabelIndex { labels, indices });
    }

    Ok(())
}

fn check_chars_index(
    chars: &[Vec<String>],
    chars_index: &[Vec<usize>],
) -> Result<(), AlignmentError> {
    if chars.len() != chars_index.len() {
        return Err(AlignmentError::CharsIndex {
            position: chars.len().min(chars_index.len()),
            chars: chars.len(),
            indices: chars_index.len(),
        });
    }

    for (position, (group, ids)) in chars.iter().zip(chars_index).enumerate() {
        if group.len() != ids.len() {
            return Err(AlignmentError::CharsIndex {
                position,
                chars: group.len(),
                indices: ids.len(),
            });
        }
    }

    Ok(())
}
