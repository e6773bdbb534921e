//! Prefix tree over command names, used for autocomplete.
//!
//! Children are kept in a `BTreeMap`, so every traversal visits them in
//! lexical order by character and results are reproducible for a given set
//! of words.

use std::collections::BTreeMap;

#[derive(Debug, Default)]
struct TrieNode {
    children: BTreeMap<char, TrieNode>,
    is_word_end: bool,
}

/// A set of words supporting exact lookup and prefix enumeration.
#[derive(Debug, Default)]
pub struct Trie {
    root: TrieNode,
    len: usize,
}

impl Trie {
    /// Create an empty trie.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a trie from a list of words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = Self::new();
        for word in words {
            trie.insert(word.as_ref());
        }
        trie
    }

    /// Insert a word. Returns `true` if it was not already present.
    ///
    /// The empty string is never stored.
    pub fn insert(&mut self, word: &str) -> bool {
        if word.is_empty() {
            return false;
        }
        let mut node = &mut self.root;
        for c in word.chars() {
            node = node.children.entry(c).or_default();
        }
        if node.is_word_end {
            return false;
        }
        node.is_word_end = true;
        self.len += 1;
        true
    }

    /// Whether `word` was inserted as a complete word.
    pub fn contains(&self, word: &str) -> bool {
        !word.is_empty() && self.find(word).is_some_and(|n| n.is_word_end)
    }

    /// Number of distinct words stored.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether no word is stored.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn find(&self, prefix: &str) -> Option<&TrieNode> {
        let mut node = &self.root;
        for c in prefix.chars() {
            node = node.children.get(&c)?;
        }
        Some(node)
    }

    /// Every stored word starting with `prefix`.
    ///
    /// `prefix` itself is only included when it is a stored word and
    /// `include_exact` is set. An empty prefix yields nothing.
    pub fn suggest(&self, prefix: &str, include_exact: bool) -> Vec<String> {
        let mut words = Vec::new();
        if prefix.is_empty() {
            return words;
        }
        let Some(node) = self.find(prefix) else {
            return words;
        };
        if node.is_word_end && include_exact {
            words.push(prefix.to_string());
        }
        let mut path = prefix.to_string();
        for (&c, child) in &node.children {
            path.push(c);
            collect_words(child, &mut path, &mut words);
            path.pop();
        }
        words
    }

    /// Like [`suggest`](Self::suggest), but fills at most
    /// `out.capacity()` slots of a reusable buffer and returns the count.
    pub fn suggest_bounded(
        &self,
        prefix: &str,
        out: &mut SuggestionBuffer,
        include_exact: bool,
    ) -> usize {
        out.clear();
        if prefix.is_empty() {
            return 0;
        }
        let Some(node) = self.find(prefix) else {
            return 0;
        };
        out.scratch.clear();
        out.scratch.push_str(prefix);
        if node.is_word_end && include_exact {
            out.push_scratch();
        }
        for (&c, child) in &node.children {
            if out.is_full() {
                break;
            }
            out.scratch.push(c);
            collect_bounded(child, out);
            out.scratch.pop();
        }
        out.len()
    }

    /// Every stored word, in lexical order.
    pub fn all_words(&self) -> Vec<String> {
        let mut words = Vec::with_capacity(self.len);
        let mut path = String::new();
        collect_words(&self.root, &mut path, &mut words);
        words
    }
}

fn collect_words(node: &TrieNode, path: &mut String, words: &mut Vec<String>) {
    if node.is_word_end {
        words.push(path.clone());
    }
    for (&c, child) in &node.children {
        path.push(c);
        collect_words(child, path, words);
        path.pop();
    }
}

fn collect_bounded(node: &TrieNode, out: &mut SuggestionBuffer) {
    if node.is_word_end {
        out.push_scratch();
    }
    for (&c, child) in &node.children {
        if out.is_full() {
            return;
        }
        out.scratch.push(c);
        collect_bounded(child, out);
        out.scratch.pop();
    }
}

/// Fixed-capacity suggestion storage owned by the caller.
///
/// Slots are allocated on first use and never beyond what a query fills, so
/// a large capacity costs nothing up front. Slot strings and the traversal
/// scratch string keep their allocations between calls, so repeated polling
/// only allocates while a slot grows.
#[derive(Debug, Clone)]
pub struct SuggestionBuffer {
    slots: Vec<String>,
    capacity: usize,
    len: usize,
    scratch: String,
}

impl SuggestionBuffer {
    /// Create a buffer holding up to `capacity` suggestions.
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: Vec::new(),
            capacity,
            len: 0,
            scratch: String::new(),
        }
    }

    /// Maximum number of suggestions a query may fill.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of filled slots.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether no slot is filled.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether every slot up to the capacity is filled.
    pub fn is_full(&self) -> bool {
        self.len >= self.capacity
    }

    /// Forget the current contents, keeping allocations.
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// The suggestion at `index`, if filled.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.as_slice().get(index).map(String::as_str)
    }

    /// The filled slots.
    pub fn as_slice(&self) -> &[String] {
        &self.slots[..self.len]
    }

    /// Filled suggestions in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.as_slice().iter().map(String::as_str)
    }

    /// Order the filled slots shortest first. Equal lengths keep their order.
    pub fn sort_by_length(&mut self) {
        self.slots[..self.len].sort_by_key(|s| s.chars().count());
    }

    fn push_scratch(&mut self) {
        if self.is_full() {
            return;
        }
        if let Some(slot) = self.slots.get_mut(self.len) {
            slot.clear();
            slot.push_str(&self.scratch);
        } else {
            self.slots.push(self.scratch.clone());
        }
        self.len += 1;
    }
}
