//! A multi-token phrase index keyed by normalized code points.

use ahash::{AHashMap, AHashSet};

use crate::analysis::token::Token;

/// Case folding and ignored code points, applied identically when phrases are
/// added and when runs are searched.
#[derive(Clone, Debug, Default)]
struct Normalizer {
    ignore_case: bool,
    ignore: AHashSet<char>,
}

impl Normalizer {
    fn normalize_into(&self, text: &str, out: &mut Vec<char>) {
        out.clear();
        for c in text.chars() {
            if self.ignore_case {
                out.extend(c.to_lowercase().filter(|c| !self.ignore.contains(c)));
            } else if !self.ignore.contains(&c) {
                out.push(c);
            }
        }
    }
}

#[derive(Debug, Default)]
struct Node {
    children: AHashMap<char, Node>,
    canonical: Option<String>,
}

/// A trie over the normalized code points of consecutive tokens.
///
/// A phrase is the concatenation of its tokens' texts, so with `' '` and `'-'`
/// ignored, `"Ruby on Rails"`, `"ruby-on-rails"` and `"RubyOnRails"` (with case
/// ignored) all reach the same node.
///
/// # Examples
///
/// ```
/// use jargon::analysis::dictionary::RuneTrie;
/// use jargon::analysis::token::Token;
///
/// let mut trie = RuneTrie::new(true, ['.', '-']);
/// trie.add(["Node.js"], "node.js");
///
/// let run = [Token::word("NodeJS")];
/// assert_eq!(trie.search(&run), Some(("node.js", 1)));
/// ```
#[derive(Debug, Default)]
pub struct RuneTrie {
    root: Node,
    normalizer: Normalizer,
    len: usize,
}

impl RuneTrie {
    /// Create an empty trie.
    pub fn new<I: IntoIterator<Item = char>>(ignore_case: bool, ignore: I) -> Self {
        RuneTrie {
            root: Node::default(),
            normalizer: Normalizer {
                ignore_case,
                ignore: ignore.into_iter().collect(),
            },
            len: 0,
        }
    }

    /// Whether `grams` normalize to no code points at all.
    pub fn is_blank<'t, I: IntoIterator<Item = &'t str>>(&self, grams: I) -> bool {
        let mut buf = Vec::new();
        grams.into_iter().all(|gram| {
            self.normalizer.normalize_into(gram, &mut buf);
            buf.is_empty()
        })
    }

    /// Register a phrase, given as the texts of its tokens.
    ///
    /// Returns the canonical previously registered for the same normalized
    /// phrase, if any.
    pub fn add<'t, I: IntoIterator<Item = &'t str>>(
        &mut self,
        grams: I,
        canonical: &str,
    ) -> Option<String> {
        let normalizer = &self.normalizer;
        let mut node = &mut self.root;
        let mut buf = Vec::new();
        for gram in grams {
            normalizer.normalize_into(gram, &mut buf);
            for &c in &buf {
                node = node.children.entry(c).or_default();
            }
        }

        let previous = node.canonical.replace(canonical.to_string());
        if previous.is_none() {
            self.len += 1;
        }
        previous
    }

    /// Find the longest registered phrase at the start of `tokens`.
    ///
    /// Returns the canonical and the number of tokens it covers. A match
    /// always ends on a token boundary; tokens that normalize to nothing
    /// after a match do not extend it.
    pub fn search(&self, tokens: &[Token]) -> Option<(&str, usize)> {
        let mut node = &self.root;
        let mut best: Option<(&str, usize)> = None;
        let mut last_hit: *const Node = std::ptr::null();
        let mut buf = Vec::new();

        'walk: for (i, token) in tokens.iter().enumerate() {
            self.normalizer.normalize_into(token.text(), &mut buf);
            for c in &buf {
                match node.children.get(c) {
                    Some(child) => node = child,
                    None => break 'walk,
                }
            }

            if let Some(canonical) = &node.canonical
                && !std::ptr::eq(node, last_hit)
            {
                best = Some((canonical.as_str(), i + 1));
                last_hit = node;
            }
        }

        best
    }

    /// Number of distinct phrases registered.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::tokenizer::{TechProseTokenizer, Tokenizer};
    use crate::error::Result;

    fn tokens(text: &str) -> Vec<Token> {
        TechProseTokenizer::new()
            .tokenize_str(text)
            .collect::<Result<_>>()
            .unwrap()
    }

    fn add(trie: &mut RuneTrie, phrase: &str, canonical: &str) -> Option<String> {
        let tokens = tokens(phrase);
        trie.add(tokens.iter().map(Token::text), canonical)
    }

    #[test]
    fn test_longest_match() {
        let mut trie = RuneTrie::new(false, []);
        add(&mut trie, "a b", "X");
        add(&mut trie, "a", "Y");

        assert_eq!(trie.search(&tokens("a b")), Some(("X", 3)));
        assert_eq!(trie.search(&tokens("a c")), Some(("Y", 1)));
        assert_eq!(trie.search(&tokens("c")), None);
    }

    #[test]
    fn test_shorter_hit_survives_failed_extension() {
        let mut trie = RuneTrie::new(false, []);
        add(&mut trie, "ruby", "ruby");
        add(&mut trie, "ruby on rails", "ruby-on-rails");

        assert_eq!(trie.search(&tokens("ruby on python")), Some(("ruby", 1)));
        assert_eq!(
            trie.search(&tokens("ruby on rails today")),
            Some(("ruby-on-rails", 5))
        );
    }

    #[test]
    fn test_match_ends_on_token_boundary() {
        let mut trie = RuneTrie::new(false, []);
        add(&mut trie, "java", "java");
        assert_eq!(trie.search(&tokens("javascript")), None);
    }

    #[test]
    fn test_normalization_is_symmetric() {
        let mut trie = RuneTrie::new(true, ['.', '-', '/']);
        add(&mut trie, "Node.js", "node.js");

        for input in ["NodeJS", "node.js", "Node-JS", "NODE/JS"] {
            assert_eq!(trie.search(&tokens(input)), Some(("node.js", 1)), "{input}");
        }
        assert_eq!(trie.search(&tokens("node js")), None);

        // Inserting a spelling that only differs in ignored code points lands
        // on the same node.
        assert_eq!(
            add(&mut trie, "NODE-JS", "node.js"),
            Some("node.js".to_string())
        );
        assert_eq!(trie.len(), 1);
    }

    #[test]
    fn test_ignored_space_spans_tokens() {
        let mut trie = RuneTrie::new(true, [' ', '-']);
        add(&mut trie, "ruby on rails", "ruby-on-rails");

        assert_eq!(
            trie.search(&tokens("Ruby-on-Rails")),
            Some(("ruby-on-rails", 1))
        );
        assert_eq!(
            trie.search(&tokens("rubyon rails")),
            Some(("ruby-on-rails", 3))
        );
        // A trailing ignored token does not extend the match.
        assert_eq!(
            trie.search(&tokens("ruby on rails ")),
            Some(("ruby-on-rails", 5))
        );
    }

    #[test]
    fn test_case_sensitive() {
        let mut trie = RuneTrie::new(false, []);
        add(&mut trie, "Go", "golang");
        assert_eq!(trie.search(&tokens("Go")), Some(("golang", 1)));
        assert_eq!(trie.search(&tokens("go")), None);
    }

    #[test]
    fn test_is_blank() {
        let trie = RuneTrie::new(true, ['-', ' ']);
        assert!(trie.is_blank(["-", " ", "--"]));
        assert!(!trie.is_blank(["-", "a"]));
    }
}
