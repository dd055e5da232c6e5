//! Supported languages and their tree-sitter grammars.

/// Languages the comment parsers understand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Ruby,
    Python,
    JavaScript,
    TypeScript,
    Rust,
    Go,
    Java,
}

impl Language {
    /// All supported languages.
    pub fn all() -> &'static [Language] {
        &[
            Self::Ruby,
            Self::Python,
            Self::JavaScript,
            Self::TypeScript,
            Self::Rust,
            Self::Go,
            Self::Java,
        ]
    }

    /// Detect language from a file extension.
    pub fn from_extension(ext: Option<&str>) -> Option<Language> {
        match ext? {
            "rb" | "rake" | "gemspec" => Some(Self::Ruby),
            "py" | "pyi" => Some(Self::Python),
            "js" | "jsx" | "mjs" | "cjs" => Some(Self::JavaScript),
            "ts" | "tsx" | "mts" | "cts" => Some(Self::TypeScript),
            "rs" => Some(Self::Rust),
            "go" => Some(Self::Go),
            "java" => Some(Self::Java),
            _ => None,
        }
    }

    /// The tree-sitter grammar for this language. TypeScript needs the
    /// extension to pick the TSX variant.
    pub fn grammar_for_ext(&self, ext: Option<&str>) -> tree_sitter::Language {
        match self {
            Self::Ruby => tree_sitter_ruby::LANGUAGE.into(),
            Self::Python => tree_sitter_python::LANGUAGE.into(),
            Self::JavaScript => tree_sitter_javascript::LANGUAGE.into(),
            Self::TypeScript => match ext {
                Some("tsx") => tree_sitter_typescript::LANGUAGE_TSX.into(),
                _ => tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
            },
            Self::Rust => tree_sitter_rust::LANGUAGE.into(),
            Self::Go => tree_sitter_go::LANGUAGE.into(),
            Self::Java => tree_sitter_java::LANGUAGE.into(),
        }
    }

    /// Language name as a string.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Ruby => "ruby",
            Self::Python => "python",
            Self::JavaScript => "javascript",
            Self::TypeScript => "typescript",
            Self::Rust => "rust",
            Self::Go => "go",
            Self::Java => "java",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_extension() {
        assert_eq!(Language::from_extension(Some("rb")), Some(Language::Ruby));
        assert_eq!(Language::from_extension(Some("tsx")), Some(Language::TypeScript));
        assert_eq!(Language::from_extension(Some("md")), None);
        assert_eq!(Language::from_extension(None), None);
    }
}
