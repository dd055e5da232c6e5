//! Comment extraction from parsed source files.
//!
//! Walks the syntax tree depth-first collecting comment nodes, which
//! yields tokens in source order. Comment markers (`#`, `//`, `/* */`,
//! doc-comment variants) are stripped so the matcher sees only the
//! comment's content and the configured pattern stays language-agnostic.

use lockstep_core::types::diagnostic::SourceLocation;

use crate::scanner::language::Language;

/// A single comment with its normalized content and anchor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentToken {
    /// Comment content with the leading/trailing markers stripped and
    /// surrounding whitespace trimmed.
    pub text: String,
    /// Anchor of the whole comment node, including its marker.
    pub location: SourceLocation,
}

/// Parse a source buffer. Returns `None` when no syntax tree can be
/// produced (grammar mismatch or parser failure) — the caller treats that
/// file as an empty scan.
pub fn parse_source(
    source: &[u8],
    language: Language,
    ext: Option<&str>,
) -> Option<tree_sitter::Tree> {
    let mut parser = tree_sitter::Parser::new();
    if let Err(e) = parser.set_language(&language.grammar_for_ext(ext)) {
        tracing::warn!(language = %language, error = %e, "failed to load grammar");
        return None;
    }
    parser.parse(source, None)
}

/// Extract all comments from a tree-sitter AST, in source order.
pub fn extract_comments(
    tree: &tree_sitter::Tree,
    source: &[u8],
    file: &str,
    language: Language,
) -> Vec<CommentToken> {
    let mut comments = Vec::new();
    let node_kinds = comment_node_kinds(language);
    extract_from_node(&tree.root_node(), source, file, node_kinds, &mut comments);
    comments
}

/// Recursively collect comment nodes. Depth-first traversal visits nodes
/// in text order, so the resulting stream is source-ordered.
fn extract_from_node(
    node: &tree_sitter::Node,
    source: &[u8],
    file: &str,
    node_kinds: &[&str],
    comments: &mut Vec<CommentToken>,
) {
    if node_kinds.contains(&node.kind()) {
        if let Ok(text) = node.utf8_text(source) {
            let start = node.start_position();
            let end = node.end_position();
            comments.push(CommentToken {
                text: normalize_comment_text(text),
                location: SourceLocation {
                    file: file.to_string(),
                    line: start.row as u32 + 1,
                    column: start.column as u32 + 1,
                    end_line: end.row as u32 + 1,
                    end_column: end.column as u32 + 1,
                },
            });
        }
        // Comment nodes are leaves for our purposes.
        return;
    }

    let child_count = node.child_count();
    for i in 0..child_count {
        if let Some(child) = node.child(i) {
            extract_from_node(&child, source, file, node_kinds, comments);
        }
    }
}

/// Tree-sitter node kinds that represent comments for each language.
fn comment_node_kinds(language: Language) -> &'static [&'static str] {
    match language {
        Language::Ruby | Language::Python | Language::Go => &["comment"],
        Language::JavaScript | Language::TypeScript => &["comment"],
        Language::Rust => &["line_comment", "block_comment"],
        Language::Java => &["line_comment", "block_comment"],
    }
}

/// Strip the comment delimiters a grammar leaves in the node text.
///
/// Multi-line block comments keep their interior untouched; a whole-text
/// pattern will simply not match them unless the entire content does.
pub fn normalize_comment_text(text: &str) -> String {
    let trimmed = text.trim();

    // Block comments, doc variants first: /** ... */, /*! ... */, /* ... */
    for (open, close) in [("/**", "*/"), ("/*!", "*/"), ("/*", "*/")] {
        if trimmed.starts_with(open)
            && trimmed.ends_with(close)
            && trimmed.len() >= open.len() + close.len()
        {
            return trimmed[open.len()..trimmed.len() - close.len()].trim().to_string();
        }
    }

    // Line comments: ///, //!, //, #
    for prefix in ["///", "//!", "//", "#"] {
        if let Some(rest) = trimmed.strip_prefix(prefix) {
            return rest.trim().to_string();
        }
    }

    trimmed.to_string()
}
