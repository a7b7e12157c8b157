use memchr::memmem;
use tree_sitter::{Node, TreeCursor};

use crate::cancel::CancellationToken;
use crate::error::Cancelled;
use crate::unit::SourceUnit;

/// Header markers that identify tool-produced files. Exactly these two byte
/// strings, case-sensitive — existing generator conventions depend on the
/// literal spelling, so no hyphen or case folding.
const HEADER_MARKERS: &[&[u8]] = &[b"<auto-generated", b"<autogenerated"];

/// Suffix of the file stem for designer-generated files
/// (`Form1.Designer.cs`, `Grid.designer.vb`, ...).
const DESIGNER_SUFFIX: &[u8] = b".designer";

/// Comment token kinds across tree-sitter grammars.
const COMMENT_KINDS: &[&str] = &["comment", "line_comment", "block_comment", "doc_comment"];

/// Compute the verdict for one unit: `true` means "treat as generated".
///
/// Pure — same path and content always yield the same answer, which is what
/// lets the cache layer tolerate duplicate concurrent computation. Checks
/// run cheapest first (string-only, then leading trivia, then emptiness)
/// and short-circuit; the token is polled between checks.
pub(crate) fn classify(unit: &SourceUnit, cancel: &CancellationToken) -> Result<bool, Cancelled> {
    cancel.checkpoint()?;
    if has_designer_name(unit.file_name()) {
        return Ok(true);
    }
    cancel.checkpoint()?;
    if has_generated_header(unit) {
        return Ok(true);
    }
    cancel.checkpoint()?;
    Ok(is_blank(unit))
}

/// Base name matches `*.designer.<ext>`, any case. Only the base name is
/// consulted; directory components were stripped by the unit. No tree
/// access, which is why this check runs first.
fn has_designer_name(name: &str) -> bool {
    let Some(dot) = name.rfind('.') else {
        return false;
    };
    if dot + 1 == name.len() {
        return false; // trailing dot, no extension
    }
    let stem = name[..dot].as_bytes();
    stem.len() >= DESIGNER_SUFFIX.len()
        && stem[stem.len() - DESIGNER_SUFFIX.len()..].eq_ignore_ascii_case(DESIGNER_SUFFIX)
}

/// Scan the comment trivia preceding the first substantive token for a
/// header marker. Preprocessor directives are stepped over without ending
/// the leading region; any other token ends it. A unit with no leading
/// comments is a cheap negative.
fn has_generated_header(unit: &SourceUnit) -> bool {
    for token in leading_trivia(unit.root()) {
        if is_comment(token.kind())
            && HEADER_MARKERS
                .iter()
                .any(|m| memmem::find(unit.node_bytes(token), m).is_some())
        {
            return true;
        }
    }
    false
}

/// No tokens at all: no substantive code, no comments, no directives.
/// Tree-sitter never materializes whitespace, so a blank or whitespace-only
/// file parses to a childless root. Such units are classified generated so
/// downstream rules are not run against nothing.
fn is_blank(unit: &SourceUnit) -> bool {
    unit.root().child_count() == 0
}

fn is_comment(kind: &str) -> bool {
    COMMENT_KINDS.contains(&kind)
}

/// Preprocessor material (`#if`, `#region`, `#define`, ...). The C, C++,
/// and C# grammars all use a `preproc` prefix. Deliberately narrow: C#'s
/// `using_directive` is a substantive token, not trivia, despite the name.
fn is_directive(kind: &str) -> bool {
    kind.starts_with("preproc")
}

/// Tokens in document order, ending just before the first one that is
/// neither a comment nor a directive.
fn leading_trivia(root: Node<'_>) -> impl Iterator<Item = Node<'_>> {
    Tokens::new(root).take_while(|n| is_comment(n.kind()) || is_directive(n.kind()))
}

/// Depth-first walk over a tree's tokens. Directive nodes are yielded
/// whole rather than descended into, so `#if DEBUG` is one steppable
/// token instead of a run of disqualifying leaves.
struct Tokens<'t> {
    cursor: TreeCursor<'t>,
    done: bool,
}

impl<'t> Tokens<'t> {
    fn new(root: Node<'t>) -> Self {
        Self {
            cursor: root.walk(),
            done: false,
        }
    }
}

impl<'t> Iterator for Tokens<'t> {
    type Item = Node<'t>;

    fn next(&mut self) -> Option<Node<'t>> {
        if self.done {
            return None;
        }
        // Descend to the next token, treating directives as atomic.
        while !is_directive(self.cursor.node().kind()) && self.cursor.goto_first_child() {}
        let token = self.cursor.node();
        // Advance: next sibling, or climb until one exists.
        loop {
            if self.cursor.goto_next_sibling() {
                break;
            }
            if !self.cursor.goto_parent() {
                self.done = true;
                break;
            }
        }
        Some(token)
    }
}
