//! The narrow tree interface consumed by enum discovery.
//!
//! Anything that can enumerate its nodes, tell modules from enums, and walk a node's ancestors can feed the
//! collector. [`crate::SourceTree`] is the `syn`-backed implementation; tests use small hand-built trees.

/// Node kinds the collector distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// A `mod` item (inline or out-of-line), or a synthetic module standing in for a file's module path.
    Module,
    /// An `enum` item.
    Enum,
    /// An item that can hold nested items in its body but is not a module (`fn`, `impl`, `trait`).
    Container,
    /// Any other item.
    Other,
}

/// A parsed source unit as seen by the collector.
///
/// ## Notes
/// - `descendants` must visit every node exactly once, in an order that is stable for identical input. The
///   root itself is not a descendant.
/// - `ancestors` yields the innermost enclosing node first.
/// - Identifier text is returned as written, minus any raw-identifier prefix.
pub trait SyntaxTree {
    /// Cheap handle to a node inside this tree.
    type Node: Copy;

    fn descendants(&self) -> impl Iterator<Item = Self::Node> + '_;

    fn kind(&self, node: Self::Node) -> NodeKind;

    /// The declared name of a node, if it has one.
    fn identifier(&self, node: Self::Node) -> Option<&str>;

    /// Member identifiers of an enum node, in declaration order. Empty for every other kind.
    fn members(&self, node: Self::Node) -> impl Iterator<Item = &str> + '_;

    fn ancestors(&self, node: Self::Node) -> impl Iterator<Item = Self::Node> + '_;
}
