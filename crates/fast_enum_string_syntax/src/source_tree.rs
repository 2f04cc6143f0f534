//! Arena-backed source tree lowered from a `syn` AST.
//!
//! `syn` trees have no parent links, so each file is lowered once into a flat arena of [`NodeId`]-addressed
//! nodes that remember their parent. Nodes are pushed in pre-order, which makes arena order the traversal order.
//!
//! ## Notes
//! - Only item-level structure is kept: modules, enums, item containers (`fn`/`impl`/`trait`/`const`/`static`)
//!   and everything else as [`NodeKind::Other`]. Bodies and initializers are walked with [`syn::visit`], so items
//!   in nested blocks, `if`/`loop` bodies and closures are found too; each nested scope becomes an unnamed
//!   [`NodeKind::Container`].
//! - Items and variants gated behind `#[cfg(test)]` (or `#[cfg(all(test, ..))]`) are dropped during lowering.
//! - The file's own module path becomes a chain of synthetic module nodes above the file's items, so
//!   `src/a/b.rs` lowers with `a` and `b` as ancestors of every item in it.

use syn::Token;
use syn::ext::IdentExt;
use syn::punctuated::Punctuated;
use syn::visit::{self, Visit};

use crate::diagnostics::ParseError;
use crate::tree::{NodeKind, SyntaxTree};

/// Handle to a node inside a [`SourceTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    const ROOT: NodeId = NodeId(0);

    fn index(self) -> usize {
        self.0 as usize
    }
}

/// Where a module node came from.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Origin {
    /// Not a module.
    Item,
    /// Part of the file's own module path.
    Synthetic,
    /// `mod name { ... }`
    Inline,
    /// `mod name;`, with its `#[path = "..."]` override if present.
    OutOfLine { path_attr: Option<String> },
}

#[derive(Debug, Clone)]
struct Node {
    kind: NodeKind,
    name: Option<String>,
    members: Vec<String>,
    parent: Option<NodeId>,
    origin: Origin,
}

impl Node {
    fn new(kind: NodeKind, name: Option<String>, parent: NodeId) -> Self {
        Self {
            kind,
            name,
            members: Vec::new(),
            parent: Some(parent),
            origin: Origin::Item,
        }
    }

    fn module(name: String, origin: Origin, parent: NodeId) -> Self {
        Self {
            origin,
            ..Self::new(NodeKind::Module, Some(name), parent)
        }
    }
}

/// An out-of-line `mod name;` declaration that the loader has to resolve to a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutOfLineModule {
    pub name: String,
    /// Full module path of the declared module, from the crate root.
    pub module_path: Vec<String>,
    /// Inline modules enclosing the declaration within its file, outermost first.
    pub inline_parents: Vec<String>,
    /// Value of a `#[path = "..."]` attribute on the declaration.
    pub path_attr: Option<String>,
}

/// One parsed Rust file, lowered for enum discovery.
#[derive(Debug, Clone)]
pub struct SourceTree {
    nodes: Vec<Node>,
}

impl SourceTree {
    /// Parse Rust source text into a tree whose items live under `module_path`.
    ///
    /// ## Errors
    /// Returns a [`ParseError`] pointing at the offending location when `source` is not valid Rust.
    pub fn parse(source: &str, module_path: &[String]) -> Result<Self, ParseError> {
        Self::parse_named("<source>", source, module_path)
    }

    /// Like [`SourceTree::parse`], with `name` used in diagnostics.
    #[tracing::instrument(skip_all, fields(name = name, source_len = source.len()))]
    pub fn parse_named(name: &str, source: &str, module_path: &[String]) -> Result<Self, ParseError> {
        let file = syn::parse_file(source).map_err(|err| ParseError::from_syn(name, source, &err))?;
        Ok(Self::from_file(&file, module_path))
    }

    /// Lower an already-parsed file.
    pub fn from_file(file: &syn::File, module_path: &[String]) -> Self {
        let mut lowering = Lowering {
            nodes: vec![Node {
                kind: NodeKind::Other,
                name: None,
                members: Vec::new(),
                parent: None,
                origin: Origin::Item,
            }],
        };

        let mut parent = NodeId::ROOT;
        for segment in module_path {
            parent = lowering.push(Node::module(segment.clone(), Origin::Synthetic, parent));
        }
        lowering.lower_items(&file.items, parent);

        Self { nodes: lowering.nodes }
    }

    /// The module path this tree was lowered under.
    pub fn module_path(&self) -> Vec<String> {
        self.nodes
            .iter()
            .filter(|node| node.origin == Origin::Synthetic)
            .filter_map(|node| node.name.clone())
            .collect()
    }

    /// Number of nodes, not counting the root.
    pub fn len(&self) -> usize {
        self.nodes.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every `mod name;` declaration in this file, in declaration order.
    ///
    /// Declarations inside function or impl bodies are skipped; they cannot name a file without a `#[path]` that
    /// is relative to an unknown directory.
    pub fn out_of_line_modules(&self) -> Vec<OutOfLineModule> {
        let mut modules = Vec::new();
        for id in self.descendants() {
            let node = self.node(id);
            let Origin::OutOfLine { path_attr } = &node.origin else {
                continue;
            };
            let Some(name) = node.name.clone() else {
                continue;
            };
            if self.ancestors(id).any(|a| self.kind(a) == NodeKind::Container) {
                continue;
            }

            let mut module_path = Vec::new();
            let mut inline_parents = Vec::new();
            for ancestor in self.ancestors(id) {
                let ancestor = self.node(ancestor);
                if ancestor.kind != NodeKind::Module {
                    continue;
                }
                if let Some(segment) = &ancestor.name {
                    module_path.push(segment.clone());
                    if ancestor.origin == Origin::Inline {
                        inline_parents.push(segment.clone());
                    }
                }
            }
            module_path.reverse();
            module_path.push(name.clone());
            inline_parents.reverse();

            modules.push(OutOfLineModule {
                name,
                module_path,
                inline_parents,
                path_attr: path_attr.clone(),
            });
        }
        modules
    }

    fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }
}

impl SyntaxTree for SourceTree {
    type Node = NodeId;

    fn descendants(&self) -> impl Iterator<Item = NodeId> + '_ {
        (1..self.nodes.len()).map(|index| NodeId(index as u32))
    }

    fn kind(&self, node: NodeId) -> NodeKind {
        self.node(node).kind
    }

    fn identifier(&self, node: NodeId) -> Option<&str> {
        self.node(node).name.as_deref()
    }

    fn members(&self, node: NodeId) -> impl Iterator<Item = &str> + '_ {
        self.node(node).members.iter().map(String::as_str)
    }

    fn ancestors(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(self.node(node).parent, |id| self.node(*id).parent)
    }
}

// ============================================================================
// Lowering
// ============================================================================

struct Lowering {
    nodes: Vec<Node>,
}

impl Lowering {
    fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    fn lower_items(&mut self, items: &[syn::Item], parent: NodeId) {
        for item in items {
            self.lower_item(item, parent);
        }
    }

    fn lower_item(&mut self, item: &syn::Item, parent: NodeId) {
        if is_cfg_test(item_attrs(item)) {
            return;
        }

        match item {
            syn::Item::Mod(item_mod) => {
                let name = ident_text(&item_mod.ident);
                match &item_mod.content {
                    Some((_, items)) => {
                        let id = self.push(Node::module(name, Origin::Inline, parent));
                        self.lower_items(items, id);
                    }
                    None => {
                        let path_attr = path_attr(&item_mod.attrs);
                        self.push(Node::module(name, Origin::OutOfLine { path_attr }, parent));
                    }
                }
            }
            syn::Item::Enum(item_enum) => {
                let mut node = Node::new(NodeKind::Enum, Some(ident_text(&item_enum.ident)), parent);
                node.members = item_enum
                    .variants
                    .iter()
                    .filter(|v| !is_cfg_test(&v.attrs))
                    .map(|v| ident_text(&v.ident))
                    .collect();
                self.push(node);
            }
            syn::Item::Fn(item_fn) => {
                let id = self.push(Node::new(
                    NodeKind::Container,
                    Some(ident_text(&item_fn.sig.ident)),
                    parent,
                ));
                self.lower_block(&item_fn.block, id);
            }
            syn::Item::Const(item_const) => {
                let id = self.push(Node::new(NodeKind::Container, Some(ident_text(&item_const.ident)), parent));
                self.lower_expr(&item_const.expr, id);
            }
            syn::Item::Static(item_static) => {
                let id = self.push(Node::new(NodeKind::Container, Some(ident_text(&item_static.ident)), parent));
                self.lower_expr(&item_static.expr, id);
            }
            syn::Item::Impl(item_impl) => {
                let id = self.push(Node::new(NodeKind::Container, self_type_name(&item_impl.self_ty), parent));
                for impl_item in &item_impl.items {
                    match impl_item {
                        syn::ImplItem::Fn(method) if !is_cfg_test(&method.attrs) => {
                            let method_id =
                                self.push(Node::new(NodeKind::Container, Some(ident_text(&method.sig.ident)), id));
                            self.lower_block(&method.block, method_id);
                        }
                        syn::ImplItem::Const(item_const) if !is_cfg_test(&item_const.attrs) => {
                            let const_id =
                                self.push(Node::new(NodeKind::Container, Some(ident_text(&item_const.ident)), id));
                            self.lower_expr(&item_const.expr, const_id);
                        }
                        _ => {}
                    }
                }
            }
            syn::Item::Trait(item_trait) => {
                let id = self.push(Node::new(NodeKind::Container, Some(ident_text(&item_trait.ident)), parent));
                for trait_item in &item_trait.items {
                    match trait_item {
                        syn::TraitItem::Fn(syn::TraitItemFn {
                            sig,
                            default: Some(block),
                            ..
                        }) => {
                            let method_id = self.push(Node::new(NodeKind::Container, Some(ident_text(&sig.ident)), id));
                            self.lower_block(block, method_id);
                        }
                        syn::TraitItem::Const(syn::TraitItemConst {
                            ident,
                            default: Some((_, expr)),
                            ..
                        }) => {
                            let const_id = self.push(Node::new(NodeKind::Container, Some(ident_text(ident)), id));
                            self.lower_expr(expr, const_id);
                        }
                        _ => {}
                    }
                }
            }
            other => {
                self.push(Node::new(NodeKind::Other, item_name(other), parent));
            }
        }
    }

    /// Lower the statements of `block` directly under `parent`.
    fn lower_block(&mut self, block: &syn::Block, parent: NodeId) {
        let mut scope = Scope { lowering: self, parent };
        for stmt in &block.stmts {
            scope.visit_stmt(stmt);
        }
    }

    fn lower_expr(&mut self, expr: &syn::Expr, parent: NodeId) {
        Scope { lowering: self, parent }.visit_expr(expr);
    }
}

/// Walks a body for items, opening an unnamed container for every nested block and closure.
struct Scope<'l> {
    lowering: &'l mut Lowering,
    parent: NodeId,
}

impl Scope<'_> {
    fn open(&mut self) -> NodeId {
        self.lowering.push(Node::new(NodeKind::Container, None, self.parent))
    }
}

impl<'ast> Visit<'ast> for Scope<'_> {
    fn visit_item(&mut self, item: &'ast syn::Item) {
        self.lowering.lower_item(item, self.parent);
    }

    fn visit_block(&mut self, block: &'ast syn::Block) {
        let id = self.open();
        self.lowering.lower_block(block, id);
    }

    fn visit_expr_closure(&mut self, closure: &'ast syn::ExprClosure) {
        let id = self.open();
        let mut inner = Scope {
            lowering: &mut *self.lowering,
            parent: id,
        };
        visit::visit_expr_closure(&mut inner, closure);
    }
}

/// Identifier text without the `r#` prefix.
fn ident_text(ident: &syn::Ident) -> String {
    ident.unraw().to_string()
}

fn self_type_name(ty: &syn::Type) -> Option<String> {
    match ty {
        syn::Type::Path(type_path) => type_path.path.segments.last().map(|s| ident_text(&s.ident)),
        _ => None,
    }
}

fn item_name(item: &syn::Item) -> Option<String> {
    let ident = match item {
        syn::Item::Struct(i) => &i.ident,
        syn::Item::Union(i) => &i.ident,
        syn::Item::Type(i) => &i.ident,
        syn::Item::TraitAlias(i) => &i.ident,
        syn::Item::ExternCrate(i) => &i.ident,
        _ => return None,
    };
    Some(ident_text(ident))
}

fn item_attrs(item: &syn::Item) -> &[syn::Attribute] {
    match item {
        syn::Item::Const(i) => &i.attrs,
        syn::Item::Enum(i) => &i.attrs,
        syn::Item::ExternCrate(i) => &i.attrs,
        syn::Item::Fn(i) => &i.attrs,
        syn::Item::ForeignMod(i) => &i.attrs,
        syn::Item::Impl(i) => &i.attrs,
        syn::Item::Macro(i) => &i.attrs,
        syn::Item::Mod(i) => &i.attrs,
        syn::Item::Static(i) => &i.attrs,
        syn::Item::Struct(i) => &i.attrs,
        syn::Item::Trait(i) => &i.attrs,
        syn::Item::TraitAlias(i) => &i.attrs,
        syn::Item::Type(i) => &i.attrs,
        syn::Item::Union(i) => &i.attrs,
        syn::Item::Use(i) => &i.attrs,
        _ => &[],
    }
}

/// `#[cfg(test)]`, or any `#[cfg(all(..))]` that requires `test`.
fn is_cfg_test(attrs: &[syn::Attribute]) -> bool {
    attrs.iter().any(|attr| {
        attr.path().is_ident("cfg") && attr.parse_args::<syn::Meta>().is_ok_and(|predicate| requires_test(&predicate))
    })
}

fn requires_test(predicate: &syn::Meta) -> bool {
    match predicate {
        syn::Meta::Path(path) => path.is_ident("test"),
        syn::Meta::List(list) if list.path.is_ident("all") => list
            .parse_args_with(Punctuated::<syn::Meta, Token![,]>::parse_terminated)
            .is_ok_and(|nested| nested.iter().any(requires_test)),
        _ => false,
    }
}

/// `#[path = "..."]`
fn path_attr(attrs: &[syn::Attribute]) -> Option<String> {
    attrs.iter().find_map(|attr| {
        if !attr.path().is_ident("path") {
            return None;
        }
        let syn::Meta::NameValue(name_value) = &attr.meta else {
            return None;
        };
        match &name_value.value {
            syn::Expr::Lit(syn::ExprLit {
                lit: syn::Lit::Str(lit), ..
            }) => Some(lit.value()),
            _ => None,
        }
    })
}
