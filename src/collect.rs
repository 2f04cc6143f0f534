//! Discover enum declarations across parsed source trees.
//!
//! The collector walks every node of every tree and records each enum with its enclosing module path and its
//! members in declaration order. It only needs the [`SyntaxTree`] interface, never a concrete tree type.
//!
//! ## Notes
//! - Output order is tree order, then traversal order within a tree. Nothing is sorted or deduplicated.
//! - Only module ancestors contribute to the path. An enum declared inside a function body keeps just its module
//!   path and drops the function, so the emitted path for it does not resolve. This matches the established
//!   behaviour for non-module containers and is left as is.

use fast_enum_string_syntax::{NodeKind, SyntaxTree};

/// One discovered enum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumDeclaration {
    /// Enclosing module names, outermost first. Empty at the crate root.
    pub namespace_path: Vec<String>,
    pub type_name: String,
    /// Member identifiers in declaration order, duplicates kept.
    pub members: Vec<String>,
}

impl EnumDeclaration {
    pub fn new(namespace_path: Vec<String>, type_name: impl Into<String>, members: Vec<String>) -> Self {
        Self {
            namespace_path,
            type_name: type_name.into(),
            members,
        }
    }

    /// `a::b::Name`, or just `Name` at the crate root.
    pub fn qualified_name(&self) -> String {
        self.segments().collect::<Vec<_>>().join("::")
    }

    /// Module segments followed by the type name.
    pub fn segments(&self) -> impl Iterator<Item = &str> + '_ {
        self.namespace_path
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(self.type_name.as_str()))
    }
}

/// Collect every enum declaration in `trees`, in tree order and then traversal order.
#[tracing::instrument(skip_all)]
pub fn collect<'a, T>(trees: impl IntoIterator<Item = &'a T>) -> Vec<EnumDeclaration>
where
    T: SyntaxTree + 'a,
{
    let mut declarations = Vec::new();
    for tree in trees {
        for node in tree.descendants() {
            if tree.kind(node) != NodeKind::Enum {
                continue;
            }
            let Some(type_name) = tree.identifier(node) else {
                continue;
            };

            let declaration = EnumDeclaration {
                namespace_path: namespace_path(tree, node),
                type_name: type_name.to_string(),
                members: tree.members(node).map(str::to_string).collect(),
            };
            tracing::debug!(
                enum_name = %declaration.qualified_name(),
                member_count = declaration.members.len(),
                "discovered enum"
            );
            declarations.push(declaration);
        }
    }
    declarations
}

/// Names of the module ancestors of `node`, outermost first.
fn namespace_path<T: SyntaxTree>(tree: &T, node: T::Node) -> Vec<String> {
    let mut path: Vec<String> = tree
        .ancestors(node)
        .filter(|ancestor| tree.kind(*ancestor) == NodeKind::Module)
        .filter_map(|ancestor| tree.identifier(ancestor).map(str::to_string))
        .collect();
    // Ancestors come innermost first.
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use fast_enum_string_syntax::SourceTree;

    fn collect_source(source: &str) -> Vec<EnumDeclaration> {
        let tree = SourceTree::parse(source, &[]).unwrap();
        collect([&tree])
    }

    #[test]
    fn test_root_enum_has_empty_namespace() {
        let decls = collect_source("enum TestEnum { Q, W, E, R, T, Y }");
        assert_eq!(decls.len(), 1);
        assert!(decls[0].namespace_path.is_empty());
        assert_eq!(decls[0].qualified_name(), "TestEnum");
        assert_eq!(decls[0].members, ["Q", "W", "E", "R", "T", "Y"]);
    }

    #[test]
    fn test_nested_modules_resolve_outer_to_inner() {
        let decls = collect_source("mod a { mod b { enum EnumName { X } } }");
        assert_eq!(decls[0].namespace_path, ["a", "b"]);
        assert_eq!(decls[0].qualified_name(), "a::b::EnumName");
    }

    #[test]
    fn test_zero_member_enum_is_collected() {
        let decls = collect_source("enum Never {}");
        assert_eq!(decls.len(), 1);
        assert!(decls[0].members.is_empty());
    }

    #[test]
    fn test_no_enums_yields_empty() {
        let decls = collect_source("struct S; fn f() {} mod m { type T = u8; }");
        assert!(decls.is_empty());
    }

    #[test]
    fn test_discovery_order_spans_trees() {
        let first = SourceTree::parse("enum B { One } enum A { Two }", &[]).unwrap();
        let second = SourceTree::parse("enum C { Three }", &["later".to_string()]).unwrap();
        let decls = collect([&first, &second]);
        let names: Vec<String> = decls.iter().map(EnumDeclaration::qualified_name).collect();
        assert_eq!(names, ["B", "A", "later::C"]);
    }

    #[test]
    fn test_members_are_not_sorted() {
        let decls = collect_source("enum Order { Zeta, Alpha, Mid }");
        assert_eq!(decls[0].members, ["Zeta", "Alpha", "Mid"]);
    }

    #[test]
    fn test_fn_body_enum_keeps_only_module_path() {
        let decls = collect_source("mod m { fn build() { enum Local { A } } }");
        assert_eq!(decls[0].qualified_name(), "m::Local");
    }

    #[test]
    fn test_enums_in_nested_scopes_are_collected() {
        let decls = collect_source(
            r#"
mod m {
    fn f() {
        enum Top { A }
        {
            enum InBlock { B }
        }
        if true {
            enum InIf { C }
        }
        loop {
            enum InLoop { D }
            break;
        }
        let _c = || {
            enum InClosure { E }
        };
    }
    const _: () = {
        enum InConst { F }
    };
}
"#,
        );
        let names: Vec<String> = decls.iter().map(EnumDeclaration::qualified_name).collect();
        assert_eq!(
            names,
            ["m::Top", "m::InBlock", "m::InIf", "m::InLoop", "m::InClosure", "m::InConst"]
        );
    }

    #[test]
    fn test_cfg_test_members_are_skipped() {
        let decls = collect_source("enum Kept { A, #[cfg(test)] OnlyInTests, B }");
        assert_eq!(decls[0].members, ["A", "B"]);
    }

    #[test]
    fn test_collect_does_not_mutate_input() {
        let tree = SourceTree::parse("mod m { enum E { A, B } }", &[]).unwrap();
        let before = tree.len();
        let first = collect([&tree]);
        let second = collect([&tree]);
        assert_eq!(first, second);
        assert_eq!(tree.len(), before);
    }
}
