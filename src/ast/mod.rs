/// AST (Abstract Syntax Tree) module
/// Contains the tree built for each parsed statement
///
/// Submodules:
/// - ast: Node, node kinds, operators and the indented rendering
pub mod ast;
