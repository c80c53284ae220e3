use std::fmt::{self, Display};

use crate::lexer::tokens::TokenKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl BinaryOperator {
    pub fn from_token_kind(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Plus => Some(BinaryOperator::Add),
            TokenKind::Dash => Some(BinaryOperator::Subtract),
            TokenKind::Star => Some(BinaryOperator::Multiply),
            TokenKind::Slash => Some(BinaryOperator::Divide),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            BinaryOperator::Add => "+",
            BinaryOperator::Subtract => "-",
            BinaryOperator::Multiply => "*",
            BinaryOperator::Divide => "/",
        }
    }
}

/// What a node stands for. Its `Display` is the node's printed label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Assignment,
    Identifier(String),
    /// The literal including its quotes, e.g. `'a'`.
    Character(String),
    Operator(BinaryOperator),
}

impl Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKind::Assignment => write!(f, "Assignment"),
            NodeKind::Identifier(name) => write!(f, "Identifier: {}", name),
            NodeKind::Character(literal) => write!(f, "Character: {}", literal),
            NodeKind::Operator(operator) => write!(f, "{}", operator.symbol()),
        }
    }
}

/// A syntax tree node. Children are owned exclusively by their parent and
/// kept in source (evaluation) order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub kind: NodeKind,
    pub children: Vec<Node>,
}

impl Node {
    pub fn new(kind: NodeKind) -> Self {
        Node {
            kind,
            children: vec![],
        }
    }

    pub fn assignment(target: &str, value: Node) -> Self {
        let mut node = Node::new(NodeKind::Assignment);
        node.add_child(Node::identifier(target));
        node.add_child(value);
        node
    }

    pub fn identifier(name: &str) -> Self {
        Node::new(NodeKind::Identifier(name.to_string()))
    }

    pub fn character(literal: &str) -> Self {
        Node::new(NodeKind::Character(literal.to_string()))
    }

    pub fn binary(operator: BinaryOperator, left: Node, right: Node) -> Self {
        let mut node = Node::new(NodeKind::Operator(operator));
        node.add_child(left);
        node.add_child(right);
        node
    }

    pub fn add_child(&mut self, child: Node) {
        self.children.push(child);
    }

    pub fn label(&self) -> String {
        self.kind.to_string()
    }

    fn render(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        writeln!(f, "{}{}", "  ".repeat(depth), self.kind)?;
        for child in &self.children {
            child.render(f, depth + 1)?;
        }
        Ok(())
    }
}

/// Renders the tree one label per line, each level indented two spaces
/// deeper than its parent.
impl Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(f, 0)
    }
}
