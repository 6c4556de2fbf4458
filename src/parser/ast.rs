use std::fmt;
use std::mem;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinOpKind {
    Equal,
    NotEqual,
    LessThan,
    LessEqual,
    Add,
    Sub,
    Mul,
    Div,
}

impl BinOpKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BinOpKind::Equal => "==",
            BinOpKind::NotEqual => "!=",
            BinOpKind::LessThan => "<",
            BinOpKind::LessEqual => "<=",
            BinOpKind::Add => "+",
            BinOpKind::Sub => "-",
            BinOpKind::Mul => "*",
            BinOpKind::Div => "/",
        }
    }
}

/// A node of the expression tree. Every leaf is a number and every inner
/// node owns exactly two operands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    Num(i64),
    Binary(BinOpKind, Box<Node>, Box<Node>),
}

impl Node {
    pub fn binary(kind: BinOpKind, lhs: Node, rhs: Node) -> Self {
        Node::Binary(kind, Box::new(lhs), Box::new(rhs))
    }

    /// Moves both operands out into `pending`, leaving leaves behind.
    fn take_children(&mut self, pending: &mut Vec<Node>) {
        if let Node::Binary(_, lhs, rhs) = self {
            pending.push(mem::replace(&mut **lhs, Node::Num(0)));
            pending.push(mem::replace(&mut **rhs, Node::Num(0)));
        }
    }
}

// A long operator chain builds a tree as deep as the chain, so the default
// recursive drop could exhaust the stack.
impl Drop for Node {
    fn drop(&mut self) {
        let mut pending = vec![];
        self.take_children(&mut pending);
        while let Some(mut node) = pending.pop() {
            node.take_children(&mut pending);
        }
    }
}

enum Item<'a> {
    Node(&'a Node),
    Text(&'static str),
}

/// S-expression form, e.g. `(+ 1 (* 2 3))`.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut stack = vec![Item::Node(self)];

        while let Some(item) = stack.pop() {
            match item {
                Item::Text(text) => f.write_str(text)?,
                Item::Node(Node::Num(n)) => write!(f, "{n}")?,
                Item::Node(Node::Binary(kind, lhs, rhs)) => {
                    stack.push(Item::Text(")"));
                    stack.push(Item::Node(rhs));
                    stack.push(Item::Text(" "));
                    stack.push(Item::Node(lhs));
                    stack.push(Item::Text(" "));
                    stack.push(Item::Text(kind.as_str()));
                    stack.push(Item::Text("("));
                }
            }
        }
        Ok(())
    }
}
