//! Binary operations and operation sets.
//!
//! Operations are named on the command line by short tokens:
//! `mul`, `div`, `add`, `sub`. Only these exact tokens count; anything else,
//! including other casings or padded tokens, is not an operation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A binary operation applied to a pair of feature columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    #[serde(rename = "mul")]
    Multiply,
    #[serde(rename = "div")]
    Divide,
    #[serde(rename = "add")]
    Add,
    #[serde(rename = "sub")]
    Subtract,
}

impl Operation {
    /// All operations, in the order they are applied to each column pair.
    pub const ALL: [Operation; 4] = [
        Operation::Multiply,
        Operation::Divide,
        Operation::Add,
        Operation::Subtract,
    ];

    /// Parse from a command-line token.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "mul" => Some(Self::Multiply),
            "div" => Some(Self::Divide),
            "add" => Some(Self::Add),
            "sub" => Some(Self::Subtract),
            _ => None,
        }
    }

    /// Command-line token.
    pub fn token(&self) -> &'static str {
        match self {
            Self::Multiply => "mul",
            Self::Divide => "div",
            Self::Add => "add",
            Self::Subtract => "sub",
        }
    }

    /// Operator symbol used in derived column names.
    pub fn symbol(&self) -> char {
        match self {
            Self::Multiply => '*',
            Self::Divide => '/',
            Self::Add => '+',
            Self::Subtract => '-',
        }
    }

    /// Whether the operation is applied to a column paired with itself.
    pub fn includes_self_pairs(&self) -> bool {
        matches!(self, Self::Multiply)
    }

    fn index(&self) -> usize {
        match self {
            Self::Multiply => 0,
            Self::Divide => 1,
            Self::Add => 2,
            Self::Subtract => 3,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// The set of enabled operations.
///
/// Enabling order is irrelevant: iteration always follows [`Operation::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Vec<Operation>", into = "Vec<Operation>")]
pub struct OperationSet {
    enabled: [bool; 4],
}

impl OperationSet {
    /// No operations enabled.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Every operation enabled.
    pub fn all() -> Self {
        Self {
            enabled: [true; 4],
        }
    }

    /// Build from command-line tokens.
    ///
    /// Unrecognized tokens and duplicates are ignored.
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        tokens
            .into_iter()
            .filter_map(|t| Operation::from_token(t.as_ref()))
            .collect()
    }

    pub fn insert(&mut self, op: Operation) {
        self.enabled[op.index()] = true;
    }

    pub fn contains(&self, op: Operation) -> bool {
        self.enabled[op.index()]
    }

    pub fn is_empty(&self) -> bool {
        !self.enabled.iter().any(|&e| e)
    }

    pub fn len(&self) -> usize {
        self.enabled.iter().filter(|&&e| e).count()
    }

    /// Union of two sets.
    pub fn union(&self, other: &OperationSet) -> OperationSet {
        let mut merged = *self;
        for op in other.iter() {
            merged.insert(op);
        }
        merged
    }

    /// Enabled operations in application order.
    pub fn iter(&self) -> impl Iterator<Item = Operation> + '_ {
        Operation::ALL
            .into_iter()
            .filter(move |op| self.contains(*op))
    }
}

impl FromIterator<Operation> for OperationSet {
    fn from_iter<T: IntoIterator<Item = Operation>>(iter: T) -> Self {
        let mut set = OperationSet::empty();
        for op in iter {
            set.insert(op);
        }
        set
    }
}

impl From<Vec<Operation>> for OperationSet {
    fn from(ops: Vec<Operation>) -> Self {
        ops.into_iter().collect()
    }
}

impl From<OperationSet> for Vec<Operation> {
    fn from(set: OperationSet) -> Self {
        set.iter().collect()
    }
}

impl fmt::Display for OperationSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tokens: Vec<&str> = self.iter().map(|op| op.token()).collect();
        write!(f, "[{}]", tokens.join(", "))
    }
}
