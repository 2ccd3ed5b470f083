use std::fmt;

/// One step from a container to one of its children.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathStep {
    Key(String),
    Index(usize),
}

impl PathStep {
    pub fn as_key(&self) -> Option<&str> {
        match self {
            PathStep::Key(key) => Some(key.as_str()),
            PathStep::Index(_) => None,
        }
    }
}

impl From<&str> for PathStep {
    fn from(key: &str) -> Self {
        PathStep::Key(key.to_string())
    }
}

impl From<String> for PathStep {
    fn from(key: String) -> Self {
        PathStep::Key(key)
    }
}

impl From<usize> for PathStep {
    fn from(index: usize) -> Self {
        PathStep::Index(index)
    }
}

impl fmt::Display for PathStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathStep::Key(key) => write!(f, ".{key}"),
            PathStep::Index(index) => write!(f, "[{index}]"),
        }
    }
}

/// Location of a node, as the steps taken from the document root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct NodePath(Vec<PathStep>);

impl NodePath {
    pub fn root() -> Self {
        Self::default()
    }

    pub fn steps(&self) -> &[PathStep] {
        &self.0
    }

    pub fn last(&self) -> Option<&PathStep> {
        self.0.last()
    }

    /// A new path one step deeper; `self` is left as it was.
    pub fn child(&self, step: impl Into<PathStep>) -> NodePath {
        let mut steps = Vec::with_capacity(self.0.len() + 1);
        steps.extend(self.0.iter().cloned());
        steps.push(step.into());
        NodePath(steps)
    }

    /// The name of the input a node belongs to: its own key, or its parent's
    /// key when the node is a sequence element.
    pub fn input_name(&self) -> Option<&str> {
        match self.0.as_slice() {
            [] => None,
            [.., PathStep::Key(key)] => Some(key.as_str()),
            [.., parent, PathStep::Index(_)] => parent.as_key(),
            [PathStep::Index(_)] => None,
        }
    }
}

impl<S: Into<PathStep>> FromIterator<S> for NodePath {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        NodePath(iter.into_iter().map(Into::into).collect())
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return write!(f, ".");
        }
        for step in &self.0 {
            write!(f, "{step}")?;
        }
        Ok(())
    }
}
