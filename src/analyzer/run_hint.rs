//! "How to run" hints derived from the manifests a project ships.

use super::manifests::DependencySet;
use std::fmt;

/// Suggested way of running a project
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunHint {
    /// npm project
    Node,
    /// pip-installable project
    Python,
    /// Nothing recognised
    Unknown,
}

/// Ordered decision table: the first rule with any manifest present wins
const RULES: &[(&[&str], RunHint)] = &[
    (&["package.json"], RunHint::Node),
    (&["requirements.txt", "setup.py"], RunHint::Python),
];

impl RunHint {
    /// Picks the hint for a set of found manifests
    pub fn for_dependencies(deps: &DependencySet) -> Self {
        RULES
            .iter()
            .find(|(manifests, _)| manifests.iter().any(|m| deps.contains(m)))
            .map_or(Self::Unknown, |(_, hint)| *hint)
    }

    /// Instructions shown in the summary
    pub fn instructions(&self) -> &'static str {
        match self {
            Self::Node => "1. Run `npm install`\n2. Then `npm run dev` or `npm start`",
            Self::Python => {
                "1. Create a virtual environment\n2. Run `pip install -r requirements.txt`\n3. Then run the main script"
            }
            Self::Unknown => "No standard run command detected. Refer to README.",
        }
    }
}

impl fmt::Display for RunHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.instructions())
    }
}
