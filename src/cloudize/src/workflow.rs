use crate::input::SuffixRule;
use cloudize_core::document::DocumentNode;
use cloudize_core::error::structured_file::StructuredFileError;
use cloudize_core::structured_file::load_document;
use std::path::Path;

/// Source of the secondary-file rules declared for each named input.
pub trait SecondaryFileSuffixes {
    /// The rules declared for `input_name`, in declaration order. Inputs that
    /// are unknown or declare nothing usable have no rules.
    fn declared_suffixes(&self, input_name: &str) -> Vec<SuffixRule>;
}

/// A CWL workflow (or tool) definition.
#[derive(Debug, Clone)]
pub struct WorkflowDefinition {
    document: DocumentNode,
}

impl WorkflowDefinition {
    /// Wraps an already parsed definition.
    pub fn new(document: DocumentNode) -> Self {
        WorkflowDefinition { document }
    }

    /// Reads a definition from a `.cwl` (YAML or JSON) file.
    pub fn load(path: &Path) -> Result<Self, StructuredFileError> {
        load_document(path).map(Self::new)
    }

    /// The declaration of `name` under `inputs`, which may be a map keyed by
    /// input name or a list of records carrying an `id`.
    fn input(&self, name: &str) -> Option<&DocumentNode> {
        let inputs = self.document.as_map()?.get("inputs")?;
        match inputs {
            DocumentNode::Map(map) => map.get(name),
            DocumentNode::Sequence(items) => items.iter().find(|item| {
                item.as_map()
                    .and_then(|record| record.get("id"))
                    .and_then(DocumentNode::as_str)
                    .is_some_and(|id| id_matches(id, name))
            }),
            DocumentNode::Scalar(_) => None,
        }
    }
}

impl SecondaryFileSuffixes for WorkflowDefinition {
    fn declared_suffixes(&self, input_name: &str) -> Vec<SuffixRule> {
        let Some(declared) = self
            .input(input_name)
            .and_then(DocumentNode::as_map)
            .and_then(|input| input.get("secondaryFiles"))
        else {
            return vec![];
        };
        match declared {
            DocumentNode::Sequence(items) => items.iter().filter_map(suffix_rule).collect(),
            other => suffix_rule(other).into_iter().collect(),
        }
    }
}

// ids may be written as `#reads` or `#main/reads`
fn id_matches(id: &str, name: &str) -> bool {
    let id = id.strip_prefix('#').unwrap_or(id);
    id == name || id.rsplit('/').next() == Some(name)
}

fn suffix_rule(node: &DocumentNode) -> Option<SuffixRule> {
    let pattern = match node {
        DocumentNode::Map(record) => record.get("pattern")?.as_str()?,
        other => other.as_str()?,
    };
    if pattern.is_empty() {
        None
    } else {
        Some(SuffixRule::parse(pattern))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cloudize_core::structured_file::parse_document;

    fn workflow(s: &str) -> WorkflowDefinition {
        WorkflowDefinition::new(parse_document(s, Path::new("workflow.cwl")).unwrap())
    }

    fn suffixes(workflow: &WorkflowDefinition, name: &str) -> Vec<String> {
        workflow
            .declared_suffixes(name)
            .iter()
            .map(|rule| format!("{}{}", "^".repeat(rule.strip_extensions()), rule.suffix()))
            .collect()
    }

    #[test]
    fn single_string_declaration() {
        let wf = workflow("inputs:\n  vcf:\n    type: File\n    secondaryFiles: .tbi\n");
        assert_eq!(suffixes(&wf, "vcf"), [".tbi"]);
    }

    #[test]
    fn list_declaration_keeps_order() {
        let wf = workflow(
            "inputs:\n  reference:\n    type: File\n    secondaryFiles:\n      - .fai\n      - ^.dict\n      - pattern: .amb\n",
        );
        assert_eq!(suffixes(&wf, "reference"), [".fai", "^.dict", ".amb"]);
    }

    #[test]
    fn list_form_inputs_match_by_id() {
        let wf = workflow(
            "inputs:\n  - id: '#main/bam'\n    type: File\n    secondaryFiles: {pattern: ^.bai}\n  - id: sample\n    type: string\n",
        );
        assert_eq!(suffixes(&wf, "bam"), ["^.bai"]);
        assert!(suffixes(&wf, "sample").is_empty());
        assert!(suffixes(&wf, "main").is_empty());
    }

    #[test]
    fn malformed_or_missing_declarations_mean_no_rules() {
        let wf = workflow(
            "inputs:\n  a: File\n  b: {type: File, secondaryFiles: 3}\n  c: {type: File, secondaryFiles: [7, '', .x]}\n",
        );
        assert!(suffixes(&wf, "a").is_empty());
        assert!(suffixes(&wf, "b").is_empty());
        assert_eq!(suffixes(&wf, "c"), [".x"]);
        assert!(suffixes(&wf, "unknown").is_empty());
        assert!(suffixes(&workflow("cwlVersion: v1.2\n"), "a").is_empty());
    }
}
