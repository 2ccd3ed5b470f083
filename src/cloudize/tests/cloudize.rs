use cloudize::error::{CloudizeError, ObjectStoreError};
use cloudize::{cloudize, CloudizeParams, ObjectStore, UploadNamespace};
use cloudize_core::document::access::{get_deep, set_deep};
use cloudize_core::document::{DocumentNode, NodePath};
use cloudize_core::structured_file::load_document;
use slog::Logger;
use std::cell::RefCell;
use std::path::{Path, PathBuf};
use time::{Date, Month};

#[derive(Debug, Default)]
struct RecordingStore {
    uploads: RefCell<Vec<(PathBuf, String)>>,
}

impl ObjectStore for RecordingStore {
    fn bucket(&self) -> &str {
        "bkt"
    }

    fn scheme(&self) -> &str {
        "gs"
    }

    fn upload(&self, local_path: &Path, remote_key: &str) -> Result<(), ObjectStoreError> {
        self.uploads
            .borrow_mut()
            .push((local_path.to_path_buf(), remote_key.to_string()));
        Ok(())
    }
}

const WORKFLOW: &str = "\
cwlVersion: v1.2
class: Workflow
inputs:
  reads:
    type: File
    secondaryFiles: ^.bai
  reference:
    type: File
    secondaryFiles: [.fai, ^.dict]
  sample: string
  threads: int
outputs: []
steps: []
";

const INPUTS: &str = "\
reads:
  class: File
  path: ../data/reads.bam
  format: http://edamontology.org/format_2572
reference: ../ref/genome.fa
sample: NA12878
threads: 4
intervals:
  - ../data/reads.bam
  - not-a-file.bed
";

const PREFIX: &str = "input_data/tester/2024-06-30";

struct Project {
    _dir: tempfile::TempDir,
    root: PathBuf,
}

impl Project {
    fn new(inputs_name: &str, inputs: &str) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let root = cloudize_core::fs::path::resolve(dir.path());
        for (file, content) in [
            ("data/reads.bam", "BAM"),
            ("data/reads.bai", "BAI"),
            ("ref/genome.fa", ">chr1"),
            ("ref/genome.fa.fai", "chr1\t5"),
            ("ref/genome.dict", "@HD"),
            ("inputs/workflow.cwl", WORKFLOW),
        ] {
            let path = root.join(file);
            std::fs::create_dir_all(path.parent().unwrap()).unwrap();
            std::fs::write(path, content).unwrap();
        }
        std::fs::write(root.join("inputs").join(inputs_name), inputs).unwrap();
        Project { _dir: dir, root }
    }

    fn run(
        &self,
        store: &RecordingStore,
        inputs_name: &str,
        output_name: &str,
        dry_run: bool,
    ) -> Result<cloudize::CloudizeReport, CloudizeError> {
        let namespace =
            UploadNamespace::new("tester", Date::from_calendar_date(2024, Month::June, 30).unwrap())
                .unwrap();
        let workflow_definition = self.root.join("inputs/workflow.cwl");
        let workflow_inputs = self.root.join("inputs").join(inputs_name);
        let output = self.root.join("out").join(output_name);
        let params = CloudizeParams {
            workflow_definition: &workflow_definition,
            workflow_inputs: &workflow_inputs,
            output: &output,
            namespace: &namespace,
            dry_run,
        };
        cloudize(store, &params, &logger())
    }
}

fn logger() -> Logger {
    Logger::root(slog::Discard, slog::o!())
}

fn path(steps: &[&str]) -> NodePath {
    steps
        .iter()
        .map(|step| match step.parse::<usize>() {
            Ok(index) => cloudize_core::document::PathStep::Index(index),
            Err(_) => cloudize_core::document::PathStep::from(*step),
        })
        .collect()
}

fn uri(relative: &str) -> DocumentNode {
    DocumentNode::string(format!("gs://bkt/{PREFIX}/{relative}"))
}

#[test]
fn uploads_every_physical_file_and_rewrites_the_inputs() {
    let project = Project::new("inputs.yaml", INPUTS);
    let store = RecordingStore::default();
    let report = project
        .run(&store, "inputs.yaml", "inputs_cloud.yaml", false)
        .unwrap();

    assert_eq!(report.shared_ancestor.as_deref(), Some(project.root.as_path()));
    let expected: Vec<(PathBuf, String)> = [
        "data/reads.bam",
        "data/reads.bai",
        "ref/genome.fa",
        "ref/genome.fa.fai",
        "ref/genome.dict",
        "data/reads.bam",
    ]
    .iter()
    .map(|file| (project.root.join(file), format!("{PREFIX}/{file}")))
    .collect();
    assert_eq!(*store.uploads.borrow(), expected);
    assert_eq!(report.summary.uploaded, 6);
    assert_eq!(report.summary.missing, 0);

    let saved = load_document(&project.root.join("out/inputs_cloud.yaml")).unwrap();
    assert_eq!(saved, report.rewritten);
    assert_eq!(
        get_deep(&saved, path(&["reads", "path"]).steps()),
        Some(&uri("data/reads.bam"))
    );
    assert_eq!(get_deep(&saved, path(&["reference"]).steps()), Some(&uri("ref/genome.fa")));
    assert_eq!(
        get_deep(&saved, path(&["intervals", "0"]).steps()),
        Some(&uri("data/reads.bam"))
    );
}

#[test]
fn everything_but_the_file_references_is_left_alone() {
    let project = Project::new("inputs.yaml", INPUTS);
    let report = project
        .run(&RecordingStore::default(), "inputs.yaml", "inputs_cloud.yaml", false)
        .unwrap();

    let mut expected = load_document(&project.root.join("inputs/inputs.yaml")).unwrap();
    for (at, relative) in [
        (&["reads", "path"][..], "data/reads.bam"),
        (&["reference"][..], "ref/genome.fa"),
        (&["intervals", "0"][..], "data/reads.bam"),
    ] {
        set_deep(&mut expected, path(at).steps(), uri(relative)).unwrap();
    }
    assert_eq!(report.rewritten, expected);
    assert_eq!(
        get_deep(&report.rewritten, path(&["intervals", "1"]).steps()),
        Some(&DocumentNode::string("not-a-file.bed"))
    );
    assert_eq!(
        get_deep(&report.rewritten, path(&["sample"]).steps()),
        Some(&DocumentNode::string("NA12878"))
    );
}

#[test]
fn dry_run_plans_the_same_but_uploads_nothing() {
    let project = Project::new("inputs.yaml", INPUTS);
    let real = project
        .run(&RecordingStore::default(), "inputs.yaml", "real.yaml", false)
        .unwrap();
    let store = RecordingStore::default();
    let dry = project.run(&store, "inputs.yaml", "dry.yaml", true).unwrap();

    assert!(store.uploads.borrow().is_empty());
    assert_eq!(dry.summary.dry_run, 6);
    assert_eq!(dry.rewritten, real.rewritten);
    assert_eq!(dry.file_inputs, real.file_inputs);
    assert_eq!(
        std::fs::read_to_string(project.root.join("out/dry.yaml")).unwrap(),
        std::fs::read_to_string(project.root.join("out/real.yaml")).unwrap()
    );
}

#[test]
fn missing_records_are_rewritten_but_not_uploaded() {
    let project = Project::new(
        "inputs.yaml",
        "reads: {class: File, path: ../data/reads.bam}\nlater: {class: File, path: ../data/later.bam}\n",
    );
    let store = RecordingStore::default();
    let report = project
        .run(&store, "inputs.yaml", "inputs_cloud.yaml", false)
        .unwrap();
    assert_eq!(report.summary.missing, 1);
    // reads.bai is declared for `reads`
    assert_eq!(report.summary.uploaded, 2);
    assert_eq!(
        get_deep(&report.rewritten, path(&["later", "path"]).steps()),
        Some(&DocumentNode::string(format!("gs://bkt/{PREFIX}/later.bam")))
    );
}

#[test]
fn json_inputs_stay_json() {
    let project = Project::new(
        "inputs.json",
        r#"{"reference": {"class": "File", "path": "../ref/genome.fa"}, "threads": 2}"#,
    );
    let report = project
        .run(&RecordingStore::default(), "inputs.json", "inputs_cloud.json", false)
        .unwrap();
    let text = std::fs::read_to_string(project.root.join("out/inputs_cloud.json")).unwrap();
    assert!(text.starts_with("{\n  \"reference\": {"));
    assert!(text.contains(&format!("\"gs://bkt/{PREFIX}/genome.fa\"")));
    assert_eq!(
        load_document(&project.root.join("out/inputs_cloud.json")).unwrap(),
        report.rewritten
    );
}

#[test]
fn no_file_inputs_is_not_an_error() {
    let project = Project::new("inputs.yaml", "sample: NA12878\nthreads: 4\n");
    let store = RecordingStore::default();
    let report = project
        .run(&store, "inputs.yaml", "inputs_cloud.yaml", false)
        .unwrap();
    assert!(report.file_inputs.is_empty());
    assert_eq!(report.shared_ancestor, None);
    assert!(store.uploads.borrow().is_empty());
    assert_eq!(
        report.rewritten,
        load_document(&project.root.join("inputs/inputs.yaml")).unwrap()
    );
}

#[test]
fn unreadable_inputs_are_reported() {
    let project = Project::new("inputs.yaml", INPUTS);
    assert!(matches!(
        project.run(&RecordingStore::default(), "absent.yaml", "out.yaml", false),
        Err(CloudizeError::LoadInputsFailed(_))
    ));
}
