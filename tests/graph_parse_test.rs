use std::fs;
use std::path::Path;
use tempfile::TempDir;
use vertexgraph::{FsDescriptorSource, Graph, GraphError, GraphOptions, VertexId, VertexRef};

/// Write `<dir>/<vertex>.edges.json` listing `(path, name)` children.
fn write_descriptor(root: &Path, vertex: &str, children: &[(&str, &str)]) {
    let edges: Vec<_> = children
        .iter()
        .map(|(path, name)| serde_json::json!({ "path": path, "name": name }))
        .collect();
    let file = root.join(format!("{vertex}.edges.json"));
    fs::create_dir_all(file.parent().unwrap()).unwrap();
    fs::write(file, serde_json::json!({ "edges": edges }).to_string()).unwrap();
}

fn graph_for(temp_dir: &TempDir) -> Graph<FsDescriptorSource> {
    Graph::new(FsDescriptorSource::new(temp_dir.path()), GraphOptions::default())
}

fn id(value: u32) -> VertexId {
    VertexId::new(value)
}

#[test]
fn test_root_without_children() {
    let temp_dir = TempDir::new().unwrap();
    write_descriptor(temp_dir.path(), "pkg/app", &[]);

    let mut graph = graph_for(&temp_dir);
    let document = graph.parse(&VertexRef::new("pkg", "app")).unwrap();

    assert_eq!(document.order(), 1);
    let matrix = document.matrix().unwrap();
    assert_eq!(matrix.size(), 1);
    assert_eq!(matrix.get(id(0), id(0)), Some(0));
    assert_eq!(document.paths().get_path(id(0)), Some("pkg/app"));
}

#[test]
fn test_root_with_two_children() {
    let temp_dir = TempDir::new().unwrap();
    write_descriptor(
        temp_dir.path(),
        "pkg/app",
        &[("lib", "child1"), ("lib", "child2")],
    );
    write_descriptor(temp_dir.path(), "pkg/lib/child1", &[]);
    write_descriptor(temp_dir.path(), "pkg/lib/child2", &[]);

    let mut graph = graph_for(&temp_dir);
    let document = graph.parse(&VertexRef::new("pkg", "app")).unwrap();
    let matrix = document.matrix().unwrap();

    let root = document.paths().get_index("pkg/app").unwrap();
    let child1 = document.paths().get_index("pkg/lib/child1").unwrap();
    let child2 = document.paths().get_index("pkg/lib/child2").unwrap();

    assert_eq!(matrix.size(), 3);
    assert!(matrix.has_edge(root, child1));
    assert!(matrix.has_edge(root, child2));
    assert_eq!(matrix.edge_count(), 2);
}

#[test]
fn test_linear_chain_is_upper_triangular() {
    let temp_dir = TempDir::new().unwrap();
    write_descriptor(temp_dir.path(), "app", &[("mid", "child")]);
    write_descriptor(temp_dir.path(), "mid/child", &[("leaf", "grandchild")]);
    write_descriptor(temp_dir.path(), "mid/leaf/grandchild", &[]);

    let mut graph = graph_for(&temp_dir);
    let document = graph.parse(&VertexRef::new("", "app")).unwrap();
    let matrix = document.matrix().unwrap();

    assert_eq!(matrix.size(), 3);
    assert!(matrix.has_edge(id(0), id(1)));
    assert!(matrix.has_edge(id(1), id(2)));
    assert_eq!(matrix.edge_count(), 2);
    for edge in matrix.edges() {
        assert!(edge.from < edge.to);
    }
}

#[test]
fn test_equivalent_paths_collapse_to_one_vertex() {
    let temp_dir = TempDir::new().unwrap();
    write_descriptor(temp_dir.path(), "root", &[("a/./b", "x"), ("a/b", "x")]);
    write_descriptor(temp_dir.path(), "a/b/x", &[]);

    let mut graph = graph_for(&temp_dir);
    let document = graph.parse(&VertexRef::new(".", "root")).unwrap();

    assert_eq!(document.order(), 2);
    let x = document.paths().get_index("a/b/x").unwrap();
    assert_eq!(document.paths().get_index("a/./b/x"), Some(x));
    assert_eq!(document.matrix().unwrap().edge_count(), 1);
}

#[test]
fn test_cycle_back_to_root_fails() {
    let temp_dir = TempDir::new().unwrap();
    write_descriptor(temp_dir.path(), "g/root", &[("c", "child")]);
    write_descriptor(temp_dir.path(), "g/c/child", &[("gc", "grandchild")]);
    // grandchild lives at g/c/gc; "../.." climbs back to g
    write_descriptor(temp_dir.path(), "g/c/gc/grandchild", &[("../..", "root")]);

    let mut graph = graph_for(&temp_dir);
    let err = graph.parse(&VertexRef::new("g", "root")).unwrap_err();

    match err {
        GraphError::CycleDetected { path } => assert_eq!(path, "g/root"),
        other => panic!("expected cycle, got {other}"),
    }
    assert!(graph.document().is_none());
}

#[test]
fn test_diamond_is_not_a_cycle() {
    let temp_dir = TempDir::new().unwrap();
    write_descriptor(temp_dir.path(), "top", &[("", "left"), ("", "right")]);
    write_descriptor(temp_dir.path(), "left", &[("", "bottom")]);
    write_descriptor(temp_dir.path(), "right", &[("", "bottom")]);
    write_descriptor(temp_dir.path(), "bottom", &[]);

    let mut graph = graph_for(&temp_dir);
    let document = graph.parse(&VertexRef::new("", "top")).unwrap();

    assert_eq!(document.order(), 4);
    assert_eq!(document.matrix().unwrap().edge_count(), 4);
}

#[test]
fn test_missing_descriptor_carries_path() {
    let temp_dir = TempDir::new().unwrap();
    write_descriptor(temp_dir.path(), "app", &[("deps", "absent")]);

    let mut graph = graph_for(&temp_dir);
    let err = graph.parse(&VertexRef::new("", "app")).unwrap_err();

    assert!(matches!(err, GraphError::EdgeFileLoadFailed { .. }));
    assert_eq!(err.path(), Some("deps/absent.edges.json"));
    assert!(err.to_string().contains("deps/absent.edges.json"));
}

#[test]
fn test_malformed_descriptor_aborts() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("app.edges.json"), "{ not json").unwrap();

    let mut graph = graph_for(&temp_dir);
    let err = graph.parse(&VertexRef::new("", "app")).unwrap_err();

    assert!(matches!(err, GraphError::EdgeFileLoadFailed { .. }));
}

#[test]
fn test_metadata_paths_recorded() {
    let temp_dir = TempDir::new().unwrap();
    write_descriptor(temp_dir.path(), "pkg/app", &[("lib", "core")]);
    write_descriptor(temp_dir.path(), "pkg/lib/core", &[]);

    let mut graph = graph_for(&temp_dir);
    let document = graph.parse(&VertexRef::new("pkg", "app")).unwrap();

    let core = document.paths().get_index("pkg/lib/core").unwrap();
    assert_eq!(document.metadata_path(id(0)), Some("pkg/app.vertex.json"));
    assert_eq!(document.metadata_path(core), Some("pkg/lib/core.vertex.json"));
}

#[test]
fn test_reference_above_absolute_root_fails() {
    let temp_dir = TempDir::new().unwrap();
    let root_dir = temp_dir.path().join("g");
    // One more ".." than root_dir has components
    let climb = vec![".."; root_dir.components().count() + 1].join("/");
    write_descriptor(temp_dir.path(), "g/root", &[(climb.as_str(), "x")]);

    let mut graph = graph_for(&temp_dir);
    let err = graph
        .parse(&VertexRef::new(root_dir.to_string_lossy(), "root"))
        .unwrap_err();

    assert!(matches!(err, GraphError::NormalizationFailed { .. }));
    assert!(graph.document().is_none());
}
