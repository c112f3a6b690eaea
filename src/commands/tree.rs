//! # Tree Command Implementation
//!
//! This module implements the `tree` subcommand, which displays the ancestry
//! graph the merge engine walks for a manifest.
//!
//! ## Functionality
//!
//! - **Ancestry Visualization**: every declared folder and each of its
//!   ancestor directories, with declared folders marked by kind.
//! - **Depth Control**: `--depth` limits how far below the roots to display.
//! - **Excluded Folders**: listed after the tree, since they never take part
//!   in merging.
//!
//! This command is a safe, read-only operation that does not modify any files.

use std::borrow::Cow;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Args;
use ptree::{print_tree, TreeItem};

use source_root_simplifier::ancestry::AncestryGraph;
use source_root_simplifier::folder::Folder;
use source_root_simplifier::output::{emoji, kind_label, OutputConfig};
use source_root_simplifier::path::nesting_depth;

use super::{load_folders, project_root};

/// Display the ancestry tree of a manifest's folders
#[derive(Args, Debug)]
pub struct TreeArgs {
    /// Path to the folder manifest.
    #[arg(short, long, value_name = "FILE", default_value = "folders.yaml")]
    pub manifest: PathBuf,

    /// Project root that folder paths are relative to.
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Maximum depth to display below each root.
    ///
    /// If not specified, displays the full tree.
    #[arg(long, value_name = "NUM")]
    pub depth: Option<usize>,
}

/// Execute the `tree` command.
pub fn execute(args: TreeArgs, color_flag: &str) -> Result<()> {
    let out = OutputConfig::from_env_and_flag(color_flag);
    let root = project_root(&args.manifest, args.root.as_deref());
    let (_, folders) = load_folders(&args.manifest, &root)?;

    let (excluded, declared): (Vec<Folder>, Vec<Folder>) =
        folders.into_iter().partition(Folder::is_excluded);
    let by_path: HashMap<&Path, &Folder> = declared.iter().map(|f| (f.path(), f)).collect();
    let graph = AncestryGraph::build(declared.iter().map(Folder::path));

    let max_depth = args.depth.unwrap_or(usize::MAX);
    let tree = TreeNode {
        label: format!(
            "{} {}",
            emoji(&out, "🌳", "[TREE]"),
            args.manifest.display()
        ),
        children: graph
            .roots()
            .map(|root| build_tree(&graph, &by_path, &out, root, max_depth))
            .collect(),
    };
    print_tree(&tree).map_err(|e| anyhow::anyhow!("Failed to display tree: {}", e))?;

    for folder in &excluded {
        println!(
            "{} {}",
            kind_label(&out, folder.kind()),
            folder.path().display()
        );
    }
    Ok(())
}

/// Build the display tree under `root`, cut off below `max_depth`.
///
/// Nodes are assembled bottom-up from the graph's post-order walk, so deep
/// directory chains do not recurse.
fn build_tree(
    graph: &AncestryGraph,
    declared: &HashMap<&Path, &Folder>,
    out: &OutputConfig,
    root: &Path,
    max_depth: usize,
) -> TreeNode {
    let mut built: HashMap<&Path, TreeNode> = HashMap::new();
    for node in graph.post_order(root) {
        let depth = nesting_depth(root, node).unwrap_or(0);
        if depth > max_depth {
            continue;
        }
        let children = graph
            .children(node)
            .filter_map(|child| built.remove(child))
            .collect();
        let label = node_label(declared, out, node, depth);
        built.insert(node, TreeNode { label, children });
    }
    built.remove(root).unwrap_or_else(|| TreeNode {
        label: root.display().to_string(),
        children: vec![],
    })
}

/// Full path for roots, the last segment below them, plus a kind marker for
/// declared folders.
fn node_label(
    declared: &HashMap<&Path, &Folder>,
    out: &OutputConfig,
    node: &Path,
    depth: usize,
) -> String {
    let name = if depth == 0 {
        node.display().to_string()
    } else {
        node.file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| node.display().to_string())
    };
    match declared.get(node) {
        Some(folder) => format!("{} [{}]", name, kind_label(out, folder.kind()).trim_end()),
        None => name,
    }
}

/// Tree node structure for ptree visualization
#[derive(Clone)]
struct TreeNode {
    label: String,
    children: Vec<TreeNode>,
}

impl TreeItem for TreeNode {
    type Child = TreeNode;

    fn write_self<W: std::io::Write>(
        &self,
        f: &mut W,
        _style: &ptree::Style,
    ) -> std::io::Result<()> {
        write!(f, "{}", self.label)
    }

    fn children(&self) -> Cow<'_, [Self::Child]> {
        Cow::Borrowed(&self.children)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_execute_missing_manifest() {
        let args = TreeArgs {
            manifest: PathBuf::from("/nonexistent/folders.yaml"),
            root: None,
            depth: None,
        };

        let result = execute(args, "never");
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Failed to load manifest"));
    }

    #[test]
    fn test_build_tree_marks_declared_folders() {
        let declared = vec![Folder::source("src/a"), Folder::test("src/b/c")];
        let by_path: HashMap<&Path, &Folder> = declared.iter().map(|f| (f.path(), f)).collect();
        let graph = AncestryGraph::build(declared.iter().map(Folder::path));
        let out = OutputConfig::without_color();

        let node = build_tree(&graph, &by_path, &out, Path::new("src"), usize::MAX);
        assert_eq!(node.label, "src");
        let labels: Vec<&str> = node.children.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec!["a [source]", "b"]);
        assert_eq!(node.children[1].children[0].label, "c [test]");
    }

    #[test]
    fn test_build_tree_respects_depth() {
        let declared = vec![Folder::source("src/a/b")];
        let by_path: HashMap<&Path, &Folder> = declared.iter().map(|f| (f.path(), f)).collect();
        let graph = AncestryGraph::build(declared.iter().map(Folder::path));
        let out = OutputConfig::without_color();

        let node = build_tree(&graph, &by_path, &out, Path::new("src"), 1);
        assert_eq!(node.children.len(), 1);
        assert!(node.children[0].children.is_empty());
    }

    #[test]
    fn test_build_tree_handles_deep_chain() {
        let deep: PathBuf = (0..2_000).map(|i| format!("d{}", i)).collect();
        let declared = vec![Folder::source(deep)];
        let by_path: HashMap<&Path, &Folder> = declared.iter().map(|f| (f.path(), f)).collect();
        let graph = AncestryGraph::build(declared.iter().map(Folder::path));
        let out = OutputConfig::without_color();

        let mut node = build_tree(&graph, &by_path, &out, Path::new("d0"), usize::MAX);
        let mut levels = 1;
        while let Some(child) = node.children.pop() {
            node = child;
            levels += 1;
        }
        assert_eq!(levels, 2_000);
        assert_eq!(node.label, "d1999 [source]");
    }
}
