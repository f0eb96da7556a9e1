//! Remote tree walker with partial-failure isolation.
//!
//! Discovers eligible leaf resources by depth-first traversal of the
//! remote directory tree. A listing failure in one subtree yields an
//! empty result for that subtree only; siblings and the rest of the
//! walk continue. No retries are performed.

use crate::core::remote::ContentService;
use crate::core::types::EntryKind;

/// Outcome of a tree walk
#[derive(Debug, Clone)]
pub struct WalkOutcome {
    /// Discovered leaf paths, in depth-first discovery order
    pub paths: Vec<String>,

    /// Number of subtrees whose listing failed
    pub listing_failures: usize,
}

/// Pending traversal work: either a directory to expand or a leaf
/// already known to match the filter
enum WorkItem {
    Dir { path: String, depth: usize },
    Leaf { path: String },
}

/// Depth-first walker over a [`ContentService`] tree
pub struct TreeWalker<'a> {
    service: &'a dyn ContentService,

    /// Suffix filter for eligible leaf resources (e.g. ".md")
    extension: String,

    /// Maximum nesting depth before a subtree is skipped
    max_depth: usize,
}

impl<'a> TreeWalker<'a> {
    /// Create a new walker
    pub fn new(service: &'a dyn ContentService, extension: &str, max_depth: usize) -> Self {
        Self {
            service,
            extension: extension.to_string(),
            max_depth,
        }
    }

    /// Walk the tree rooted at `root` and collect matching leaf
    /// paths.
    ///
    /// Traversal is depth-first with directory entries kept in
    /// listing order: a directory's subtree is emitted in place of
    /// its listing entry, exactly as recursive descent would produce.
    /// The walk itself never fails; listing errors are logged,
    /// counted, and isolated to their subtree.
    pub async fn walk(&self, root: &str) -> WalkOutcome {
        let mut paths = Vec::new();
        let mut listing_failures = 0usize;

        // Explicit work-stack instead of async recursion. A listed
        // directory's entries are pushed in reverse so pop order
        // equals listing order.
        let mut stack: Vec<WorkItem> = vec![WorkItem::Dir {
            path: root.to_string(),
            depth: 0,
        }];

        while let Some(item) = stack.pop() {
            let (dir, depth) = match item {
                WorkItem::Leaf { path } => {
                    paths.push(path);
                    continue;
                }
                WorkItem::Dir { path, depth } => (path, depth),
            };

            if depth >= self.max_depth {
                tracing::warn!(
                    "Skipping '{}': nesting depth {} exceeds limit {}",
                    dir,
                    depth,
                    self.max_depth
                );
                continue;
            }

            let entries = match self.service.list_children(&dir).await {
                Ok(entries) => entries,
                Err(e) => {
                    tracing::warn!("Subtree '{}' yields no resources: {}", dir, e);
                    listing_failures += 1;
                    continue;
                }
            };

            let items = entries.into_iter().filter_map(|entry| match entry.kind {
                EntryKind::Dir => Some(WorkItem::Dir {
                    path: entry.path,
                    depth: depth + 1,
                }),
                EntryKind::File if entry.name.ends_with(&self.extension) => {
                    Some(WorkItem::Leaf { path: entry.path })
                }
                EntryKind::File => None,
                EntryKind::Other => {
                    tracing::debug!("Skipping non-file entry '{}'", entry.path);
                    None
                }
            });

            let mut items: Vec<WorkItem> = items.collect();
            items.reverse();
            stack.extend(items);
        }

        WalkOutcome {
            paths,
            listing_failures,
        }
    }
}
