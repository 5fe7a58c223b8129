// src/tools/zfs.rs

//! The ZFS toolset: `zfs` and `zpool`.
//!
//! ```
//! use shellstack::tools::zfs::Zfs;
//!
//! let mut list = Zfs::list(None);
//! list.no_header().fields(&["name", "used"]);
//! ```

use crate::stack::{CommandStack, Concat};
use crate::tools::Tool;

/// Entry points to the `zfs` subcommands.
pub struct Zfs;

impl Zfs {
    pub fn list(dataset: Option<&str>) -> ZfsList {
        ZfsList::new(dataset)
    }

    pub fn set(dataset: &str) -> ZfsSet {
        ZfsSet::new(dataset)
    }

    pub fn destroy(dataset: &str) -> ZfsDestroy {
        ZfsDestroy::new(dataset)
    }

    pub fn mount(dataset: &str) -> ZfsMount {
        ZfsMount::new(dataset)
    }

    pub fn unmount(dataset: &str) -> ZfsUnmount {
        ZfsUnmount::new(dataset)
    }
}

/// Entry points to the `zpool` subcommands.
pub struct Zpool;

impl Zpool {
    pub fn list(pool: Option<&str>) -> ZpoolList {
        ZpoolList::new(pool)
    }
}

fn zfs_stack(subcommand: &str) -> CommandStack {
    let mut stack = CommandStack::new();
    stack.set_executable("zfs");
    stack.add_option(subcommand, "", Concat::Space);
    stack
}

/// `zfs list`: tabular property information for datasets.
#[derive(Debug, Clone)]
pub struct ZfsList {
    stack: CommandStack,
}

impl ZfsList {
    pub fn new(dataset: Option<&str>) -> Self {
        let mut stack = zfs_stack("list");
        if let Some(dataset) = dataset {
            stack.add_option(dataset, "", Concat::Space);
        }
        ZfsList { stack }
    }

    /// Scripting mode: no headers, tab-separated fields.
    pub fn no_header(&mut self) -> &mut Self {
        self.stack.add_option("-H", "", Concat::Space);
        self
    }

    /// Display numbers in parsable (exact) values.
    pub fn size_in_bytes(&mut self) -> &mut Self {
        self.stack.add_option("-p", "", Concat::Space);
        self
    }

    /// Recursively display any children of the dataset.
    pub fn recursive(&mut self) -> &mut Self {
        self.stack.add_option("-r", "", Concat::Space);
        self
    }

    /// Comma-separated list of properties to display.
    pub fn fields(&mut self, fields: &[&str]) -> &mut Self {
        self.stack.add_option("-o", "", Concat::Space);
        self.stack.add_option(&fields.join(","), "", Concat::Space);
        self
    }
}

impl Tool for ZfsList {
    fn stack(&self) -> &CommandStack {
        &self.stack
    }

    fn stack_mut(&mut self) -> &mut CommandStack {
        &mut self.stack
    }
}

/// `zfs set`: set properties on a dataset. The dataset must be the last
/// token, so it is appended when the command runs.
#[derive(Debug, Clone)]
pub struct ZfsSet {
    stack: CommandStack,
    dataset: Option<String>,
}

impl ZfsSet {
    pub fn new(dataset: &str) -> Self {
        ZfsSet {
            stack: zfs_stack("set"),
            dataset: Some(dataset.to_string()),
        }
    }

    pub fn property(&mut self, name: &str, value: &str) -> &mut Self {
        self.stack.add_option(name, value, Concat::Equals);
        self
    }
}

impl Tool for ZfsSet {
    fn stack(&self) -> &CommandStack {
        &self.stack
    }

    fn stack_mut(&mut self) -> &mut CommandStack {
        &mut self.stack
    }

    fn finalize(&mut self) {
        // take() keeps a second run from appending the dataset twice.
        if let Some(dataset) = self.dataset.take() {
            self.stack.add_option(&dataset, "", Concat::Space);
        }
    }
}

/// `zfs destroy`: destroy a dataset.
#[derive(Debug, Clone)]
pub struct ZfsDestroy {
    stack: CommandStack,
}

impl ZfsDestroy {
    pub fn new(dataset: &str) -> Self {
        let mut stack = zfs_stack("destroy");
        stack.add_option(dataset, "", Concat::Space);
        ZfsDestroy { stack }
    }

    /// Recursively destroy any children of the dataset.
    pub fn recursive(&mut self) -> &mut Self {
        self.stack.add_option("-r", "", Concat::Space);
        self
    }
}

impl Tool for ZfsDestroy {
    fn stack(&self) -> &CommandStack {
        &self.stack
    }

    fn stack_mut(&mut self) -> &mut CommandStack {
        &mut self.stack
    }
}

/// `zfs mount`: mount a filesystem on the path its mountpoint property
/// describes.
#[derive(Debug, Clone)]
pub struct ZfsMount {
    stack: CommandStack,
}

impl ZfsMount {
    pub fn new(dataset: &str) -> Self {
        let mut stack = zfs_stack("mount");
        stack.add_option(dataset, "", Concat::Space);
        ZfsMount { stack }
    }

    /// Overlay mount: allow mounting in a non-empty mountpoint.
    pub fn overlay(&mut self) -> &mut Self {
        self.stack.add_option("-O", "", Concat::Space);
        self
    }

    /// Mount all available ZFS file systems.
    pub fn all(&mut self) -> &mut Self {
        self.stack.add_option("-a", "", Concat::Space);
        self
    }

    /// Temporary mount options for the duration of the mount.
    pub fn options(&mut self, options: &[&str]) -> &mut Self {
        self.stack.add_option("-o", "", Concat::Space);
        self.stack.add_option(&options.join(","), "", Concat::Space);
        self
    }

    /// Load keys for encrypted filesystems as they are mounted.
    pub fn load_keys(&mut self) -> &mut Self {
        self.stack.add_option("-l", "", Concat::Space);
        self
    }

    /// Report mount progress.
    pub fn verbose(&mut self) -> &mut Self {
        self.stack.add_option("-v", "", Concat::Space);
        self
    }
}

impl Tool for ZfsMount {
    fn stack(&self) -> &CommandStack {
        &self.stack
    }

    fn stack_mut(&mut self) -> &mut CommandStack {
        &mut self.stack
    }
}

/// `zfs unmount`: unmount currently mounted filesystems.
#[derive(Debug, Clone)]
pub struct ZfsUnmount {
    stack: CommandStack,
}

impl ZfsUnmount {
    pub fn new(dataset: &str) -> Self {
        let mut stack = zfs_stack("unmount");
        stack.add_option(dataset, "", Concat::Space);
        ZfsUnmount { stack }
    }

    /// Unmount all available ZFS file systems.
    pub fn all(&mut self) -> &mut Self {
        self.stack.add_option("-a", "", Concat::Space);
        self
    }

    /// Force the unmount, even when the filesystem is in use.
    pub fn force(&mut self) -> &mut Self {
        self.stack.add_option("-f", "", Concat::Space);
        self
    }
}

impl Tool for ZfsUnmount {
    fn stack(&self) -> &CommandStack {
        &self.stack
    }

    fn stack_mut(&mut self) -> &mut CommandStack {
        &mut self.stack
    }
}

/// `zpool list`: pools with health status and space usage.
#[derive(Debug, Clone)]
pub struct ZpoolList {
    stack: CommandStack,
}

impl ZpoolList {
    pub fn new(pool: Option<&str>) -> Self {
        let mut stack = CommandStack::new();
        stack.set_executable("zpool");
        stack.add_option("list", "", Concat::Space);
        if let Some(pool) = pool {
            stack.add_option(pool, "", Concat::Space);
        }
        ZpoolList { stack }
    }

    /// Scripting mode: no headers, tab-separated fields.
    pub fn no_header(&mut self) -> &mut Self {
        self.stack.add_option("-H", "", Concat::Space);
        self
    }

    /// Display numbers in parsable (exact) values.
    pub fn size_in_bytes(&mut self) -> &mut Self {
        self.stack.add_option("-p", "", Concat::Space);
        self
    }

    /// Comma-separated list of properties to display.
    pub fn fields(&mut self, fields: &[&str]) -> &mut Self {
        self.stack.add_option("-o", "", Concat::Space);
        self.stack.add_option(&fields.join(","), "", Concat::Space);
        self
    }
}

impl Tool for ZpoolList {
    fn stack(&self) -> &CommandStack {
        &self.stack
    }

    fn stack_mut(&mut self) -> &mut CommandStack {
        &mut self.stack
    }
}
