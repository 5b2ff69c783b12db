//! Sidebar menu state.

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use log::debug;

use crate::scroll_lock::{ScrollLock, ScrollLockGuard};

/// Unique identifier for a SidebarMenu widget instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SidebarMenuId(usize);

impl SidebarMenuId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for SidebarMenuId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__sidebar_{}", self.0)
    }
}

/// One entry in the sidebar menu tree.
#[derive(Debug, Clone)]
pub struct MenuItem {
    /// Stable identifier, unique within the menu.
    pub id: String,
    /// Display label.
    pub label: String,
    /// Nested entries, shown while this item is expanded.
    pub children: Vec<MenuItem>,
}

impl MenuItem {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            children: Vec::new(),
        }
    }

    pub fn with_children(mut self, children: Vec<MenuItem>) -> Self {
        self.children = children;
        self
    }
}

/// A menu entry flattened for rendering.
#[derive(Debug, Clone)]
pub struct FlatMenuItem {
    pub id: String,
    pub label: String,
    /// Depth in the tree (0 = root).
    pub depth: u16,
    /// Whether this entry has nested entries.
    pub has_children: bool,
    /// Whether this entry is currently expanded.
    pub is_expanded: bool,
}

/// Internal state for a SidebarMenu widget
#[derive(Debug, Default)]
struct SidebarInner {
    /// Root menu entries.
    items: Vec<MenuItem>,
    /// Expanded entry ids. Each entry expands independently of its
    /// siblings; there is no accordion coupling.
    expanded: HashSet<String>,
    /// Whether the sidebar itself is open.
    open: bool,
    /// Held while open so background scrolling stays suppressed. Dropping
    /// the widget releases it on any teardown path.
    scroll_guard: Option<ScrollLockGuard>,
}

/// A collapsible sidebar navigation menu.
///
/// Expand/collapse is a per-entry boolean toggled independently; opening
/// the sidebar acquires a [`ScrollLock`] that is released when it closes
/// or when the widget is dropped.
///
/// # Example
///
/// ```ignore
/// let lock = ScrollLock::new();
/// let menu = SidebarMenu::with_items(lock.clone(), vec![
///     MenuItem::new("files", "Files").with_children(vec![
///         MenuItem::new("recent", "Recent"),
///     ]),
///     MenuItem::new("settings", "Settings"),
/// ]);
///
/// menu.open();
/// assert!(lock.is_locked());
/// menu.toggle("files");
/// for item in menu.visible_items() {
///     // render item.label at item.depth
/// }
/// ```
#[derive(Debug)]
pub struct SidebarMenu {
    /// Unique identifier for this sidebar instance
    id: SidebarMenuId,
    /// Internal state
    inner: Arc<RwLock<SidebarInner>>,
    /// Dirty flag for re-render
    dirty: Arc<AtomicBool>,
    /// Scroll lock shared with the owning page
    lock: ScrollLock,
}

impl SidebarMenu {
    /// Create an empty closed sidebar
    pub fn new(lock: ScrollLock) -> Self {
        Self {
            id: SidebarMenuId::new(),
            inner: Arc::new(RwLock::new(SidebarInner::default())),
            dirty: Arc::new(AtomicBool::new(false)),
            lock,
        }
    }

    /// Create a sidebar with menu entries
    pub fn with_items(lock: ScrollLock, items: Vec<MenuItem>) -> Self {
        let menu = Self::new(lock);
        if let Ok(mut guard) = menu.inner.write() {
            guard.items = items;
        }
        menu
    }

    /// Get the unique ID for this sidebar
    pub fn id(&self) -> SidebarMenuId {
        self.id
    }

    /// Get the ID as a string (for node binding)
    pub fn id_string(&self) -> String {
        self.id.to_string()
    }

    // -------------------------------------------------------------------------
    // Open/close lifecycle
    // -------------------------------------------------------------------------

    /// Open the sidebar, locking page scroll while it stays open
    pub fn open(&self) {
        if let Ok(mut guard) = self.inner.write() {
            if guard.open {
                return;
            }
            guard.open = true;
            guard.scroll_guard = Some(self.lock.acquire());
            self.dirty.store(true, Ordering::SeqCst);
            debug!("sidebar {} opened", self.id);
        }
    }

    /// Close the sidebar, releasing the scroll lock
    pub fn close(&self) {
        if let Ok(mut guard) = self.inner.write() {
            if !guard.open {
                return;
            }
            guard.open = false;
            guard.scroll_guard = None;
            self.dirty.store(true, Ordering::SeqCst);
            debug!("sidebar {} closed", self.id);
        }
    }

    /// Toggle the open state
    pub fn toggle_open(&self) {
        if self.is_open() {
            self.close();
        } else {
            self.open();
        }
    }

    /// Whether the sidebar is open
    pub fn is_open(&self) -> bool {
        self.inner.read().map(|guard| guard.open).unwrap_or(false)
    }

    // -------------------------------------------------------------------------
    // Entries
    // -------------------------------------------------------------------------

    /// Replace the menu entries. Expansion state for ids that still exist
    /// is kept.
    pub fn set_items(&self, items: Vec<MenuItem>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.items = items;
            let mut live = HashSet::new();
            collect_ids(&guard.items, &mut live);
            guard.expanded.retain(|id| live.contains(id));
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Expand one entry
    pub fn expand(&self, id: &str) {
        if let Ok(mut guard) = self.inner.write() {
            if guard.expanded.insert(id.to_string()) {
                self.dirty.store(true, Ordering::SeqCst);
            }
        }
    }

    /// Collapse one entry
    pub fn collapse(&self, id: &str) {
        if let Ok(mut guard) = self.inner.write() {
            if guard.expanded.remove(id) {
                self.dirty.store(true, Ordering::SeqCst);
            }
        }
    }

    /// Toggle one entry. Returns the new expanded state.
    pub fn toggle(&self, id: &str) -> bool {
        let Ok(mut guard) = self.inner.write() else {
            return false;
        };
        let expanded = if guard.expanded.remove(id) {
            false
        } else {
            guard.expanded.insert(id.to_string());
            true
        };
        self.dirty.store(true, Ordering::SeqCst);
        expanded
    }

    /// Whether one entry is expanded
    pub fn is_expanded(&self, id: &str) -> bool {
        self.inner
            .read()
            .map(|guard| guard.expanded.contains(id))
            .unwrap_or(false)
    }

    /// Flatten the tree into the entries currently visible, depth-first.
    /// Children appear only under expanded parents.
    pub fn visible_items(&self) -> Vec<FlatMenuItem> {
        let Ok(guard) = self.inner.read() else {
            return Vec::new();
        };
        let mut out = Vec::new();
        flatten(&guard.items, &guard.expanded, 0, &mut out);
        out
    }

    // -------------------------------------------------------------------------
    // Dirty tracking
    // -------------------------------------------------------------------------

    /// Check if the sidebar state changed since the last render
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Clear the dirty flag after rendering
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }
}

fn flatten(
    items: &[MenuItem],
    expanded: &HashSet<String>,
    depth: u16,
    out: &mut Vec<FlatMenuItem>,
) {
    for item in items {
        let is_expanded = expanded.contains(&item.id);
        out.push(FlatMenuItem {
            id: item.id.clone(),
            label: item.label.clone(),
            depth,
            has_children: !item.children.is_empty(),
            is_expanded,
        });
        if is_expanded {
            flatten(&item.children, expanded, depth + 1, out);
        }
    }
}

fn collect_ids(items: &[MenuItem], out: &mut HashSet<String>) {
    for item in items {
        out.insert(item.id.clone());
        collect_ids(&item.children, out);
    }
}
