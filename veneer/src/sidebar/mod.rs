//! Collapsible sidebar navigation menu.

mod state;

pub use state::{FlatMenuItem, MenuItem, SidebarMenu, SidebarMenuId};
