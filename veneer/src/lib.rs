pub mod input;
pub mod scroll_lock;
pub mod sidebar;

pub use input::{Input, InputEvent, InputId};
pub use scroll_lock::{ScrollLock, ScrollLockGuard};
pub use sidebar::{FlatMenuItem, MenuItem, SidebarMenu};

pub mod prelude {
    pub use crate::input::{Input, InputEvent, InputId};
    pub use crate::scroll_lock::{ScrollLock, ScrollLockGuard};
    pub use crate::sidebar::{FlatMenuItem, MenuItem, SidebarMenu, SidebarMenuId};

    pub use toastline::{
        Phase, ToastEvent, ToastHandle, ToastHost, ToastId, ToastKind, ToastManager, ToastRecord,
        ToastSpec, ToastTimings,
    };
}
