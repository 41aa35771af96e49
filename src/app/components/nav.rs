//! Sidebar navigation.
//!
//! Entries come from the role's menu; the active entry is highlighted by
//! path. Plain anchors are used so deep links and reloads land on the shell
//! server's SPA fallback.

use dioxus::prelude::*;

use crate::app::routing::{menu, MenuEntry};
use crate::app::session::Role;

#[derive(Props, Clone, PartialEq)]
pub struct SidebarProps {
    /// Session role; decides which entries render
    pub role: Option<Role>,
    /// Path of the page being rendered
    pub active_path: String,
}

/// Role-scoped sidebar.
#[component]
pub fn Sidebar(props: SidebarProps) -> Element {
    let entries: &[MenuEntry] = menu(props.role);

    rsx! {
        aside { class: "sidebar w-56 flex-shrink-0 border-r min-h-screen p-4",
            div { class: "mb-6",
                strong { class: "text-lg", "MCM Console" }
            }
            nav {
                ul { class: "space-y-1",
                    for entry in entries {
                        li {
                            if entry.path == props.active_path {
                                a {
                                    href: "{entry.path}",
                                    class: "block px-3 py-2 rounded bg-primary/10 font-semibold",
                                    "aria-current": "page",
                                    "{entry.label}"
                                }
                            } else {
                                a {
                                    href: "{entry.path}",
                                    class: "block px-3 py-2 rounded hover:bg-elevated",
                                    "{entry.label}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
