//! Dashboard UI components.
//!
//! The component hierarchy is layered:
//!
//! 1. **Primitives** (`primitives.rs`) - reusable building blocks:
//!    loading/error/empty states, badges, cards, search input.
//! 2. **Icons** (`icons.rs`) - inline SVG icons.
//! 3. **Layout** (`header.rs`, `sidebar.rs`) - shell chrome.
//! 4. **Views** - one module per page, plus the simulator and the
//!    trend chart it shares with the dashboard.

pub mod chart;
pub mod dashboard;
pub mod header;
pub mod icons;
pub mod login;
pub mod primitives;
pub mod recommendations;
pub mod settings;
pub mod sidebar;
pub mod simulator;
pub mod user_detail;
pub mod users;

pub use header::Header;
pub use sidebar::Sidebar;

pub use primitives::{
    Badge, BadgeVariant, EmptyState, ErrorState, InfoRow, LoadingSpinner, SearchInput,
    SeverityBadge, StatCard, TableCard,
};
