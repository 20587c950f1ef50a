//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as parameters:
//! - `TitleBar`: heading, total count, status
//! - `CountryTable`: one page of countries
//! - `Pager`: range and page navigation footer
//! - `Notice`: blocking error overlay
//! - `Selector`: continent / currency / page-size dropdowns, rebuilt per frame
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that manage local state and emit events:
//! - `TextInput`: code and name query fields
//! - `FilterBar`: owns focus and the two text inputs, maps keys to `Action`s
//!
//! ## Props-Based Data Flow
//!
//! Components receive external data as "props" (function parameters or
//! struct fields), not by reaching into global state:
//!
//! ```rust,ignore
//! // Good: Dependencies are explicit
//! TitleBar::new(view.total_count, app.status_message.clone()).render(frame, area);
//!
//! // Bad: Hidden dependency on global state
//! title_bar.render(frame, area); // reads from global App
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs            (this file)
//! ├── title_bar.rs      (Top status bar)
//! ├── filter_bar.rs     (Inputs + selectors, focus)
//! ├── text_input.rs     (Single-line text field)
//! ├── selector.rs       (Cycling dropdown)
//! ├── country_table.rs  (Page of records)
//! ├── pager.rs          (Footer navigation)
//! └── notice.rs         (Error overlay)
//! ```

pub mod country_table;
pub mod filter_bar;
pub mod notice;
pub mod pager;
pub mod selector;
pub mod text_input;
mod title_bar;

pub use country_table::CountryTable;
pub use filter_bar::{FilterBar, FilterBarState, Focus};
pub use notice::Notice;
pub use pager::Pager;
pub use title_bar::TitleBar;
