//! UI Components
//!
//! Reusable Leptos components.

mod todo_form;
mod todo_list;
mod todo_row;
mod toolbar;

pub use todo_form::TodoForm;
pub use todo_list::TodoList;
pub use todo_row::TodoRow;
pub use toolbar::Toolbar;
