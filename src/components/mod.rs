//! UI Components
//!
//! Reusable Leptos components.

mod delete_confirm_button;
mod filter_bar;
mod notifications;
mod task_card;
mod task_form;
mod task_list;

pub use delete_confirm_button::DeleteConfirmButton;
pub use filter_bar::FilterBar;
pub use notifications::Notifications;
pub use task_card::TaskCard;
pub use task_form::TaskForm;
pub use task_list::TaskList;
