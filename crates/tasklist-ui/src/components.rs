mod empty_state;
mod task_counter;
mod task_input;
mod task_list;
mod task_list_row;
mod theme_toggle;

pub use empty_state::EmptyStatePanel;
pub use task_counter::TaskCounter;
pub use task_input::TaskInput;
pub use task_list::TaskList;
pub use task_list_row::TaskListRow;
pub use theme_toggle::ThemeToggle;
