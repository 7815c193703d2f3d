//! UI Components
//!
//! One component per dashboard widget, plus shared row controls.

mod chat_panel;
mod date_diff;
mod event_list;
mod note_editor;
mod problem_line;
mod removable_row;
mod search_panel;
mod task_list;
mod title_bar;

pub use chat_panel::ChatPanel;
pub use date_diff::DateDiff;
pub use event_list::EventList;
pub use note_editor::NoteEditor;
pub use problem_line::ProblemLine;
pub use removable_row::RemovableRow;
pub use search_panel::SearchPanel;
pub use task_list::TaskList;
pub use title_bar::TitleBar;
