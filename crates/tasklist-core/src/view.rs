//! Task list projection.
//!
//! [`project`] turns the collection into a [`TaskListView`] without touching
//! any display. The thin renderers ([`render_html`] here, the terminal
//! renderer and the Yew components elsewhere) only read that view.

use crate::repository::active_count;
use crate::task::Task;

pub const EMPTY_ICON: &str = "📝";
pub const EMPTY_MESSAGE: &str = "No tasks yet. Start by adding a new one!";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub icon: &'static str,
    pub message: &'static str,
}

impl Default for EmptyState {
    fn default() -> Self {
        Self {
            icon: EMPTY_ICON,
            message: EMPTY_MESSAGE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRow {
    pub id: u64,
    pub text: String,
    pub completed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListBody {
    Empty(EmptyState),
    Rows(Vec<TaskRow>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskListView {
    pub body: ListBody,
    pub active_count: usize,
}

impl TaskListView {
    pub fn counter_text(&self) -> String {
        self.active_count.to_string()
    }

    pub fn rows(&self) -> &[TaskRow] {
        match &self.body {
            ListBody::Rows(rows) => rows,
            ListBody::Empty(_) => &[],
        }
    }
}

pub fn project(tasks: &[Task]) -> TaskListView {
    let body = if tasks.is_empty() {
        ListBody::Empty(EmptyState::default())
    } else {
        ListBody::Rows(
            tasks
                .iter()
                .map(|task| TaskRow {
                    id: task.id,
                    text: task.text.clone(),
                    completed: task.completed,
                })
                .collect(),
        )
    };

    TaskListView {
        body,
        active_count: active_count(tasks),
    }
}

/// Markup for the list container's contents.
pub fn render_html(view: &TaskListView) -> String {
    let mut out = String::new();

    match &view.body {
        ListBody::Empty(empty) => {
            out.push_str(&format!(
                "<div class=\"empty-state\">\
                 <div class=\"empty-state-icon\">{}</div>\
                 <div class=\"empty-state-text\">{}</div>\
                 </div>",
                empty.icon,
                escape_html(empty.message)
            ));
        }
        ListBody::Rows(rows) => {
            for row in rows {
                let (class, checked) = if row.completed {
                    ("task-item completed", " checked")
                } else {
                    ("task-item", "")
                };
                out.push_str(&format!(
                    "<li class=\"{class}\" data-id=\"{id}\">\
                     <input type=\"checkbox\" class=\"task-checkbox\"{checked}>\
                     <span class=\"task-text\">{text}</span>\
                     <button class=\"delete-btn\" aria-label=\"Delete task\">✕</button>\
                     </li>",
                    id = row.id,
                    text = escape_html(&row.text),
                ));
            }
        }
    }

    out
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::seed_tasks;

    #[test]
    fn empty_collection_projects_placeholder() {
        let view = project(&[]);
        assert_eq!(view.body, ListBody::Empty(EmptyState::default()));
        assert_eq!(view.counter_text(), "0");
        assert!(view.rows().is_empty());

        let html = render_html(&view);
        assert!(html.contains("empty-state-icon"));
        assert!(html.contains(EMPTY_MESSAGE));
        assert!(!html.contains("<li"));
    }

    #[test]
    fn rows_follow_collection_order() {
        let view = project(&seed_tasks());
        let ids: Vec<u64> = view.rows().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(view.active_count, 2);

        let html = render_html(&view);
        assert_eq!(html.matches("<li").count(), 3);
        assert_eq!(html.matches(" checked>").count(), 1);
        assert!(html.contains("task-item completed\" data-id=\"2\""));
    }

    #[test]
    fn task_text_is_escaped() {
        let tasks = vec![Task::new_active(
            1,
            "<script>alert('x')</script> & \"more\"".to_string(),
        )];
        let html = render_html(&project(&tasks));
        assert!(!html.contains("<script>"));
        assert!(html.contains(
            "&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt; &amp; &quot;more&quot;"
        ));
    }

    #[test]
    fn rendering_is_idempotent() {
        let tasks = seed_tasks();
        assert_eq!(project(&tasks), project(&tasks));
        assert_eq!(render_html(&project(&tasks)), render_html(&project(&tasks)));
    }
}
