use tasklist_core::view::{
  ListBody,
  TaskListView
};
use yew::{
  Callback,
  Html,
  Properties,
  function_component,
  html
};

use super::{
  EmptyStatePanel,
  TaskListRow
};

#[derive(Properties, PartialEq)]
pub struct TaskListProps {
  pub view:      TaskListView,
  pub on_toggle: Callback<u64>,
  pub on_delete: Callback<u64>
}

#[function_component(TaskList)]
pub fn task_list(
  props: &TaskListProps
) -> Html {
  match &props.view.body {
    | ListBody::Empty(state) => html! {
        <EmptyStatePanel state={state.clone()} />
    },
    | ListBody::Rows(rows) => html! {
        <ul id="taskList" class="task-list">
            {
                for rows.iter().cloned().map(|row| {
                    let key = row.id.to_string();
                    html! {
                        <TaskListRow
                            key={key}
                            row={row}
                            on_toggle={props.on_toggle.clone()}
                            on_delete={props.on_delete.clone()}
                        />
                    }
                })
            }
        </ul>
    }
  }
}
