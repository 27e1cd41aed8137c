use tasklist_core::view::TaskRow;
use yew::{
  Callback,
  Html,
  Properties,
  classes,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct TaskListRowProps {
  pub row:       TaskRow,
  pub on_toggle: Callback<u64>,
  pub on_delete: Callback<u64>
}

#[function_component(TaskListRow)]
pub fn task_list_row(
  props: &TaskListRowProps
) -> Html {
  let id = props.row.id;
  let on_toggle =
    props.on_toggle.clone();
  let on_delete =
    props.on_delete.clone();
  let done_class = props
    .row
    .completed
    .then_some("completed");

  html! {
      <li class={classes!("task-item", done_class)}>
          <input
              type="checkbox"
              class="task-checkbox"
              checked={props.row.completed}
              onchange={move |_| on_toggle.emit(id)}
          />
          <span class="task-text">{ props.row.text.clone() }</span>
          <button
              class="delete-btn"
              aria-label="Delete task"
              onclick={move |_| on_delete.emit(id)}
          >
              { "✕" }
          </button>
      </li>
  }
}
