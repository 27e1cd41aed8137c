use yew::{
  Html,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct TaskCounterProps {
  pub active: usize
}

#[function_component(TaskCounter)]
pub fn task_counter(
  props: &TaskCounterProps
) -> Html {
  html! {
      <div class="task-stats">
          <span id="taskCounter" class="task-counter">{ props.active.to_string() }</span>
          <span>{ " active tasks" }</span>
      </div>
  }
}
