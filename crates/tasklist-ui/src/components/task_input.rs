use yew::{
  Callback,
  Html,
  NodeRef,
  Properties,
  TargetCast,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct TaskInputProps {
  pub value:     String,
  pub input_ref: NodeRef,
  pub on_input:  Callback<String>,
  pub on_submit: Callback<()>
}

#[function_component(TaskInput)]
pub fn task_input(
  props: &TaskInputProps
) -> Html {
  let oninput = {
    let on_input =
      props.on_input.clone();
    Callback::from(
      move |e: web_sys::InputEvent| {
        let input: web_sys::HtmlInputElement =
          e.target_unchecked_into();
        on_input.emit(input.value());
      }
    )
  };

  let onkeydown = {
    let on_submit =
      props.on_submit.clone();
    Callback::from(
      move |e: web_sys::KeyboardEvent| {
        if e.key() == "Enter" {
          on_submit.emit(());
        }
      }
    )
  };

  let on_submit =
    props.on_submit.clone();

  html! {
      <div class="input-section">
          <input
              id="taskInput"
              type="text"
              ref={props.input_ref.clone()}
              value={props.value.clone()}
              placeholder="Add a new task..."
              {oninput}
              {onkeydown}
          />
          <button id="addBtn" class="add-btn" onclick={move |_| on_submit.emit(())}>
              { "Add" }
          </button>
      </div>
  }
}
