use tasklist_core::input::{
  Action,
  Session
};
use yew::{
  Callback,
  Html,
  function_component,
  html,
  use_force_update,
  use_mut_ref,
  use_node_ref,
  use_state
};

use crate::components::{
  TaskCounter,
  TaskInput,
  TaskList,
  ThemeToggle
};
use crate::storage::{
  BrowserAlert,
  DocumentTheme,
  LocalStorage,
  prefers_dark
};

type BrowserSession =
  Session<LocalStorage, DocumentTheme>;

#[function_component(App)]
pub fn app() -> Html {
  let session = use_mut_ref(|| {
    BrowserSession::start(
      LocalStorage,
      prefers_dark(),
      DocumentTheme
    )
  });
  let draft = use_state(String::new);
  let input_ref = use_node_ref();
  let force_update = use_force_update();

  let dispatch = {
    let session = session.clone();
    let draft = draft.clone();
    let input_ref = input_ref.clone();
    Callback::from(
      move |action: Action| {
        let outcome = session
          .borrow_mut()
          .dispatch(
            action,
            &mut BrowserAlert
          );
        tracing::debug!(
          ?outcome,
          "ui action handled"
        );

        if outcome.clears_input() {
          draft.set(String::new());
          if let Some(input) = input_ref
            .cast::<web_sys::HtmlInputElement>(
          ) && let Err(error) =
            input.focus()
          {
            tracing::warn!(
              ?error,
              "failed refocusing input"
            );
          }
        }
        force_update.force_update();
      }
    )
  };

  let on_input = {
    let draft = draft.clone();
    Callback::from(
      move |value: String| {
        draft.set(value);
      }
    )
  };

  let on_submit = {
    let draft = draft.clone();
    let dispatch = dispatch.clone();
    Callback::from(move |()| {
      dispatch.emit(Action::Submit(
        (*draft).clone()
      ));
    })
  };

  let on_toggle = {
    let dispatch = dispatch.clone();
    Callback::from(move |id: u64| {
      dispatch.emit(Action::Toggle(id));
    })
  };

  let on_delete = {
    let dispatch = dispatch.clone();
    Callback::from(move |id: u64| {
      dispatch.emit(Action::Delete(id));
    })
  };

  let on_toggle_theme = {
    let dispatch = dispatch.clone();
    Callback::from(move |()| {
      dispatch.emit(Action::ToggleTheme);
    })
  };

  let (view, theme) = {
    let session = session.borrow();
    (session.view(), session.theme())
  };
  let active = view.active_count;

  html! {
      <div class="container">
          <header class="app-header">
              <h1>{ "To-Do List" }</h1>
              <ThemeToggle theme={theme} on_toggle={on_toggle_theme} />
          </header>
          <TaskInput
              value={(*draft).clone()}
              input_ref={input_ref}
              on_input={on_input}
              on_submit={on_submit}
          />
          <TaskList view={view} on_toggle={on_toggle} on_delete={on_delete} />
          <TaskCounter active={active} />
      </div>
  }
}
